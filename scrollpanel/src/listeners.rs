//! Listener registry: which (target, trigger) pairs are currently wired.

use crate::event::Input;

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Thumb,
    Content,
    /// Receives every event, wherever the pointer is.
    Document,
}

/// Which kind of input a listener reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    PointerDown,
    PointerUp,
    PointerMove,
    Wheel,
}

impl Trigger {
    pub fn of(input: &Input) -> Self {
        match input {
            Input::PointerDown { .. } => Trigger::PointerDown,
            Input::PointerUp { .. } => Trigger::PointerUp,
            Input::PointerMove { .. } => Trigger::PointerMove,
            Input::Wheel { .. } => Trigger::Wheel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Copy)]
struct Listener {
    id: ListenerId,
    target: Target,
    trigger: Trigger,
}

/// Registered listeners, in registration order.
#[derive(Debug, Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<Listener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, target: Target, trigger: Trigger) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Listener {
            id,
            target,
            trigger,
        });
        log::trace!("listener {id:?} added: {trigger:?} on {target:?}");
        id
    }

    /// Returns false if the listener was already gone.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|l| l.id != id);
        before != self.entries.len()
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Listeners that should see `input`, given the targets under the pointer.
    pub fn matching<'a>(
        &'a self,
        input: &Input,
        path: &'a [Target],
    ) -> impl Iterator<Item = ListenerId> + 'a {
        let trigger = Trigger::of(input);
        self.entries
            .iter()
            .filter(move |l| l.trigger == trigger)
            .filter(move |l| l.target == Target::Document || path.contains(&l.target))
            .map(|l| l.id)
    }
}
