//! Host-independent pointer and wheel input.
//!
//! Every host adapts its native events into [`Input`] before handing them to
//! the panel. Coordinates are `f32` so pixel-based hosts lose nothing; the
//! terminal host reports whole cells.

/// Units a wheel notch is multiplied by for [`WheelDelta::Detail`].
pub const DETAIL_SCALE: f32 = 30.0;

/// A pointer or wheel event, normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    PointerDown {
        x: f32,
        y: f32,
        button: MouseButton,
    },
    PointerUp {
        x: f32,
        y: f32,
        button: MouseButton,
    },
    /// Pointer moved, with or without a button held.
    PointerMove { x: f32, y: f32 },
    Wheel { x: f32, y: f32, delta: WheelDelta },
}

impl Input {
    pub fn position(&self) -> (f32, f32) {
        match *self {
            Input::PointerDown { x, y, .. }
            | Input::PointerUp { x, y, .. }
            | Input::PointerMove { x, y }
            | Input::Wheel { x, y, .. } => (x, y),
        }
    }

    /// Adapt a crossterm mouse event. Returns `None` for events the panel
    /// has no use for (horizontal scrolling, non-left presses).
    pub fn from_crossterm(event: &crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::MouseEventKind;

        let x = event.column as f32;
        let y = event.row as f32;
        match event.kind {
            MouseEventKind::Down(button @ crossterm::event::MouseButton::Left) => {
                Some(Input::PointerDown {
                    x,
                    y,
                    button: button.into(),
                })
            }
            MouseEventKind::Down(_) => None,
            MouseEventKind::Up(button) => Some(Input::PointerUp {
                x,
                y,
                button: button.into(),
            }),
            MouseEventKind::Drag(_) | MouseEventKind::Moved => Some(Input::PointerMove { x, y }),
            MouseEventKind::ScrollDown => Some(Input::Wheel {
                x,
                y,
                delta: WheelDelta::Lines(1),
            }),
            MouseEventKind::ScrollUp => Some(Input::Wheel {
                x,
                y,
                delta: WheelDelta::Lines(-1),
            }),
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => None,
        }
    }
}

/// The shapes wheel input arrives in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelDelta {
    /// `wheelDelta` style: positive is away from the user, 120 per notch.
    Wheel(f32),
    /// `detail` style: positive is towards the user, 3 per notch.
    Detail(f32),
    /// Line based, positive scrolls down. Terminals report one line per event.
    Lines(i16),
}

impl WheelDelta {
    /// Signed content delta, positive scrolls the content down.
    pub fn to_content_delta(self, line_step: f32) -> f32 {
        match self {
            WheelDelta::Wheel(d) => -d,
            WheelDelta::Detail(d) => d * DETAIL_SCALE,
            WheelDelta::Lines(n) => n as f32 * line_step,
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
