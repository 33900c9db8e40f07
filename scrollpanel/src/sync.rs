//! Keeps the thumb and the content scroll offset consistent under drag and
//! wheel input.
//!
//! [`Synchronizer`] is the pure core: fixed ranges, drag state and the
//! current position, with one method per handled event. [`initialize`] wires
//! a synchronizer to a [`Listeners`] registry and returns a [`SyncHandle`]
//! that owns the registrations until [`SyncHandle::dispose`].

use crate::config::PanelConfig;
use crate::document::{Document, UNSELECTABLE};
use crate::error::{Error, Result};
use crate::event::{Input, WheelDelta};
use crate::layout::LayoutResult;
use crate::listeners::{ListenerId, Listeners, Target, Trigger};
use crate::panel::PanelHandles;

/// Geometry the ranges are derived from, read once at mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub viewport_height: f32,
    pub thumb_height: f32,
    pub content_scroll_height: f32,
}

impl PanelGeometry {
    /// Read the geometry of a rendered panel.
    ///
    /// Viewport and thumb heights come from the configuration, the content
    /// scroll height from the layout of the content box.
    pub fn measure(
        layout: &LayoutResult,
        handles: &PanelHandles,
        config: &PanelConfig,
    ) -> Result<Self> {
        if layout.get(&handles.thumb).is_none() {
            return Err(Error::UnknownElement(handles.thumb.clone()));
        }
        let content_scroll_height = layout
            .scroll_height(&handles.content)
            .ok_or_else(|| Error::UnknownElement(handles.content.clone()))?;

        Ok(Self {
            viewport_height: config.height as f32,
            thumb_height: config.bar_height as f32,
            content_scroll_height: content_scroll_height as f32,
        })
    }
}

/// The two spans the position mapping works between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRanges {
    /// Distance the thumb can move: viewport height minus thumb height.
    pub thumb_travel: f32,
    /// Distance the content can scroll: content height minus viewport height.
    pub content_scroll: f32,
}

impl ScrollRanges {
    pub fn new(thumb_travel: f32, content_scroll: f32) -> Self {
        Self {
            thumb_travel,
            content_scroll,
        }
    }

    pub fn measure(geometry: &PanelGeometry) -> Self {
        Self::new(
            geometry.viewport_height - geometry.thumb_height,
            geometry.content_scroll_height - geometry.viewport_height,
        )
    }

    /// Both ranges positive. Everything else disables scrolling.
    pub fn is_scrollable(&self) -> bool {
        self.thumb_travel > 0.0 && self.content_scroll > 0.0
    }

    /// Clamp a content offset to `[0, content_scroll]`.
    pub fn clamp(&self, offset: f32) -> f32 {
        if !self.is_scrollable() {
            return 0.0;
        }
        offset.clamp(0.0, self.content_scroll)
    }

    /// Thumb offset matching a content offset.
    pub fn thumb_offset(&self, content_offset: f32) -> f32 {
        if !self.is_scrollable() {
            return 0.0;
        }
        content_offset * self.thumb_travel / self.content_scroll
    }

    /// Content delta for a pointer movement of `dy` along the track.
    pub fn pointer_to_content(&self, dy: f32) -> f32 {
        if !self.is_scrollable() {
            return 0.0;
        }
        dy * self.content_scroll / self.thumb_travel
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub last_y: f32,
}

/// Content scroll offset and the thumb offset derived from it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollPosition {
    pub content_offset: f32,
    pub thumb_offset: f32,
}

/// Position mapping and drag tracking for one panel.
#[derive(Debug, Clone)]
pub struct Synchronizer {
    ranges: ScrollRanges,
    drag: DragState,
    position: ScrollPosition,
}

impl Synchronizer {
    pub fn new(ranges: ScrollRanges) -> Self {
        if !ranges.is_scrollable() {
            log::warn!(
                "panel not scrollable (thumb travel {}, content scroll {}), pinning thumb to top",
                ranges.thumb_travel,
                ranges.content_scroll
            );
        }
        Self {
            ranges,
            drag: DragState::default(),
            position: ScrollPosition::default(),
        }
    }

    pub fn ranges(&self) -> ScrollRanges {
        self.ranges
    }

    pub fn position(&self) -> ScrollPosition {
        self.position
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    /// Move the content by `delta`, clamp, and re-derive the thumb offset.
    /// Non-finite deltas are dropped.
    pub fn scroll_by(&mut self, delta: f32) -> ScrollPosition {
        if !delta.is_finite() {
            log::warn!("ignoring non-finite scroll delta {delta}");
            return self.position;
        }
        let content_offset = self.ranges.clamp(self.position.content_offset + delta);
        self.position = ScrollPosition {
            content_offset,
            thumb_offset: self.ranges.thumb_offset(content_offset),
        };
        log::trace!(
            "scroll_by({delta}) -> content {}, thumb {}",
            self.position.content_offset,
            self.position.thumb_offset
        );
        self.position
    }

    /// Pointer pressed on the thumb. Returns whether a drag started.
    pub fn press(&mut self, y: f32) -> bool {
        if !self.ranges.is_scrollable() {
            return false;
        }
        self.drag = DragState {
            active: true,
            last_y: y,
        };
        true
    }

    /// Pointer released anywhere. Returns whether a drag ended.
    pub fn release(&mut self) -> bool {
        std::mem::take(&mut self.drag.active)
    }

    /// Pointer moved to `y`. Only scrolls while a drag is active.
    pub fn drag_to(&mut self, y: f32) -> Option<ScrollPosition> {
        if !self.drag.active {
            return None;
        }
        let delta = self.ranges.pointer_to_content(y - self.drag.last_y);
        self.drag.last_y = y;
        Some(self.scroll_by(delta))
    }

    /// Wheel input over the content box.
    pub fn wheel(&mut self, delta: WheelDelta, line_step: f32) -> Option<ScrollPosition> {
        if !self.ranges.is_scrollable() {
            return None;
        }
        Some(self.scroll_by(delta.to_content_delta(line_step)))
    }
}

/// A mounted synchronizer and the listeners registered for it.
#[derive(Debug)]
pub struct SyncHandle {
    sync: Synchronizer,
    handles: PanelHandles,
    line_step: f32,
    thumb_press: ListenerId,
    release: ListenerId,
    drag_move: ListenerId,
    wheel: ListenerId,
}

/// Compute the ranges from `geometry` once and register the panel's
/// listeners. Later configuration changes are not picked up; dispose and
/// initialize again to re-measure.
pub fn initialize(
    geometry: &PanelGeometry,
    handles: PanelHandles,
    config: &PanelConfig,
    listeners: &mut Listeners,
) -> SyncHandle {
    let ranges = ScrollRanges::measure(geometry);
    log::debug!(
        "initializing {}: thumb travel {}, content scroll {}",
        handles.content,
        ranges.thumb_travel,
        ranges.content_scroll
    );

    SyncHandle {
        sync: Synchronizer::new(ranges),
        handles,
        line_step: config.wheel_step,
        thumb_press: listeners.add(Target::Thumb, Trigger::PointerDown),
        release: listeners.add(Target::Document, Trigger::PointerUp),
        drag_move: listeners.add(Target::Document, Trigger::PointerMove),
        wheel: listeners.add(Target::Content, Trigger::Wheel),
    }
}

impl SyncHandle {
    pub fn position(&self) -> ScrollPosition {
        self.sync.position()
    }

    pub fn ranges(&self) -> ScrollRanges {
        self.sync.ranges()
    }

    pub fn handles(&self) -> &PanelHandles {
        &self.handles
    }

    pub fn is_dragging(&self) -> bool {
        self.sync.is_dragging()
    }

    /// Deliver `input` to this handle's live listeners whose target is on
    /// `path`. Returns the new position when it changed.
    pub fn dispatch(
        &mut self,
        listeners: &Listeners,
        input: &Input,
        path: &[Target],
        document: &mut Document,
    ) -> Option<ScrollPosition> {
        let before = self.sync.position();
        let fired: Vec<ListenerId> = listeners.matching(input, path).collect();

        for id in fired {
            match *input {
                Input::PointerDown { y, .. } if id == self.thumb_press => {
                    if self.sync.press(y) {
                        document.add_class(UNSELECTABLE);
                        log::debug!("thumb drag started at y={y}");
                    }
                }
                Input::PointerUp { .. } if id == self.release => {
                    if self.sync.release() {
                        log::debug!("thumb drag ended");
                    }
                    document.remove_class(UNSELECTABLE);
                }
                Input::PointerMove { y, .. } if id == self.drag_move => {
                    self.sync.drag_to(y);
                }
                Input::Wheel { delta, .. } if id == self.wheel => {
                    self.sync.wheel(delta, self.line_step);
                }
                _ => {}
            }
        }

        let after = self.sync.position();
        (after != before).then_some(after)
    }

    /// Unregister every listener. Returns how many were still registered.
    pub fn dispose(self, listeners: &mut Listeners) -> usize {
        let removed = [self.thumb_press, self.release, self.drag_move, self.wheel]
            .into_iter()
            .filter(|id| listeners.remove(*id))
            .count();
        log::debug!("disposed {}: {removed} listeners removed", self.handles.content);
        removed
    }
}
