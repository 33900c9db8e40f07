pub mod buffer;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod hit;
pub mod layout;
pub mod listeners;
pub mod panel;
pub mod render;
pub mod sync;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::Buffer;
pub use config::PanelConfig;
pub use document::{Document, UNSELECTABLE};
pub use element::Element;
pub use error::{Error, Result};
pub use event::{Input, MouseButton, WheelDelta};
pub use hit::hit_path;
pub use layout::{LayoutResult, Rect};
pub use listeners::{ListenerId, Listeners, Target, Trigger};
pub use panel::{Panel, PanelHandles};
pub use sync::{
    initialize, DragState, PanelGeometry, ScrollPosition, ScrollRanges, SyncHandle, Synchronizer,
};
pub use terminal::Terminal;
pub use types::*;
