//! Retained-mode widgets: sliders inside draggable windows.
//!
//! Every widget stores its position relative to its parent and receives
//! the parent's absolute origin on each call, so moving a window drags
//! its whole subtree along without any bookkeeping.
//!
//! ```ignore
//! let mut stack = WindowStack::new();
//! stack.push(
//!     Window::new("PHYSICS", Rect::new(20.0, 20.0, 250.0, 150.0))
//!         .with(Slider::for_param(Param::Gravity, Vec2::new(20.0, 50.0), 200.0)),
//! );
//! stack.dispatch(&PointerEvent::down(Vec2::new(60.0, 30.0)));
//! ```

mod rect;
mod slider;
mod stack;
pub mod theme;
mod widget;
mod window;

pub use rect::Rect;
pub use slider::{Slider, GRAB_INFLATE, TRACK_HEIGHT};
pub use stack::{Dispatch, WindowStack};
pub use widget::{Response, Widget};
pub use window::{Window, TITLE_BAR_HEIGHT};
