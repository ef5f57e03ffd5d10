//! The widget interface shared by sliders and windows.

use glam::Vec2;

use crate::canvas::Canvas;
use crate::input::PointerEvent;
use crate::param::Param;

/// What a widget reports back after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// The title bar was grabbed; the caller should raise this widget.
    Focus,
    /// The pointer is over this widget; widgets underneath should not see
    /// the event.
    Hovered,
    /// The event passes through.
    Ignored,
}

impl Response {
    /// Whether dispatch should stop at this widget.
    #[inline]
    pub fn consumes(&self) -> bool {
        !matches!(self, Response::Ignored)
    }
}

/// A retained UI element positioned relative to its parent.
///
/// `origin` is the parent's absolute top-left corner. Widgets never cache
/// absolute positions, so moving a parent moves every descendant.
pub trait Widget {
    /// React to a pointer event.
    fn handle(&mut self, event: &PointerEvent, origin: Vec2) -> Response;

    /// Paint onto the canvas.
    fn draw(&self, canvas: &mut Canvas, origin: Vec2);

    /// Current value of `param` if this widget (or a descendant) owns it.
    fn value_of(&self, _param: Param) -> Option<f32> {
        None
    }
}
