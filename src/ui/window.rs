//! Draggable, titled container of widgets.

use glam::Vec2;

use super::{theme, Rect, Response, Widget};
use crate::canvas::Canvas;
use crate::input::PointerEvent;
use crate::param::Param;

/// Height of the title strip that starts a drag.
pub const TITLE_BAR_HEIGHT: f32 = 25.0;

/// A panel holding child widgets.
///
/// `rect` is relative to the parent origin; for top-level windows the
/// parent origin is the screen origin, so it is the absolute rectangle.
pub struct Window {
    title: String,
    rect: Rect,
    children: Vec<Box<dyn Widget>>,
    drag: bool,
    /// Window origin minus pointer position at grab time.
    offset: Vec2,
}

impl Window {
    pub fn new(title: impl Into<String>, rect: Rect) -> Self {
        Self {
            title: title.into(),
            rect,
            children: Vec::new(),
            drag: false,
            offset: Vec2::ZERO,
        }
    }

    /// Builder-style child insertion.
    pub fn with(mut self, child: impl Widget + 'static) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: impl Widget + 'static) {
        self.children.push(Box::new(child));
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag
    }

    /// Absolute rectangle under the given parent origin.
    pub fn bounds(&self, origin: Vec2) -> Rect {
        self.rect.translate(origin)
    }
}

impl Widget for Window {
    fn handle(&mut self, event: &PointerEvent, origin: Vec2) -> Response {
        let bounds = self.bounds(origin);

        if event.is_primary_down() && bounds.top_strip(TITLE_BAR_HEIGHT).contains(event.pos) {
            self.drag = true;
            self.offset = bounds.origin() - event.pos;
            return Response::Focus;
        }
        if event.is_primary_up() {
            self.drag = false;
        }
        if self.drag {
            let target = event.pos + self.offset - origin;
            self.rect.x = target.x;
            self.rect.y = target.y;
        }

        let bounds = self.bounds(origin);
        let child_origin = bounds.origin();
        for child in &mut self.children {
            child.handle(event, child_origin);
        }

        if bounds.contains(event.pos) {
            Response::Hovered
        } else {
            Response::Ignored
        }
    }

    fn draw(&self, canvas: &mut Canvas, origin: Vec2) {
        let bounds = self.bounds(origin);
        canvas.fill_rect(bounds, theme::WINDOW_BODY);

        let bar = if self.drag {
            theme::WINDOW_TITLE_BAR_ACTIVE
        } else {
            theme::WINDOW_TITLE_BAR
        };
        canvas.fill_rect(bounds.top_strip(TITLE_BAR_HEIGHT), bar);
        canvas.text(
            bounds.origin() + Vec2::new(10.0, 6.0),
            &self.title,
            2,
            theme::WINDOW_TITLE_TEXT,
        );

        for child in &self.children {
            child.draw(canvas, bounds.origin());
        }
    }

    fn value_of(&self, param: Param) -> Option<f32> {
        self.children.iter().find_map(|c| c.value_of(param))
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("title", &self.title)
            .field("rect", &self.rect)
            .field("children", &self.children.len())
            .field("drag", &self.drag)
            .finish()
    }
}
