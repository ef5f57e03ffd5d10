//! Ordered window collection with focus promotion.
//!
//! Windows are stored back-to-front: index 0 draws first, the last window
//! is topmost and gets input first.

use glam::Vec2;
use tracing::debug;

use super::{Response, Widget, Window};
use crate::canvas::Canvas;
use crate::input::PointerEvent;
use crate::param::Param;

/// Result of routing one event through the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    /// Title bar grab that raised a window to the top.
    pub focused: bool,
    /// Some window claimed the event.
    pub consumed: bool,
}

/// Back-to-front stack of top-level windows.
#[derive(Debug, Default)]
pub struct WindowStack {
    windows: Vec<Window>,
}

impl WindowStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a window on top.
    pub fn push(&mut self, window: Window) {
        self.windows.push(window);
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Windows in draw order (bottom first).
    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    /// Titles in draw order (bottom first).
    pub fn titles(&self) -> Vec<&str> {
        self.windows.iter().map(|w| w.title()).collect()
    }

    /// The topmost window.
    pub fn top(&self) -> Option<&Window> {
        self.windows.last()
    }

    /// Route an event topmost-first.
    ///
    /// The first window that asks for focus is moved to the top and the
    /// event stops there; the first hovered window also stops the event.
    /// Primary releases reach every window so no drag is left dangling.
    pub fn dispatch(&mut self, event: &PointerEvent) -> Dispatch {
        if event.is_primary_up() {
            let mut consumed = false;
            for window in self.windows.iter_mut().rev() {
                consumed |= window.handle(event, Vec2::ZERO).consumes();
            }
            return Dispatch {
                focused: false,
                consumed,
            };
        }

        for i in (0..self.windows.len()).rev() {
            match self.windows[i].handle(event, Vec2::ZERO) {
                Response::Focus => {
                    self.raise(i);
                    return Dispatch {
                        focused: true,
                        consumed: true,
                    };
                }
                Response::Hovered => {
                    return Dispatch {
                        focused: false,
                        consumed: true,
                    };
                }
                Response::Ignored => {}
            }
        }

        Dispatch {
            focused: false,
            consumed: false,
        }
    }

    /// Move the window at `index` to the top of the stack.
    pub fn raise(&mut self, index: usize) {
        if index >= self.windows.len() {
            return;
        }
        let window = self.windows.remove(index);
        debug!(title = window.title(), "window focused");
        self.windows.push(window);
    }

    /// Whether any window covers `point`.
    pub fn contains(&self, point: Vec2) -> bool {
        self.windows.iter().any(|w| w.rect().contains(point))
    }

    /// Topmost window under `point`.
    pub fn window_at(&self, point: Vec2) -> Option<&Window> {
        self.windows.iter().rev().find(|w| w.rect().contains(point))
    }

    /// Current value of a slider-bound parameter.
    pub fn value(&self, param: Param) -> Option<f32> {
        self.windows.iter().find_map(|w| w.value_of(param))
    }

    /// Paint every window, bottom first.
    pub fn draw(&self, canvas: &mut Canvas) {
        for window in &self.windows {
            window.draw(canvas, Vec2::ZERO);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{Rect, Slider};

    /// A, B, C side by side, none overlapping; C is topmost.
    fn abc() -> WindowStack {
        let mut stack = WindowStack::new();
        stack.push(Window::new("A", Rect::new(0.0, 0.0, 100.0, 100.0)));
        stack.push(Window::new("B", Rect::new(200.0, 0.0, 100.0, 100.0)));
        stack.push(Window::new("C", Rect::new(400.0, 0.0, 100.0, 100.0)));
        stack
    }

    #[test]
    fn test_title_click_raises_window() {
        let mut stack = abc();
        let d = stack.dispatch(&PointerEvent::down(Vec2::new(50.0, 10.0)));
        assert!(d.focused);
        assert_eq!(stack.titles(), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_click_on_canvas_is_not_consumed() {
        let mut stack = abc();
        let d = stack.dispatch(&PointerEvent::down(Vec2::new(150.0, 300.0)));
        assert!(!d.consumed);
        assert_eq!(stack.titles(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_topmost_window_intercepts_overlap() {
        let mut stack = WindowStack::new();
        stack.push(Window::new("LOW", Rect::new(0.0, 0.0, 200.0, 200.0)));
        stack.push(Window::new("HIGH", Rect::new(50.0, 0.0, 200.0, 200.0)));

        // Title bar region shared by both windows.
        let d = stack.dispatch(&PointerEvent::down(Vec2::new(100.0, 10.0)));
        assert!(d.focused);
        assert_eq!(stack.titles(), vec!["LOW", "HIGH"]);
        assert!(stack.top().unwrap().is_dragging());
        assert!(!stack.iter().next().unwrap().is_dragging());
    }

    #[test]
    fn test_hovered_window_shields_lower_sliders() {
        let mut stack = WindowStack::new();
        stack.push(
            Window::new("LOW", Rect::new(0.0, 0.0, 300.0, 200.0))
                .with(Slider::for_param(Param::Gravity, Vec2::new(20.0, 50.0), 200.0)),
        );
        stack.push(Window::new("HIGH", Rect::new(0.0, 30.0, 300.0, 200.0)));

        let before = stack.value(Param::Gravity);
        stack.dispatch(&PointerEvent::down(Vec2::new(120.0, 55.0)));
        assert_eq!(stack.value(Param::Gravity), before);
    }

    #[test]
    fn test_release_reaches_every_window() {
        let mut stack = WindowStack::new();
        stack.push(Window::new("LOW", Rect::new(0.0, 0.0, 200.0, 200.0)));
        stack.push(Window::new("HIGH", Rect::new(300.0, 0.0, 200.0, 200.0)));

        stack.dispatch(&PointerEvent::down(Vec2::new(20.0, 10.0)));
        assert_eq!(stack.top().unwrap().title(), "LOW");
        // Drag LOW under HIGH, then release over HIGH.
        stack.dispatch(&PointerEvent::moved(Vec2::new(320.0, 10.0)));
        stack.dispatch(&PointerEvent::up(Vec2::new(320.0, 10.0)));
        assert!(stack.iter().all(|w| !w.is_dragging()));
    }

    #[test]
    fn test_contains_and_window_at() {
        let mut stack = abc();
        stack.push(Window::new("D", Rect::new(50.0, 50.0, 100.0, 100.0)));
        assert!(stack.contains(Vec2::new(450.0, 50.0)));
        assert!(!stack.contains(Vec2::new(350.0, 50.0)));
        assert_eq!(stack.window_at(Vec2::new(75.0, 75.0)).unwrap().title(), "D");
        assert_eq!(stack.window_at(Vec2::new(10.0, 10.0)).unwrap().title(), "A");
        assert!(stack.window_at(Vec2::new(350.0, 50.0)).is_none());
    }

    #[test]
    fn test_raise_out_of_range_is_noop() {
        let mut stack = abc();
        stack.raise(17);
        assert_eq!(stack.titles(), vec!["A", "B", "C"]);
    }
}
