//! Horizontal value slider.

use glam::Vec2;

use super::{Rect, Response, Widget};
use crate::canvas::{rgb, Canvas};
use crate::input::PointerEvent;
use crate::param::Param;
use crate::ui::theme;

/// Visual track height in pixels.
pub const TRACK_HEIGHT: f32 = 10.0;

/// Extra width and height of the grab region around the track.
pub const GRAB_INFLATE: (f32, f32) = (10.0, 20.0);

const KNOB_RADIUS: f32 = 7.0;

/// A draggable control mapping pointer x to a value in `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    param: Param,
    label: String,
    /// Position relative to the parent origin.
    rel: Vec2,
    width: f32,
    min: f32,
    max: f32,
    value: f32,
    grabbed: bool,
}

impl Slider {
    /// Slider with explicit bounds. `value` is clamped into range.
    ///
    /// # Panics
    ///
    /// Panics if `min >= max` or `width <= 0`.
    pub fn new(param: Param, rel: Vec2, width: f32, min: f32, max: f32, value: f32) -> Self {
        assert!(min < max, "slider range must be non-empty");
        assert!(width > 0.0, "slider width must be positive");
        Self {
            param,
            label: param.label().to_string(),
            rel,
            width,
            min,
            max,
            value: value.clamp(min, max),
            grabbed: false,
        }
    }

    /// Slider using the parameter's own range and default.
    pub fn for_param(param: Param, rel: Vec2, width: f32) -> Self {
        let (min, max, default) = param.range();
        Self::new(param, rel, width, min, max, default)
    }

    #[inline]
    pub fn param(&self) -> Param {
        self.param
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    #[inline]
    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// Absolute track rectangle under the given parent origin.
    pub fn track(&self, origin: Vec2) -> Rect {
        Rect::new(origin.x + self.rel.x, origin.y + self.rel.y, self.width, TRACK_HEIGHT)
    }

    /// Value the slider takes when the pointer is at screen x `x`.
    pub fn value_at(&self, x: f32, origin: Vec2) -> f32 {
        let track = self.track(origin);
        let clamped = x.clamp(track.x, track.right());
        let t = (clamped - track.x) / track.w;
        (self.min + t * (self.max - self.min)).clamp(self.min, self.max)
    }
}

impl Widget for Slider {
    fn handle(&mut self, event: &PointerEvent, origin: Vec2) -> Response {
        let track = self.track(origin);

        if event.is_primary_down() {
            let grab = track.inflate(GRAB_INFLATE.0, GRAB_INFLATE.1);
            if grab.contains(event.pos) {
                self.grabbed = true;
            }
        }
        if event.is_primary_up() {
            self.grabbed = false;
        }
        if self.grabbed {
            self.value = self.value_at(event.pos.x, origin);
        }

        Response::Ignored
    }

    fn draw(&self, canvas: &mut Canvas, origin: Vec2) {
        let track = self.track(origin);
        canvas.fill_rect(track, theme::SLIDER_TRACK);

        let t = (self.value - self.min) / (self.max - self.min);
        let knob = Vec2::new(track.x + t * track.w, track.y + TRACK_HEIGHT * 0.5);
        canvas.fill_circle(knob, KNOB_RADIUS, theme::ACCENT);

        let text = format!("{}: {:.2}", self.label, self.value);
        canvas.text(Vec2::new(track.x, track.y - 18.0), &text, 2, rgb(200, 200, 200));
    }

    fn value_of(&self, param: Param) -> Option<f32> {
        (param == self.param).then_some(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{MouseButton, PointerKind};

    const ORIGIN: Vec2 = Vec2::new(20.0, 20.0);

    /// Track spans x in [40, 240), y in [70, 80) under ORIGIN.
    fn ten() -> Slider {
        Slider::new(Param::SpawnRate, Vec2::new(20.0, 50.0), 200.0, 0.0, 10.0, 5.0)
    }

    fn drag(slider: &mut Slider, from: Vec2, to: Vec2) {
        slider.handle(&PointerEvent::down(from), ORIGIN);
        slider.handle(&PointerEvent::moved(to), ORIGIN);
        slider.handle(&PointerEvent::up(to), ORIGIN);
    }

    #[test]
    fn test_drag_to_right_edge_is_max() {
        let mut s = ten();
        drag(&mut s, Vec2::new(140.0, 75.0), Vec2::new(240.0, 75.0));
        assert_eq!(s.value(), 10.0);
    }

    #[test]
    fn test_drag_to_left_edge_is_min() {
        let mut s = ten();
        drag(&mut s, Vec2::new(140.0, 75.0), Vec2::new(40.0, 75.0));
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn test_drag_past_bounds_is_clamped() {
        let mut s = ten();
        drag(&mut s, Vec2::new(140.0, 75.0), Vec2::new(5000.0, -300.0));
        assert_eq!(s.value(), 10.0);
        drag(&mut s, Vec2::new(240.0, 75.0), Vec2::new(-5000.0, 900.0));
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn test_drag_round_trip_matches_linear_map() {
        for frac in [0.0_f32, 0.1, 0.25, 0.5, 0.73, 1.0] {
            let mut s = ten();
            let x = 40.0 + frac * 200.0;
            drag(&mut s, Vec2::new(140.0, 75.0), Vec2::new(x, 75.0));
            assert!((s.value() - frac * 10.0).abs() < 1e-4, "frac {}", frac);
        }
    }

    #[test]
    fn test_grab_region_is_inflated() {
        let mut s = ten();
        // 8px above the track: outside the visual track, inside the grab region.
        s.handle(&PointerEvent::down(Vec2::new(100.0, 62.0)), ORIGIN);
        assert!(s.is_grabbed());
        assert!((s.value() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_press_outside_does_not_grab() {
        let mut s = ten();
        s.handle(&PointerEvent::down(Vec2::new(100.0, 120.0)), ORIGIN);
        s.handle(&PointerEvent::moved(Vec2::new(40.0, 75.0)), ORIGIN);
        assert!(!s.is_grabbed());
        assert_eq!(s.value(), 5.0);
    }

    #[test]
    fn test_release_anywhere_ungrabs() {
        let mut s = ten();
        s.handle(&PointerEvent::down(Vec2::new(140.0, 75.0)), ORIGIN);
        assert!(s.is_grabbed());
        s.handle(&PointerEvent::up(Vec2::new(900.0, 900.0)), ORIGIN);
        assert!(!s.is_grabbed());
    }

    #[test]
    fn test_secondary_button_does_not_grab() {
        let mut s = ten();
        let press = PointerEvent::with_button(
            PointerKind::Down,
            Vec2::new(140.0, 75.0),
            MouseButton::Right,
        );
        s.handle(&press, ORIGIN);
        assert!(!s.is_grabbed());
    }

    #[test]
    fn test_track_follows_parent_origin() {
        let mut s = ten();
        let moved = Vec2::new(300.0, 400.0);
        // Right edge of the track under the new origin.
        s.handle(&PointerEvent::down(Vec2::new(320.0, 455.0)), moved);
        assert!(s.is_grabbed());
        s.handle(&PointerEvent::moved(Vec2::new(520.0, 455.0)), moved);
        assert_eq!(s.value(), 10.0);
    }

    #[test]
    fn test_initial_value_is_clamped() {
        let s = Slider::new(Param::Gravity, Vec2::ZERO, 100.0, -0.5, 0.5, 3.0);
        assert_eq!(s.value(), 0.5);
    }

    #[test]
    fn test_value_of_matches_own_param_only() {
        let s = ten();
        assert_eq!(s.value_of(Param::SpawnRate), Some(5.0));
        assert_eq!(s.value_of(Param::Gravity), None);
    }
}
