//! A single simulated point.
//!
//! Particles live for a fixed number of ticks. Each tick applies gravity
//! and friction, integrates position with explicit Euler, and burns one
//! tick of life. Color fades from `color_start` to `color_end` over the
//! lifetime while alpha drops from opaque to transparent.

use glam::{Vec2, Vec3};

use crate::force::{self, Force};

/// A particle owned exclusively by the editor's live set.
///
/// Colors are RGB with components in `[0, 255]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining ticks. The particle is dead once this reaches zero.
    pub life: f32,
    /// Lifetime at creation. Always > 0.
    pub max_life: f32,
    /// Disc radius in pixels.
    pub size: f32,
    pub color_start: Vec3,
    pub color_end: Vec3,
}

/// What the draw pass needs to paint one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    pub center: Vec2,
    pub radius: f32,
    /// Interpolated RGB, each channel truncated to an integer value.
    pub color: [u8; 3],
    pub alpha: u8,
}

impl Particle {
    /// Create a particle with full life.
    pub fn new(
        position: Vec2,
        velocity: Vec2,
        max_life: f32,
        size: f32,
        color_start: Vec3,
        color_end: Vec3,
    ) -> Self {
        Self {
            position,
            velocity,
            life: max_life,
            max_life,
            size,
            color_start,
            color_end,
        }
    }

    /// Advance one tick under gravity and friction.
    pub fn update(&mut self, gravity: f32, friction: f32) {
        force::gravity(self, gravity);
        force::global_friction(self, friction);
        self.position += self.velocity;
        self.life -= 1.0;
    }

    /// Apply extra forces in order. Does not integrate or age.
    pub fn apply_forces(&mut self, forces: &[Force]) {
        for f in forces {
            f.apply(self);
        }
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }

    /// Remaining life as a fraction of the lifetime, in `[0, 1]`.
    #[inline]
    pub fn life_fraction(&self) -> f32 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }

    /// Color, alpha and geometry for the draw pass.
    pub fn render_state(&self) -> RenderState {
        let remaining = self.life_fraction();
        let t = 1.0 - remaining;
        let rgb = self.color_start.lerp(self.color_end, t);

        RenderState {
            center: self.position,
            radius: self.size,
            color: [channel(rgb.x), channel(rgb.y), channel(rgb.z)],
            alpha: (255.0 * remaining) as u8,
        }
    }
}

fn channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
