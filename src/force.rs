//! Force fields that perturb particle velocity.
//!
//! Every force is a pure velocity transform: it reads the particle's
//! position and velocity, and writes only the velocity. Positions are
//! integrated by [`Particle::update`], never by a force.
//!
//! # Force Categories
//!
//! - **Uniform**: [`gravity`], [`wind`]
//! - **Point Forces**: [`attract`], [`repel`]
//! - **Field Effects**: [`vortex`]
//! - **Damping**: [`global_friction`]
//!
//! The free functions are the building blocks. [`Force`] wraps them in a
//! value that can be stored in a list and applied in order:
//!
//! ```ignore
//! let forces = [
//!     Force::Wind(0.05),
//!     Force::Vortex { center: Vec2::new(550.0, 350.0), strength: 0.5 },
//! ];
//! particle.apply_forces(&forces);
//! ```

use glam::Vec2;

use crate::particle::Particle;

/// Softening term added to distances used as divisors.
pub const DISTANCE_EPSILON: f32 = 1e-4;

/// Coefficient that scales the perpendicular offset in [`vortex`].
pub const VORTEX_COEFFICIENT: f32 = 0.01;

/// Constant downward acceleration (screen space, +Y is down).
#[inline]
pub fn gravity(p: &mut Particle, strength: f32) {
    p.velocity.y += strength;
}

/// Steer toward `target` with a constant-magnitude pull.
pub fn attract(p: &mut Particle, target: Vec2, strength: f32) {
    let delta = target - p.position;
    let dist = delta.length() + DISTANCE_EPSILON;
    p.velocity += delta / dist * strength;
}

/// Push away from `target`, linearly fading from `strength` at the
/// center to zero at `radius`.
pub fn repel(p: &mut Particle, target: Vec2, strength: f32, radius: f32) {
    let delta = p.position - target;
    let dist = delta.length() + DISTANCE_EPSILON;

    if dist < radius {
        let force = (radius - dist) / radius * strength;
        p.velocity += delta / dist * force;
    }
}

/// Constant horizontal bias.
#[inline]
pub fn wind(p: &mut Particle, strength: f32) {
    p.velocity.x += strength;
}

/// Tangential swirl around `center`, growing with distance from it.
pub fn vortex(p: &mut Particle, center: Vec2, strength: f32) {
    let offset = p.position - center;
    let k = VORTEX_COEFFICIENT * strength;
    p.velocity.x += -offset.y * k;
    p.velocity.y += offset.x * k;
}

/// Scale both velocity components by `factor`, expected in `(0, 1]`.
///
/// This is the only damping in the model.
#[inline]
pub fn global_friction(p: &mut Particle, factor: f32) {
    p.velocity *= factor;
}

/// A force field that can be stored and applied later.
///
/// # Example
///
/// ```ignore
/// let pull = Force::Attract { target: cursor, strength: 0.2 };
/// pull.apply(&mut particle);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Force {
    /// Constant downward acceleration. See [`gravity`].
    Gravity(f32),

    /// Constant horizontal acceleration. See [`wind`].
    Wind(f32),

    /// Pull toward a point. See [`attract`].
    Attract {
        /// Target position.
        target: Vec2,
        /// Pull strength.
        strength: f32,
    },

    /// Push away from a point within a radius. See [`repel`].
    Repel {
        /// Center of repulsion.
        target: Vec2,
        /// Force at the center.
        strength: f32,
        /// Effect radius (force is zero at and beyond it).
        radius: f32,
    },

    /// Swirl around a point. See [`vortex`].
    ///
    /// Positive strength turns clockwise on screen.
    Vortex {
        /// Swirl center.
        center: Vec2,
        /// Rotational strength.
        strength: f32,
    },

    /// Velocity damping. See [`global_friction`].
    Friction(f32),
}

impl Force {
    /// Apply this force to a particle's velocity.
    pub fn apply(&self, p: &mut Particle) {
        match *self {
            Force::Gravity(strength) => gravity(p, strength),
            Force::Wind(strength) => wind(p, strength),
            Force::Attract { target, strength } => attract(p, target, strength),
            Force::Repel {
                target,
                strength,
                radius,
            } => repel(p, target, strength, radius),
            Force::Vortex { center, strength } => vortex(p, center, strength),
            Force::Friction(factor) => global_friction(p, factor),
        }
    }

    /// Whether applying this force to a particle ever changes it.
    ///
    /// Zero-strength forces are skipped by the editor.
    pub fn is_noop(&self) -> bool {
        match *self {
            Force::Gravity(s) | Force::Wind(s) => s == 0.0,
            Force::Attract { strength, .. } | Force::Vortex { strength, .. } => strength == 0.0,
            Force::Repel {
                strength, radius, ..
            } => strength == 0.0 || radius <= 0.0,
            Force::Friction(factor) => factor == 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn still_at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 60.0, 2.0, Vec3::ZERO, Vec3::ZERO)
    }

    #[test]
    fn test_gravity_and_wind_are_axis_aligned() {
        let mut p = still_at(0.0, 0.0);
        gravity(&mut p, 0.1);
        wind(&mut p, -0.05);
        assert_eq!(p.velocity, Vec2::new(-0.05, 0.1));
        assert_eq!(p.position, Vec2::ZERO);
    }

    #[test]
    fn test_attract_is_unit_direction_times_strength() {
        let mut p = still_at(0.0, 0.0);
        attract(&mut p, Vec2::new(30.0, 40.0), 2.0);
        assert!((p.velocity.length() - 2.0).abs() < 1e-3);
        assert!((p.velocity.x - 1.2).abs() < 1e-3);
        assert!((p.velocity.y - 1.6).abs() < 1e-3);
    }

    #[test]
    fn test_attract_at_target_stays_finite() {
        let mut p = still_at(5.0, 5.0);
        attract(&mut p, Vec2::new(5.0, 5.0), 1.0);
        assert!(p.velocity.is_finite());
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_repel_inside_radius_pushes_away() {
        let target = Vec2::new(100.0, 100.0);
        let mut p = still_at(150.0, 100.0);
        repel(&mut p, target, 1.0, 100.0);

        assert!(p.velocity.length() > 0.0);
        // Pointing away from the target: same direction as (p - target).
        assert!(p.velocity.dot(p.position - target) > 0.0);
        assert!((p.velocity.x - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_repel_outside_radius_is_noop() {
        let mut p = still_at(250.0, 100.0);
        repel(&mut p, Vec2::new(100.0, 100.0), 1.0, 100.0);
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_repel_at_target_stays_finite() {
        let mut p = still_at(10.0, 10.0);
        repel(&mut p, Vec2::new(10.0, 10.0), 1.0, 50.0);
        assert!(p.velocity.is_finite());
    }

    #[test]
    fn test_vortex_is_perpendicular_to_offset() {
        let center = Vec2::new(0.0, 0.0);
        let mut p = still_at(100.0, 0.0);
        vortex(&mut p, center, 1.0);

        assert!((p.velocity.x).abs() < 1e-6);
        assert!((p.velocity.y - 1.0).abs() < 1e-6);
        assert!(p.velocity.dot(p.position - center).abs() < 1e-4);
    }

    #[test]
    fn test_friction_scales_both_components() {
        let mut p = still_at(0.0, 0.0);
        p.velocity = Vec2::new(2.0, -4.0);
        global_friction(&mut p, 0.5);
        assert_eq!(p.velocity, Vec2::new(1.0, -2.0));
    }

    #[test]
    fn test_additive_forces_commute() {
        let forces = [
            Force::Gravity(0.1),
            Force::Wind(0.05),
            Force::Attract {
                target: Vec2::new(10.0, 20.0),
                strength: 0.3,
            },
        ];

        let mut forward = still_at(1.0, 2.0);
        let mut reverse = still_at(1.0, 2.0);
        forward.apply_forces(&forces);
        for force in forces.iter().rev() {
            force.apply(&mut reverse);
        }

        assert!((forward.velocity - reverse.velocity).length() < 1e-5);
    }

    #[test]
    fn test_noop_detection() {
        assert!(Force::Wind(0.0).is_noop());
        assert!(Force::Friction(1.0).is_noop());
        assert!(!Force::Friction(0.98).is_noop());
        assert!(Force::Repel {
            target: Vec2::ZERO,
            strength: 1.0,
            radius: 0.0
        }
        .is_noop());
    }
}
