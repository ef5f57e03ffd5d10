//! Particle spawning from the current slider snapshot.
//!
//! Spawning is continuous: every frame the trigger holds, `floor(rate)`
//! particles are emitted at the pointer. Directions fan out around a fixed
//! "up" reference, speeds are jittered around the configured speed.

use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::particle::Particle;

/// Reference emission direction in radians (screen "up", roughly -90°).
pub const BASE_ANGLE: f32 = -1.57;

/// Multiplier range applied to the configured initial speed.
pub const SPEED_JITTER: (f32, f32) = (0.5, 1.2);

/// Default lifetime of a spawned particle, in ticks.
pub const DEFAULT_LIFETIME: f32 = 60.0;

/// Parameters for one spawn burst, copied from the sliders at spawn time.
///
/// Particles keep their own copy of size and colors, so later slider
/// changes never affect particles already in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnParams {
    /// Particles per frame. Fractional part is dropped.
    pub rate: f32,
    /// Half-angle of the emission fan, in radians.
    pub spread: f32,
    pub speed: f32,
    pub size: f32,
    pub lifetime: f32,
    pub color_start: Vec3,
    pub color_end: Vec3,
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self {
            rate: 5.0,
            spread: 1.5,
            speed: 3.0,
            size: 1.5,
            lifetime: DEFAULT_LIFETIME,
            color_start: Vec3::new(255.0, 150.0, 200.0),
            color_end: Vec3::new(50.0, 255.0, 100.0),
        }
    }
}

impl SpawnParams {
    /// Number of particles one burst emits.
    pub fn count(&self) -> usize {
        if self.rate.is_finite() && self.rate > 0.0 {
            self.rate.floor() as usize
        } else {
            0
        }
    }
}

/// Creates particles with randomized launch velocities.
pub struct Spawner {
    rng: SmallRng,
}

impl Spawner {
    /// Spawner seeded from the clock, different each run.
    pub fn new() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::seeded(seed)
    }

    /// Deterministic spawner, for tests and reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Emit one burst of `params.count()` particles at `at` into `out`.
    ///
    /// Returns the number of particles pushed, which is smaller than the
    /// burst size only when `limit` would be exceeded.
    pub fn spawn_into(
        &mut self,
        at: Vec2,
        params: &SpawnParams,
        out: &mut Vec<Particle>,
        limit: usize,
    ) -> usize {
        let room = limit.saturating_sub(out.len());
        let count = params.count().min(room);

        out.reserve(count);
        for _ in 0..count {
            let p = self.spawn_one(at, params);
            out.push(p);
        }
        count
    }

    /// Create a single particle at `at`.
    pub fn spawn_one(&mut self, at: Vec2, params: &SpawnParams) -> Particle {
        let angle = BASE_ANGLE + self.uniform(-params.spread, params.spread);
        let speed = params.speed * self.uniform(SPEED_JITTER.0, SPEED_JITTER.1);
        let velocity = Vec2::new(angle.cos(), angle.sin()) * speed;

        Particle::new(
            at,
            velocity,
            params.lifetime,
            params.size,
            params.color_start,
            params.color_end,
        )
    }

    /// Uniform sample in `[lo, hi]`; a degenerate range returns `lo`.
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        if hi > lo {
            self.rng.gen_range(lo..=hi)
        } else {
            lo
        }
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_floors_rate() {
        let mut params = SpawnParams::default();
        params.rate = 5.9;
        assert_eq!(params.count(), 5);
        params.rate = 0.4;
        assert_eq!(params.count(), 0);
        params.rate = -3.0;
        assert_eq!(params.count(), 0);
    }

    #[test]
    fn test_burst_emits_rate_particles_at_pointer() {
        let mut spawner = Spawner::seeded(7);
        let mut out = Vec::new();
        let at = Vec2::new(400.0, 300.0);

        let n = spawner.spawn_into(at, &SpawnParams::default(), &mut out, usize::MAX);
        assert_eq!(n, 5);
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|p| p.position == at && p.life == DEFAULT_LIFETIME));
    }

    #[test]
    fn test_velocity_within_fan_and_speed_band() {
        let mut spawner = Spawner::seeded(1234);
        let params = SpawnParams {
            spread: 0.5,
            speed: 4.0,
            ..SpawnParams::default()
        };

        for _ in 0..500 {
            let p = spawner.spawn_one(Vec2::ZERO, &params);
            let speed = p.velocity.length();
            assert!(speed >= 4.0 * 0.5 - 1e-4 && speed <= 4.0 * 1.2 + 1e-4);

            let angle = p.velocity.y.atan2(p.velocity.x);
            assert!(angle >= BASE_ANGLE - 0.5 - 1e-4);
            assert!(angle <= BASE_ANGLE + 0.5 + 1e-4);
        }
    }

    #[test]
    fn test_zero_spread_launches_straight_up() {
        let mut spawner = Spawner::seeded(9);
        let params = SpawnParams {
            spread: 0.0,
            ..SpawnParams::default()
        };
        let p = spawner.spawn_one(Vec2::ZERO, &params);
        assert!(p.velocity.y < 0.0);
        assert!(p.velocity.x.abs() < 0.01 * p.velocity.length());
    }

    #[test]
    fn test_limit_caps_burst() {
        let mut spawner = Spawner::seeded(3);
        let mut out = Vec::new();
        let params = SpawnParams {
            rate: 20.0,
            ..SpawnParams::default()
        };

        assert_eq!(spawner.spawn_into(Vec2::ZERO, &params, &mut out, 12), 12);
        assert_eq!(spawner.spawn_into(Vec2::ZERO, &params, &mut out, 12), 0);
        assert_eq!(out.len(), 12);
    }

    #[test]
    fn test_particles_copy_params_at_spawn_time() {
        let mut spawner = Spawner::seeded(5);
        let mut params = SpawnParams::default();
        let p = spawner.spawn_one(Vec2::ZERO, &params);

        params.size = 19.0;
        params.color_start = Vec3::ZERO;
        assert_eq!(p.size, 1.5);
        assert_eq!(p.color_start, Vec3::new(255.0, 150.0, 200.0));
    }

    #[test]
    fn test_seeded_spawners_are_reproducible() {
        let params = SpawnParams::default();
        let a = Spawner::seeded(99).spawn_one(Vec2::ZERO, &params);
        let b = Spawner::seeded(99).spawn_one(Vec2::ZERO, &params);
        assert_eq!(a, b);
    }
}
