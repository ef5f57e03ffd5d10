//! Frame pacing for the editor loop.
//!
//! The editor advances the simulation once per frame, so particle motion
//! speed is tied to the frame rate. [`FrameClock`] keeps that rate steady
//! by handing the event loop a deadline for the next frame and reporting
//! whether a frame is due.
//!
//! # Example
//!
//! ```ignore
//! use pfx::time::FrameClock;
//! use std::time::Instant;
//!
//! let mut clock = FrameClock::new(60);
//!
//! // In the event loop:
//! if clock.tick(Instant::now()) {
//!     // advance and draw one frame
//! }
//! event_loop.set_control_flow(ControlFlow::WaitUntil(clock.next_deadline()));
//! ```

use std::time::{Duration, Instant};

/// Fixed-rate frame scheduler with an FPS counter.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Target time between frames.
    interval: Duration,
    /// Earliest instant the next frame may run.
    next: Instant,
    /// Total frames ticked since start.
    frame_count: u64,
    /// Measured frames per second (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl FrameClock {
    /// Clock targeting `target_fps` frames per second, starting now.
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    /// Clock targeting `target_fps`, with `now` as its start time.
    ///
    /// A target of zero is treated as one frame per second.
    pub fn starting_at(target_fps: u32, now: Instant) -> Self {
        let interval = Duration::from_secs_f64(1.0 / target_fps.max(1) as f64);
        Self {
            interval,
            next: now,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Whether a frame should run at `now`.
    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Consume a frame if one is due at `now`.
    ///
    /// Returns `false` (and changes nothing) when called early. After a
    /// stall the schedule restarts from `now` instead of bursting to catch
    /// up.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }

        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        true
    }

    /// Deadline to hand to `ControlFlow::WaitUntil`.
    #[inline]
    pub fn next_deadline(&self) -> Instant {
        self.next
    }

    /// Target time between frames.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Total frames ticked since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Measured frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60)
    }
}
