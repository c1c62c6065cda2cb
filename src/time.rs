//! Frame clock for driving particle updates.
//!
//! [`Time`] turns wall-clock frames into simulation steps. It can run on real
//! frame timing, on a fixed step (the flame demo advances 16 ms per frame no
//! matter how fast frames arrive), be paused, or be scaled.
//!
//! # Example
//!
//! ```ignore
//! let mut time = Time::fixed(0.016);
//!
//! // In your frame loop:
//! let dt = time.tick();
//! system.update(dt);
//! ```

use std::time::Instant;

/// Longest real-time step handed to the simulation, in seconds.
///
/// A stalled host (debugger, hidden window) would otherwise release a burst
/// of particles all at once on the next frame.
pub const DEFAULT_MAX_DELTA: f32 = 0.25;

/// Simulation clock.
#[derive(Debug, Clone)]
pub struct Time {
    /// When the last frame occurred.
    last_frame: Instant,
    /// Simulated seconds since start.
    elapsed_secs: f32,
    /// Simulated seconds in the last step.
    delta_secs: f32,
    /// Steps taken since start.
    frame_count: u64,
    /// Whether time is paused.
    paused: bool,
    /// Fixed step used instead of real timing (optional).
    fixed_delta: Option<f32>,
    /// Upper bound on a real-time step.
    max_delta: f32,
    /// Time scale multiplier (1.0 = normal speed).
    time_scale: f32,
}

impl Time {
    /// Clock following real frame timing.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            paused: false,
            fixed_delta: None,
            max_delta: DEFAULT_MAX_DELTA,
            time_scale: 1.0,
        }
    }

    /// Clock that advances exactly `delta` seconds per tick.
    pub fn fixed(delta: f32) -> Self {
        let mut time = Self::new();
        time.set_fixed_delta(Some(delta));
        time
    }

    /// Advance one frame and return the simulation step in seconds.
    ///
    /// Returns 0.0 while paused.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if self.paused {
            self.delta_secs = 0.0;
            return 0.0;
        }

        let step = match self.fixed_delta {
            Some(fixed) => fixed,
            None => raw.min(self.max_delta),
        };
        self.delta_secs = step * self.time_scale;
        self.elapsed_secs += self.delta_secs;
        self.frame_count += 1;
        self.delta_secs
    }

    /// Simulated seconds since start.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Simulated seconds in the last step.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Steps taken since start. Paused ticks are not counted.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Stop advancing. Particles are not aged while paused.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.last_frame = Instant::now();
            self.paused = false;
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Use a fixed step instead of real timing. `None` restores real timing.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta.map(|d| d.max(0.0));
    }

    /// Cap real-time steps at `seconds`.
    pub fn set_max_delta(&mut self, seconds: f32) {
        self.max_delta = seconds.max(0.0);
    }

    /// Set time scale multiplier. Negative values clamp to 0.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Reset counters, keeping the fixed step, cap and scale.
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
        self.elapsed_secs = 0.0;
        self.delta_secs = 0.0;
        self.frame_count = 0;
        self.paused = false;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
