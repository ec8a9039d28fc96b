//! Damped second-order spring.
//!
//! Models `m·x'' = -k·(x - target) - c·x'` and integrates it with
//! semi-implicit Euler in fixed sub-steps, so large or irregular frame
//! deltas stay stable. The spring snaps to its target once both the
//! displacement and the velocity fall below the rest thresholds.

use std::time::Duration;

/// Longest integration step, in seconds.
const MAX_STEP_SECONDS: f64 = 1.0 / 240.0;
/// Frame deltas above this are treated as a stall and clamped.
const MAX_FRAME_SECONDS: f64 = 0.25;

/// Spring constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Displacement below which the spring may settle.
    pub rest_delta: f64,
    /// Speed below which the spring may settle.
    pub rest_speed: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: 0.001,
            rest_speed: 0.001,
        }
    }

    /// Scroll smoothing: stiffness 100, damping 30, unit mass.
    pub const fn scroll() -> Self {
        Self::new(100.0, 30.0, 1.0)
    }

    /// Pointer follower: stiffness 400, damping 20, mass 0.5.
    pub const fn cursor() -> Self {
        Self {
            rest_delta: 0.01,
            rest_speed: 0.01,
            ..Self::new(400.0, 20.0, 0.5)
        }
    }

    /// Damping ratio; `>= 1` never overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// One-dimensional animated value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// Spring resting at `value`.
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            position: value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jumps to `value` with zero velocity.
    pub fn snap_to(&mut self, value: f64) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advances the simulation by `dt` and returns the new position.
    pub fn step(&mut self, dt: Duration) -> f64 {
        if self.is_at_rest() {
            return self.position;
        }
        let mut remaining = dt.as_secs_f64().min(MAX_FRAME_SECONDS);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECONDS);
            let displacement = self.position - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if (self.position - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.snap_to(self.target);
        }
        self.position
    }
}
