//! Scene parameters handed to the decorative 3D renderer.
//!
//! # Responsibility
//! - Map scroll progress to the blob's parallax target.
//! - Ease the blob toward that target once per frame.
//!
//! # Invariants
//! - The renderer is pure output; nothing flows back into view state.
//! - Easing uses a fixed per-frame factor, independent of frame duration.

use crate::model::theme::Rgb;
use std::time::Duration;

/// Fraction of the remaining distance covered per frame.
pub const BLOB_EASE_PER_FRAME: f64 = 0.05;
pub const BLOB_INITIAL_POSITION: Vec3 = Vec3::new(2.0, 0.0, -2.0);
/// Blob spin in radians per second around x and y.
pub const BLOB_SPIN: (f64, f64) = (0.1, 0.15);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn lerp(self, to: Self, factor: f64) -> Self {
        Self::new(
            self.x + (to.x - self.x) * factor,
            self.y + (to.y - self.y) * factor,
            self.z + (to.z - self.z) * factor,
        )
    }
}

/// Parallax target for the given scroll progress.
///
/// Starts bottom-right of the intro text and rises and recedes as the road
/// scrolls.
pub fn blob_target(progress: f64) -> Vec3 {
    let p = progress.clamp(0.0, 1.0);
    Vec3::new(4.0 - 3.0 * p, -4.0 + 10.0 * p, -2.0 - 5.0 * p)
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneFrame {
    pub color: Rgb,
    pub scroll_progress: f64,
    pub blob_target: Vec3,
    pub blob_position: Vec3,
    /// Blob rotation (x, y) in radians.
    pub blob_rotation: (f64, f64),
}

/// Per-frame blob animation state.
#[derive(Debug, Clone, PartialEq)]
pub struct BlobMotion {
    position: Vec3,
    elapsed: Duration,
}

impl Default for BlobMotion {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobMotion {
    pub fn new() -> Self {
        Self {
            position: BLOB_INITIAL_POSITION,
            elapsed: Duration::ZERO,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Advances one frame and returns the frame to render.
    pub fn frame(&mut self, dt: Duration, color: Rgb, scroll_progress: f64) -> SceneFrame {
        self.elapsed = self.elapsed.saturating_add(dt);
        let target = blob_target(scroll_progress);
        self.position = self.position.lerp(target, BLOB_EASE_PER_FRAME);
        let t = self.elapsed.as_secs_f64();
        SceneFrame {
            color,
            scroll_progress,
            blob_target: target,
            blob_position: self.position,
            blob_rotation: (t * BLOB_SPIN.0, t * BLOB_SPIN.1),
        }
    }
}

/// Host renderer for the decorative background.
pub trait SceneRenderer {
    fn render(&mut self, frame: &SceneFrame);
}
