//! Spring-following custom cursor.

use crate::motion::spring::{Spring, SpringConfig};
use std::time::Duration;

/// Rendered cursor: a trailing ring and an exact center dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFrame {
    pub ring_x: f64,
    pub ring_y: f64,
    pub dot_x: f64,
    pub dot_y: f64,
    /// Pointer is over a button or link.
    pub hovered: bool,
}

#[derive(Debug, Clone)]
pub struct CursorFollower {
    enabled: bool,
    x: Spring,
    y: Spring,
    pointer: (f64, f64),
    hovered: bool,
}

impl CursorFollower {
    /// Touch-capable hosts keep their native pointer; the follower stays off.
    pub fn new(touch_capable: bool) -> Self {
        let config = SpringConfig::cursor();
        Self {
            enabled: !touch_capable,
            x: Spring::new(config, 0.0),
            y: Spring::new(config, 0.0),
            pointer: (0.0, 0.0),
            hovered: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, over_interactive: bool) {
        if !self.enabled {
            return;
        }
        self.pointer = (x, y);
        self.hovered = over_interactive;
        self.x.set_target(x);
        self.y.set_target(y);
    }

    pub fn tick(&mut self, dt: Duration) -> Option<CursorFrame> {
        if !self.enabled {
            return None;
        }
        self.x.step(dt);
        self.y.step(dt);
        self.frame()
    }

    pub fn frame(&self) -> Option<CursorFrame> {
        self.enabled.then(|| CursorFrame {
            ring_x: self.x.position(),
            ring_y: self.y.position(),
            dot_x: self.pointer.0,
            dot_y: self.pointer.1,
            hovered: self.hovered,
        })
    }
}
