//! Scroll progress tracking.
//!
//! # Responsibility
//! - Normalize one axis of a scrollable region to [0, 1].
//! - Smooth raw samples through a spring before publishing.
//!
//! # Invariants
//! - Published values are always within [0, 1].
//! - A region that cannot scroll reports progress 0.
//! - `remount` discards all history; the next published value is 0.

use crate::motion::spring::{Spring, SpringConfig};
use std::time::Duration;

/// Scroll axis of the road layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAxis {
    #[default]
    Vertical,
    Horizontal,
}

impl ScrollAxis {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vertical" | "y" => Some(Self::Vertical),
            "horizontal" | "x" => Some(Self::Horizontal),
            _ => None,
        }
    }
}

/// One scroll observation along the tracked axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled from the start, in host units.
    pub offset: f64,
    /// Full content length along the axis.
    pub scroll_extent: f64,
    /// Visible length along the axis.
    pub viewport_extent: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, scroll_extent: f64, viewport_extent: f64) -> Self {
        Self {
            offset,
            scroll_extent,
            viewport_extent,
        }
    }

    /// Unsmoothed progress, `offset / (scroll_extent - viewport_extent)`.
    ///
    /// Zero whenever the region is not scrollable or the inputs are not
    /// finite.
    pub fn raw_progress(&self) -> f64 {
        let range = self.scroll_extent - self.viewport_extent;
        if !range.is_finite() || !self.offset.is_finite() || range <= 0.0 {
            return 0.0;
        }
        (self.offset / range).clamp(0.0, 1.0)
    }
}

/// Spring-smoothed scroll progress source.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    axis: ScrollAxis,
    spring: Spring,
    raw: f64,
    last_published: Option<f64>,
}

impl ScrollTracker {
    pub fn new(axis: ScrollAxis, config: SpringConfig) -> Self {
        Self {
            axis,
            spring: Spring::new(config, 0.0),
            raw: 0.0,
            last_published: None,
        }
    }

    pub fn axis(&self) -> ScrollAxis {
        self.axis
    }

    /// Latest unsmoothed progress.
    pub fn raw(&self) -> f64 {
        self.raw
    }

    /// Current smoothed progress.
    pub fn smoothed(&self) -> f64 {
        self.spring.position().clamp(0.0, 1.0)
    }

    /// Records a raw scroll sample. Publishing waits for the next frame.
    pub fn observe(&mut self, metrics: ScrollMetrics) -> f64 {
        self.raw = metrics.raw_progress();
        self.spring.set_target(self.raw);
        self.raw
    }

    /// Per-frame evaluation. Returns the value to publish, or `None` when it
    /// has not changed since the previous publication.
    pub fn tick(&mut self, dt: Duration) -> Option<f64> {
        let value = self.spring.step(dt).clamp(0.0, 1.0);
        if self.last_published == Some(value) {
            return None;
        }
        self.last_published = Some(value);
        Some(value)
    }

    /// Forgets all history, as when the road view mounts again.
    pub fn remount(&mut self) {
        self.raw = 0.0;
        self.spring.snap_to(0.0);
        self.last_published = None;
    }
}
