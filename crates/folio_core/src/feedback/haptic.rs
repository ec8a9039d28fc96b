//! Vibration feedback.

use crate::feedback::platform::VibrationDevice;
use log::debug;

/// Pulse length used when no pattern is given.
pub const DEFAULT_PULSE_MS: u32 = 10;

/// Vibration request: one pulse or alternating vibrate/pause durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HapticPattern {
    Pulse(u32),
    Sequence(Vec<u32>),
}

impl HapticPattern {
    /// Flattened millisecond durations.
    pub fn durations(&self) -> Vec<u32> {
        match self {
            Self::Pulse(ms) => vec![*ms],
            Self::Sequence(steps) => steps.clone(),
        }
    }
}

impl Default for HapticPattern {
    fn default() -> Self {
        Self::Pulse(DEFAULT_PULSE_MS)
    }
}

/// Stateless wrapper that never lets a vibration failure escape.
pub struct HapticEngine {
    device: Option<Box<dyn VibrationDevice>>,
    pulse_ms: u32,
}

impl HapticEngine {
    pub fn new(device: Option<Box<dyn VibrationDevice>>, pulse_ms: u32) -> Self {
        Self { device, pulse_ms }
    }

    pub fn is_supported(&self) -> bool {
        self.device.is_some()
    }

    /// Short confirmation pulse of the configured length.
    pub fn pulse(&mut self) {
        self.trigger(&HapticPattern::Pulse(self.pulse_ms));
    }

    pub fn trigger(&mut self, pattern: &HapticPattern) {
        let durations = pattern.durations();
        if durations.is_empty() || durations.iter().all(|ms| *ms == 0) {
            return;
        }
        let Some(device) = self.device.as_mut() else {
            debug!("event=haptic_trigger module=feedback status=unsupported");
            return;
        };
        if let Err(err) = device.vibrate(&durations) {
            debug!("event=haptic_trigger module=feedback status=error error={err}");
        }
    }
}
