//! Host capability contracts.
//!
//! The core never talks to audio hardware, vibration motors or media
//! elements directly. Hosts implement these traits and hand them over once,
//! bundled in a [`Platform`].

use crate::feedback::presets::TonePreset;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lifecycle state reported by the host audio context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioContextState {
    Running,
    /// Usually until the first user gesture.
    Suspended,
    Closed,
}

impl AudioContextState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Suspended => "suspended",
            Self::Closed => "closed",
        }
    }
}

/// One tone voice scheduled on the host context timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledTone {
    pub preset: TonePreset,
    /// Context time (seconds) at which the voice starts.
    pub start_at: f64,
    /// Context time (seconds) at which the generator is released.
    pub stop_at: f64,
}

/// Audio synthesis errors. Never surfaced past the feedback engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    Unavailable,
    Suspended,
    Closed,
    Rejected(String),
}

impl Display for AudioError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "audio context is unavailable"),
            Self::Suspended => write!(f, "audio context is suspended"),
            Self::Closed => write!(f, "audio context is closed"),
            Self::Rejected(reason) => write!(f, "audio context rejected voice: {reason}"),
        }
    }
}

impl Error for AudioError {}

/// Host audio-processing context.
pub trait AudioContext: Send {
    fn state(&self) -> AudioContextState;
    /// Current context clock in seconds.
    fn current_time(&self) -> f64;
    /// Fire-and-forget resume request; completion is observed via `state`.
    fn resume(&mut self);
    fn schedule(&mut self, tone: ScheduledTone) -> Result<(), AudioError>;
    fn close(&mut self);
}

/// Vibration errors. Never surfaced past the haptic engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HapticError {
    Unsupported,
    /// The host refused the request (for example a `false` return value).
    Declined,
}

impl Display for HapticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported => write!(f, "vibration is not supported"),
            Self::Declined => write!(f, "vibration request was declined"),
        }
    }
}

impl Error for HapticError {}

/// Host vibration capability.
pub trait VibrationDevice: Send {
    /// Alternating vibrate/pause durations in milliseconds.
    fn vibrate(&mut self, pattern: &[u32]) -> Result<(), HapticError>;
}

/// Background music playback errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Autoplay policy refused playback until a user gesture.
    Blocked,
    Unavailable(String),
}

impl Display for PlaybackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blocked => write!(f, "playback blocked by autoplay policy"),
            Self::Unavailable(reason) => write!(f, "playback unavailable: {reason}"),
        }
    }
}

impl Error for PlaybackError {}

/// Host media element playing the looping background track.
///
/// `request_play` is asynchronous on most hosts: the outcome is reported
/// later through `BackgroundMusic::on_play_result`.
pub trait MusicPlayer: Send {
    /// Points the element at the looping track, before the first play.
    fn set_source(&mut self, source: &str);
    fn set_volume(&mut self, volume: f32);
    fn request_play(&mut self);
    fn pause(&mut self);
}

/// Every host capability, created once at startup.
pub struct Platform {
    pub audio: Option<Box<dyn AudioContext>>,
    pub vibration: Option<Box<dyn VibrationDevice>>,
    pub music: Box<dyn MusicPlayer>,
}

impl Platform {
    /// Platform without audio synthesis or vibration.
    pub fn headless(music: Box<dyn MusicPlayer>) -> Self {
        Self {
            audio: None,
            vibration: None,
            music,
        }
    }
}
