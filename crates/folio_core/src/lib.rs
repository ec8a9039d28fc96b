//! Core logic for the Folio portfolio experience.
//! This crate is the single source of truth for view state and its
//! derived visuals, audio and haptics; hosts only render and report input.

pub mod app;
pub mod config;
pub mod content;
pub mod feedback;
pub mod logging;
pub mod model;
pub mod motion;
pub mod music;
pub mod scene;
pub mod state;
pub mod view;

pub use app::{FolioApp, Snapshot, UiEvent};
pub use config::{ConfigError, FolioConfig};
pub use content::{ContentError, ContentStore, Profile, SocialLink};
pub use feedback::audio::AudioFeedbackEngine;
pub use feedback::haptic::{HapticEngine, HapticPattern};
pub use feedback::platform::{
    AudioContext, AudioContextState, AudioError, HapticError, MusicPlayer, PlaybackError,
    Platform, ScheduledTone, VibrationDevice,
};
pub use feedback::presets::{preset_names, TonePreset, Waveform};
pub use logging::{init_logging, init_session_logging};
pub use model::content::{ContentId, ContentKind, ContentRecord, Stat};
pub use model::theme::{ColorTheme, Rgb};
pub use motion::scroll::{ScrollAxis, ScrollMetrics, ScrollTracker};
pub use motion::spring::{Spring, SpringConfig};
pub use music::{BackgroundMusic, GestureKind, MusicState};
pub use scene::{SceneFrame, SceneRenderer, Vec3};
pub use state::coordinator::{derive, Coordinator, NavigationMode, SelectionError, ViewState};
pub use view::NavigationRender;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
