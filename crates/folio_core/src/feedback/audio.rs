//! Click-sound engine over the host audio context.
//!
//! # Invariants
//! - `play` never fails: unavailable, closed or rejecting contexts are
//!   logged at debug level and otherwise ignored.
//! - A suspended context receives a resume request before each voice.
//! - The context is closed at most once, on `shutdown`.

use crate::feedback::platform::{AudioContext, AudioContextState, ScheduledTone};
use crate::feedback::presets::{TonePreset, FALLBACK_PRESET};
use log::debug;

/// Synthesizes preset tones on the single process-wide audio context.
pub struct AudioFeedbackEngine {
    context: Option<Box<dyn AudioContext>>,
}

impl AudioFeedbackEngine {
    pub fn new(context: Option<Box<dyn AudioContext>>) -> Self {
        if context.is_none() {
            debug!("event=audio_init module=feedback status=unavailable");
        }
        Self { context }
    }

    /// Whether a context was provided and has not been closed.
    pub fn is_available(&self) -> bool {
        self.context
            .as_ref()
            .is_some_and(|context| context.state() != AudioContextState::Closed)
    }

    /// Plays the named preset; unknown names fall back to `classic`.
    pub fn play(&mut self, preset_name: &str) {
        let preset = match TonePreset::by_name(preset_name) {
            Some(preset) => preset,
            None => {
                debug!(
                    "event=audio_play module=feedback status=fallback requested={} preset={}",
                    preset_name, FALLBACK_PRESET
                );
                TonePreset::resolve(FALLBACK_PRESET)
            }
        };
        self.play_preset(preset);
    }

    /// Plays an already-resolved preset.
    pub fn play_preset(&mut self, preset: TonePreset) {
        let Some(context) = self.context.as_mut() else {
            debug!(
                "event=audio_play module=feedback status=unavailable preset={}",
                preset.name
            );
            return;
        };

        match context.state() {
            AudioContextState::Closed => {
                debug!(
                    "event=audio_play module=feedback status=closed preset={}",
                    preset.name
                );
                return;
            }
            AudioContextState::Suspended => {
                debug!("event=audio_resume module=feedback status=requested reason=play");
                context.resume();
            }
            AudioContextState::Running => {}
        }

        let now = context.current_time();
        let tone = ScheduledTone {
            preset,
            start_at: now,
            stop_at: now + preset.total_duration(),
        };
        if let Err(err) = context.schedule(tone) {
            debug!(
                "event=audio_play module=feedback status=error preset={} error={}",
                preset.name, err
            );
        }
    }

    /// Resumes a suspended context after a user gesture.
    pub fn on_user_gesture(&mut self) {
        if let Some(context) = self.context.as_mut() {
            if context.state() == AudioContextState::Suspended {
                debug!("event=audio_resume module=feedback status=requested reason=gesture");
                context.resume();
            }
        }
    }

    /// Releases the context on application teardown.
    pub fn shutdown(&mut self) {
        if let Some(mut context) = self.context.take() {
            if context.state() != AudioContextState::Closed {
                context.close();
                debug!("event=audio_close module=feedback status=ok");
            }
        }
    }
}
