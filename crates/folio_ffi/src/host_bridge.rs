//! Platform adapters backed by a host command queue.
//!
//! # Responsibility
//! - Implement the core platform traits without calling into the host.
//! - Queue every side effect as a [`HostCommand`] for the host to drain.
//! - Hold the capability state the host reports back.
//!
//! # Invariants
//! - Adapters never block and never panic; a poisoned lock is recovered.
//! - Lock order is session first, bridge second.

use crate::api::{HostCommand, ToneCommand};
use folio_core::{
    AudioContext, AudioContextState, AudioError, HapticError, MusicPlayer, Platform,
    ScheduledTone, VibrationDevice,
};
use std::sync::{Arc, Mutex, MutexGuard};

pub(crate) type SharedBridge = Arc<Mutex<HostBridge>>;

/// Capability state and pending commands shared with the adapters.
#[derive(Debug)]
pub(crate) struct HostBridge {
    commands: Vec<HostCommand>,
    audio_state: AudioContextState,
    audio_clock: f64,
    vibration_supported: bool,
}

impl HostBridge {
    /// Audio starts suspended until the host reports otherwise.
    pub(crate) fn shared(vibration_supported: bool) -> SharedBridge {
        Arc::new(Mutex::new(Self {
            commands: Vec::new(),
            audio_state: AudioContextState::Suspended,
            audio_clock: 0.0,
            vibration_supported,
        }))
    }

    pub(crate) fn drain(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }

    pub(crate) fn set_audio_state(&mut self, state: AudioContextState, clock: f64) {
        self.audio_state = state;
        if clock.is_finite() && clock >= 0.0 {
            self.audio_clock = clock;
        }
    }

    pub(crate) fn set_vibration_supported(&mut self, supported: bool) {
        self.vibration_supported = supported;
    }

    fn push(&mut self, command: HostCommand) {
        self.commands.push(command);
    }
}

pub(crate) fn lock_bridge(bridge: &SharedBridge) -> MutexGuard<'_, HostBridge> {
    bridge
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Builds the core platform over one bridge.
pub(crate) fn platform(bridge: &SharedBridge, audio_supported: bool) -> Platform {
    let audio: Option<Box<dyn AudioContext>> = if audio_supported {
        Some(Box::new(BridgeAudioContext(Arc::clone(bridge))))
    } else {
        None
    };
    Platform {
        audio,
        vibration: Some(Box::new(BridgeVibration(Arc::clone(bridge)))),
        music: Box::new(BridgeMusicPlayer(Arc::clone(bridge))),
    }
}

struct BridgeAudioContext(SharedBridge);

impl AudioContext for BridgeAudioContext {
    fn state(&self) -> AudioContextState {
        lock_bridge(&self.0).audio_state
    }

    fn current_time(&self) -> f64 {
        lock_bridge(&self.0).audio_clock
    }

    fn resume(&mut self) {
        lock_bridge(&self.0).push(HostCommand::ResumeAudioContext);
    }

    fn schedule(&mut self, tone: ScheduledTone) -> Result<(), AudioError> {
        let mut bridge = lock_bridge(&self.0);
        if bridge.audio_state == AudioContextState::Closed {
            return Err(AudioError::Closed);
        }
        bridge.push(HostCommand::PlayTone {
            tone: ToneCommand::from(tone),
        });
        Ok(())
    }

    fn close(&mut self) {
        let mut bridge = lock_bridge(&self.0);
        bridge.audio_state = AudioContextState::Closed;
        bridge.push(HostCommand::CloseAudioContext);
    }
}

struct BridgeVibration(SharedBridge);

impl VibrationDevice for BridgeVibration {
    fn vibrate(&mut self, pattern: &[u32]) -> Result<(), HapticError> {
        let mut bridge = lock_bridge(&self.0);
        if !bridge.vibration_supported {
            return Err(HapticError::Unsupported);
        }
        bridge.push(HostCommand::Vibrate {
            pattern: pattern.to_vec(),
        });
        Ok(())
    }
}

struct BridgeMusicPlayer(SharedBridge);

impl MusicPlayer for BridgeMusicPlayer {
    fn set_source(&mut self, source: &str) {
        lock_bridge(&self.0).push(HostCommand::SetMusicSource {
            source: source.to_string(),
        });
    }

    fn set_volume(&mut self, volume: f32) {
        lock_bridge(&self.0).push(HostCommand::SetMusicVolume { volume });
    }

    fn request_play(&mut self) {
        lock_bridge(&self.0).push(HostCommand::PlayMusic);
    }

    fn pause(&mut self) {
        lock_bridge(&self.0).push(HostCommand::PauseMusic);
    }
}
