use folio_core::{
    preset_names, AudioContext, AudioContextState, AudioError, AudioFeedbackEngine,
    HapticEngine, HapticError, HapticPattern, ScheduledTone, TonePreset, VibrationDevice,
    Waveform,
};
use std::sync::{Arc, Mutex};

const EPS: f64 = 1e-9;

#[derive(Default)]
struct ContextLog {
    tones: Vec<ScheduledTone>,
    resumes: usize,
    closes: usize,
}

struct ScriptedContext {
    state: AudioContextState,
    resume_to: AudioContextState,
    clock: f64,
    log: Arc<Mutex<ContextLog>>,
}

impl AudioContext for ScriptedContext {
    fn state(&self) -> AudioContextState {
        self.state
    }

    fn current_time(&self) -> f64 {
        self.clock
    }

    fn resume(&mut self) {
        self.log.lock().unwrap().resumes += 1;
        self.state = self.resume_to;
    }

    fn schedule(&mut self, tone: ScheduledTone) -> Result<(), AudioError> {
        if self.state != AudioContextState::Running {
            return Err(AudioError::Suspended);
        }
        self.log.lock().unwrap().tones.push(tone);
        Ok(())
    }

    fn close(&mut self) {
        self.log.lock().unwrap().closes += 1;
        self.state = AudioContextState::Closed;
    }
}

fn engine(
    state: AudioContextState,
    resume_to: AudioContextState,
) -> (AudioFeedbackEngine, Arc<Mutex<ContextLog>>) {
    let log = Arc::new(Mutex::new(ContextLog::default()));
    let context = ScriptedContext {
        state,
        resume_to,
        clock: 2.0,
        log: Arc::clone(&log),
    };
    (AudioFeedbackEngine::new(Some(Box::new(context))), log)
}

#[test]
fn thud_envelope_matches_published_values() {
    let thud = TonePreset::by_name("thud").unwrap();
    assert_eq!(thud.waveform, Waveform::Sine);
    assert_eq!(thud.frequency_start, 100.0);
    assert_eq!(thud.frequency_end, Some(50.0));
    assert_eq!(thud.gain_peak, 0.3);
    assert!((thud.attack - 0.01).abs() < EPS);
    assert!((thud.decay - 0.1).abs() < EPS);
    assert!((thud.total_duration() - 0.21).abs() < EPS);
    assert!((thud.frequency_ramp_end().unwrap() - 0.11).abs() < EPS);
    assert!((thud.frequency_at(0.11) - 50.0).abs() < 1e-6);
    assert!((thud.gain_at(0.01) - 0.3).abs() < 1e-6);
}

#[test]
fn every_preset_is_resolvable_by_name() {
    for name in preset_names() {
        assert_eq!(TonePreset::resolve(name).name, name);
    }
    assert_eq!(TonePreset::resolve("nonexistent").name, "classic");
}

#[test]
fn scheduled_voice_spans_total_duration() {
    let (mut engine, log) = engine(AudioContextState::Running, AudioContextState::Running);
    engine.play("thud");

    let log = log.lock().unwrap();
    assert_eq!(log.tones.len(), 1);
    let tone = log.tones[0];
    assert_eq!(tone.preset.name, "thud");
    assert_eq!(tone.start_at, 2.0);
    assert!((tone.stop_at - 2.21).abs() < EPS);
}

#[test]
fn suspended_context_is_resumed_lazily() {
    let (mut engine, log) = engine(AudioContextState::Suspended, AudioContextState::Running);
    engine.play("glass");
    let log = log.lock().unwrap();
    assert_eq!(log.resumes, 1);
    assert_eq!(log.tones.len(), 1);
}

#[test]
fn context_that_stays_suspended_fails_silently() {
    let (mut engine, log) = engine(AudioContextState::Suspended, AudioContextState::Suspended);
    engine.play("classic");
    engine.on_user_gesture();
    assert_eq!(log.lock().unwrap().tones.len(), 0);
    assert_eq!(log.lock().unwrap().resumes, 2);
}

#[test]
fn missing_context_is_a_no_op() {
    let mut engine = AudioFeedbackEngine::new(None);
    assert!(!engine.is_available());
    engine.play("thud");
    engine.on_user_gesture();
    engine.shutdown();
}

#[test]
fn shutdown_closes_exactly_once() {
    let (mut engine, log) = engine(AudioContextState::Running, AudioContextState::Running);
    engine.shutdown();
    engine.shutdown();
    engine.play("thud");
    let log = log.lock().unwrap();
    assert_eq!(log.closes, 1);
    assert!(log.tones.is_empty());
}

struct DecliningMotor(Arc<Mutex<usize>>);

impl VibrationDevice for DecliningMotor {
    fn vibrate(&mut self, _pattern: &[u32]) -> Result<(), HapticError> {
        *self.0.lock().unwrap() += 1;
        Err(HapticError::Declined)
    }
}

#[test]
fn declined_vibration_is_swallowed() {
    let calls = Arc::new(Mutex::new(0));
    let mut haptics = HapticEngine::new(Some(Box::new(DecliningMotor(Arc::clone(&calls)))), 15);
    haptics.pulse();
    haptics.trigger(&HapticPattern::Sequence(vec![10, 30, 10]));
    assert_eq!(*calls.lock().unwrap(), 2);

    let mut unsupported = HapticEngine::new(None, 15);
    assert!(!unsupported.is_supported());
    unsupported.trigger(&HapticPattern::default());
}
