//! Named click-sound presets.

/// Oscillator waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl Waveform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Sawtooth => "sawtooth",
        }
    }
}

/// Silence after the decay before the generator is released.
pub const TONE_TAIL_SECONDS: f64 = 0.1;
/// Peak gain used when a preset leaves it unset.
pub const DEFAULT_GAIN_PEAK: f64 = 0.15;
/// Exponential ramps cannot reach zero; decay ends on this floor.
pub const DEFAULT_GAIN_FLOOR: f64 = 0.001;

/// Preset used when a requested name is unknown.
pub const FALLBACK_PRESET: &str = "classic";
/// Preset played on selection clicks unless configured otherwise.
pub const DEFAULT_CLICK_PRESET: &str = "thud";

/// Parametric envelope for one synthesized tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TonePreset {
    pub name: &'static str,
    pub waveform: Waveform,
    pub frequency_start: f64,
    /// Reached by exponential ramp; `None` keeps the pitch static.
    pub frequency_end: Option<f64>,
    /// Explicit ramp length; defaults to attack + decay.
    pub frequency_duration: Option<f64>,
    pub gain_start: f64,
    pub gain_peak: f64,
    pub gain_end: f64,
    /// Linear ramp from `gain_start` to `gain_peak`.
    pub attack: f64,
    /// Exponential ramp from `gain_peak` to `gain_end`.
    pub decay: f64,
}

impl TonePreset {
    const fn base(name: &'static str, waveform: Waveform, frequency_start: f64) -> Self {
        Self {
            name,
            waveform,
            frequency_start,
            frequency_end: None,
            frequency_duration: None,
            gain_start: 0.0,
            gain_peak: DEFAULT_GAIN_PEAK,
            gain_end: DEFAULT_GAIN_FLOOR,
            attack: 0.0,
            decay: 0.0,
        }
    }

    const fn ramp_to(mut self, frequency_end: f64) -> Self {
        self.frequency_end = Some(frequency_end);
        self
    }

    const fn envelope(mut self, attack: f64, decay: f64, gain_peak: f64) -> Self {
        self.attack = attack;
        self.decay = decay;
        self.gain_peak = gain_peak;
        self
    }

    /// Looks up a preset by its exact name.
    pub fn by_name(name: &str) -> Option<Self> {
        PRESETS.iter().find(|preset| preset.name == name).copied()
    }

    /// Looks up a preset, falling back to [`FALLBACK_PRESET`].
    pub fn resolve(name: &str) -> Self {
        Self::by_name(name).unwrap_or(CLASSIC)
    }

    /// Attack plus decay, in seconds.
    pub fn envelope_duration(&self) -> f64 {
        self.attack + self.decay
    }

    /// Time from voice start until the generator is released.
    pub fn total_duration(&self) -> f64 {
        self.envelope_duration() + TONE_TAIL_SECONDS
    }

    /// Time at which `frequency_end` is reached, if the pitch moves at all.
    pub fn frequency_ramp_end(&self) -> Option<f64> {
        self.frequency_end?;
        Some(self.frequency_duration.unwrap_or(self.envelope_duration()))
    }
}

const CLASSIC: TonePreset = TonePreset {
    frequency_duration: Some(0.1),
    ..TonePreset::base("classic", Waveform::Sine, 800.0)
        .ramp_to(400.0)
        .envelope(0.01, 0.1, 0.15)
};

/// Every built-in preset.
pub const PRESETS: [TonePreset; 10] = [
    CLASSIC,
    TonePreset::base("mechanical", Waveform::Square, 300.0)
        .ramp_to(100.0)
        .envelope(0.005, 0.05, 0.05),
    TonePreset::base("softBubble", Waveform::Sine, 600.0)
        .ramp_to(200.0)
        .envelope(0.02, 0.2, 0.1),
    TonePreset::base("highTech", Waveform::Sine, 1200.0)
        .ramp_to(2000.0)
        .envelope(0.005, 0.05, 0.08),
    TonePreset::base("woodblock", Waveform::Triangle, 800.0)
        .ramp_to(800.0)
        .envelope(0.001, 0.08, 0.2),
    TonePreset::base("retroSelect", Waveform::Sawtooth, 150.0)
        .ramp_to(300.0)
        .envelope(0.01, 0.15, 0.05),
    TonePreset::base("glass", Waveform::Sine, 2000.0).envelope(0.001, 0.1, 0.05),
    TonePreset::base("thud", Waveform::Sine, 100.0)
        .ramp_to(50.0)
        .envelope(0.01, 0.1, 0.3),
    TonePreset::base("cursor", Waveform::Sine, 900.0)
        .ramp_to(900.0)
        .envelope(0.002, 0.03, 0.1),
    TonePreset::base("subtle", Waveform::Sine, 400.0)
        .ramp_to(200.0)
        .envelope(0.01, 0.05, 0.05),
];

/// Names of every built-in preset, in table order.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|preset| preset.name)
}
