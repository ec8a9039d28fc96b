//! Offline tone rendering.
//!
//! Reproduces the automation curves a host audio graph applies to a preset:
//! the pitch starts at `frequency_start` and, when an end frequency is set,
//! ramps exponentially to it; the gain ramps linearly to the peak over the
//! attack and then exponentially to the floor over the decay. Hosts without
//! a native oscillator graph can play the rendered PCM buffer instead.

use crate::feedback::presets::{TonePreset, Waveform};
use std::f64::consts::TAU;

/// Smallest value an exponential ramp may start from or target.
const MIN_RAMP_VALUE: f64 = 1e-6;

impl TonePreset {
    /// Oscillator frequency (Hz) `t` seconds after voice start.
    pub fn frequency_at(&self, t: f64) -> f64 {
        let (Some(end), Some(ramp_end)) = (self.frequency_end, self.frequency_ramp_end()) else {
            return self.frequency_start;
        };
        exponential_ramp(self.frequency_start, end, t, ramp_end)
    }

    /// Output gain `t` seconds after voice start. Zero once released.
    pub fn gain_at(&self, t: f64) -> f64 {
        if t < 0.0 || t >= self.total_duration() {
            return 0.0;
        }
        if t < self.attack {
            let progress = t / self.attack;
            return self.gain_start + (self.gain_peak - self.gain_start) * progress;
        }
        exponential_ramp(self.gain_peak, self.gain_end, t - self.attack, self.decay)
    }

    /// Renders the full voice, tail included, as mono `f32` samples.
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        if sample_rate == 0 {
            return Vec::new();
        }
        let rate = f64::from(sample_rate);
        let sample_count = (self.total_duration() * rate).round() as usize;
        let mut samples = Vec::with_capacity(sample_count);
        let mut phase = 0.0_f64;
        for index in 0..sample_count {
            let t = index as f64 / rate;
            let value = oscillator(self.waveform, phase) * self.gain_at(t);
            samples.push(value as f32);
            phase = (phase + self.frequency_at(t) / rate).fract();
        }
        samples
    }
}

/// Exponential approach from `from` to `to` over `duration`, holding `to`
/// afterwards.
fn exponential_ramp(from: f64, to: f64, t: f64, duration: f64) -> f64 {
    if t <= 0.0 {
        return from;
    }
    if duration <= 0.0 || t >= duration {
        return to;
    }
    let from = from.max(MIN_RAMP_VALUE);
    let to = to.max(MIN_RAMP_VALUE);
    from * (to / from).powf(t / duration)
}

/// One period of `waveform`, `phase` in [0, 1).
fn oscillator(waveform: Waveform, phase: f64) -> f64 {
    match waveform {
        Waveform::Sine => (TAU * phase).sin(),
        Waveform::Square => {
            if phase < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
        Waveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
        Waveform::Sawtooth => 2.0 * phase - 1.0,
    }
}
