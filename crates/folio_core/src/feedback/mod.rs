//! Audio and haptic feedback engines.
//!
//! # Responsibility
//! - Synthesize short UI tones from parametric presets.
//! - Request vibration pulses on capable hosts.
//! - Degrade silently when the host lacks either capability.
//!
//! # Invariants
//! - No engine operation returns an error to its caller.
//! - At most one audio context exists per process; it is created by the host
//!   at startup and released on teardown.

pub mod audio;
pub mod haptic;
pub mod platform;
pub mod presets;
pub mod tone;
