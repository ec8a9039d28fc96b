//! Continuous motion primitives.
//!
//! # Responsibility
//! - Integrate damped springs at the host frame cadence.
//! - Normalize and smooth scroll offsets into progress values.

pub mod scroll;
pub mod spring;
