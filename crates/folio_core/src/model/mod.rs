//! Portfolio content domain model.
//!
//! # Responsibility
//! - Define the immutable content record shared by every view.
//! - Resolve symbolic color themes into concrete colors.
//!
//! # Invariants
//! - Every record is identified by a stable, unique string key.
//! - Records are never mutated or deleted after startup.

pub mod content;
pub mod theme;
