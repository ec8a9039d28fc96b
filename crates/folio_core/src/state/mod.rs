//! View-state coordination.
//!
//! # Responsibility
//! - Own the single mutable view state of the session.
//! - Project that state into the background color.
//!
//! # Invariants
//! - Only explicit user commands mutate the state.
//! - An active detail item suppresses every navigation view.

pub mod color;
pub mod coordinator;
