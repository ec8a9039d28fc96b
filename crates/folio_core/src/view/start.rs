//! Start screen shown before onboarding completes.
//!
//! # Invariants
//! - Phases only move forward: `Idle → Exiting → Done`.
//! - Completion fires exactly once, [`EXIT_DELAY`] after the enter gesture.

use crate::content::Profile;
use std::time::Duration;

/// Time between the enter gesture and onboarding completion.
pub const EXIT_DELAY: Duration = Duration::from_millis(800);
pub const ENTER_LABEL: &str = "Enter";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPhase {
    Idle,
    /// Ripple animation running; `elapsed` since the gesture.
    Exiting { elapsed: Duration },
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartScreen {
    phase: StartPhase,
}

impl Default for StartScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl StartScreen {
    pub fn new() -> Self {
        Self {
            phase: StartPhase::Idle,
        }
    }

    pub fn phase(&self) -> StartPhase {
        self.phase
    }

    /// Whether the start screen still covers the site.
    pub fn is_visible(&self) -> bool {
        self.phase != StartPhase::Done
    }

    /// Enter gesture. Returns `true` only for the first gesture.
    pub fn enter(&mut self) -> bool {
        if self.phase != StartPhase::Idle {
            return false;
        }
        self.phase = StartPhase::Exiting {
            elapsed: Duration::ZERO,
        };
        true
    }

    /// Advances the exit timer. Returns `true` on the tick that completes it.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let StartPhase::Exiting { elapsed } = self.phase else {
            return false;
        };
        let elapsed = elapsed.saturating_add(dt);
        if elapsed >= EXIT_DELAY {
            self.phase = StartPhase::Done;
            true
        } else {
            self.phase = StartPhase::Exiting { elapsed };
            false
        }
    }
}

/// Text shown on the start screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartScreenView {
    pub title: String,
    pub tagline: String,
    pub enter_label: &'static str,
    pub exiting: bool,
}

impl StartScreenView {
    /// `None` once the screen is done.
    pub fn project(screen: &StartScreen, profile: &Profile) -> Option<Self> {
        if !screen.is_visible() {
            return None;
        }
        Some(Self {
            title: profile.name.to_uppercase(),
            tagline: profile.tagline.clone(),
            enter_label: ENTER_LABEL,
            exiting: matches!(screen.phase(), StartPhase::Exiting { .. }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{StartPhase, StartScreen};
    use std::time::Duration;

    #[test]
    fn completes_after_exit_delay_once() {
        let mut screen = StartScreen::new();
        assert!(!screen.tick(Duration::from_secs(5)));
        assert!(screen.enter());
        assert!(!screen.enter());
        assert!(!screen.tick(Duration::from_millis(500)));
        assert!(screen.is_visible());
        assert!(screen.tick(Duration::from_millis(300)));
        assert_eq!(screen.phase(), StartPhase::Done);
        assert!(!screen.tick(Duration::from_millis(16)));
        assert!(!screen.enter());
    }
}
