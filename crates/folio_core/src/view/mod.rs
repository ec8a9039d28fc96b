//! Presentation models for navigation views and chrome.
//!
//! # Responsibility
//! - Project the content store and view state into host-renderable models.
//! - Keep every layout rule (filters, ordinals, stagger delays) in core.
//!
//! # Invariants
//! - Projections are pure: same state and store, same output.
//! - While a detail item is active every navigation projection is empty.

pub mod chrome;
pub mod cursor;
pub mod detail;
pub mod list;
pub mod overview;
pub mod road;
pub mod start;

use crate::content::ContentStore;
use crate::motion::scroll::ScrollAxis;
use crate::state::coordinator::{NavigationMode, ViewState};
use list::ListView;
use overview::OverviewView;
use road::RoadView;

/// Two-digit, one-based card ordinal (`0` → `"01"`).
pub fn ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Entrance animation delay for the item at `index`.
pub(crate) fn stagger(index: usize, step_seconds: f64) -> f64 {
    index as f64 * step_seconds
}

/// The navigation view that should be on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationRender {
    /// A detail item is open; no navigation view renders.
    Suppressed,
    Road(RoadView),
    Overview(OverviewView),
    List(ListView),
}

impl NavigationRender {
    /// Number of rendered records, decorative anchors included.
    pub fn item_count(&self) -> usize {
        match self {
            Self::Suppressed => 0,
            Self::Road(view) => view.entries.len(),
            Self::Overview(view) => view.cards.len(),
            Self::List(view) => view.rows.len(),
        }
    }

    pub fn mode(&self) -> Option<NavigationMode> {
        match self {
            Self::Suppressed => None,
            Self::Road(_) => Some(NavigationMode::Road),
            Self::Overview(_) => Some(NavigationMode::Overview),
            Self::List(_) => Some(NavigationMode::List),
        }
    }
}

/// Projects the active navigation view.
pub fn render_navigation(
    state: &ViewState,
    store: &ContentStore,
    axis: ScrollAxis,
) -> NavigationRender {
    match state.visible_mode() {
        None => NavigationRender::Suppressed,
        Some(NavigationMode::Road) => NavigationRender::Road(RoadView::project(store, axis)),
        Some(NavigationMode::Overview) => {
            NavigationRender::Overview(OverviewView::project(store))
        }
        Some(NavigationMode::List) => NavigationRender::List(ListView::project(store)),
    }
}
