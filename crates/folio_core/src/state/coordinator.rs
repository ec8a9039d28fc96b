//! View-state coordinator.
//!
//! # Responsibility
//! - Own navigation mode, active detail item, scroll progress, the desired
//!   music flag and the onboarding flag.
//! - Apply user commands and expose the derived background color.
//!
//! # Invariants
//! - `active_item`, when set, names a selectable record of the store.
//! - Navigation mode survives detail excursions unchanged.
//! - Rejected commands leave the state untouched.
//! - `onboarded` never returns to `false` within a session.

use crate::content::ContentStore;
use crate::model::content::{ContentId, ContentKind, ContentRecord};
use crate::model::theme::Rgb;
use crate::state::color::derive_color;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Alternate ways of browsing the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavigationMode {
    #[default]
    Road,
    Overview,
    List,
}

impl NavigationMode {
    pub const ALL: [NavigationMode; 3] = [Self::Road, Self::Overview, Self::List];

    /// Upper-case tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Road => "ROAD",
            Self::Overview => "OVERVIEW",
            Self::List => "LIST",
        }
    }

    /// Case-insensitive parse of a tab label.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(value.trim()))
    }
}

/// Complete mutable view state of one session.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub navigation_mode: NavigationMode,
    /// Weak reference into the content store.
    pub active_item: Option<ContentId>,
    /// Meaningful only on the road with no active item.
    pub scroll_progress: f64,
    /// Desired playback state; actual playback may lag behind it.
    pub music_enabled: bool,
    /// Whether the start screen has been dismissed.
    pub onboarded: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            navigation_mode: NavigationMode::Road,
            active_item: None,
            scroll_progress: 0.0,
            music_enabled: true,
            onboarded: false,
        }
    }
}

impl ViewState {
    /// Whether navigation views and chrome controls are hidden.
    pub fn is_detail_open(&self) -> bool {
        self.active_item.is_some()
    }

    /// Navigation mode currently rendered, if any.
    pub fn visible_mode(&self) -> Option<NavigationMode> {
        if self.is_detail_open() {
            None
        } else {
            Some(self.navigation_mode)
        }
    }
}

/// Rejected selection requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    UnknownItem(String),
    NotSelectable { id: String, kind: ContentKind },
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownItem(id) => write!(f, "content item not found: {id}"),
            Self::NotSelectable { id, kind } => {
                write!(f, "content item `{id}` of kind {} is not selectable", kind.label())
            }
        }
    }
}

impl Error for SelectionError {}

/// Derives the background color from state and the authoritative store.
///
/// An active id missing from the store is treated as no active item.
pub fn derive(state: &ViewState, store: &ContentStore) -> Rgb {
    let active_theme = state
        .active_item
        .as_deref()
        .and_then(|id| store.get(id))
        .map(ContentRecord::theme);
    derive_color(active_theme, state.scroll_progress)
}

/// Single writer of [`ViewState`].
#[derive(Debug, Clone)]
pub struct Coordinator {
    store: Arc<ContentStore>,
    state: ViewState,
}

impl Coordinator {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self {
            store,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Shared handle to the content store.
    pub fn store_handle(&self) -> Arc<ContentStore> {
        Arc::clone(&self.store)
    }

    /// Resolved active record.
    pub fn active_item(&self) -> Option<&ContentRecord> {
        self.state
            .active_item
            .as_deref()
            .and_then(|id| self.store.get(id))
    }

    /// Opens the detail view for a selectable record.
    ///
    /// # Errors
    /// - `UnknownItem` when `id` is not in the store.
    /// - `NotSelectable` for intro and section-header records.
    pub fn select_item(&mut self, id: &str) -> Result<(), SelectionError> {
        let Some(record) = self.store.get(id) else {
            warn!("event=select_item module=state status=rejected reason=unknown id={id}");
            return Err(SelectionError::UnknownItem(id.to_string()));
        };
        if !record.is_selectable() {
            warn!(
                "event=select_item module=state status=rejected reason=not_selectable id={} kind={}",
                id,
                record.kind.label()
            );
            return Err(SelectionError::NotSelectable {
                id: id.to_string(),
                kind: record.kind,
            });
        }
        self.state.active_item = Some(record.id.clone());
        debug!("event=select_item module=state status=ok id={id}");
        Ok(())
    }

    /// Clears the active item. Returns whether a detail view was open.
    pub fn close_detail(&mut self) -> bool {
        let closed = self.state.active_item.take().is_some();
        if closed {
            debug!(
                "event=close_detail module=state status=ok mode={}",
                self.state.navigation_mode.label()
            );
        }
        closed
    }

    /// Switches navigation mode. Returns whether the mode changed.
    ///
    /// Allowed while a detail item is open; the new mode shows once it
    /// closes.
    pub fn set_navigation_mode(&mut self, mode: NavigationMode) -> bool {
        if self.state.navigation_mode == mode {
            return false;
        }
        self.state.navigation_mode = mode;
        debug!(
            "event=set_navigation_mode module=state status=ok mode={} detail_open={}",
            mode.label(),
            self.state.is_detail_open()
        );
        true
    }

    /// Stores smoothed progress as given; the tracker guarantees [0, 1].
    pub fn report_scroll_progress(&mut self, progress: f64) {
        self.state.scroll_progress = progress;
    }

    /// Flips the desired music flag and returns the new value.
    pub fn toggle_music(&mut self) -> bool {
        self.state.music_enabled = !self.state.music_enabled;
        debug!(
            "event=toggle_music module=state status=ok enabled={}",
            self.state.music_enabled
        );
        self.state.music_enabled
    }

    /// Applies a playback outcome reported by the music lifecycle.
    pub(crate) fn set_music_enabled(&mut self, enabled: bool) {
        self.state.music_enabled = enabled;
    }

    /// Dismisses the start screen. Returns `true` only the first time.
    pub fn complete_onboarding(&mut self) -> bool {
        if self.state.onboarded {
            return false;
        }
        self.state.onboarded = true;
        debug!("event=complete_onboarding module=state status=ok");
        true
    }

    /// Current background color.
    pub fn background_color(&self) -> Rgb {
        derive(&self.state, &self.store)
    }
}
