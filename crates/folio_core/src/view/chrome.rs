//! Top-level overlay: logo, mode tabs, music toggle and social links.

use crate::content::{Profile, SocialLink};
use crate::motion::scroll::ScrollAxis;
use crate::state::coordinator::{NavigationMode, ViewState};

/// Per-bar animation offsets of the music visualizer, in seconds.
pub const VISUALIZER_BAR_DELAYS: [f64; 5] = [0.2, 0.5, 0.1, 0.4, 0.3];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTab {
    pub mode: NavigationMode,
    pub label: &'static str,
    pub active: bool,
}

/// Music toggle drawn as five equalizer bars.
#[derive(Debug, Clone, PartialEq)]
pub struct MusicVisualizer {
    /// Bars bounce iff music is desired on.
    pub animated: bool,
    /// Animation delay per bar; all zero while idle.
    pub bar_delays: [f64; 5],
    /// Accessible label of the toggle action.
    pub toggle_label: &'static str,
}

impl MusicVisualizer {
    pub fn project(music_enabled: bool) -> Self {
        if music_enabled {
            Self {
                animated: true,
                bar_delays: VISUALIZER_BAR_DELAYS,
                toggle_label: "Pause music",
            }
        } else {
            Self {
                animated: false,
                bar_delays: [0.0; 5],
                toggle_label: "Play music",
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Upper-case owner name; clicking it selects the road.
    pub logo_title: String,
    pub logo_caption: String,
    pub tabs: Vec<NavTab>,
    pub visualizer: MusicVisualizer,
    pub socials: Vec<SocialLink>,
    /// Shown only on the road.
    pub hint: Option<&'static str>,
}

impl Overlay {
    /// `None` while a detail item is open.
    pub fn project(state: &ViewState, profile: &Profile, axis: ScrollAxis) -> Option<Self> {
        let mode = state.visible_mode()?;
        let tabs = NavigationMode::ALL
            .into_iter()
            .map(|tab| NavTab {
                mode: tab,
                label: tab.label(),
                active: tab == mode,
            })
            .collect();
        Some(Self {
            logo_title: profile.name.to_uppercase(),
            logo_caption: profile.edition.clone(),
            tabs,
            visualizer: MusicVisualizer::project(state.music_enabled),
            socials: profile.socials.clone(),
            hint: (mode == NavigationMode::Road).then(|| road_hint(axis)),
        })
    }

    pub fn active_tab(&self) -> Option<NavigationMode> {
        self.tabs.iter().find(|tab| tab.active).map(|tab| tab.mode)
    }
}

/// Mode selected by clicking the logo.
pub const LOGO_TARGET: NavigationMode = NavigationMode::Road;

fn road_hint(axis: ScrollAxis) -> &'static str {
    match axis {
        ScrollAxis::Vertical => "Scroll vertically to navigate the path. Click markers for details.",
        ScrollAxis::Horizontal => {
            "Scroll horizontally to navigate the path. Click markers for details."
        }
    }
}
