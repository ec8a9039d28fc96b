//! Session shell.
//!
//! # Responsibility
//! - Compose the coordinator, scroll tracker, music lifecycle, feedback
//!   engines, start screen and cursor into one event-driven session.
//! - Route discrete UI events and per-frame ticks to those components.
//!
//! # Invariants
//! - Every user action counts as at most one gesture and issues at most one
//!   play/pause request.
//! - Mounting the road (from detail or another mode) resets scroll progress
//!   to 0.
//! - After `shutdown` the audio context is closed, no listener is armed and
//!   further events are ignored.

use crate::config::FolioConfig;
use crate::content::ContentStore;
use crate::feedback::audio::AudioFeedbackEngine;
use crate::feedback::haptic::HapticEngine;
use crate::feedback::platform::{PlaybackError, Platform};
use crate::model::theme::Rgb;
use crate::motion::scroll::{ScrollAxis, ScrollMetrics, ScrollTracker};
use crate::music::{BackgroundMusic, GestureKind, MusicState};
use crate::scene::{BlobMotion, SceneFrame, SceneRenderer};
use crate::state::coordinator::{Coordinator, NavigationMode, SelectionError, ViewState};
use crate::view::chrome::Overlay;
use crate::view::cursor::{CursorFollower, CursorFrame};
use crate::view::detail::DetailView;
use crate::view::start::{StartScreen, StartScreenView};
use crate::view::{render_navigation, NavigationRender};
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;

/// Discrete input reported by the host.
///
/// Clicks on cards, tabs, the back button and the enter button are reported
/// as their command only; the shell treats them as click gestures itself.
/// A click on the music toggle is reported as [`UiEvent::ToggleMusic`] only.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SelectItem(String),
    CloseDetail,
    SetNavigationMode(NavigationMode),
    Scroll(ScrollMetrics),
    /// Document-level click, touch or key press with no other meaning.
    Gesture(GestureKind),
    PointerMove {
        x: f64,
        y: f64,
        over_interactive: bool,
    },
    ToggleMusic,
    EnterSite,
    MusicPlayResult(Result<(), PlaybackError>),
}

impl UiEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::SelectItem(_) => "select_item",
            Self::CloseDetail => "close_detail",
            Self::SetNavigationMode(_) => "set_navigation_mode",
            Self::Scroll(_) => "scroll",
            Self::Gesture(_) => "gesture",
            Self::PointerMove { .. } => "pointer_move",
            Self::ToggleMusic => "toggle_music",
            Self::EnterSite => "enter_site",
            Self::MusicPlayResult(_) => "music_play_result",
        }
    }
}

/// Everything a host needs to render one state.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub state: ViewState,
    pub color: Rgb,
    pub axis: ScrollAxis,
    pub navigation: NavigationRender,
    pub overlay: Option<Overlay>,
    pub detail: Option<DetailView>,
    pub start_screen: Option<StartScreenView>,
    pub cursor: Option<CursorFrame>,
    pub music_state: MusicState,
    pub armed_listeners: usize,
}

/// One running portfolio session.
pub struct FolioApp {
    config: FolioConfig,
    axis: ScrollAxis,
    coordinator: Coordinator,
    scroll: ScrollTracker,
    music: BackgroundMusic,
    audio: AudioFeedbackEngine,
    haptics: HapticEngine,
    start_screen: StartScreen,
    cursor: CursorFollower,
    blob: BlobMotion,
    started: bool,
    shut_down: bool,
}

impl FolioApp {
    pub fn new(
        config: FolioConfig,
        store: Arc<ContentStore>,
        platform: Platform,
        touch_capable: bool,
    ) -> Self {
        let axis = config.axis();
        let Platform {
            audio,
            vibration,
            music,
        } = platform;
        Self {
            axis,
            coordinator: Coordinator::new(store),
            scroll: ScrollTracker::new(axis, config.scroll_spring()),
            music: BackgroundMusic::new(music, config.music_source.as_str(), config.music_volume),
            audio: AudioFeedbackEngine::new(audio),
            haptics: HapticEngine::new(vibration, config.haptic_ms),
            start_screen: StartScreen::new(),
            cursor: CursorFollower::new(touch_capable),
            blob: BlobMotion::new(),
            config,
            started: false,
            shut_down: false,
        }
    }

    /// Runs the load-time side effects: the automatic music attempt.
    pub fn start(&mut self) {
        if self.started || self.shut_down {
            return;
        }
        self.started = true;
        self.music.start();
        info!(
            "event=session_start module=app status=ok records={} axis={} click_preset={}",
            self.coordinator.store().len(),
            self.axis.as_str(),
            self.config.click_preset
        );
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        self.coordinator.state()
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    pub fn music_state(&self) -> MusicState {
        self.music.state()
    }

    pub fn armed_listener_count(&self) -> usize {
        self.music.armed_listener_count()
    }

    /// Current custom-cursor frame; `None` on touch hosts.
    pub fn cursor_frame(&self) -> Option<CursorFrame> {
        self.cursor.frame()
    }

    pub fn background_color(&self) -> Rgb {
        self.coordinator.background_color()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Applies one host event.
    ///
    /// # Errors
    /// - `SelectionError` when a selection names an unknown or decorative
    ///   record; state is left untouched.
    pub fn handle(&mut self, event: UiEvent) -> Result<(), SelectionError> {
        if self.shut_down {
            debug!(
                "event=ui_event module=app status=ignored reason=shut_down kind={}",
                event.name()
            );
            return Ok(());
        }

        match event {
            UiEvent::SelectItem(id) => {
                self.gesture(GestureKind::Click);
                self.coordinator.select_item(&id)?;
                self.click_feedback();
            }
            UiEvent::CloseDetail => {
                self.gesture(GestureKind::Click);
                if self.coordinator.close_detail()
                    && self.state().navigation_mode == NavigationMode::Road
                {
                    self.remount_road();
                }
            }
            UiEvent::SetNavigationMode(mode) => {
                self.gesture(GestureKind::Click);
                if self.coordinator.set_navigation_mode(mode)
                    && self.state().visible_mode() == Some(NavigationMode::Road)
                {
                    self.remount_road();
                }
            }
            UiEvent::Scroll(metrics) => {
                if self.state().visible_mode() == Some(NavigationMode::Road) {
                    self.scroll.observe(metrics);
                }
            }
            UiEvent::Gesture(kind) => self.gesture(kind),
            UiEvent::PointerMove {
                x,
                y,
                over_interactive,
            } => self.cursor.on_pointer_move(x, y, over_interactive),
            UiEvent::ToggleMusic => {
                self.audio.on_user_gesture();
                let enabled = self.coordinator.toggle_music();
                self.music.on_toggle(enabled);
                self.click_feedback();
            }
            UiEvent::EnterSite => {
                self.gesture(GestureKind::Click);
                if self.start_screen.enter() {
                    self.music.on_entry_gesture();
                    debug!("event=enter_site module=app status=exiting");
                }
            }
            UiEvent::MusicPlayResult(result) => {
                if let Some(enabled) = self.music.on_play_result(result) {
                    self.coordinator.set_music_enabled(enabled);
                }
            }
        }
        Ok(())
    }

    /// Advances timers and animations by one host frame.
    pub fn tick(&mut self, dt: Duration) -> SceneFrame {
        if self.start_screen.tick(dt) {
            self.coordinator.complete_onboarding();
            info!("event=onboarding module=app status=complete");
        }
        self.cursor.tick(dt);
        if self.state().visible_mode() == Some(NavigationMode::Road) {
            if let Some(progress) = self.scroll.tick(dt) {
                self.coordinator.report_scroll_progress(progress);
            }
        }
        let color = self.coordinator.background_color();
        let progress = self.state().scroll_progress;
        self.blob.frame(dt, color, progress)
    }

    /// Ticks and hands the frame to `renderer`.
    pub fn render_frame<R: SceneRenderer + ?Sized>(&mut self, dt: Duration, renderer: &mut R) {
        let frame = self.tick(dt);
        renderer.render(&frame);
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = self.coordinator.state().clone();
        let store = self.coordinator.store();
        Snapshot {
            color: self.coordinator.background_color(),
            axis: self.axis,
            navigation: render_navigation(&state, store, self.axis),
            overlay: Overlay::project(&state, store.profile(), self.axis),
            detail: self.coordinator.active_item().map(DetailView::project),
            start_screen: StartScreenView::project(&self.start_screen, store.profile()),
            cursor: self.cursor_frame(),
            music_state: self.music.state(),
            armed_listeners: self.music.armed_listener_count(),
            state,
        }
    }

    /// Releases the audio context and disarms listeners. Idempotent.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.music.shutdown();
        self.audio.shutdown();
        info!("event=session_shutdown module=app status=ok");
    }

    fn gesture(&mut self, kind: GestureKind) {
        self.audio.on_user_gesture();
        self.music.on_gesture(kind);
    }

    fn click_feedback(&mut self) {
        self.audio.play(&self.config.click_preset);
        self.haptics.pulse();
    }

    fn remount_road(&mut self) {
        self.scroll.remount();
        self.coordinator.report_scroll_progress(0.0);
        debug!("event=road_mount module=app status=ok");
    }
}

impl Drop for FolioApp {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::{FolioApp, UiEvent};
    use crate::config::FolioConfig;
    use crate::content::ContentStore;
    use crate::feedback::platform::{MusicPlayer, Platform};
    use crate::motion::scroll::ScrollMetrics;
    use crate::state::coordinator::NavigationMode;
    use std::sync::Arc;
    use std::time::Duration;

    struct SilentPlayer;

    impl MusicPlayer for SilentPlayer {
        fn set_source(&mut self, _source: &str) {}
        fn set_volume(&mut self, _volume: f32) {}
        fn request_play(&mut self) {}
        fn pause(&mut self) {}
    }

    fn app() -> FolioApp {
        let store = Arc::new(ContentStore::builtin().expect("builtin content"));
        FolioApp::new(
            FolioConfig::default(),
            store,
            Platform::headless(Box::new(SilentPlayer)),
            false,
        )
    }

    #[test]
    fn returning_to_road_resets_progress() {
        let mut app = app();
        app.handle(UiEvent::Scroll(ScrollMetrics::new(500.0, 1000.0, 500.0)))
            .expect("scroll");
        for _ in 0..120 {
            app.tick(Duration::from_millis(16));
        }
        assert!(app.state().scroll_progress > 0.9);

        app.handle(UiEvent::SelectItem("proj-stock".to_string()))
            .expect("selectable");
        app.handle(UiEvent::CloseDetail).expect("close");
        assert_eq!(app.state().scroll_progress, 0.0);
        assert_eq!(app.tick(Duration::from_millis(16)).scroll_progress, 0.0);
    }

    #[test]
    fn scroll_is_ignored_off_road() {
        let mut app = app();
        app.handle(UiEvent::SetNavigationMode(NavigationMode::List))
            .expect("mode");
        app.handle(UiEvent::Scroll(ScrollMetrics::new(500.0, 1000.0, 500.0)))
            .expect("scroll");
        app.tick(Duration::from_millis(16));
        assert_eq!(app.state().scroll_progress, 0.0);
    }

    #[test]
    fn cursor_frame_follows_pointer_on_mouse_hosts() {
        let mut app = app();
        app.handle(UiEvent::PointerMove {
            x: 120.0,
            y: 80.0,
            over_interactive: true,
        })
        .expect("pointer");
        for _ in 0..200 {
            app.tick(Duration::from_millis(16));
        }
        let frame = app.cursor_frame().expect("cursor enabled");
        assert_eq!((frame.dot_x, frame.dot_y), (120.0, 80.0));
        assert!((frame.ring_x - 120.0).abs() < 0.5);
        assert!(frame.hovered);

        let touch = FolioApp::new(
            FolioConfig::default(),
            Arc::new(ContentStore::builtin().expect("builtin content")),
            Platform::headless(Box::new(SilentPlayer)),
            true,
        );
        assert!(touch.cursor_frame().is_none());
    }

    #[test]
    fn events_after_shutdown_are_ignored() {
        let mut app = app();
        app.shutdown();
        app.handle(UiEvent::SelectItem("about".to_string()))
            .expect("ignored, not rejected");
        assert_eq!(app.state().active_item, None);
    }
}
