//! Background music lifecycle.
//!
//! # Responsibility
//! - Attempt autoplay once at startup and recover from policy blocks by
//!   retrying on the next user gesture.
//! - Translate explicit toggles into play/pause commands.
//!
//! # Invariants
//! - Gesture listeners are armed only after a blocked autoplay attempt and
//!   are disarmed on the first gesture, on toggle and on shutdown, whatever
//!   the outcome of the retry.
//! - Arming is idempotent: there is never more than one listener per
//!   gesture kind.
//! - At most one play request is issued per user action.
//!
//! States: `NotStarted → AttemptingAutoplay → {Playing | Blocked}`, with
//! toggles moving through `Requested` to `Playing`, or to `Paused`.

use crate::feedback::platform::{MusicPlayer, PlaybackError};
use log::{debug, info, warn};

/// Playback lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicState {
    NotStarted,
    AttemptingAutoplay,
    Playing,
    Blocked,
    /// User-requested play awaiting the host's result.
    Requested,
    Paused,
}

impl MusicState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::AttemptingAutoplay => "attempting_autoplay",
            Self::Playing => "playing",
            Self::Blocked => "blocked",
            Self::Requested => "requested",
            Self::Paused => "paused",
        }
    }
}

/// Document-level input that counts as a user gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Click,
    TouchStart,
    KeyDown,
}

impl GestureKind {
    pub const ALL: [GestureKind; 3] = [Self::Click, Self::TouchStart, Self::KeyDown];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::TouchStart => "touchstart",
            Self::KeyDown => "keydown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Origin of the play request whose outcome is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayAttempt {
    Autoplay,
    GestureRetry,
    Toggle,
    Entry,
}

impl PlayAttempt {
    fn as_str(self) -> &'static str {
        match self {
            Self::Autoplay => "autoplay",
            Self::GestureRetry => "gesture_retry",
            Self::Toggle => "toggle",
            Self::Entry => "entry",
        }
    }
}

/// Set of one-shot gesture listeners.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct GestureListeners {
    armed: Vec<GestureKind>,
}

impl GestureListeners {
    fn arm(&mut self) {
        for kind in GestureKind::ALL {
            if !self.armed.contains(&kind) {
                self.armed.push(kind);
            }
        }
    }

    fn disarm(&mut self) -> bool {
        let was_armed = !self.armed.is_empty();
        self.armed.clear();
        was_armed
    }

    fn listens_to(&self, kind: GestureKind) -> bool {
        self.armed.contains(&kind)
    }
}

/// Background music state machine over a host [`MusicPlayer`].
///
/// Methods that may change the desired playback flag return
/// `Some(new_flag)`; the caller forwards it to the coordinator.
pub struct BackgroundMusic {
    player: Box<dyn MusicPlayer>,
    source: String,
    volume: f32,
    state: MusicState,
    pending: Option<PlayAttempt>,
    listeners: GestureListeners,
    entry_trigger_used: bool,
    retries_issued: usize,
}

impl BackgroundMusic {
    pub fn new(player: Box<dyn MusicPlayer>, source: impl Into<String>, volume: f32) -> Self {
        Self {
            player,
            source: source.into(),
            volume: volume.clamp(0.0, 1.0),
            state: MusicState::NotStarted,
            pending: None,
            listeners: GestureListeners::default(),
            entry_trigger_used: false,
            retries_issued: 0,
        }
    }

    pub fn state(&self) -> MusicState {
        self.state
    }

    /// Number of gesture listeners currently armed.
    pub fn armed_listener_count(&self) -> usize {
        self.listeners.armed.len()
    }

    pub fn is_awaiting_result(&self) -> bool {
        self.pending.is_some()
    }

    /// Gesture retries issued over the session.
    pub fn retries_issued(&self) -> usize {
        self.retries_issued
    }

    /// Starts the automatic playback attempt. Only the first call acts.
    pub fn start(&mut self) {
        if self.state != MusicState::NotStarted {
            return;
        }
        self.load_track();
        self.state = MusicState::AttemptingAutoplay;
        self.issue_play(PlayAttempt::Autoplay);
    }

    /// Completion callback for the most recent play request.
    pub fn on_play_result(&mut self, result: Result<(), PlaybackError>) -> Option<bool> {
        let Some(attempt) = self.pending.take() else {
            debug!("event=music_play_result module=music status=ignored reason=no_pending");
            return None;
        };

        match result {
            Ok(()) => {
                self.state = MusicState::Playing;
                info!(
                    "event=music_play_result module=music status=ok attempt={}",
                    attempt.as_str()
                );
                Some(true)
            }
            Err(err) => {
                self.state = MusicState::Blocked;
                match attempt {
                    PlayAttempt::Autoplay => {
                        self.listeners.arm();
                        info!(
                            "event=music_autoplay module=music status=blocked error={} listeners={}",
                            err,
                            self.listeners.armed.len()
                        );
                    }
                    other => {
                        warn!(
                            "event=music_play_result module=music status=error attempt={} error={}",
                            other.as_str(),
                            err
                        );
                    }
                }
                Some(false)
            }
        }
    }

    /// Document-level gesture. Retries playback once if listeners are armed.
    ///
    /// Returns whether a retry was issued.
    pub fn on_gesture(&mut self, kind: GestureKind) -> bool {
        if !self.listeners.listens_to(kind) {
            return false;
        }
        self.listeners.disarm();
        debug!(
            "event=music_listeners module=music status=disarmed reason=gesture kind={}",
            kind.as_str()
        );
        if self.pending.is_some() || self.state == MusicState::Playing {
            return false;
        }
        self.retries_issued += 1;
        self.issue_play(PlayAttempt::GestureRetry);
        true
    }

    /// Start-screen gesture. May start music exactly once per session.
    ///
    /// Returns whether a play request was issued.
    pub fn on_entry_gesture(&mut self) -> bool {
        if self.entry_trigger_used {
            return false;
        }
        self.entry_trigger_used = true;
        if self.pending.is_some()
            || !matches!(self.state, MusicState::NotStarted | MusicState::Blocked)
        {
            return false;
        }
        if self.state == MusicState::NotStarted {
            self.load_track();
            self.state = MusicState::AttemptingAutoplay;
        }
        self.issue_play(PlayAttempt::Entry);
        true
    }

    /// Applies an explicit toggle. `enabled` is the coordinator's new flag.
    pub fn on_toggle(&mut self, enabled: bool) {
        if self.listeners.disarm() {
            debug!("event=music_listeners module=music status=disarmed reason=toggle");
        }
        if enabled {
            if self.state == MusicState::NotStarted {
                self.load_track();
            }
            self.state = MusicState::Requested;
            self.issue_play(PlayAttempt::Toggle);
        } else {
            self.pending = None;
            self.player.pause();
            self.state = MusicState::Paused;
            debug!("event=music_pause module=music status=ok");
        }
    }

    /// Tears down listeners on application teardown.
    pub fn shutdown(&mut self) {
        if self.listeners.disarm() {
            debug!("event=music_listeners module=music status=disarmed reason=shutdown");
        }
        self.pending = None;
    }

    fn load_track(&mut self) {
        self.player.set_source(&self.source);
        self.player.set_volume(self.volume);
    }

    fn issue_play(&mut self, attempt: PlayAttempt) {
        self.pending = Some(attempt);
        self.player.request_play();
        debug!(
            "event=music_play module=music status=requested attempt={}",
            attempt.as_str()
        );
    }
}
