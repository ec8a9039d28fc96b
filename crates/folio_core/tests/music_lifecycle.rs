use folio_core::{
    ContentStore, FolioApp, FolioConfig, GestureKind, MusicPlayer, MusicState, PlaybackError,
    Platform, UiEvent,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
enum PlayerCall {
    Source(String),
    Volume(f32),
    Play,
    Pause,
}

#[derive(Clone, Default)]
struct PlayerLog(Arc<Mutex<Vec<PlayerCall>>>);

impl PlayerLog {
    fn calls(&self) -> Vec<PlayerCall> {
        self.0.lock().unwrap().clone()
    }

    fn plays(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| **call == PlayerCall::Play)
            .count()
    }
}

struct RecordingPlayer(PlayerLog);

impl MusicPlayer for RecordingPlayer {
    fn set_source(&mut self, source: &str) {
        self.0 .0.lock().unwrap().push(PlayerCall::Source(source.to_string()));
    }

    fn set_volume(&mut self, volume: f32) {
        self.0 .0.lock().unwrap().push(PlayerCall::Volume(volume));
    }

    fn request_play(&mut self) {
        self.0 .0.lock().unwrap().push(PlayerCall::Play);
    }

    fn pause(&mut self) {
        self.0 .0.lock().unwrap().push(PlayerCall::Pause);
    }
}

fn started_app() -> (FolioApp, PlayerLog) {
    let log = PlayerLog::default();
    let mut app = FolioApp::new(
        FolioConfig::default(),
        Arc::new(ContentStore::builtin().unwrap()),
        Platform::headless(Box::new(RecordingPlayer(log.clone()))),
        false,
    );
    app.start();
    (app, log)
}

fn block_autoplay(app: &mut FolioApp) {
    app.handle(UiEvent::MusicPlayResult(Err(PlaybackError::Blocked)))
        .unwrap();
}

#[test]
fn autoplay_loads_configured_track_then_requests_play() {
    let (app, log) = started_app();
    assert_eq!(
        log.calls(),
        vec![
            PlayerCall::Source("background-music.mp3".to_string()),
            PlayerCall::Volume(0.4),
            PlayerCall::Play
        ]
    );
    assert_eq!(app.music_state(), MusicState::AttemptingAutoplay);
    assert!(app.state().music_enabled);
}

#[test]
fn blocked_autoplay_retries_once_on_next_gesture() {
    let (mut app, log) = started_app();
    block_autoplay(&mut app);
    assert!(!app.state().music_enabled);
    assert_eq!(app.music_state(), MusicState::Blocked);
    assert_eq!(app.armed_listener_count(), 3);

    app.handle(UiEvent::Gesture(GestureKind::Click)).unwrap();
    assert_eq!(log.plays(), 2);
    assert_eq!(app.armed_listener_count(), 0);

    app.handle(UiEvent::Gesture(GestureKind::Click)).unwrap();
    app.handle(UiEvent::Gesture(GestureKind::KeyDown)).unwrap();
    assert_eq!(log.plays(), 2);

    app.handle(UiEvent::MusicPlayResult(Ok(()))).unwrap();
    assert!(app.state().music_enabled);
    assert_eq!(app.music_state(), MusicState::Playing);
}

#[test]
fn failed_retry_still_tears_down_listeners() {
    let (mut app, log) = started_app();
    block_autoplay(&mut app);
    app.handle(UiEvent::Gesture(GestureKind::TouchStart)).unwrap();
    app.handle(UiEvent::MusicPlayResult(Err(PlaybackError::Blocked)))
        .unwrap();

    assert_eq!(app.armed_listener_count(), 0);
    assert!(!app.state().music_enabled);
    app.handle(UiEvent::Gesture(GestureKind::Click)).unwrap();
    assert_eq!(log.plays(), 2);
}

#[test]
fn selecting_a_card_counts_as_the_retry_gesture() {
    let (mut app, log) = started_app();
    block_autoplay(&mut app);
    app.handle(UiEvent::SelectItem("proj-candle".to_string()))
        .unwrap();
    assert_eq!(log.plays(), 2);
    assert_eq!(app.armed_listener_count(), 0);
}

#[test]
fn toggle_disarms_and_plays_synchronously() {
    let (mut app, log) = started_app();
    block_autoplay(&mut app);

    app.handle(UiEvent::ToggleMusic).unwrap();
    assert!(app.state().music_enabled);
    assert_eq!(app.armed_listener_count(), 0);
    assert_eq!(log.plays(), 2);
    assert_eq!(app.music_state(), MusicState::Requested);

    app.handle(UiEvent::Gesture(GestureKind::Click)).unwrap();
    assert_eq!(log.plays(), 2);

    app.handle(UiEvent::MusicPlayResult(Ok(()))).unwrap();
    assert_eq!(app.music_state(), MusicState::Playing);
}

#[test]
fn configured_music_source_reaches_the_player() {
    let log = PlayerLog::default();
    let config = FolioConfig {
        music_source: "assets/loop.ogg".to_string(),
        ..FolioConfig::default()
    };
    let mut app = FolioApp::new(
        config,
        Arc::new(ContentStore::builtin().unwrap()),
        Platform::headless(Box::new(RecordingPlayer(log.clone()))),
        false,
    );
    app.start();
    assert_eq!(
        log.calls()[0],
        PlayerCall::Source("assets/loop.ogg".to_string())
    );
}

#[test]
fn toggle_twice_pauses_then_plays() {
    let (mut app, log) = started_app();
    app.handle(UiEvent::MusicPlayResult(Ok(()))).unwrap();

    app.handle(UiEvent::ToggleMusic).unwrap();
    app.handle(UiEvent::ToggleMusic).unwrap();
    assert!(app.state().music_enabled);
    assert_eq!(
        log.calls()[3..].to_vec(),
        vec![PlayerCall::Pause, PlayerCall::Play]
    );
}

#[test]
fn late_autoplay_result_after_pause_is_ignored() {
    let (mut app, _log) = started_app();
    app.handle(UiEvent::ToggleMusic).unwrap();
    assert!(!app.state().music_enabled);

    app.handle(UiEvent::MusicPlayResult(Ok(()))).unwrap();
    assert!(!app.state().music_enabled);
    assert_eq!(app.music_state(), MusicState::Paused);
}

#[test]
fn enter_gesture_starts_music_exactly_once() {
    let log = PlayerLog::default();
    let mut app = FolioApp::new(
        FolioConfig::default(),
        Arc::new(ContentStore::builtin().unwrap()),
        Platform::headless(Box::new(RecordingPlayer(log.clone()))),
        false,
    );

    app.handle(UiEvent::EnterSite).unwrap();
    app.handle(UiEvent::EnterSite).unwrap();
    assert_eq!(log.plays(), 1);

    app.start();
    assert_eq!(log.plays(), 1);
}

#[test]
fn shutdown_disarms_pending_listeners() {
    let (mut app, log) = started_app();
    block_autoplay(&mut app);
    app.shutdown();
    assert_eq!(app.armed_listener_count(), 0);
    app.handle(UiEvent::Gesture(GestureKind::Click)).unwrap();
    assert_eq!(log.plays(), 1);
}
