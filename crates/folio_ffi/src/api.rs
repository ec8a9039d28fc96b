//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the single process-wide portfolio session.
//! - Hand platform side effects to the host as drained [`HostCommand`]s.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every session call fails with a message when no session is running.
//! - Lock order is session first, bridge second.

use crate::host_bridge::{lock_bridge, platform, HostBridge, SharedBridge};
use folio_core::view::detail::{DetailFact, DetailView};
use folio_core::view::NavigationRender;
use folio_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    init_session_logging, ping as ping_inner, AudioContextState, ContentStore, FolioApp,
    FolioConfig, GestureKind, NavigationMode, PlaybackError, ScheduledTone, ScrollMetrics,
    SelectionError, Snapshot, TonePreset, UiEvent,
};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use std::time::Duration;

/// Upper bound for [`render_preset`] sample rates.
const RENDER_SAMPLE_RATE_MAX: u32 = 192_000;
/// Longest frame step accepted by [`tick_frame`].
const FRAME_STEP_MAX_MS: f64 = 250.0;
const NO_SESSION: &str = "session not started";

static SESSION: OnceLock<Mutex<Option<Session>>> = OnceLock::new();

struct Session {
    app: FolioApp,
    bridge: SharedBridge,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One tone voice the host must synthesize.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneCommand {
    pub preset: String,
    /// `sine|square|triangle|sawtooth`.
    pub waveform: String,
    pub frequency_start: f64,
    pub frequency_end: Option<f64>,
    /// Seconds after `start_at` at which `frequency_end` is reached.
    pub frequency_ramp_end: Option<f64>,
    pub gain_start: f64,
    pub gain_peak: f64,
    pub gain_end: f64,
    pub attack: f64,
    pub decay: f64,
    /// Audio context time in seconds, as last reported by the host.
    pub start_at: f64,
    pub stop_at: f64,
}

impl From<ScheduledTone> for ToneCommand {
    fn from(tone: ScheduledTone) -> Self {
        let preset = tone.preset;
        Self {
            preset: preset.name.to_string(),
            waveform: preset.waveform.as_str().to_string(),
            frequency_start: preset.frequency_start,
            frequency_end: preset.frequency_end,
            frequency_ramp_end: preset.frequency_ramp_end(),
            gain_start: preset.gain_start,
            gain_peak: preset.gain_peak,
            gain_end: preset.gain_end,
            attack: preset.attack,
            decay: preset.decay,
            start_at: tone.start_at,
            stop_at: tone.stop_at,
        }
    }
}

/// Side effect queued by the core for the host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    /// Track to loop; always precedes the first [`HostCommand::PlayMusic`].
    SetMusicSource { source: String },
    SetMusicVolume { volume: f32 },
    /// Host answers with [`report_music_play_result`].
    PlayMusic,
    PauseMusic,
    /// Host answers with [`report_audio_context_state`].
    ResumeAudioContext,
    CloseAudioContext,
    PlayTone { tone: ToneCommand },
    Vibrate { pattern: Vec<u32> },
}

/// One navigation entry, flattened across road, overview and list.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationItem {
    pub id: String,
    /// Content kind label, or `SECTION_HEADER` for road anchors.
    pub kind: String,
    pub title: String,
    pub subtitle: String,
    pub short_description: String,
    /// Two-digit number; `None` for headers on the road.
    pub ordinal: Option<String>,
    pub selectable: bool,
    pub color_theme: String,
    pub year: Option<String>,
    pub client: Option<String>,
    /// Road icon or list badge name.
    pub decoration: Option<String>,
    pub delay_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

/// Open detail presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPayload {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub facts: Vec<LabeledValue>,
    pub description: Option<String>,
    pub bullets: Vec<String>,
    pub stats: Vec<LabeledValue>,
    /// `label` is the button caption, `value` the URL.
    pub links: Vec<LabeledValue>,
    pub monogram: String,
    pub accent_color: String,
    pub back_label: String,
}

/// Flattened render state of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// `ROAD|OVERVIEW|LIST`.
    pub navigation_mode: String,
    pub active_item: Option<String>,
    pub scroll_progress: f64,
    pub music_enabled: bool,
    pub onboarded: bool,
    /// `#rrggbb`.
    pub background_color: String,
    pub scroll_axis: String,
    pub navigation_items: Vec<NavigationItem>,
    pub overlay_visible: bool,
    pub overlay_hint: Option<String>,
    pub music_toggle_label: Option<String>,
    pub detail: Option<DetailPayload>,
    pub start_screen_visible: bool,
    pub start_screen_exiting: bool,
    pub cursor_enabled: bool,
    pub music_state: String,
    pub armed_listeners: u32,
}

/// Generic response envelope for session commands.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionResponse {
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    /// State after the command; `None` when no session is running.
    pub snapshot: Option<SessionSnapshot>,
}

impl SessionResponse {
    fn success(message: impl Into<String>, snapshot: SessionSnapshot) -> Self {
        Self {
            ok: true,
            message: message.into(),
            snapshot: Some(snapshot),
        }
    }

    fn failure(message: impl Into<String>, snapshot: Option<SessionSnapshot>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            snapshot,
        }
    }
}

/// Per-frame scene values for the 3D background.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResponse {
    pub ok: bool,
    pub message: String,
    pub color: String,
    pub scroll_progress: f64,
    pub blob_x: f64,
    pub blob_y: f64,
    pub blob_z: f64,
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub cursor: Option<CursorPayload>,
    pub onboarded: bool,
}

impl FrameResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            color: String::new(),
            scroll_progress: 0.0,
            blob_x: 0.0,
            blob_y: 0.0,
            blob_z: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            cursor: None,
            onboarded: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CursorPayload {
    pub ring_x: f64,
    pub ring_y: f64,
    pub dot_x: f64,
    pub dot_y: f64,
    pub hovered: bool,
}

/// Starts a new session, replacing and shutting down any running one.
///
/// Configuration is read from `FOLIO_CONFIG` and `FOLIO_*` variables.
///
/// Input semantics:
/// - `log_dir`: absolute directory for rolling logs at the configured level;
///   `None` leaves logging to [`init_logging`].
///
/// # FFI contract
/// - Sync call; reads the optional config file.
/// - Never panics; configuration errors return `ok=false`.
/// - Logging setup failures are reported in `message` and do not block the
///   session.
/// - Queues the initial music commands; drain them right after.
#[flutter_rust_bridge::frb(sync)]
pub fn session_start(
    audio_supported: bool,
    vibration_supported: bool,
    touch_capable: bool,
    log_dir: Option<String>,
) -> SessionResponse {
    let config = match FolioConfig::load() {
        Ok(config) => config,
        Err(err) => return SessionResponse::failure(format!("session_start failed: {err}"), None),
    };
    let logging_error = log_dir
        .as_deref()
        .map(str::trim)
        .filter(|dir| !dir.is_empty())
        .and_then(|dir| init_session_logging(&config, dir).err());
    let store = match ContentStore::builtin() {
        Ok(store) => Arc::new(store),
        Err(err) => return SessionResponse::failure(format!("session_start failed: {err}"), None),
    };

    let bridge = HostBridge::shared(vibration_supported);
    let mut app = FolioApp::new(
        config,
        store,
        platform(&bridge, audio_supported),
        touch_capable,
    );
    app.start();
    let snapshot = flatten_snapshot(&app.snapshot());

    let mut slot = lock_session();
    if let Some(mut previous) = slot.take() {
        previous.app.shutdown();
        log::info!("event=session_replace module=ffi status=ok");
    }
    *slot = Some(Session { app, bridge });
    match logging_error {
        Some(err) => SessionResponse::success(
            format!("session started; logging unavailable: {err}"),
            snapshot,
        ),
        None => SessionResponse::success("session started", snapshot),
    }
}

/// Returns the current render state.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn session_snapshot() -> SessionResponse {
    with_session(|session| Ok(flatten_snapshot(&session.app.snapshot())))
}

/// Opens the detail view for `item_id`.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; unknown and non-selectable IDs return `ok=false` with the
///   unchanged state.
#[flutter_rust_bridge::frb(sync)]
pub fn select_item(item_id: String) -> SessionResponse {
    dispatch(UiEvent::SelectItem(item_id.trim().to_string()))
}

/// Closes the detail view and returns to the last navigation mode.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; a no-op when no detail is open.
#[flutter_rust_bridge::frb(sync)]
pub fn close_detail() -> SessionResponse {
    dispatch(UiEvent::CloseDetail)
}

/// Switches navigation mode.
///
/// Input semantics:
/// - `mode`: one of `road|overview|list` (case-insensitive).
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; unknown modes return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn set_navigation_mode(mode: String) -> SessionResponse {
    match NavigationMode::parse(&mode) {
        Some(mode) => dispatch(UiEvent::SetNavigationMode(mode)),
        None => reject(format!("unsupported navigation mode: {mode}")),
    }
}

/// Reports one scroll observation of the road container.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; ignored while the road is not visible.
#[flutter_rust_bridge::frb(sync)]
pub fn report_scroll(offset: f64, scroll_extent: f64, viewport_extent: f64) -> SessionResponse {
    dispatch(UiEvent::Scroll(ScrollMetrics::new(
        offset,
        scroll_extent,
        viewport_extent,
    )))
}

/// Reports the pointer position for the custom cursor.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; ignored on touch-capable sessions.
#[flutter_rust_bridge::frb(sync)]
pub fn report_pointer(x: f64, y: f64, over_interactive: bool) -> SessionResponse {
    dispatch(UiEvent::PointerMove {
        x,
        y,
        over_interactive,
    })
}

/// Advances animations by `dt_ms` and returns the scene frame.
///
/// # FFI contract
/// - Sync call; call once per display frame.
/// - Never panics; negative or non-finite steps count as zero and steps are
///   capped at 250 ms.
#[flutter_rust_bridge::frb(sync)]
pub fn tick_frame(dt_ms: f64) -> FrameResponse {
    let step = if dt_ms.is_finite() {
        dt_ms.clamp(0.0, FRAME_STEP_MAX_MS)
    } else {
        0.0
    };
    let dt = Duration::from_secs_f64(step / 1000.0);

    let mut slot = lock_session();
    let Some(session) = slot.as_mut() else {
        return FrameResponse::failure(NO_SESSION);
    };
    let frame = session.app.tick(dt);
    let cursor = session.app.cursor_frame().map(|cursor| CursorPayload {
        ring_x: cursor.ring_x,
        ring_y: cursor.ring_y,
        dot_x: cursor.dot_x,
        dot_y: cursor.dot_y,
        hovered: cursor.hovered,
    });
    FrameResponse {
        ok: true,
        message: String::new(),
        color: frame.color.to_hex(),
        scroll_progress: frame.scroll_progress,
        blob_x: frame.blob_position.x,
        blob_y: frame.blob_position.y,
        blob_z: frame.blob_position.z,
        rotation_x: frame.blob_rotation.0,
        rotation_y: frame.blob_rotation.1,
        cursor,
        onboarded: session.app.state().onboarded,
    }
}

/// Flips the desired music state from the chrome toggle.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; queues play or pause plus click feedback.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_music() -> SessionResponse {
    dispatch(UiEvent::ToggleMusic)
}

/// Dismisses the start screen.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; repeated calls are no-ops.
#[flutter_rust_bridge::frb(sync)]
pub fn enter_site() -> SessionResponse {
    dispatch(UiEvent::EnterSite)
}

/// Reports a document-level gesture with no other meaning.
///
/// Input semantics:
/// - `kind`: one of `click|touchstart|keydown`.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; unknown kinds return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn user_gesture(kind: String) -> SessionResponse {
    match GestureKind::parse(&kind) {
        Some(kind) => dispatch(UiEvent::Gesture(kind)),
        None => reject(format!("unsupported gesture kind: {kind}")),
    }
}

/// Reports the outcome of the last [`HostCommand::PlayMusic`].
///
/// Input semantics:
/// - `error`: `None` on success; `NotAllowedError` or `blocked` for autoplay
///   refusals; any other text marks the source unavailable.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; results without a pending request are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn report_music_play_result(error: Option<String>) -> SessionResponse {
    dispatch(UiEvent::MusicPlayResult(playback_result(error)))
}

/// Reports the host audio context state and clock.
///
/// Input semantics:
/// - `state`: one of `running|suspended|closed`.
/// - `current_time`: context clock in seconds.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn report_audio_context_state(state: String, current_time: f64) -> String {
    let Some(state) = parse_audio_state(&state) else {
        return format!("unsupported audio context state: {state}");
    };
    let slot = lock_session();
    match slot.as_ref() {
        Some(session) => {
            lock_bridge(&session.bridge).set_audio_state(state, current_time);
            String::new()
        }
        None => NO_SESSION.to_string(),
    }
}

/// Updates whether the host can vibrate.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn set_vibration_supported(supported: bool) -> String {
    let slot = lock_session();
    match slot.as_ref() {
        Some(session) => {
            lock_bridge(&session.bridge).set_vibration_supported(supported);
            String::new()
        }
        None => NO_SESSION.to_string(),
    }
}

/// Takes every queued host command in issue order.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; returns an empty list without a session.
#[flutter_rust_bridge::frb(sync)]
pub fn drain_host_commands() -> Vec<HostCommand> {
    let slot = lock_session();
    match slot.as_ref() {
        Some(session) => lock_bridge(&session.bridge).drain(),
        None => Vec::new(),
    }
}

/// Renders a preset offline to mono PCM samples.
///
/// Unknown preset names render `classic`.
///
/// # FFI contract
/// - Sync call; cost grows with `sample_rate`.
/// - Never panics; `sample_rate` is clamped to 1..=192000.
#[flutter_rust_bridge::frb(sync)]
pub fn render_preset(name: String, sample_rate: u32) -> Vec<f32> {
    TonePreset::resolve(name.trim()).render(sample_rate.clamp(1, RENDER_SAMPLE_RATE_MAX))
}

/// Tears the session down and releases the audio context.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; returns `ok=false` when no session is running.
/// - Commands queued during teardown are discarded with the session.
#[flutter_rust_bridge::frb(sync)]
pub fn session_shutdown() -> SessionResponse {
    let mut slot = lock_session();
    match slot.take() {
        Some(mut session) => {
            session.app.shutdown();
            log::info!("event=session_shutdown module=ffi status=ok");
            SessionResponse {
                ok: true,
                message: "session stopped".to_string(),
                snapshot: None,
            }
        }
        None => SessionResponse::failure(NO_SESSION, None),
    }
}

fn lock_session() -> MutexGuard<'static, Option<Session>> {
    SESSION
        .get_or_init(|| Mutex::new(None))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn with_session(
    operation: impl FnOnce(&mut Session) -> Result<SessionSnapshot, String>,
) -> SessionResponse {
    let mut slot = lock_session();
    let Some(session) = slot.as_mut() else {
        return SessionResponse::failure(NO_SESSION, None);
    };
    match operation(session) {
        Ok(snapshot) => SessionResponse::success("ok", snapshot),
        Err(message) => {
            SessionResponse::failure(message, Some(flatten_snapshot(&session.app.snapshot())))
        }
    }
}

fn dispatch(event: UiEvent) -> SessionResponse {
    with_session(|session| {
        session.app.handle(event).map_err(selection_message)?;
        Ok(flatten_snapshot(&session.app.snapshot()))
    })
}

fn reject(message: String) -> SessionResponse {
    with_session(|_| Err(message))
}

fn selection_message(err: SelectionError) -> String {
    format!("selection rejected: {err}")
}

fn playback_result(error: Option<String>) -> Result<(), PlaybackError> {
    match error.as_deref().map(str::trim) {
        None | Some("") => Ok(()),
        Some(reason)
            if reason.eq_ignore_ascii_case("blocked")
                || reason.eq_ignore_ascii_case("NotAllowedError") =>
        {
            Err(PlaybackError::Blocked)
        }
        Some(reason) => Err(PlaybackError::Unavailable(reason.to_string())),
    }
}

fn parse_audio_state(value: &str) -> Option<AudioContextState> {
    [
        AudioContextState::Running,
        AudioContextState::Suspended,
        AudioContextState::Closed,
    ]
    .into_iter()
    .find(|state| state.as_str().eq_ignore_ascii_case(value.trim()))
}

fn flatten_snapshot(snapshot: &Snapshot) -> SessionSnapshot {
    let state = &snapshot.state;
    SessionSnapshot {
        navigation_mode: state.navigation_mode.label().to_string(),
        active_item: state.active_item.clone(),
        scroll_progress: state.scroll_progress,
        music_enabled: state.music_enabled,
        onboarded: state.onboarded,
        background_color: snapshot.color.to_hex(),
        scroll_axis: snapshot.axis.as_str().to_string(),
        navigation_items: navigation_items(&snapshot.navigation),
        overlay_visible: snapshot.overlay.is_some(),
        overlay_hint: snapshot
            .overlay
            .as_ref()
            .and_then(|overlay| overlay.hint.map(str::to_string)),
        music_toggle_label: snapshot
            .overlay
            .as_ref()
            .map(|overlay| overlay.visualizer.toggle_label.to_string()),
        detail: snapshot.detail.as_ref().map(detail_payload),
        start_screen_visible: snapshot.start_screen.is_some(),
        start_screen_exiting: snapshot
            .start_screen
            .as_ref()
            .is_some_and(|screen| screen.exiting),
        cursor_enabled: snapshot.cursor.is_some(),
        music_state: snapshot.music_state.as_str().to_string(),
        armed_listeners: u32::try_from(snapshot.armed_listeners).unwrap_or(u32::MAX),
    }
}

fn navigation_items(render: &NavigationRender) -> Vec<NavigationItem> {
    use folio_core::view::road::RoadEntry;

    match render {
        NavigationRender::Suppressed => Vec::new(),
        NavigationRender::Road(road) => road
            .entries
            .iter()
            .map(|entry| match entry {
                RoadEntry::Header(header) => NavigationItem {
                    id: header.id.clone(),
                    kind: "SECTION_HEADER".to_string(),
                    title: header.title.clone(),
                    subtitle: String::new(),
                    short_description: String::new(),
                    ordinal: None,
                    selectable: false,
                    color_theme: header.color_theme.clone(),
                    year: None,
                    client: None,
                    decoration: header.accent_class.clone(),
                    delay_seconds: 0.0,
                },
                RoadEntry::Card(card) => NavigationItem {
                    id: card.id.clone(),
                    kind: card.kind.label().to_string(),
                    title: card.title.clone(),
                    subtitle: card.subtitle.clone(),
                    short_description: card.short_description.clone(),
                    ordinal: Some(card.ordinal.clone()),
                    selectable: true,
                    color_theme: String::new(),
                    year: None,
                    client: None,
                    decoration: Some(card.icon.as_str().to_string()),
                    delay_seconds: 0.0,
                },
            })
            .collect(),
        NavigationRender::Overview(overview) => overview
            .cards
            .iter()
            .map(|card| NavigationItem {
                id: card.id.clone(),
                kind: card.kind.label().to_string(),
                title: card.title.clone(),
                subtitle: card.subtitle.clone(),
                short_description: card.short_description.clone(),
                ordinal: Some(card.ordinal.clone()),
                selectable: card.selectable,
                color_theme: card.color_theme.clone(),
                year: None,
                client: None,
                decoration: None,
                delay_seconds: card.delay_seconds,
            })
            .collect(),
        NavigationRender::List(list) => list
            .rows
            .iter()
            .map(|row| NavigationItem {
                id: row.id.clone(),
                kind: row.kind.label().to_string(),
                title: row.title.clone(),
                subtitle: String::new(),
                short_description: String::new(),
                ordinal: None,
                selectable: true,
                color_theme: String::new(),
                year: Some(row.year.clone()),
                client: Some(row.client.clone()),
                decoration: Some(row.badge.as_str().to_string()),
                delay_seconds: row.delay_seconds,
            })
            .collect(),
    }
}

fn detail_payload(detail: &DetailView) -> DetailPayload {
    let facts = detail
        .facts
        .iter()
        .map(|fact| LabeledValue {
            label: fact.label().to_string(),
            value: match fact {
                DetailFact::Client(value) | DetailFact::Year(value) => value.clone(),
                DetailFact::Technologies(stack) => stack.join(", "),
            },
        })
        .collect();
    DetailPayload {
        id: detail.id.clone(),
        title: detail.title.clone(),
        subtitle: detail.subtitle.clone(),
        facts,
        description: detail.description.clone(),
        bullets: detail.bullets.clone(),
        stats: detail
            .stats
            .iter()
            .map(|stat| LabeledValue {
                label: stat.label.clone(),
                value: stat.value.clone(),
            })
            .collect(),
        links: detail
            .links
            .iter()
            .map(|link| LabeledValue {
                label: link.label().to_string(),
                value: link.url().to_string(),
            })
            .collect(),
        monogram: detail.monogram.clone(),
        accent_color: detail.accent.to_hex(),
        back_label: detail.back_label.to_string(),
    }
}
