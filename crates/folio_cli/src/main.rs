//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `folio_core` linkage.
//! - Walk one headless session and print its frames deterministically.

use folio_core::{
    ContentStore, FolioApp, FolioConfig, MusicPlayer, Platform, SceneFrame, SceneRenderer,
    ScrollMetrics, UiEvent,
};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);
const PRINT_EVERY: usize = 30;

/// Headless player whose requests always succeed on report.
struct SilentPlayer;

impl MusicPlayer for SilentPlayer {
    fn set_source(&mut self, _source: &str) {}
    fn set_volume(&mut self, _volume: f32) {}
    fn request_play(&mut self) {}
    fn pause(&mut self) {}
}

struct TextRenderer {
    frames: usize,
}

impl SceneRenderer for TextRenderer {
    fn render(&mut self, frame: &SceneFrame) {
        if self.frames % PRINT_EVERY == 0 {
            println!(
                "frame={} color={} progress={:.3} blob=({:.2},{:.2},{:.2})",
                self.frames,
                frame.color.to_hex(),
                frame.scroll_progress,
                frame.blob_position.x,
                frame.blob_position.y,
                frame.blob_position.z
            );
        }
        self.frames += 1;
    }
}

fn main() -> ExitCode {
    println!("folio_core ping={}", folio_core::ping());
    println!("folio_core version={}", folio_core::core_version());

    let store = match ContentStore::builtin() {
        Ok(store) => Arc::new(store),
        Err(err) => {
            eprintln!("content error: {err}");
            return ExitCode::FAILURE;
        }
    };
    for record in store.iter() {
        println!(
            "item id={} kind={} theme={}",
            record.id,
            record.kind.label(),
            record.theme().as_str()
        );
    }

    let platform = Platform::headless(Box::new(SilentPlayer));
    let mut app = FolioApp::new(FolioConfig::default(), store, platform, true);
    app.start();
    let mut renderer = TextRenderer { frames: 0 };

    let script = [
        UiEvent::MusicPlayResult(Ok(())),
        UiEvent::EnterSite,
        UiEvent::Scroll(ScrollMetrics::new(500.0, 1500.0, 500.0)),
        UiEvent::SelectItem("proj-stock".to_string()),
        UiEvent::CloseDetail,
    ];
    for event in script {
        println!("event={event:?}");
        if let Err(err) = app.handle(event) {
            eprintln!("event rejected: {err}");
            return ExitCode::FAILURE;
        }
        for _ in 0..PRINT_EVERY * 2 {
            app.render_frame(FRAME, &mut renderer);
        }
    }

    let state = app.state();
    println!(
        "final mode={} onboarded={} music={}",
        state.navigation_mode.label(),
        state.onboarded,
        app.music_state().as_str()
    );
    app.shutdown();
    ExitCode::SUCCESS
}
