use folio_core::{derive, ContentStore, Coordinator, NavigationMode, Rgb, ViewState};
use std::sync::Arc;

fn store() -> ContentStore {
    ContentStore::from_json(
        r#"{"items":[
            {"id":"b","type":"PROJECT","title":"Blue","colorTheme":"bg-blue-50"},
            {"id":"p","type":"PROJECT","title":"Purple","colorTheme":"purple"},
            {"id":"g","type":"EXPERIENCE","title":"Green","colorTheme":"bg-green-50"},
            {"id":"o","type":"ABOUT","title":"Orange","colorTheme":"bg-orange-50"},
            {"id":"r","type":"CONTACT","title":"Red","colorTheme":"red"},
            {"id":"s","type":"CONTACT","title":"Slate","colorTheme":"bg-slate-100"}
        ]}"#,
    )
    .unwrap()
}

fn hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

#[test]
fn scroll_buckets_cover_unit_interval() {
    let store = store();
    let mut state = ViewState::default();
    let samples = [
        (0.0, "#bfdbfe"),
        (0.15, "#bfdbfe"),
        (0.299, "#bfdbfe"),
        (0.3, "#e9d5ff"),
        (0.45, "#e9d5ff"),
        (0.599, "#e9d5ff"),
        (0.6, "#bbf7d0"),
        (0.85, "#bbf7d0"),
        (1.0, "#bbf7d0"),
    ];
    for (progress, expected) in samples {
        state.scroll_progress = progress;
        assert_eq!(hex(derive(&state, &store)), expected, "progress {progress}");
    }
}

#[test]
fn active_family_wins_over_progress() {
    let store = store();
    let expected = [
        ("b", "#93c5fd"),
        ("p", "#d8b4fe"),
        ("g", "#86efac"),
        ("o", "#fdba74"),
        ("r", "#fca5a5"),
        ("s", "#cbd5e1"),
    ];
    for (id, color) in expected {
        for progress in [0.0, 0.3, 0.6, 1.0] {
            let state = ViewState {
                active_item: Some(id.to_string()),
                scroll_progress: progress,
                ..ViewState::default()
            };
            assert_eq!(hex(derive(&state, &store)), color, "item {id} at {progress}");
        }
    }
}

#[test]
fn derivation_is_history_independent() {
    let mut coordinator = Coordinator::new(Arc::new(store()));
    coordinator.report_scroll_progress(0.7);
    let first = coordinator.background_color();
    coordinator.select_item("r").unwrap();
    coordinator.set_navigation_mode(NavigationMode::List);
    coordinator.close_detail();
    coordinator.set_navigation_mode(NavigationMode::Road);
    assert_eq!(coordinator.background_color(), first);
    assert_eq!(first, derive(coordinator.state(), coordinator.store()));
}

#[test]
fn dangling_active_id_falls_back_to_progress() {
    let state = ViewState {
        active_item: Some("gone".to_string()),
        scroll_progress: 0.6,
        ..ViewState::default()
    };
    assert_eq!(hex(derive(&state, &store())), "#bbf7d0");
}
