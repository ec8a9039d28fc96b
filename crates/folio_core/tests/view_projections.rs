use folio_core::view::detail::{DetailFact, DetailLink, DetailView};
use folio_core::view::list::{BadgeTone, ListView};
use folio_core::view::overview::OverviewView;
use folio_core::view::road::{CardIcon, RoadEntry, RoadView};
use folio_core::view::{render_navigation, NavigationRender};
use folio_core::{ContentKind, ContentStore, NavigationMode, ScrollAxis, ViewState};

#[test]
fn road_numbers_builtin_cards_in_order() {
    let store = ContentStore::builtin().unwrap();
    let road = RoadView::project(&store, ScrollAxis::Vertical);

    assert_eq!(road.intro.as_ref().unwrap().hint, "Scroll vertically to explore");
    let cards: Vec<_> = road.cards().collect();
    assert_eq!(cards.len(), 6);
    assert_eq!(cards[0].ordinal, "01");
    assert_eq!(cards[0].icon, CardIcon::Briefcase);
    assert_eq!(cards[5].ordinal, "06");
    assert_eq!(cards[5].kind, ContentKind::Contact);
    assert!(road
        .entries
        .iter()
        .all(|entry| matches!(entry, RoadEntry::Card(_))));
}

#[test]
fn overview_and_list_differ_on_headers() {
    let store = ContentStore::from_json(
        r#"{"items":[
            {"id":"i","type":"INTRO","title":"Hi","colorTheme":"slate"},
            {"id":"h","type":"SECTION_HEADER","title":"WORK","colorTheme":"bg-slate-900","accentClass":"text-white"},
            {"id":"a","type":"PROJECT","title":"A","colorTheme":"blue","year":"2024"},
            {"id":"b","type":"EXPERIENCE","title":"B","colorTheme":"purple","client":"Acme"}
        ]}"#,
    )
    .unwrap();

    let overview = OverviewView::project(&store);
    assert_eq!(overview.heading, "Selected Works");
    let ids: Vec<_> = overview.cards.iter().map(|card| card.id.as_str()).collect();
    assert_eq!(ids, vec!["h", "a", "b"]);
    assert_eq!(overview.cards[2].ordinal, "03");

    let list = ListView::project(&store);
    assert_eq!(list.heading, "Index");
    assert_eq!(list.rows.len(), 2);
    assert_eq!(list.rows[0].year, "2024");
    assert_eq!(list.rows[0].client, "—");
    assert_eq!(list.rows[0].badge, BadgeTone::Blue);
    assert_eq!(list.rows[1].year, "—");
    assert_eq!(list.rows[1].badge, BadgeTone::Purple);
    assert!((list.rows[1].delay_seconds - 0.03).abs() < 1e-12);

    let road = RoadView::project(&store, ScrollAxis::Vertical);
    match &road.entries[0] {
        RoadEntry::Header(header) => {
            assert_eq!(header.accent_class.as_deref(), Some("text-white"))
        }
        other => panic!("expected header, got {other:?}"),
    }
    assert_eq!(road.cards().next().unwrap().ordinal, "01");
}

#[test]
fn navigation_render_follows_mode() {
    let store = ContentStore::builtin().unwrap();
    let mut state = ViewState::default();
    for (mode, count) in [
        (NavigationMode::Road, 6),
        (NavigationMode::Overview, 6),
        (NavigationMode::List, 6),
    ] {
        state.navigation_mode = mode;
        let render = render_navigation(&state, &store, ScrollAxis::Vertical);
        assert_eq!(render.mode(), Some(mode));
        assert_eq!(render.item_count(), count);
    }

    state.active_item = Some("proj-stock".to_string());
    assert_eq!(
        render_navigation(&state, &store, ScrollAxis::Vertical),
        NavigationRender::Suppressed
    );
}

#[test]
fn detail_shows_only_present_sections() {
    let store = ContentStore::builtin().unwrap();
    let experience = DetailView::project(store.get("exp-multibagg").unwrap());
    assert!(experience
        .facts
        .iter()
        .any(|fact| matches!(fact, DetailFact::Client(client) if client == "Multibagg AI")));
    assert_eq!(experience.monogram, "Mu");
    assert_eq!(experience.accent.to_hex(), "#93c5fd");

    let contact = DetailView::project(store.get("contact").unwrap());
    assert!(contact
        .links
        .iter()
        .all(|link| matches!(link, DetailLink::Website(_) | DetailLink::GitHub(_))));
    assert_eq!(contact.accent.to_hex(), "#cbd5e1");
    assert_eq!(contact.back_label, "BACK TO ROAD");
}
