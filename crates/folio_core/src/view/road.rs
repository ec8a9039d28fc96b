//! Road layout: a single scroll path of cards and section anchors.

use crate::content::ContentStore;
use crate::model::content::{ContentId, ContentKind, ContentRecord};
use crate::motion::scroll::ScrollAxis;
use crate::view::ordinal;

/// Caption on every road card.
pub const CARD_CALL_TO_ACTION: &str = "VIEW CASE STUDY";

/// Icon drawn in the corner of a road card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIcon {
    Box,
    Briefcase,
    User,
    Mail,
}

impl CardIcon {
    pub fn for_kind(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Experience => Self::Briefcase,
            ContentKind::About => Self::User,
            ContentKind::Contact => Self::Mail,
            ContentKind::Project | ContentKind::Intro | ContentKind::SectionHeader => Self::Box,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Briefcase => "briefcase",
            Self::User => "user",
            Self::Mail => "mail",
        }
    }
}

/// Non-interactive opening block of the road.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroAnchor {
    pub title: String,
    pub tagline: String,
    pub hint: &'static str,
}

/// Selectable road card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadCard {
    pub id: ContentId,
    pub kind: ContentKind,
    /// Position among selectable records, `"01"`-style.
    pub ordinal: String,
    pub icon: CardIcon,
    pub title: String,
    pub subtitle: String,
    pub short_description: String,
}

/// Decorative full-width section divider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionAnchor {
    pub id: ContentId,
    pub title: String,
    pub color_theme: String,
    pub accent_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoadEntry {
    Header(SectionAnchor),
    Card(RoadCard),
}

impl RoadEntry {
    pub fn id(&self) -> &str {
        match self {
            Self::Header(header) => &header.id,
            Self::Card(card) => &card.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadView {
    pub axis: ScrollAxis,
    pub intro: Option<IntroAnchor>,
    pub entries: Vec<RoadEntry>,
}

impl RoadView {
    pub fn project(store: &ContentStore, axis: ScrollAxis) -> Self {
        let intro = store.intro().map(|record| IntroAnchor {
            title: record.title.clone(),
            tagline: record.short_description.clone(),
            hint: scroll_hint(axis),
        });

        let mut card_index = 0;
        let entries = store
            .filter(|kind| kind != ContentKind::Intro)
            .map(|record| match record.kind {
                ContentKind::SectionHeader => RoadEntry::Header(section_anchor(record)),
                _ => {
                    let card = road_card(record, card_index);
                    card_index += 1;
                    RoadEntry::Card(card)
                }
            })
            .collect();

        Self {
            axis,
            intro,
            entries,
        }
    }

    pub fn cards(&self) -> impl Iterator<Item = &RoadCard> {
        self.entries.iter().filter_map(|entry| match entry {
            RoadEntry::Card(card) => Some(card),
            RoadEntry::Header(_) => None,
        })
    }
}

/// Exploration hint under the intro anchor.
pub fn scroll_hint(axis: ScrollAxis) -> &'static str {
    match axis {
        ScrollAxis::Vertical => "Scroll vertically to explore",
        ScrollAxis::Horizontal => "Scroll horizontally to explore",
    }
}

fn road_card(record: &ContentRecord, index: usize) -> RoadCard {
    RoadCard {
        id: record.id.clone(),
        kind: record.kind,
        ordinal: ordinal(index),
        icon: CardIcon::for_kind(record.kind),
        title: record.title.clone(),
        subtitle: record.subtitle.clone(),
        short_description: record.short_description.clone(),
    }
}

fn section_anchor(record: &ContentRecord) -> SectionAnchor {
    SectionAnchor {
        id: record.id.clone(),
        title: record.title.clone(),
        color_theme: record.color_theme.clone(),
        accent_class: record.accent_class.clone(),
    }
}
