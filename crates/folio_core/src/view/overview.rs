//! Overview grid ("Selected Works").

use crate::content::ContentStore;
use crate::model::content::{ContentId, ContentKind};
use crate::view::{ordinal, stagger};

pub const OVERVIEW_HEADING: &str = "Selected Works";
/// Seconds between consecutive card entrance animations.
pub const OVERVIEW_STAGGER_SECONDS: f64 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewCard {
    pub id: ContentId,
    pub kind: ContentKind,
    /// Position in the displayed grid, `"01"`-style.
    pub ordinal: String,
    pub title: String,
    pub subtitle: String,
    pub short_description: String,
    pub color_theme: String,
    /// Only selectable cards react to clicks.
    pub selectable: bool,
    pub delay_seconds: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewView {
    pub heading: &'static str,
    pub cards: Vec<OverviewCard>,
}

impl OverviewView {
    /// Every record except the intro, in store order.
    pub fn project(store: &ContentStore) -> Self {
        let cards = store
            .filter(|kind| kind != ContentKind::Intro)
            .enumerate()
            .map(|(index, record)| OverviewCard {
                id: record.id.clone(),
                kind: record.kind,
                ordinal: ordinal(index),
                title: record.title.clone(),
                subtitle: record.subtitle.clone(),
                short_description: record.short_description.clone(),
                color_theme: record.color_theme.clone(),
                selectable: record.is_selectable(),
                delay_seconds: stagger(index, OVERVIEW_STAGGER_SECONDS),
            })
            .collect();
        Self {
            heading: OVERVIEW_HEADING,
            cards,
        }
    }
}
