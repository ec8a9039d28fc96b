//! Tabular index of selectable records.

use crate::content::ContentStore;
use crate::model::content::{ContentId, ContentKind};
use crate::view::stagger;

pub const LIST_HEADING: &str = "Index";
pub const LIST_COLUMNS: [&str; 4] = ["Project", "Year", "Client", "Type"];
/// Placeholder for a missing year or client.
pub const EMPTY_CELL: &str = "—";
pub const LIST_STAGGER_SECONDS: f64 = 0.03;

/// Accent of the kind badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Blue,
    Purple,
    Neutral,
}

impl BadgeTone {
    pub fn for_kind(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Project => Self::Blue,
            ContentKind::Experience => Self::Purple,
            _ => Self::Neutral,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub id: ContentId,
    pub title: String,
    pub year: String,
    pub client: String,
    pub kind: ContentKind,
    pub badge: BadgeTone,
    pub delay_seconds: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub heading: &'static str,
    pub columns: [&'static str; 4],
    pub rows: Vec<ListRow>,
}

impl ListView {
    pub fn project(store: &ContentStore) -> Self {
        let rows = store
            .selectable()
            .enumerate()
            .map(|(index, record)| ListRow {
                id: record.id.clone(),
                title: record.title.clone(),
                year: cell(record.year.as_deref()),
                client: cell(record.client.as_deref()),
                kind: record.kind,
                badge: BadgeTone::for_kind(record.kind),
                delay_seconds: stagger(index, LIST_STAGGER_SECONDS),
            })
            .collect();
        Self {
            heading: LIST_HEADING,
            columns: LIST_COLUMNS,
            rows,
        }
    }
}

fn cell(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => EMPTY_CELL.to_string(),
    }
}
