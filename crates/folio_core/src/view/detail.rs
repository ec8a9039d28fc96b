//! Full-screen detail presentation of one record.
//!
//! Sections appear only for the optional fields the record carries.

use crate::model::content::{ContentId, ContentRecord, Stat};
use crate::model::theme::{ColorTheme, Rgb};
use crate::state::color::theme_color;

pub const BACK_LABEL: &str = "BACK TO ROAD";

/// Labelled key facts row under the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailFact {
    Client(String),
    Year(String),
    Technologies(Vec<String>),
}

impl DetailFact {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Client(_) => "Client",
            Self::Year(_) => "Year",
            Self::Technologies(_) => "Technologies",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLink {
    Website(String),
    GitHub(String),
}

impl DetailLink {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Website(_) => "Visit Website",
            Self::GitHub(_) => "GitHub",
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Website(url) | Self::GitHub(url) => url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: ContentId,
    pub title: String,
    pub subtitle: String,
    pub facts: Vec<DetailFact>,
    pub description: Option<String>,
    pub bullets: Vec<String>,
    pub stats: Vec<Stat>,
    pub links: Vec<DetailLink>,
    pub monogram: String,
    pub theme: ColorTheme,
    pub accent: Rgb,
    pub back_label: &'static str,
}

impl DetailView {
    pub fn project(record: &ContentRecord) -> Self {
        let mut facts = Vec::new();
        if let Some(client) = present(&record.client) {
            facts.push(DetailFact::Client(client));
        }
        if let Some(year) = present(&record.year) {
            facts.push(DetailFact::Year(year));
        }
        if let Some(stack) = record.tech_stack.as_ref().filter(|stack| !stack.is_empty()) {
            facts.push(DetailFact::Technologies(stack.clone()));
        }

        let mut links = Vec::new();
        if let Some(link) = present(&record.link) {
            links.push(DetailLink::Website(link));
        }
        if let Some(github) = present(&record.github) {
            links.push(DetailLink::GitHub(github));
        }

        let theme = record.theme();
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            subtitle: record.subtitle.clone(),
            facts,
            description: present(&record.description),
            bullets: record.bullets.clone().unwrap_or_default(),
            stats: record.stats.clone().unwrap_or_default(),
            links,
            monogram: record.monogram(),
            theme,
            accent: theme_color(theme),
            back_label: BACK_LABEL,
        }
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::{DetailFact, DetailView};
    use crate::model::content::{ContentKind, ContentRecord};

    #[test]
    fn bare_record_renders_without_optional_sections() {
        let record = ContentRecord::new("about", ContentKind::About, "About Me", "bg-purple-50");
        let view = DetailView::project(&record);
        assert!(view.facts.is_empty());
        assert!(view.links.is_empty());
        assert!(view.description.is_none());
        assert_eq!(view.monogram, "Ab");
        assert_eq!(view.accent.to_hex(), "#d8b4fe");
        assert_eq!(view.back_label, "BACK TO ROAD");
    }

    #[test]
    fn facts_keep_client_year_stack_order() {
        let mut record = ContentRecord::new("p", ContentKind::Project, "Proj", "blue");
        record.tech_stack = Some(vec!["Rust".to_string()]);
        record.year = Some("2025".to_string());
        record.client = Some("  ".to_string());
        let labels: Vec<_> = DetailView::project(&record)
            .facts
            .iter()
            .map(DetailFact::label)
            .collect();
        assert_eq!(labels, vec!["Year", "Technologies"]);
    }
}
