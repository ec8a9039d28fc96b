//! Content record domain model.
//!
//! # Responsibility
//! - Define the canonical portfolio entry shared by every navigation view.
//! - Classify entries into selectable detail targets and decorative anchors.
//!
//! # Invariants
//! - `id` is non-empty and unique within one content store.
//! - Records are immutable after the store is built.
//! - Optional fields may be absent for any kind; views must not assume them.

use crate::model::theme::ColorTheme;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable string key for one content record.
pub type ContentId = String;

/// Closed set of content record variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentKind {
    /// Opening anchor of the road. Never selectable.
    Intro,
    /// Side or client project.
    Project,
    /// Work experience entry.
    Experience,
    /// Personal background.
    About,
    /// Contact details.
    Contact,
    /// Decorative section divider. Never selectable.
    SectionHeader,
}

impl ContentKind {
    /// Whether records of this kind may become the active detail item.
    pub fn is_selectable(self) -> bool {
        match self {
            Self::Project | Self::Experience | Self::About | Self::Contact => true,
            Self::Intro | Self::SectionHeader => false,
        }
    }

    /// Upper-case label shown on cards and badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Intro => "INTRO",
            Self::Project => "PROJECT",
            Self::Experience => "EXPERIENCE",
            Self::About => "ABOUT",
            Self::Contact => "CONTACT",
            Self::SectionHeader => "SECTION_HEADER",
        }
    }
}

/// One labelled metric shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// Canonical portfolio entry.
///
/// Kind-specific fields stay optional so one shape covers projects,
/// experience, about and contact entries alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// Stable key used for selection and lookup.
    pub id: ContentId,
    /// Serialized as `type` to match the content file schema.
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bullets: Option<Vec<String>>,
    #[serde(default)]
    pub stats: Option<Vec<Stat>>,
    #[serde(default)]
    pub tech_stack: Option<Vec<String>>,
    #[serde(default)]
    pub year: Option<String>,
    /// Client or company name.
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    /// Symbolic color-family tag, either `blue` or a utility class such as
    /// `bg-blue-50`.
    pub color_theme: String,
    /// Text accent tag for section headers.
    #[serde(default)]
    pub accent_class: Option<String>,
}

/// Validation errors for record-level invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentValidationError {
    EmptyId,
    EmptyTitle { id: ContentId },
}

impl Display for ContentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "content id must not be empty"),
            Self::EmptyTitle { id } => write!(f, "content `{id}` must have a title"),
        }
    }
}

impl Error for ContentValidationError {}

impl ContentRecord {
    /// Creates a record with only the required fields populated.
    pub fn new(
        id: impl Into<ContentId>,
        kind: ContentKind,
        title: impl Into<String>,
        color_theme: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            subtitle: String::new(),
            short_description: String::new(),
            description: None,
            bullets: None,
            stats: None,
            tech_stack: None,
            year: None,
            client: None,
            link: None,
            github: None,
            color_theme: color_theme.into(),
            accent_class: None,
        }
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), ContentValidationError> {
        if self.id.trim().is_empty() {
            return Err(ContentValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(ContentValidationError::EmptyTitle {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    pub fn is_selectable(&self) -> bool {
        self.kind.is_selectable()
    }

    /// Color family resolved from the symbolic `color_theme` tag.
    pub fn theme(&self) -> ColorTheme {
        ColorTheme::from_tag(&self.color_theme)
    }

    /// First two characters of the title, used as the detail monogram.
    pub fn monogram(&self) -> String {
        self.title.chars().take(2).collect()
    }
}
