//! Immutable content store.
//!
//! # Responsibility
//! - Decode the portfolio data set once at startup.
//! - Serve read-only ordered queries to the coordinator and views.
//!
//! # Invariants
//! - Record order is the order of the source document.
//! - Ids are unique; lookups never return a stale or mutated record.
//! - The store exposes no mutation API.

use crate::model::content::{ContentKind, ContentRecord, ContentValidationError};
use log::{info, warn};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const BUILTIN_PORTFOLIO_JSON: &str = include_str!("portfolio.json");

/// Store construction errors.
#[derive(Debug)]
pub enum ContentError {
    /// Source document is not valid JSON for the content schema.
    Decode(serde_json::Error),
    /// One record breaks a record-level invariant.
    Invalid(ContentValidationError),
    /// Two records share one id.
    DuplicateId(String),
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "content decode failed: {err}"),
            Self::Invalid(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "content id is duplicated: {id}"),
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Invalid(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

impl From<ContentValidationError> for ContentError {
    fn from(value: ContentValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// External profile link shown by the chrome.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Site-owner metadata shown outside the content cards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    /// Small caption under the logo.
    #[serde(default)]
    pub edition: String,
    /// Start screen caption.
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Deserialize)]
struct ContentDocument {
    #[serde(default)]
    profile: Profile,
    items: Vec<ContentRecord>,
}

/// Read-only ordered collection of content records.
#[derive(Debug, Clone)]
pub struct ContentStore {
    profile: Profile,
    records: Vec<ContentRecord>,
    index: BTreeMap<String, usize>,
}

impl ContentStore {
    /// Loads the data set compiled into the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_PORTFOLIO_JSON)
    }

    /// Decodes and validates a content document.
    pub fn from_json(source: &str) -> Result<Self, ContentError> {
        let document: ContentDocument = serde_json::from_str(source)?;
        let store = Self::from_records(document.profile, document.items)?;
        info!(
            "event=content_load module=content status=ok records={} selectable={}",
            store.len(),
            store.selectable().count()
        );
        Ok(store)
    }

    /// Builds a store from already-decoded records.
    pub fn from_records(
        profile: Profile,
        records: Vec<ContentRecord>,
    ) -> Result<Self, ContentError> {
        let mut index = BTreeMap::new();
        for (position, record) in records.iter().enumerate() {
            record.validate()?;
            if index.insert(record.id.clone(), position).is_some() {
                warn!(
                    "event=content_load module=content status=error reason=duplicate_id id={}",
                    record.id
                );
                return Err(ContentError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self {
            profile,
            records,
            index,
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in source order.
    pub fn iter(&self) -> impl Iterator<Item = &ContentRecord> {
        self.records.iter()
    }

    /// Identity lookup.
    pub fn get(&self, id: &str) -> Option<&ContentRecord> {
        self.index.get(id).map(|position| &self.records[*position])
    }

    /// Records whose kind satisfies `predicate`, in source order.
    pub fn filter<F>(&self, predicate: F) -> impl Iterator<Item = &ContentRecord>
    where
        F: Fn(ContentKind) -> bool,
    {
        self.records
            .iter()
            .filter(move |record| predicate(record.kind))
    }

    /// Records that may become the active detail item.
    pub fn selectable(&self) -> impl Iterator<Item = &ContentRecord> {
        self.filter(ContentKind::is_selectable)
    }

    /// First intro record, if the data set has one.
    pub fn intro(&self) -> Option<&ContentRecord> {
        self.filter(|kind| kind == ContentKind::Intro).next()
    }
}
