// src/domain/entry.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// System metadata of the entry that owns the slug field.
///
/// Only the two version counters matter to the widget; everything else the
/// host reports is ignored on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySys {
    pub version: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_version: Option<u64>,
}

impl EntrySys {
    pub fn draft(version: u64) -> Self {
        Self {
            version,
            published_version: None,
        }
    }

    pub fn published(version: u64, published_version: u64) -> Self {
        Self {
            version,
            published_version: Some(published_version),
        }
    }

    /// Parse the `sys` object a host hands over as JSON.
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        serde_json::from_str(raw).map_err(|err| DomainError::MalformedSys(err.to_string()))
    }

    pub fn state(&self) -> PublicationState {
        PublicationState::from_sys(self)
    }

    /// True when automatic slug regeneration must not touch the field.
    pub fn is_locked(&self) -> bool {
        self.state().is_locked()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationState {
    /// Never published, or the counters do not match a known publish shape.
    Draft,
    /// Published with no edits since.
    Published,
    /// Edited after the last publish.
    Changed,
}

impl PublicationState {
    pub fn from_sys(sys: &EntrySys) -> Self {
        // A published version of zero is treated the same as an absent one.
        let Some(published) = sys.published_version.filter(|v| *v > 0) else {
            return Self::Draft;
        };

        if sys.version == published.saturating_add(1) {
            Self::Published
        } else if sys.version >= published.saturating_add(2) {
            Self::Changed
        } else {
            Self::Draft
        }
    }

    pub fn is_locked(self) -> bool {
        matches!(self, Self::Published | Self::Changed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Changed => "changed",
        }
    }
}

impl fmt::Display for PublicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
