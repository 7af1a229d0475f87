//! Capability definitions
//!
//! A capability is a functional role a content provider can fulfill. The set is
//! closed: every capability has a stable ordinal that indexes the per-provider
//! instance arena, and a canonical upper-case name used in configuration and
//! user settings.

use crate::utils::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Functional roles a provider may fulfill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    /// Title/person metadata lookup
    Metadata,
    /// Catalog browsing (popular, trending, genre lists)
    Catalog,
    /// Free-text search
    Search,
    /// Recommendations derived from a title
    Recommendation,
    /// Mapping between external id schemes (IMDb, TVDB, ...)
    ExternalIds,
    /// Cast and crew filmographies
    Filmography,
}

impl Capability {
    /// Number of capabilities
    pub const COUNT: usize = 6;

    /// Every capability, in ordinal order
    pub const ALL: [Capability; Capability::COUNT] = [
        Capability::Metadata,
        Capability::Catalog,
        Capability::Search,
        Capability::Recommendation,
        Capability::ExternalIds,
        Capability::Filmography,
    ];

    /// Stable index of this capability, `0..COUNT`
    pub const fn ordinal(self) -> usize {
        match self {
            Capability::Metadata => 0,
            Capability::Catalog => 1,
            Capability::Search => 2,
            Capability::Recommendation => 3,
            Capability::ExternalIds => 4,
            Capability::Filmography => 5,
        }
    }

    /// Canonical name
    pub const fn as_str(self) -> &'static str {
        match self {
            Capability::Metadata => "METADATA",
            Capability::Catalog => "CATALOG",
            Capability::Search => "SEARCH",
            Capability::Recommendation => "RECOMMENDATION",
            Capability::ExternalIds => "EXTERNAL_IDS",
            Capability::Filmography => "FILMOGRAPHY",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = RegistryError;

    /// Parse a capability name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Capability::ALL
            .into_iter()
            .find(|capability| capability.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| RegistryError::validation(format!("Unknown capability: '{}'", s)))
    }
}
