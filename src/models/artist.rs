//! Artist catalog models.
//!
//! These are the two shapes the biography pipeline walks through: the
//! search hit that names an artist, and the full record that may carry a
//! profile text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single hit of an artist name search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistSearchHit {
    /// Discogs artist ID.
    pub id: String,
}

impl ArtistSearchHit {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self { id: id.into() }
    }
}

/// A full artist record from the artist catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistRecord {
    /// Discogs artist ID.
    pub id: String,

    /// Artist name as known to the catalog.
    pub name: Option<String>,

    /// Raw biography text. `None` when the field is absent, which is not
    /// the same as an empty profile.
    pub profile: Option<String>,
}

impl ArtistRecord {
    /// Create a record with a raw profile.
    pub fn with_profile<S1: Into<String>, S2: Into<String>>(id: S1, profile: S2) -> Self {
        Self {
            id: id.into(),
            name: None,
            profile: Some(profile.into()),
        }
    }

    /// Create a record without any profile field.
    pub fn without_profile<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            name: None,
            profile: None,
        }
    }
}

/// Display-ready biography text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Biography(String);

impl Biography {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Biography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
