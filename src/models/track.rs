//! Track-related models.
//!
//! Shapes returned by the query operations: bulk search items ([`Track`])
//! and the enriched single-track view ([`TrackDetail`]).

use serde::{Deserialize, Serialize};

use super::artist::Biography;

/// Artist when nested inside a track.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistRef {
    /// Deezer artist ID.
    pub id: String,

    /// Artist name.
    pub name: String,

    /// Medium-size picture URL.
    pub picture: Option<String>,
}

impl ArtistRef {
    /// Create a new artist reference with name and Deezer ID.
    pub fn new<S1: Into<String>, S2: Into<String>>(id: S1, name: S2) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            picture: None,
        }
    }
}

/// Album when nested inside a track.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRef {
    /// Deezer album ID.
    pub id: String,

    /// Album title.
    pub title: String,

    /// Small cover URL (56x56).
    pub cover_small: Option<String>,

    /// Big cover URL (500x500).
    pub cover_big: Option<String>,
}

/// A track as returned by search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Track {
    /// Deezer track ID.
    pub id: String,

    /// Track title.
    pub title: String,

    /// Duration in seconds.
    pub duration: Option<u32>,

    /// Whether the track has explicit lyrics.
    #[serde(default)]
    pub explicit: bool,

    /// Main artist.
    pub artist: ArtistRef,

    /// Album containing this track.
    pub album: AlbumRef,
}

impl Track {
    /// Attach a resolved biography, producing the detail view.
    pub fn into_detail(self, biography: Option<Biography>) -> TrackDetail {
        TrackDetail {
            id: self.id,
            title: self.title,
            duration: self.duration,
            explicit: self.explicit,
            artist: ArtistDetail {
                id: self.artist.id,
                name: self.artist.name,
                picture: self.artist.picture,
                biography,
            },
            album: self.album,
        }
    }
}

/// Artist inside a track detail, enriched with its biography.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistDetail {
    /// Deezer artist ID.
    pub id: String,

    /// Artist name.
    pub name: String,

    /// Medium-size picture URL.
    pub picture: Option<String>,

    /// Sanitized biography, `None` when it could not be resolved.
    pub biography: Option<Biography>,
}

/// A single track with artist biography.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackDetail {
    /// Deezer track ID.
    pub id: String,

    /// Track title.
    pub title: String,

    /// Duration in seconds.
    pub duration: Option<u32>,

    /// Whether the track has explicit lyrics.
    #[serde(default)]
    pub explicit: bool,

    /// Main artist with biography.
    pub artist: ArtistDetail,

    /// Album containing this track.
    pub album: AlbumRef,
}

/// One page of track search results.
///
/// `prev` and `next` are provider-issued cursors, forwarded verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchPage {
    /// Tracks in provider order.
    pub data: Vec<Track>,

    /// Total number of matches reported by the provider.
    pub total: u64,

    /// Cursor to the previous page.
    pub prev: Option<String>,

    /// Cursor to the next page.
    pub next: Option<String>,
}
