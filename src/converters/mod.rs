//! JSON to model converters.
//!
//! This module provides functions to convert raw Deezer and Discogs JSON
//! responses into typed model structures. Fields the public schema
//! requires are checked here; everything else is optional and defaults
//! to `None`.

use serde_json::Value;

use crate::error::{ExplorerError, Result};
use crate::models::{AlbumRef, ArtistRecord, ArtistRef, ArtistSearchHit, SearchPage, Track};

/// Get optional string from JSON.
fn get_opt_str(json: &Value, key: &str) -> Option<String> {
    json.get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// Get a required string from JSON.
fn require_str(json: &Value, key: &'static str) -> Result<String> {
    get_opt_str(json, key).ok_or(ExplorerError::MissingField(key))
}

/// Get string ID from JSON (handles both string and numeric IDs).
fn get_id(json: &Value, key: &str) -> Option<String> {
    json.get(key).and_then(|v| {
        if let Some(s) = v.as_str() {
            Some(s.to_string())
        } else if let Some(n) = v.as_u64() {
            Some(n.to_string())
        } else {
            v.as_i64().map(|n| n.to_string())
        }
    })
}

/// Get a required ID from JSON.
fn require_id(json: &Value, key: &'static str) -> Result<String> {
    get_id(json, key).ok_or(ExplorerError::MissingField(key))
}

/// Get bool from JSON.
fn get_bool(json: &Value, key: &str) -> bool {
    json.get(key).and_then(|v| v.as_bool()).unwrap_or(false)
}

/// Parse the artist nested inside a Deezer track.
fn parse_artist_ref(json: &Value) -> Result<ArtistRef> {
    Ok(ArtistRef {
        id: require_id(json, "id")?,
        name: require_str(json, "name")?,
        picture: get_opt_str(json, "picture_medium"),
    })
}

/// Parse the album nested inside a Deezer track.
fn parse_album_ref(json: &Value) -> Result<AlbumRef> {
    Ok(AlbumRef {
        id: require_id(json, "id")?,
        title: require_str(json, "title")?,
        cover_small: get_opt_str(json, "cover_small"),
        cover_big: get_opt_str(json, "cover_big"),
    })
}

/// Parse a Deezer track from raw JSON.
///
/// Works for both `track/<id>` responses and `search/track` items.
pub fn parse_track(json: &Value) -> Result<Track> {
    let artist = json
        .get("artist")
        .ok_or(ExplorerError::MissingField("artist"))
        .and_then(parse_artist_ref)?;

    let album = json
        .get("album")
        .ok_or(ExplorerError::MissingField("album"))
        .and_then(parse_album_ref)?;

    Ok(Track {
        id: require_id(json, "id")?,
        title: require_str(json, "title")?,
        duration: json
            .get("duration")
            .and_then(|v| v.as_u64())
            .and_then(|d| u32::try_from(d).ok()),
        explicit: get_bool(json, "explicit_lyrics"),
        artist,
        album,
    })
}

/// Parse a Deezer `search/track` response.
///
/// Any malformed item fails the whole page.
pub fn parse_search_page(json: &Value) -> Result<SearchPage> {
    let items = json
        .get("data")
        .and_then(|d| d.as_array())
        .ok_or(ExplorerError::MissingField("data"))?;

    let data = items.iter().map(parse_track).collect::<Result<Vec<_>>>()?;

    let total = json
        .get("total")
        .and_then(|t| t.as_u64())
        .unwrap_or(data.len() as u64);

    Ok(SearchPage {
        data,
        total,
        prev: get_opt_str(json, "prev"),
        next: get_opt_str(json, "next"),
    })
}

/// Parse a Discogs `database/search` response into hits, in provider order.
pub fn parse_artist_hits(json: &Value) -> Result<Vec<ArtistSearchHit>> {
    json.get("results")
        .and_then(|r| r.as_array())
        .ok_or(ExplorerError::MissingField("results"))?
        .iter()
        .map(|hit| require_id(hit, "id").map(ArtistSearchHit::new))
        .collect()
}

/// Parse a Discogs `artists/<id>` response.
///
/// `requested_id` is used when the payload omits its own ID. A `null` or
/// missing `profile` both map to `None`.
pub fn parse_artist_record(json: &Value, requested_id: &str) -> Result<ArtistRecord> {
    if !json.is_object() {
        return Err(ExplorerError::ApiError(
            "Artist payload is not an object".to_string(),
        ));
    }

    Ok(ArtistRecord {
        id: get_id(json, "id").unwrap_or_else(|| requested_id.to_string()),
        name: get_opt_str(json, "name"),
        profile: get_opt_str(json, "profile"),
    })
}
