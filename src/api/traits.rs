//! Trait definitions for the external catalogs.
//!
//! The query façade and the biography resolver only talk to these traits.
//! Production code uses [`DeezerApi`] and [`DiscogsApi`]; tests substitute
//! the doubles in [`mocks`].

use async_trait::async_trait;

use super::{DeezerApi, DiscogsApi};
use crate::error::Result;
use crate::models::{ArtistRecord, ArtistSearchHit, SearchPage, Track};

/// Track-indexed catalog (track lookup and track search).
#[async_trait]
pub trait TrackCatalog: Send + Sync {
    /// Search tracks, returning one page.
    async fn search_tracks(&self, query: &str, limit: u32, offset: u32) -> Result<SearchPage>;

    /// Get a single track by ID.
    async fn get_track(&self, track_id: &str) -> Result<Track>;
}

/// Name-indexed artist catalog (artist search and artist records).
#[async_trait]
pub trait ArtistCatalog: Send + Sync {
    /// Search artists by name, most relevant first.
    async fn search_artists(&self, name: &str) -> Result<Vec<ArtistSearchHit>>;

    /// Get a full artist record by ID.
    async fn get_artist(&self, artist_id: &str) -> Result<ArtistRecord>;
}

#[async_trait]
impl TrackCatalog for DeezerApi {
    async fn search_tracks(&self, query: &str, limit: u32, offset: u32) -> Result<SearchPage> {
        DeezerApi::search_tracks(self, query, limit, offset).await
    }

    async fn get_track(&self, track_id: &str) -> Result<Track> {
        DeezerApi::get_track(self, track_id).await
    }
}

#[async_trait]
impl ArtistCatalog for DiscogsApi {
    async fn search_artists(&self, name: &str) -> Result<Vec<ArtistSearchHit>> {
        DiscogsApi::search_artists(self, name).await
    }

    async fn get_artist(&self, artist_id: &str) -> Result<ArtistRecord> {
        DiscogsApi::get_artist(self, artist_id).await
    }
}
