//! Unified query interface.
//!
//! This module provides the three query operations exposed to a host
//! (GraphQL layer, CLI): `welcome`, `search_tracks` and
//! `get_track_details`.
//!
//! Track lookups and searches are required dependencies: any provider
//! failure becomes a generic [`QueryError`]. Biographies are best-effort
//! and never fail a track detail request.

use tracing::{debug, error};

use crate::api::{ArtistCatalog, DeezerApi, DiscogsApi, TrackCatalog};
use crate::biography::BiographyResolver;
use crate::config::Config;
use crate::error::{QueryError, Result};
use crate::models::{SearchPage, TrackDetail};

/// Greeting returned by [`SongsExplorer::welcome`].
pub const WELCOME_MESSAGE: &str = "Welcome to Songs Explorer w/ Deezer 🎧";

/// Pagination arguments for track search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Maximum number of items per page.
    pub limit: u32,
    /// Index of the first item.
    pub offset: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

impl SearchParams {
    /// Build params from optional host arguments, defaulting the missing ones.
    pub fn from_options(limit: Option<u32>, offset: Option<u32>) -> Self {
        let defaults = Self::default();
        Self {
            limit: limit.unwrap_or(defaults.limit),
            offset: offset.unwrap_or(defaults.offset),
        }
    }
}

/// Main query interface.
///
/// # Example
///
/// ```rust,no_run
/// use songs_explorer::{Config, SearchParams, SongsExplorer};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let explorer = SongsExplorer::from_config(&Config::new("discogs_token"))?;
///
///     let page = explorer.search_tracks("formidable", SearchParams::default()).await?;
///     println!("{} matches", page.total);
///
///     let detail = explorer.get_track_details("3135556").await?;
///     println!("{}: {:?}", detail.artist.name, detail.artist.biography);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SongsExplorer<T, A> {
    tracks: T,
    biographies: BiographyResolver<A>,
}

impl SongsExplorer<DeezerApi, DiscogsApi> {
    /// Create an explorer backed by the real Deezer and Discogs clients.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(DeezerApi::new(config)?, DiscogsApi::new(config)?))
    }
}

impl<T: TrackCatalog, A: ArtistCatalog> SongsExplorer<T, A> {
    /// Create an explorer from any pair of catalogs.
    pub fn new(tracks: T, artists: A) -> Self {
        Self {
            tracks,
            biographies: BiographyResolver::new(artists),
        }
    }

    /// Fixed greeting.
    pub fn welcome(&self) -> &'static str {
        WELCOME_MESSAGE
    }

    /// The biography resolver used for track details.
    pub fn biographies(&self) -> &BiographyResolver<A> {
        &self.biographies
    }

    /// Search tracks. No biography enrichment is done for search results.
    pub async fn search_tracks(
        &self,
        query: &str,
        params: SearchParams,
    ) -> std::result::Result<SearchPage, QueryError> {
        let page = self
            .tracks
            .search_tracks(query, params.limit, params.offset)
            .await
            .map_err(|e| {
                error!("Error searching tracks for {:?}: {}", query, e);
                QueryError::SearchTracks
            })?;

        debug!(
            "Search {:?} returned {} of {} tracks",
            query,
            page.data.len(),
            page.total
        );
        Ok(page)
    }

    /// Get a track with its artist biography.
    ///
    /// Fails only if the track itself cannot be fetched.
    pub async fn get_track_details(
        &self,
        track_id: &str,
    ) -> std::result::Result<TrackDetail, QueryError> {
        let track = self.tracks.get_track(track_id).await.map_err(|e| {
            error!("Error fetching track details for {}: {}", track_id, e);
            QueryError::TrackDetails
        })?;

        let biography = self.biographies.resolve_biography(&track.artist.name).await;

        Ok(track.into_detail(biography))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::traits::mocks::{MockArtistCatalog, MockTrackCatalog};
    use crate::models::{AlbumRef, ArtistRecord, ArtistRef, Track};
    use tokio_test::{assert_err, assert_ok};

    fn formidable() -> Track {
        Track {
            id: "1".to_string(),
            title: "Formidable".to_string(),
            duration: Some(213),
            explicit: false,
            artist: ArtistRef {
                id: "5".to_string(),
                name: "Stromae".to_string(),
                picture: Some("url_picture".to_string()),
            },
            album: AlbumRef {
                id: "9".to_string(),
                title: "Racine Carrée".to_string(),
                cover_small: None,
                cover_big: Some("url_cover".to_string()),
            },
        }
    }

    #[test]
    fn test_welcome() {
        let explorer = SongsExplorer::new(MockTrackCatalog::default(), MockArtistCatalog::no_hits());
        assert_eq!(explorer.welcome(), "Welcome to Songs Explorer w/ Deezer 🎧");
        assert_eq!(explorer.welcome(), explorer.welcome());
    }

    #[test]
    fn test_search_params_defaults() {
        assert_eq!(
            SearchParams::from_options(None, Some(25)),
            SearchParams {
                limit: 50,
                offset: 25
            }
        );
    }

    #[tokio::test]
    async fn test_search_tracks() {
        let page = SearchPage {
            data: vec![formidable()],
            total: 1,
            prev: None,
            next: Some("cursor".to_string()),
        };
        let explorer = SongsExplorer::new(
            MockTrackCatalog::with_page(page),
            MockArtistCatalog::no_hits(),
        );

        let result = assert_ok!(
            explorer
                .search_tracks("formidable", SearchParams::default())
                .await
        );
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.data[0].title, "Formidable");
        assert_eq!(result.data[0].artist.name, "Stromae");
        assert_eq!(result.next.as_deref(), Some("cursor"));
        assert_eq!(
            explorer.tracks.last_search.lock().unwrap().clone(),
            Some(("formidable".to_string(), 50, 0))
        );
        // no enrichment for search
        assert_eq!(explorer.biographies().catalog().search_count(), 0);
    }

    #[tokio::test]
    async fn test_search_tracks_error() {
        let explorer = SongsExplorer::new(
            MockTrackCatalog::failing("API Error"),
            MockArtistCatalog::no_hits(),
        );

        let err = assert_err!(
            explorer
                .search_tracks("invalid", SearchParams::default())
                .await
        );
        assert_eq!(err.to_string(), "Unable to search tracks");
    }

    #[tokio::test]
    async fn test_track_details_with_biography() {
        let explorer = SongsExplorer::new(
            MockTrackCatalog::with_track(formidable()),
            MockArtistCatalog::found(ArtistRecord::with_profile("123", "Artist biography")),
        );

        let detail = assert_ok!(explorer.get_track_details("1").await);
        assert_eq!(detail.title, "Formidable");
        assert_eq!(
            detail.artist.biography.as_ref().map(|b| b.as_str()),
            Some("Artist biography")
        );
        assert_eq!(detail.album.title, "Racine Carrée");
        assert_eq!(
            explorer
                .biographies()
                .catalog()
                .last_name
                .lock()
                .unwrap()
                .as_deref(),
            Some("Stromae")
        );
    }

    #[tokio::test]
    async fn test_track_details_track_error() {
        let explorer = SongsExplorer::new(
            MockTrackCatalog::failing("Deezer API Error"),
            MockArtistCatalog::found(ArtistRecord::with_profile("1", "bio")),
        );

        let err = assert_err!(explorer.get_track_details("invalid_id").await);
        assert_eq!(err.to_string(), "Unable to fetch track details");
        assert_eq!(explorer.biographies().catalog().search_count(), 0);
    }

    #[tokio::test]
    async fn test_track_details_biography_not_found() {
        let explorer = SongsExplorer::new(
            MockTrackCatalog::with_track(formidable()),
            MockArtistCatalog::no_hits(),
        );

        let detail = assert_ok!(explorer.get_track_details("1").await);
        assert_eq!(detail.artist.biography, None);
    }

    #[tokio::test]
    async fn test_track_details_survives_biography_failures() {
        let failing_catalogs = [
            MockArtistCatalog::search_fails("network down"),
            MockArtistCatalog::fetch_fails("123", "HTTP 500"),
            MockArtistCatalog::found(ArtistRecord::without_profile("123")),
        ];

        for artists in failing_catalogs {
            let explorer =
                SongsExplorer::new(MockTrackCatalog::with_track(formidable()), artists);

            let detail = assert_ok!(explorer.get_track_details("1").await);
            assert_eq!(detail.artist.biography, None);
            assert_eq!(detail.id, "1");
            assert_eq!(detail.duration, Some(213));
            assert_eq!(detail.artist.picture.as_deref(), Some("url_picture"));
            assert_eq!(detail.album.cover_big.as_deref(), Some("url_cover"));
        }
    }
}
