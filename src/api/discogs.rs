//! Discogs artist catalog client.
//!
//! Every request carries the configured personal access token in the
//! `Authorization: Discogs token=...` header. The token is neither
//! validated nor refreshed here.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use super::{check_status, endpoint_url};
use crate::config::Config;
use crate::converters;
use crate::error::{ExplorerError, Result};
use crate::models::{ArtistRecord, ArtistSearchHit};

/// Discogs API client.
#[derive(Debug, Clone)]
pub struct DiscogsApi {
    client: Client,
    base_url: String,
}

impl DiscogsApi {
    /// Create a new Discogs API client.
    ///
    /// Fails if the token cannot be used as a header value.
    pub fn new(config: &Config) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Discogs token={}", config.discogs_token))
            .map_err(|e| ExplorerError::Config(format!("invalid Discogs token: {}", e)))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.discogs_base_url.clone(),
        })
    }

    /// Make an authenticated GET request.
    async fn get_api(&self, segments: &[&str], params: &[(&str, &str)]) -> Result<Value> {
        let url = endpoint_url(&self.base_url, segments)?;
        debug!("GET {} with params: {:?}", url, params);

        let response = self.client.get(url).query(params).send().await?;
        let response = check_status(response).await?;

        Ok(serde_json::from_str(&response.text().await?)?)
    }

    /// Search artists by name. Hits keep the provider's relevance order.
    pub async fn search_artists(&self, name: &str) -> Result<Vec<ArtistSearchHit>> {
        let response = self
            .get_api(&["database", "search"], &[("type", "artist"), ("q", name)])
            .await?;

        converters::parse_artist_hits(&response)
    }

    /// Get a full artist record by ID.
    pub async fn get_artist(&self, artist_id: &str) -> Result<ArtistRecord> {
        let artist_json = self
            .get_api(&["artists", artist_id], &[])
            .await
            .map_err(|e| match e {
                ExplorerError::HttpStatus { status, .. }
                    if status == StatusCode::NOT_FOUND.as_u16() =>
                {
                    ExplorerError::ArtistNotFound(artist_id.to_string())
                }
                other => other,
            })?;

        converters::parse_artist_record(&artist_json, artist_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server::CannedServer;
    use tokio_test::assert_ok;

    fn api_for(server: &CannedServer) -> DiscogsApi {
        let config = Config::new("secret").with_discogs_base_url(server.base_url.clone());
        DiscogsApi::new(&config).unwrap()
    }

    #[test]
    fn test_rejects_unusable_token() {
        let result = DiscogsApi::new(&Config::new("bad\ntoken"));
        assert!(matches!(result, Err(ExplorerError::Config(_))));
    }

    #[tokio::test]
    async fn test_search_artists_sends_token_and_query() {
        let server = CannedServer::start(vec![(
            200,
            r#"{"pagination":{"items":2},"results":[{"id":1289,"title":"Daft Punk"},{"id":77}]}"#
                .to_string(),
        )])
        .await;

        let hits = assert_ok!(api_for(&server).search_artists("Daft Punk").await);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "1289");

        let request = server.requests()[0].to_lowercase();
        assert!(request.starts_with("get /database/search?type=artist&q=daft+punk "));
        assert!(request.contains("authorization: discogs token=secret"));
    }

    #[tokio::test]
    async fn test_get_artist() {
        let server = CannedServer::start(vec![(
            200,
            r#"{"id":1289,"name":"Daft Punk","profile":"French duo [a=Thomas Bangalter]."}"#
                .to_string(),
        )])
        .await;

        let record = assert_ok!(api_for(&server).get_artist("1289").await);
        assert_eq!(record.id, "1289");
        assert_eq!(record.name.as_deref(), Some("Daft Punk"));
        assert_eq!(
            record.profile.as_deref(),
            Some("French duo [a=Thomas Bangalter].")
        );
        assert!(server.requests()[0].starts_with("GET /artists/1289 "));
    }

    #[tokio::test]
    async fn test_get_artist_not_found() {
        let server = CannedServer::start(vec![(
            404,
            r#"{"message":"Artist not found."}"#.to_string(),
        )])
        .await;

        let result = api_for(&server).get_artist("9").await;
        assert!(matches!(result, Err(ExplorerError::ArtistNotFound(id)) if id == "9"));
    }

    #[tokio::test]
    async fn test_get_artist_escapes_id() {
        let server = CannedServer::start(vec![(
            404,
            r#"{"message":"Artist not found."}"#.to_string(),
        )])
        .await;

        let result = api_for(&server).get_artist("1/../database/search").await;
        assert!(matches!(result, Err(ExplorerError::ArtistNotFound(_))));
        assert!(server.requests()[0].starts_with("GET /artists/1%2F..%2Fdatabase%2Fsearch "));
    }

    #[tokio::test]
    async fn test_error_body_truncated() {
        let server = CannedServer::start(vec![(500, "x".repeat(1000))]).await;

        let result = api_for(&server).search_artists("x").await;
        assert!(matches!(
            result,
            Err(ExplorerError::HttpStatus { status: 500, body }) if body.len() == 200
        ));
    }

    #[tokio::test]
    async fn test_unauthorized_is_error() {
        let server = CannedServer::start(vec![(
            401,
            r#"{"message":"You must authenticate to access this resource."}"#.to_string(),
        )])
        .await;

        let result = api_for(&server).search_artists("x").await;
        assert!(matches!(
            result,
            Err(ExplorerError::HttpStatus { status: 401, .. })
        ));
    }
}
