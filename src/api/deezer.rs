//! Deezer track catalog client.
//!
//! This module provides a client for the public Deezer API (api.deezer.com).
//! No authentication is required.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use super::{check_status, endpoint_url};
use crate::config::Config;
use crate::converters;
use crate::error::{ExplorerError, Result};
use crate::models::{SearchPage, Track};

/// Deezer reports unknown IDs with this exception type inside a 200 body.
const NOT_FOUND_EXCEPTION: &str = "DataException";

/// Public Deezer API client.
///
/// # Example
///
/// ```rust,no_run
/// use songs_explorer::{Config, DeezerApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = DeezerApi::new(&Config::new("unused"))?;
///     let track = api.get_track("3135556").await?;
///     println!("Track: {} by {}", track.title, track.artist.name);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DeezerApi {
    client: Client,
    base_url: String,
}

impl DeezerApi {
    /// Create a new Deezer API client.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.deezer_base_url.clone(),
        })
    }

    /// Make a GET request with query parameters.
    ///
    /// Deezer answers most errors with HTTP 200 and an `error` object in
    /// the body; both that and a non-success status are turned into errors.
    async fn get_api(&self, segments: &[&str], params: &[(&str, &str)]) -> Result<Value> {
        let url = endpoint_url(&self.base_url, segments)?;
        debug!("GET {} with params: {:?}", url, params);

        let response = self.client.get(url).query(params).send().await?;
        let response = check_status(response).await?;

        let data: Value = serde_json::from_str(&response.text().await?)?;

        if let Some(error) = data.get("error") {
            let kind = error
                .get("type")
                .and_then(|t| t.as_str())
                .unwrap_or("Exception");
            let error_msg = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error");
            error!("Deezer API error: {}: {}", kind, error_msg);
            return Err(ExplorerError::ApiError(format!("{}: {}", kind, error_msg)));
        }

        Ok(data)
    }

    /// Get a track by ID.
    pub async fn get_track(&self, track_id: &str) -> Result<Track> {
        let track_json = self
            .get_api(&["track", track_id], &[])
            .await
            .map_err(|e| match e {
                ExplorerError::ApiError(msg) if msg.starts_with(NOT_FOUND_EXCEPTION) => {
                    ExplorerError::TrackNotFound(track_id.to_string())
                }
                other => other,
            })?;

        converters::parse_track(&track_json)
    }

    /// Search for tracks, one page at a time.
    pub async fn search_tracks(&self, query: &str, limit: u32, offset: u32) -> Result<SearchPage> {
        let response = self
            .get_api(
                &["search", "track"],
                &[
                    ("q", query),
                    ("limit", &limit.to_string()),
                    ("index", &offset.to_string()),
                ],
            )
            .await?;

        converters::parse_search_page(&response)
    }
}
