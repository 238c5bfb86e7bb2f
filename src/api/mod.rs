//! API clients for the external catalogs.
//!
//! This module provides two API clients:
//! - [`DeezerApi`]: track catalog (no auth required)
//! - [`DiscogsApi`]: artist catalog (token required)
//!
//! Both are reached through the [`TrackCatalog`] and [`ArtistCatalog`]
//! traits.

pub mod deezer;
pub mod discogs;
pub mod traits;

#[cfg(test)]
mod test_server;

use reqwest::{Response, Url};

use crate::error::{ExplorerError, Result};

pub use deezer::DeezerApi;
pub use discogs::DiscogsApi;
pub use traits::{ArtistCatalog, TrackCatalog};

/// Build `<base_url>/<segment>/<segment>...`, escaping each segment.
///
/// Ids go through here so that `?`, `#` or `/` in an id stay inside
/// their path segment.
pub(crate) fn endpoint_url(base_url: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ExplorerError::Config(format!("invalid base URL {}: {}", base_url, e)))?;

    url.path_segments_mut()
        .map_err(|_| ExplorerError::Config(format!("base URL cannot have a path: {}", base_url)))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Turn a non-success HTTP status into [`ExplorerError::HttpStatus`].
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ExplorerError::HttpStatus {
        status: status.as_u16(),
        body: body.chars().take(200).collect(),
    })
}
