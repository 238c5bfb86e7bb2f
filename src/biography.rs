//! Artist biography resolution.
//!
//! Resolving a biography is a two-step pipeline against the artist
//! catalog: search by name, then fetch the first hit by ID. The raw
//! profile text is then run through [`sanitize`].
//!
//! Biographies are an enrichment. [`BiographyResolver::resolve_biography`]
//! never fails: every provider error and every missing-data case
//! becomes `None`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::api::ArtistCatalog;
use crate::error::Result;
use crate::models::{ArtistRecord, Biography};

/// Outcome of the search-then-fetch lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtistLookup {
    /// The top search hit and its full record.
    Found(ArtistRecord),
    /// The search returned no hits.
    NotFound,
}

/// Resolves sanitized biographies from an artist catalog.
#[derive(Debug, Clone)]
pub struct BiographyResolver<A> {
    catalog: A,
}

impl<A: ArtistCatalog> BiographyResolver<A> {
    pub fn new(catalog: A) -> Self {
        Self { catalog }
    }

    /// Access the underlying catalog.
    pub fn catalog(&self) -> &A {
        &self.catalog
    }

    /// Search for `artist_name` and fetch the record of the first hit.
    ///
    /// Provider failures are returned as errors; an empty result set is
    /// [`ArtistLookup::NotFound`].
    pub async fn lookup_artist(&self, artist_name: &str) -> Result<ArtistLookup> {
        let hits = self.catalog.search_artists(artist_name).await?;

        let Some(top) = hits.into_iter().next() else {
            return Ok(ArtistLookup::NotFound);
        };

        let record = self.catalog.get_artist(&top.id).await?;
        Ok(ArtistLookup::Found(record))
    }

    /// Resolve the sanitized biography for `artist_name`, if any.
    pub async fn resolve_biography(&self, artist_name: &str) -> Option<Biography> {
        let record = match self.lookup_artist(artist_name).await {
            Ok(ArtistLookup::Found(record)) => record,
            Ok(ArtistLookup::NotFound) => {
                debug!("No artist catalog match for {:?}", artist_name);
                return None;
            }
            Err(e) => {
                warn!("Error finding biography for {:?}: {}", artist_name, e);
                return None;
            }
        };

        match record.profile {
            Some(raw) => Some(Biography::new(sanitize(&raw))),
            None => {
                debug!("Artist {} has no profile", record.id);
                None
            }
        }
    }
}

/// `[a=...]` / `[l=...]` cross-reference markers.
static LINK_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(a|l)=[^\]]+\]").expect("valid marker pattern"));

/// Whitespace runs. Counts U+FEFF as whitespace and U+0085 as text.
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[[\s\x{FEFF}]&&[^\x{85}]]+").expect("valid whitespace pattern")
});

/// Turn a raw provider profile into display-ready text.
///
/// Steps, in order:
/// 1. drop `[a=...]` and `[l=...]` cross-reference markers, payload included
/// 2. `\r\n\r\n` becomes `\n`
/// 3. remaining `\r\n` become a space
/// 4. whitespace runs collapse to one space, ends trimmed
///
/// Other bracketed tags (`[r=...]`, `[url=...]`, ...) are left as they are.
pub fn sanitize(raw: &str) -> String {
    let stripped = LINK_MARKER.replace_all(raw, "");
    let paragraphs = stripped.replace("\r\n\r\n", "\n");
    let joined = paragraphs.replace("\r\n", " ");
    WHITESPACE_RUN
        .replace_all(&joined, " ")
        .trim_matches(' ')
        .to_string()
}
