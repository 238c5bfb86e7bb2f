//! # Songs Explorer
//!
//! Track search and track details from Deezer, enriched with artist
//! biographies from Discogs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use songs_explorer::{Config, SearchParams, SongsExplorer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let explorer = SongsExplorer::from_config(&Config::new("your_discogs_token"))?;
//!
//!     // Search tracks (no biography enrichment)
//!     let page = explorer.search_tracks("daft punk", SearchParams::default()).await?;
//!     for track in &page.data {
//!         println!("{} - {}", track.artist.name, track.title);
//!     }
//!
//!     // Single track with the artist's biography
//!     let detail = explorer.get_track_details("3135556").await?;
//!     if let Some(bio) = &detail.artist.biography {
//!         println!("{}", bio);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Failure policy
//!
//! - Track lookup and search are required: failures surface as
//!   [`QueryError`] with a fixed message.
//! - Biographies are best-effort: failures are logged and the biography
//!   is simply absent.
//!
//! ## Low-Level APIs
//!
//! - [`DeezerApi`] - Track catalog (no auth required)
//! - [`DiscogsApi`] - Artist catalog (token required)
//! - [`BiographyResolver`] - Search-then-fetch biography pipeline

pub mod api;
pub mod biography;
pub mod config;
pub mod converters;
pub mod error;
mod explorer;
pub mod models;

// Main interface (recommended)
pub use explorer::{SearchParams, SongsExplorer, WELCOME_MESSAGE};

// Low-level APIs
pub use api::{ArtistCatalog, DeezerApi, DiscogsApi, TrackCatalog};
pub use biography::{sanitize, ArtistLookup, BiographyResolver};
pub use config::Config;
pub use error::{ExplorerError, QueryError};

pub use models::{
    AlbumRef, ArtistDetail, ArtistRecord, ArtistRef, ArtistSearchHit, Biography, SearchPage, Track,
    TrackDetail,
};
