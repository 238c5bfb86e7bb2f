//! Data models for provider responses and query results.
//!
//! This module contains the request-scoped view objects: tracks, their
//! nested artist/album references, search pages, and artist catalog
//! records.

pub mod artist;
pub mod track;

// Re-exports for convenience
pub use artist::{ArtistRecord, ArtistSearchHit, Biography};
pub use track::{AlbumRef, ArtistDetail, ArtistRef, SearchPage, Track, TrackDetail};
