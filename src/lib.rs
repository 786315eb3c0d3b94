//! Rtunes - Search, cache and play songs from a remote music API
//!
//! This library keeps a deduplicated list of search results mirrored to local
//! storage, so results survive across runs until explicitly cleared.

/// Result cache reconciling new and stored search results
pub mod cache;
/// Client modules for the remote API and local storage
pub mod clients;
/// Playback selection
pub mod player;
