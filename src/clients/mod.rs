/// Data entities for songs
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Local storage for the persisted result list
pub mod local_storage;
/// Remote song-search API client
pub mod music_api;

pub use local_storage::LocalStorage;
pub use music_api::MusicApiClient;
