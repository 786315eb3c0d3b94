use std::io;
use std::path::PathBuf;

use log::debug;

use crate::clients::{entities::Song, errors::Result};

/// Name of the single slot mirroring the current result list
const SEARCH_RESULTS_KEY: &str = "search_results";

/// Single-slot store for the cached result list.
///
/// `get` distinguishes an absent slot (`None`) from a stored empty list;
/// `set` is a full replacement; deleting an absent slot succeeds.
#[allow(async_fn_in_trait)]
pub trait SongStore {
    /// Stored result list, or `None` if the slot was never set or deleted
    async fn get(&self) -> Option<Vec<Song>>;

    /// Replace the slot contents with the given list
    async fn set(&self, songs: &[Song]) -> Result<()>;

    /// Remove the slot entirely
    async fn delete(&self) -> Result<()>;
}

/// File-backed store keeping the slot as a JSON file in the cache directory
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: PathBuf) -> Self {
        LocalStorage { path }
    }

    pub fn try_default() -> Self {
        let path = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp")) // Fallback to /tmp if cache directory can't be determined
            .join(format!(".rtunes_{SEARCH_RESULTS_KEY}.json"));
        debug!("Using local storage slot at {path:?}");
        LocalStorage::new(path)
    }
}

impl SongStore for LocalStorage {
    async fn get(&self) -> Option<Vec<Song>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) => {
                debug!("No stored search results ({e})");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(songs) => {
                debug!("Loaded stored search results from {:?}", self.path);
                Some(songs)
            }
            Err(e) => {
                debug!("Failed to decode stored search results: {e}");
                None
            }
        }
    }

    async fn set(&self, songs: &[Song]) -> Result<()> {
        let contents = serde_json::to_string(songs)?;
        tokio::fs::write(&self.path, contents).await?;
        debug!("Stored {} songs in {:?}", songs.len(), self.path);
        Ok(())
    }

    async fn delete(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!("Deleted stored search results at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
