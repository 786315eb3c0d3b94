use log::{debug, info};

use crate::clients::{
    LocalStorage, MusicApiClient,
    entities::Song,
    errors::Result,
    local_storage::SongStore,
    music_api::SongApi,
};

// Configuration for the ResultCache struct
pub struct Config {
    pub api: MusicApiClient,
    pub storage: LocalStorage,
}

pub struct ConfigBuilder {
    api: Option<MusicApiClient>,
    storage: Option<LocalStorage>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            api: None,
            storage: None,
        }
    }

    pub fn api(mut self, api: MusicApiClient) -> Self {
        self.api = Some(api);
        self
    }

    pub fn storage(mut self, storage: LocalStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn build(self) -> Result<Config> {
        let api = match self.api {
            Some(a) => a,
            None => MusicApiClient::try_default()?,
        };
        let storage = match self.storage {
            Some(s) => s,
            None => LocalStorage::try_default(),
        };
        Ok(Config { api, storage })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Combine new and existing results, dropping duplicate stream addresses.
///
/// New results come first; when a `song_url` appears in both lists the entry
/// from `new_results` wins, keeping its fields and its position in the
/// concatenated order.
#[must_use]
pub fn merge_search_results(new_results: Vec<Song>, current_results: Vec<Song>) -> Vec<Song> {
    let mut merged: Vec<Song> = Vec::with_capacity(new_results.len() + current_results.len());
    for song in new_results.into_iter().chain(current_results) {
        if !merged.iter().any(|s| s.song_url == song.song_url) {
            merged.push(song);
        }
    }
    merged
}

/// Authoritative list of currently displayed songs, mirrored to storage.
///
/// Every state change (trending adopt, merge, remove) rewrites the persisted
/// slot; collaborator failures never do. Operations take `&mut self` so there
/// is a single writer per cache.
pub struct ResultCache<A: SongApi, S: SongStore> {
    api: A,
    storage: S,
    songs: Vec<Song>,
}

impl ResultCache<MusicApiClient, LocalStorage> {
    pub fn from_config(config: Config) -> Self {
        ResultCache::new(config.api, config.storage)
    }
}

impl<A: SongApi, S: SongStore> ResultCache<A, S> {
    pub fn new(api: A, storage: S) -> Self {
        ResultCache {
            api,
            storage,
            songs: Vec::new(),
        }
    }

    /// Currently displayed songs
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Load the stored result list, falling back to a trending fetch when
    /// the slot is absent or empty.
    pub async fn initialize(&mut self) -> Result<&[Song]> {
        if let Some(stored) = self.storage.get().await
            && !stored.is_empty()
        {
            info!("Loaded {} stored songs", stored.len());
            self.songs = stored;
            return Ok(&self.songs);
        }
        self.fetch_trending().await
    }

    /// Replace the current list with trending songs, storing a non-empty
    /// result. A collaborator failure leaves an empty list and stores nothing.
    pub async fn fetch_trending(&mut self) -> Result<&[Song]> {
        info!("Fetching trending songs ...");
        self.songs = self.api.fetch_trending().await;
        if !self.songs.is_empty() {
            self.storage.set(&self.songs).await?;
        }
        Ok(&self.songs)
    }

    /// Search the API and merge usable results into the current list.
    ///
    /// A blank query is a no-op; so is any search outcome other than an
    /// explicit success with a non-empty payload.
    pub async fn search(&mut self, query: &str) -> Result<&[Song]> {
        let query = query.trim();
        if query.is_empty() {
            debug!("Ignoring blank search query");
            return Ok(&self.songs);
        }

        info!("Searching for {query:?} ...");
        if let Some(new_results) = self.api.search(query).await {
            let current = std::mem::take(&mut self.songs);
            self.songs = merge_search_results(new_results, current);
            self.storage.set(&self.songs).await?;
        }
        Ok(&self.songs)
    }

    /// Drop every entry matching the given stream address and store the
    /// remainder, even when nothing is left.
    pub async fn remove_song(&mut self, song_url: &str) -> Result<&[Song]> {
        self.songs.retain(|song| song.song_url != song_url);
        self.storage.set(&self.songs).await?;
        Ok(&self.songs)
    }

    /// Delete the stored slot and restore trending songs
    pub async fn clear(&mut self) -> Result<&[Song]> {
        self.storage.delete().await?;
        self.fetch_trending().await
    }
}
