use log::{debug, warn};
use serde::Deserialize;

use crate::clients::{entities::Song, errors::Result};

/// Public endpoint used when `MUSIC_API_URL` is not set
const DEFAULT_API_URL: &str = "https://robo-music-api.onrender.com/music/my-api";

#[derive(Deserialize, Debug)]
struct TrendingResponse {
    #[serde(default)]
    data: Vec<Song>,
}

#[derive(Deserialize, Debug)]
struct SearchResponse {
    success: bool,
    #[serde(default)]
    data: Vec<Song>,
}

impl SearchResponse {
    // A search payload is usable only when the API flags success and the
    // list is non-empty; everything else means "no new results".
    fn into_results(self) -> Option<Vec<Song>> {
        if self.success && !self.data.is_empty() {
            Some(self.data)
        } else {
            None
        }
    }
}

/// Boundary to the remote song-search API.
///
/// Collaborator failures never cross this boundary: trending collapses to an
/// empty list, search collapses to `None`. Callers decide nothing about
/// transport or payload shape.
#[allow(async_fn_in_trait)]
pub trait SongApi {
    /// Trending songs, empty when the collaborator fails
    async fn fetch_trending(&self) -> Vec<Song>;

    /// Search results, or `None` on failure signal, empty payload or
    /// transport error. `query` must already be trimmed and non-empty.
    async fn search(&self, query: &str) -> Option<Vec<Song>>;
}

/// HTTP client for the remote song-search API
pub struct MusicApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl MusicApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        MusicApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    // Create a MusicApiClient from the MUSIC_API_URL environment variable,
    // falling back to the public endpoint
    pub fn try_default() -> Result<Self> {
        let base_url =
            std::env::var("MUSIC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Ok(MusicApiClient::new(base_url))
    }

    async fn get_trending(&self) -> Result<Vec<Song>> {
        let response: TrendingResponse = self
            .http
            .get(&self.base_url)
            .send()
            .await?
            .json()
            .await?;
        Ok(response.data)
    }

    async fn get_search(&self, query: &str) -> Result<SearchResponse> {
        let url = format!("{}/{}", self.base_url, query);
        let response: SearchResponse = self.http.get(&url).send().await?.json().await?;
        Ok(response)
    }
}

impl SongApi for MusicApiClient {
    async fn fetch_trending(&self) -> Vec<Song> {
        match self.get_trending().await {
            Ok(songs) => {
                debug!("Fetched {} trending songs", songs.len());
                songs
            }
            Err(e) => {
                warn!("Error fetching trending songs: {e}");
                Vec::new()
            }
        }
    }

    async fn search(&self, query: &str) -> Option<Vec<Song>> {
        match self.get_search(query).await {
            Ok(response) => {
                let results = response.into_results();
                if results.is_none() {
                    debug!("Search for {query:?} returned no usable results");
                }
                results
            }
            Err(e) => {
                warn!("Error searching songs: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trending_body_without_data_decodes_to_empty_list() {
        let response: TrendingResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn search_payload_usable_only_on_success_with_songs() {
        let body = r#"{
            "success": true,
            "data": [{
                "songUrl": "u", "songTitle": "t", "artistName": "a", "songImage": "i"
            }]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_results().map(|s| s.len()), Some(1));
    }

    #[test]
    fn failed_or_empty_search_payloads_are_unusable() {
        let failed: SearchResponse =
            serde_json::from_str(r#"{"success": false, "data": []}"#).unwrap();
        assert!(failed.into_results().is_none());

        let empty: SearchResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(empty.into_results().is_none());
    }
}
