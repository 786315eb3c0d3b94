use serde::{Deserialize, Serialize};

/// One track as returned by the music API.
///
/// The stream address doubles as the primary key: no two entries in a result
/// list may share the same `song_url`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Playable stream address, unique within a result list
    pub song_url: String,
    /// Track title
    pub song_title: String,
    /// Primary artist name
    pub artist_name: String,
    /// Thumbnail address
    pub song_image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_wire_fields() {
        let json = r#"{
            "songUrl": "https://cdn.example.com/a.mp3",
            "songTitle": "First Light",
            "artistName": "The Harbor",
            "songImage": "https://cdn.example.com/a.jpg"
        }"#;

        let song: Song = serde_json::from_str(json).unwrap();
        assert_eq!(song.song_url, "https://cdn.example.com/a.mp3");
        assert_eq!(song.song_title, "First Light");
        assert_eq!(song.artist_name, "The Harbor");
        assert_eq!(song.song_image, "https://cdn.example.com/a.jpg");
    }
}
