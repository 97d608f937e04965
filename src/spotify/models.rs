//! Records returned by the Spotify Web API.
//!
//! Only the fields used by the explorer are modeled. Anything the API may
//! omit or send as `null` is optional or defaulted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRef {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    /// Missing on simplified tracks, e.g. the tracks of an album.
    #[serde(default)]
    pub album: Option<AlbumRef>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub duration_ms: u64,
}

impl Track {
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub total_tracks: u32,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub owner: Option<PlaylistOwner>,
    #[serde(default)]
    pub tracks: Option<PlaylistTracksRef>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub public: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
    /// Beats per minute.
    pub tempo: f64,
    pub energy: f64,
    pub danceability: f64,
    /// Musical positiveness.
    pub valence: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub speechiness: f64,
    /// Decibels, usually between -60 and 0.
    pub loudness: f64,
    /// Pitch class, -1 when no key was detected.
    pub key: i32,
    /// 0 minor, 1 major.
    pub mode: i32,
    pub time_signature: i32,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackWithFeatures {
    #[serde(flatten)]
    pub track: Track,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_features: Option<AudioFeatures>,
}

/// A page of results. Some endpoints return `null` entries, those are skipped
/// by [`Paging::into_items`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paging<T> {
    #[serde(default)]
    pub items: Vec<Option<T>>,
    #[serde(default)]
    pub total: u32,
}

impl<T> Paging<T> {
    pub fn into_items(self) -> Vec<T> {
        self.items.into_iter().flatten().collect()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<Paging<Track>>,
    #[serde(default)]
    pub artists: Option<Paging<Artist>>,
    #[serde(default)]
    pub albums: Option<Paging<Album>>,
    #[serde(default)]
    pub playlists: Option<Paging<Playlist>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TracksResponse {
    #[serde(default)]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AudioFeaturesResponse {
    #[serde(default)]
    pub audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistsResponse {
    pub playlists: Paging<Playlist>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenreSeedsResponse {
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    /// Lifetime of the token in seconds.
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simplified_track_without_album() {
        let s = r#"{
            "id": "t1",
            "name": "So What",
            "artists": [{"id": "a1", "name": "Miles Davis"}, {"name": "John Coltrane"}],
            "preview_url": null,
            "duration_ms": 562000
        }"#;
        match serde_json::from_str::<Track>(s) {
            Ok(track) => {
                assert!(track.album.is_none());
                assert!(track.preview_url.is_none());
                assert_eq!(track.artist_names(), "Miles Davis, John Coltrane");
                assert_eq!(track.external_urls.spotify, None);
            }
            Err(err) => assert!(false, "Could not parse track: {}", err),
        }
    }

    #[test]
    fn parses_playlist_with_null_description() {
        let s = r#"{
            "id": "p1",
            "name": "Jazz Classics",
            "description": null,
            "images": [{"url": "http://img", "height": null, "width": null}],
            "owner": {"id": "spotify", "display_name": "Spotify"},
            "tracks": {"total": 50},
            "external_urls": {"spotify": "https://open.spotify.com/playlist/p1"},
            "public": true
        }"#;
        let playlist: Playlist = serde_json::from_str(s).unwrap();
        assert_eq!(playlist.description, None);
        assert_eq!(playlist.tracks.unwrap().total, 50);
        assert_eq!(playlist.images[0].height, None);
    }

    #[test]
    fn paging_skips_null_items() {
        let s = r#"{"items": [null, {"id": "p1", "name": "Mix"}], "total": 2}"#;
        let page: Paging<Playlist> = serde_json::from_str(s).unwrap();
        let items = page.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "p1");
    }

    #[test]
    fn paging_without_items_is_empty() {
        let page: Paging<Track> = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(page.into_items().is_empty());

        let response: SearchResponse =
            serde_json::from_str(r#"{"artists": {"items": [], "total": 0}}"#).unwrap();
        assert!(response.tracks.is_none());
        assert_eq!(response.artists.map(|p| p.total), Some(0));
    }

    #[test]
    fn track_with_features_flattens_track_fields() {
        let track = Track {
            id: "t1".to_string(),
            name: "Song".to_string(),
            artists: vec![],
            album: None,
            preview_url: None,
            external_urls: ExternalUrls::default(),
            duration_ms: 1000,
        };
        let value = serde_json::to_value(TrackWithFeatures {
            track,
            audio_features: None,
        })
        .unwrap();
        assert_eq!(value["id"], "t1");
        assert!(value.get("audio_features").is_none());
    }
}
