use crate::spotify::Track;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tracks: Vec<Track>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changes to apply to a playlist. `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct PlaylistUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

/// The user's own playlists, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Playlists(Vec<Playlist>);

impl Playlists {
    /// Creates an empty playlist and returns its id.
    pub fn create(&mut self, name: &str, description: Option<&str>) -> String {
        let now = Utc::now();
        let id = Uuid::new_v4().simple().to_string();
        self.0.push(Playlist {
            id: id.clone(),
            name: name.to_string(),
            description: description.map(str::to_string),
            tracks: vec![],
            created_at: now,
            updated_at: now,
        });
        id
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Playlist> {
        self.0.iter_mut().find(|p| p.id == id)
    }

    pub fn update(&mut self, id: &str, update: PlaylistUpdate) -> bool {
        let Some(playlist) = self.get_mut(id) else {
            return false;
        };
        if let Some(name) = update.name {
            playlist.name = name;
        }
        if let Some(description) = update.description {
            playlist.description = description;
        }
        playlist.updated_at = Utc::now();
        true
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|p| p.id != id);
        self.0.len() != before
    }

    /// Appends a track. A track already in the playlist is moved to the end.
    pub fn add_track(&mut self, playlist_id: &str, track: Track) -> bool {
        let Some(playlist) = self.get_mut(playlist_id) else {
            return false;
        };
        playlist.tracks.retain(|t| t.id != track.id);
        playlist.tracks.push(track);
        playlist.updated_at = Utc::now();
        true
    }

    pub fn remove_track(&mut self, playlist_id: &str, track_id: &str) -> bool {
        let Some(playlist) = self.get_mut(playlist_id) else {
            return false;
        };
        let before = playlist.tracks.len();
        playlist.tracks.retain(|t| t.id != track_id);
        playlist.updated_at = Utc::now();
        playlist.tracks.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&Playlist> {
        self.0.iter().find(|p| p.id == id)
    }

    pub fn all(&self) -> &[Playlist] {
        &self.0
    }
}
