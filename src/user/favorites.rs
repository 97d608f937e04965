use serde::{Deserialize, Serialize};

/// Favorited genre and track ids, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub tracks: Vec<String>,
}

/// Removes `id` if present, appends it otherwise. Returns whether it's now present.
fn toggle(ids: &mut Vec<String>, id: &str) -> bool {
    match ids.iter().position(|existing| existing == id) {
        Some(index) => {
            ids.remove(index);
            false
        }
        None => {
            ids.push(id.to_string());
            true
        }
    }
}

impl Favorites {
    pub fn toggle_genre(&mut self, genre_id: &str) -> bool {
        toggle(&mut self.genres, genre_id)
    }

    pub fn toggle_track(&mut self, track_id: &str) -> bool {
        toggle(&mut self.tracks, track_id)
    }

    pub fn is_genre_favorite(&self, genre_id: &str) -> bool {
        self.genres.iter().any(|id| id == genre_id)
    }

    pub fn is_track_favorite(&self, track_id: &str) -> bool {
        self.tracks.iter().any(|id| id == track_id)
    }

    pub fn clear(&mut self) {
        self.genres.clear();
        self.tracks.clear();
    }
}
