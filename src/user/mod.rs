//! Personal data: the user's own state, persisted through a key-value store.

mod collections;
mod favorites;
mod history;
mod learning;
mod notes;
mod persisted;
mod playlists;
mod search_history;
mod store;
mod tags;

pub use collections::{
    CollectionUpdate, Collections, PersonalCollection, DEFAULT_COLLECTION_COLOR,
};
pub use favorites::Favorites;
pub use history::{
    GenrePlayCount, ListeningHistory, ListeningHistoryItem, MAX_HISTORY_ITEMS, REPLAY_WINDOW_MS,
};
pub use learning::LearningProgress;
pub use notes::GenreNotes;
pub use persisted::{Persisted, Persistence, StoredValue};
pub use playlists::{Playlist, PlaylistUpdate, Playlists};
pub use search_history::{SearchHistory, MAX_RECENT_SEARCHES};
pub use store::{InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore, VERSIONED_SCHEMAS};
pub use tags::GenreTags;

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

const FAVORITES_KEY: &str = "favorites";
const NOTES_KEY: &str = "genre-notes";
const TAGS_KEY: &str = "genre-tags";
const PLAYLISTS_KEY: &str = "playlists";
const LISTENING_HISTORY_KEY: &str = "listening-history";
const LEARNING_PROGRESS_KEY: &str = "learning-progress";
const COLLECTIONS_KEY: &str = "collections";
const SEARCH_HISTORY_KEY: &str = "search-history";

fn open_value<T>(store: &Arc<dyn KeyValueStore>, key: &str) -> Result<Persisted<T>>
where
    T: Serialize + DeserializeOwned + Default + 'static,
{
    Persisted::load(Box::new(StoredValue::new(store.clone(), key)))
}

/// Every piece of personal state, loaded from one store.
pub struct PersonalData {
    pub favorites: Persisted<Favorites>,
    pub notes: Persisted<GenreNotes>,
    pub tags: Persisted<GenreTags>,
    pub playlists: Persisted<Playlists>,
    pub listening_history: Persisted<ListeningHistory>,
    pub learning_progress: Persisted<LearningProgress>,
    pub collections: Persisted<Collections>,
    pub search_history: Persisted<SearchHistory>,
}

impl PersonalData {
    pub fn open(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let data = Self {
            favorites: open_value(&store, FAVORITES_KEY)?,
            notes: open_value(&store, NOTES_KEY)?,
            tags: open_value(&store, TAGS_KEY)?,
            playlists: open_value(&store, PLAYLISTS_KEY)?,
            listening_history: open_value(&store, LISTENING_HISTORY_KEY)?,
            learning_progress: open_value(&store, LEARNING_PROGRESS_KEY)?,
            collections: open_value(&store, COLLECTIONS_KEY)?,
            search_history: open_value(&store, SEARCH_HISTORY_KEY)?,
        };
        debug!(
            favorite_genres = data.favorites.get().genres.len(),
            playlists = data.playlists.get().all().len(),
            "Loaded personal data"
        );
        Ok(data)
    }
}
