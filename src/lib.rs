//! Genre Explorer Library
//!
//! Music genre catalog, Spotify Web API access and the engines built on top
//! of them: recommendations, moods, statistics and comparison. Personal data
//! is persisted through the `user` module.

pub mod catalog;
pub mod compare;
pub mod config;
pub mod export;
pub mod mood;
pub mod recommend;
pub mod spotify;
pub mod sqlite_persistence;
pub mod stats;
pub mod user;

// Re-export commonly used types for convenience
pub use catalog::{load_catalog, Genre, GenreCatalog, GenreCategory};
pub use mood::Mood;
pub use spotify::{SpotifyClient, SpotifyError};
pub use user::{PersonalData, SqliteKeyValueStore};
