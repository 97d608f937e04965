//! Spotify Web API access: client credentials, search, recommendations and
//! audio features.

mod auth;
mod client;
mod error;
pub mod models;
mod request;
mod seeds;

pub use auth::{ClientCredentials, TokenCache, TOKEN_EXPIRY_MARGIN};
pub use client::{
    SpotifyClient, SpotifyClientConfig, DEFAULT_ACCOUNTS_BASE_URL,
    DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SEC, MAX_FEATURE_BATCH,
};
pub use error::{FeatureFetchError, SpotifyError};
pub use models::{AudioFeatures, Track, TrackWithFeatures};
pub use request::{FeatureFilters, RecommendationRequest};
pub use seeds::seed_genre_for;
