//! Async HTTP client for the Spotify Web API.

use super::auth::{ClientCredentials, TokenCache};
use super::error::{FeatureFetchError, SpotifyError};
use super::models::{
    Album, Artist, AudioFeatures, AudioFeaturesResponse, GenreSeedsResponse, Paging, Playlist,
    PlaylistsResponse, SearchResponse, TokenResponse, Track, TrackWithFeatures, TracksResponse,
};
use super::request::{FeatureFilters, RecommendationRequest};
use super::seeds::seed_genre_for;
use futures::future::try_join_all;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_ACCOUNTS_BASE_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_TIMEOUT_SEC: u64 = 30;

/// Maximum number of ids accepted by the batch audio features endpoint.
pub const MAX_FEATURE_BATCH: usize = 100;

/// Maximum number of tracks the recommendations endpoint returns.
const MAX_RECOMMENDATIONS: u32 = 100;

/// Tracks requested per wanted track when filtering on preview availability.
const PREVIEW_OVERSAMPLING: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchType {
    Track,
    Artist,
    Album,
    Playlist,
}

impl SearchType {
    fn as_str(&self) -> &'static str {
        match self {
            SearchType::Track => "track",
            SearchType::Artist => "artist",
            SearchType::Album => "album",
            SearchType::Playlist => "playlist",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpotifyClientConfig {
    /// Base URL of the Web API, e.g. "https://api.spotify.com/v1".
    pub api_base_url: String,
    /// Base URL of the accounts service issuing tokens.
    pub accounts_base_url: String,
    pub timeout: Duration,
}

impl Default for SpotifyClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            accounts_base_url: DEFAULT_ACCOUNTS_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SEC),
        }
    }
}

pub struct SpotifyClient {
    http: reqwest::Client,
    credentials: ClientCredentials,
    token_cache: TokenCache,
    api_base_url: String,
    accounts_base_url: String,
}

impl SpotifyClient {
    pub fn new(
        credentials: ClientCredentials,
        config: SpotifyClientConfig,
    ) -> Result<Self, SpotifyError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SpotifyError::Connection(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            credentials,
            token_cache: TokenCache::new(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            accounts_base_url: config.accounts_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns a valid access token, requesting a new one when the cached
    /// token is missing or about to expire.
    pub async fn access_token(&self) -> Result<String, SpotifyError> {
        if let Some(token) = self.token_cache.get().await {
            return Ok(token);
        }

        let token = self.request_token().await?;
        self.token_cache
            .store(token.access_token.clone(), token.expires_in)
            .await;
        Ok(token.access_token)
    }

    async fn request_token(&self) -> Result<TokenResponse, SpotifyError> {
        let url = format!("{}/api/token", self.accounts_base_url);
        debug!(client_id = %self.credentials.client_id(), "Requesting Spotify access token");

        let response = self
            .http
            .post(&url)
            .basic_auth(
                self.credentials.client_id(),
                Some(self.credentials.client_secret()),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(SpotifyError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Spotify token request rejected");
            return Err(SpotifyError::Auth {
                status: status.as_u16(),
            });
        }

        parse_json(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    /// Sends an authorized GET request. The response is returned whatever its status.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response, SpotifyError> {
        let token = self.access_token().await?;
        let url = self.url(path);
        debug!(url = %url, ?query, "Spotify GET");

        self.http
            .get(&url)
            .query(query)
            .bearer_auth(token)
            .send()
            .await
            .map_err(SpotifyError::from_transport)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, SpotifyError> {
        let response = check_status(self.get(path, query).await?).await?;
        parse_json(response).await
    }

    async fn search(
        &self,
        query: &str,
        search_type: SearchType,
        limit: u32,
    ) -> Result<SearchResponse, SpotifyError> {
        self.get_json(
            "/search",
            &[
                ("q", query.to_string()),
                ("type", search_type.as_str().to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    /// Searches tracks tagged with the given provider genre.
    pub async fn search_tracks_by_genre(
        &self,
        genre: &str,
        limit: u32,
    ) -> Result<Vec<Track>, SpotifyError> {
        self.search_tracks(&format!("genre:\"{}\"", genre), limit)
            .await
    }

    pub async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>, SpotifyError> {
        let response = self.search(query, SearchType::Track, limit).await?;
        Ok(response.tracks.map(Paging::into_items).unwrap_or_default())
    }

    pub async fn search_artists(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Artist>, SpotifyError> {
        let response = self.search(query, SearchType::Artist, limit).await?;
        Ok(response.artists.map(Paging::into_items).unwrap_or_default())
    }

    pub async fn search_albums(&self, query: &str, limit: u32) -> Result<Vec<Album>, SpotifyError> {
        let response = self.search(query, SearchType::Album, limit).await?;
        Ok(response.albums.map(Paging::into_items).unwrap_or_default())
    }

    pub async fn search_playlists(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Playlist>, SpotifyError> {
        let response = self.search(query, SearchType::Playlist, limit).await?;
        Ok(response
            .playlists
            .map(Paging::into_items)
            .unwrap_or_default())
    }

    pub async fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Track>, SpotifyError> {
        let response: TracksResponse = self
            .get_json("/recommendations", &request.query_params())
            .await?;
        Ok(response.tracks)
    }

    /// Recommendations seeded by a catalog genre id.
    pub async fn recommendations_by_genre(
        &self,
        genre_id: &str,
        limit: u32,
    ) -> Result<Vec<Track>, SpotifyError> {
        let request = RecommendationRequest::for_genre(seed_genre_for(genre_id)).with_limit(limit);
        self.recommendations(&request).await
    }

    /// Recommendations for a catalog genre that have a preview, with their
    /// audio features attached.
    pub async fn recommendations_with_features(
        &self,
        genre_id: &str,
        limit: u32,
        filters: &FeatureFilters,
    ) -> Result<Vec<TrackWithFeatures>, FeatureFetchError> {
        let request_limit = limit
            .saturating_mul(PREVIEW_OVERSAMPLING)
            .min(MAX_RECOMMENDATIONS);
        let request = RecommendationRequest::for_genre(seed_genre_for(genre_id))
            .with_limit(request_limit)
            .with_filters(*filters);

        let tracks: Vec<Track> = self
            .recommendations(&request)
            .await?
            .into_iter()
            .filter(|track| track.preview_url.is_some())
            .take(limit as usize)
            .collect();

        self.tracks_with_features(tracks).await
    }

    /// Audio features of a single track, `None` if the provider has none.
    pub async fn audio_features(
        &self,
        track_id: &str,
    ) -> Result<Option<AudioFeatures>, SpotifyError> {
        let path = format!("/audio-features/{}", urlencoding::encode(track_id));
        let response = self.get(&path, &[]).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check_status(response).await?;
        parse_json(response).await.map(Some)
    }

    /// Audio features for many tracks, in the same order as `track_ids`.
    ///
    /// Ids are sent in batches of at most [`MAX_FEATURE_BATCH`], all batches
    /// in flight at once. Any failed batch fails the whole lookup.
    pub async fn fetch_features<S: AsRef<str>>(
        &self,
        track_ids: &[S],
    ) -> Result<Vec<Option<AudioFeatures>>, FeatureFetchError> {
        if track_ids.is_empty() {
            return Ok(vec![]);
        }

        // Warm the token cache so the batches don't all refresh it.
        self.access_token().await?;

        let ids: Vec<&str> = track_ids.iter().map(|id| id.as_ref()).collect();
        debug!(
            tracks = ids.len(),
            batches = ids.len().div_ceil(MAX_FEATURE_BATCH),
            "Fetching audio features"
        );

        let batches = try_join_all(
            ids.chunks(MAX_FEATURE_BATCH)
                .map(|batch| self.fetch_feature_batch(batch)),
        )
        .await?;

        Ok(batches.into_iter().flatten().collect())
    }

    async fn fetch_feature_batch(
        &self,
        ids: &[&str],
    ) -> Result<Vec<Option<AudioFeatures>>, FeatureFetchError> {
        let response: AudioFeaturesResponse = self
            .get_json("/audio-features", &[("ids", ids.join(","))])
            .await?;

        let by_id: HashMap<String, AudioFeatures> = response
            .audio_features
            .into_iter()
            .flatten()
            .map(|features| (features.id.clone(), features))
            .collect();

        Ok(ids.iter().map(|id| by_id.get(*id).cloned()).collect())
    }

    pub async fn tracks_with_features(
        &self,
        tracks: Vec<Track>,
    ) -> Result<Vec<TrackWithFeatures>, FeatureFetchError> {
        let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
        let features = self.fetch_features(&ids).await?;
        Ok(tracks
            .into_iter()
            .zip(features)
            .map(|(track, audio_features)| TrackWithFeatures {
                track,
                audio_features,
            })
            .collect())
    }

    pub async fn artist(&self, artist_id: &str) -> Result<Artist, SpotifyError> {
        let path = format!("/artists/{}", urlencoding::encode(artist_id));
        self.get_json(&path, &[]).await
    }

    pub async fn artist_top_tracks(
        &self,
        artist_id: &str,
        market: &str,
    ) -> Result<Vec<Track>, SpotifyError> {
        let path = format!("/artists/{}/top-tracks", urlencoding::encode(artist_id));
        let response: TracksResponse = self
            .get_json(&path, &[("market", market.to_string())])
            .await?;
        Ok(response.tracks)
    }

    pub async fn album(&self, album_id: &str) -> Result<Album, SpotifyError> {
        let path = format!("/albums/{}", urlencoding::encode(album_id));
        self.get_json(&path, &[]).await
    }

    pub async fn album_tracks(&self, album_id: &str, limit: u32) -> Result<Vec<Track>, SpotifyError> {
        let path = format!("/albums/{}/tracks", urlencoding::encode(album_id));
        let page: Paging<Track> = self
            .get_json(&path, &[("limit", limit.to_string())])
            .await?;
        Ok(page.into_items())
    }

    pub async fn featured_playlists(&self, limit: u32) -> Result<Vec<Playlist>, SpotifyError> {
        let response: PlaylistsResponse = self
            .get_json(
                "/browse/featured-playlists",
                &[("limit", limit.to_string())],
            )
            .await?;
        Ok(response.playlists.into_items())
    }

    pub async fn category_playlists(
        &self,
        category_id: &str,
        limit: u32,
    ) -> Result<Vec<Playlist>, SpotifyError> {
        let path = format!(
            "/browse/categories/{}/playlists",
            urlencoding::encode(category_id)
        );
        let response: PlaylistsResponse = self
            .get_json(&path, &[("limit", limit.to_string())])
            .await?;
        Ok(response.playlists.into_items())
    }

    pub async fn available_genre_seeds(&self) -> Result<Vec<String>, SpotifyError> {
        let response: GenreSeedsResponse = self
            .get_json("/recommendations/available-genre-seeds", &[])
            .await?;
        Ok(response.genres)
    }
}

async fn check_status(response: Response) -> Result<Response, SpotifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    warn!(status = status.as_u16(), "Spotify request failed");
    Err(SpotifyError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, SpotifyError> {
    response
        .json()
        .await
        .map_err(|e| SpotifyError::InvalidResponse(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_base_url: &str) -> SpotifyClient {
        SpotifyClient::new(
            ClientCredentials::new("id", "secret"),
            SpotifyClientConfig {
                api_base_url: api_base_url.to_string(),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn joins_paths_onto_base_url() {
        let client = client("http://localhost:1234/v1/");
        assert_eq!(client.url("/search"), "http://localhost:1234/v1/search");
        assert_eq!(
            client.url(&format!("/artists/{}", urlencoding::encode("a b"))),
            "http://localhost:1234/v1/artists/a%20b"
        );
    }

    #[tokio::test]
    async fn empty_feature_lookup_sends_no_request() {
        // Nothing listens on this port; any request would fail.
        let client = client("http://127.0.0.1:9/v1");
        let features = client.fetch_features::<&str>(&[]).await.unwrap();
        assert!(features.is_empty());
    }
}
