//! Local stand-in for the Spotify Web API and accounts service.
//!
//! Every test gets its own server on a random port. Requests are counted and
//! their query strings recorded so tests can assert on what the client sent.

use super::constants::*;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use genre_explorer::spotify::{ClientCredentials, SpotifyClient, SpotifyClientConfig};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU16, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

type Params = HashMap<String, String>;

#[derive(Default)]
pub struct MockState {
    pub token_requests: AtomicUsize,
    pub feature_batch_requests: AtomicUsize,
    pub single_feature_requests: AtomicUsize,
    pub recommendation_queries: Mutex<Vec<Params>>,
    pub search_queries: Mutex<Vec<Params>>,
    /// When set, the accounts service rejects every token request.
    pub reject_tokens: AtomicBool,
    /// Status returned by the batch features endpoint, 0 for success.
    pub feature_failure_status: AtomicU16,
}

impl MockState {
    pub fn token_requests(&self) -> usize {
        self.token_requests.load(Ordering::SeqCst)
    }

    pub fn feature_batch_requests(&self) -> usize {
        self.feature_batch_requests.load(Ordering::SeqCst)
    }

    pub fn last_recommendation_query(&self) -> Option<Params> {
        self.recommendation_queries.lock().unwrap().last().cloned()
    }

    pub fn last_search_query(&self) -> Option<Params> {
        self.search_queries.lock().unwrap().last().cloned()
    }
}

pub fn features_json(id: &str) -> Value {
    json!({
        "id": id,
        "tempo": MOCK_TEMPO,
        "energy": 0.8,
        "danceability": 0.7,
        "valence": 0.6,
        "acousticness": 0.1,
        "instrumentalness": 0.0,
        "liveness": 0.2,
        "speechiness": 0.05,
        "loudness": -5.5,
        "key": 5,
        "mode": 1,
        "time_signature": 4,
        "duration_ms": 210000
    })
}

pub fn track_json(id: &str, with_preview: bool) -> Value {
    let preview_url = if with_preview {
        json!(format!("https://p.example/{}", id))
    } else {
        Value::Null
    };
    json!({
        "id": id,
        "name": format!("Track {}", id),
        "artists": [{ "id": "artist-1", "name": "The Mockers" }],
        "album": { "id": "album-1", "name": "Mocked", "images": [] },
        "preview_url": preview_url,
        "external_urls": { "spotify": format!("https://open.example/track/{}", id) },
        "duration_ms": 210000
    })
}

fn is_authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Bearer token-"))
}

async fn token(State(state): State<Arc<MockState>>, headers: HeaderMap, body: String) -> Response {
    let n = state.token_requests.fetch_add(1, Ordering::SeqCst) + 1;
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == TEST_BASIC_AUTH);

    if state.reject_tokens.load(Ordering::SeqCst) || !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "invalid_client" })))
            .into_response();
    }
    if body != "grant_type=client_credentials" {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "unsupported_grant_type" })))
            .into_response();
    }

    Json(json!({
        "access_token": format!("token-{}", n),
        "token_type": "Bearer",
        "expires_in": TOKEN_LIFETIME_SEC
    }))
    .into_response()
}

async fn audio_features(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(params): Query<Params>,
) -> Response {
    state.feature_batch_requests.fetch_add(1, Ordering::SeqCst);
    if !is_authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let failure = state.feature_failure_status.load(Ordering::SeqCst);
    if failure != 0 {
        let status = StatusCode::from_u16(failure).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, "mock failure").into_response();
    }

    let ids = params.get("ids").cloned().unwrap_or_default();
    let features: Vec<Value> = ids
        .split(',')
        .filter(|id| !id.is_empty())
        .map(|id| {
            if id.starts_with(MISSING_FEATURES_PREFIX) {
                Value::Null
            } else {
                features_json(id)
            }
        })
        .collect();
    Json(json!({ "audio_features": features })).into_response()
}

async fn single_audio_features(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    state.single_feature_requests.fetch_add(1, Ordering::SeqCst);
    if !is_authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if id.starts_with(MISSING_FEATURES_PREFIX) {
        return (StatusCode::NOT_FOUND, Json(json!({ "error": { "status": 404 } })))
            .into_response();
    }
    Json(features_json(&id)).into_response()
}

/// Returns `limit` tracks, only the even ones have a preview.
async fn recommendations(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(params): Query<Params>,
) -> Response {
    if !is_authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let limit: usize = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(20);
    let seed = params.get("seed_genres").cloned().unwrap_or_default();
    state.recommendation_queries.lock().unwrap().push(params);

    let tracks: Vec<Value> = (0..limit)
        .map(|i| track_json(&format!("{}-{}", seed, i), i % 2 == 0))
        .collect();
    Json(json!({ "tracks": tracks, "seeds": [] })).into_response()
}

async fn search(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(params): Query<Params>,
) -> Response {
    if !is_authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    state.search_queries.lock().unwrap().push(params);
    Json(json!({
        "tracks": {
            "items": [track_json("found-1", true), Value::Null, track_json("found-2", false)],
            "total": 3
        }
    }))
    .into_response()
}

/// Mock server instance. Shuts down when dropped.
pub struct MockSpotify {
    pub base_url: String,
    pub state: Arc<MockState>,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl MockSpotify {
    pub async fn spawn() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/audio-features", get(audio_features))
            .route("/v1/audio-features/{id}", get(single_audio_features))
            .route("/v1/recommendations", get(recommendations))
            .route("/v1/search", get(search))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Mock server failed");
        });

        Self {
            base_url,
            state,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn client_config(&self) -> SpotifyClientConfig {
        SpotifyClientConfig {
            api_base_url: format!("{}/v1", self.base_url),
            accounts_base_url: self.base_url.clone(),
            timeout: Duration::from_millis(SERVER_READY_TIMEOUT_MS),
        }
    }

    /// A client pointed at this server with the test credentials.
    pub fn client(&self) -> SpotifyClient {
        SpotifyClient::new(
            ClientCredentials::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET),
            self.client_config(),
        )
        .expect("Failed to build client")
    }
}
