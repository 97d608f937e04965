//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::MockSpotify;
//!
//! #[tokio::test]
//! async fn test_features() {
//!     let server = MockSpotify::spawn().await;
//!     let client = server.client();
//!     let features = client.fetch_features(&["t1"]).await.unwrap();
//!     assert!(features[0].is_some());
//! }
//! ```

mod constants;
mod mock_spotify;

pub use constants::*;
#[allow(unused_imports)]
pub use mock_spotify::{features_json, track_json, MockSpotify, MockState};
