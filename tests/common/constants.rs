//! Shared constants for end-to-end tests

// ============================================================================
// Test Credentials
// ============================================================================

pub const TEST_CLIENT_ID: &str = "test-client";

pub const TEST_CLIENT_SECRET: &str = "test-secret";

/// Authorization header for `TEST_CLIENT_ID:TEST_CLIENT_SECRET`.
pub const TEST_BASIC_AUTH: &str = "Basic dGVzdC1jbGllbnQ6dGVzdC1zZWNyZXQ=";

/// Lifetime the mock accounts service gives its tokens, in seconds.
pub const TOKEN_LIFETIME_SEC: u64 = 3600;

// ============================================================================
// Test Catalog Data
// ============================================================================

/// Track ids starting with this prefix have no audio features.
pub const MISSING_FEATURES_PREFIX: &str = "missing-";

/// Tempo every mocked track reports.
pub const MOCK_TEMPO: f64 = 128.0;

/// Maximum time to wait for the mock server to accept connections.
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;
