//! Client credentials and the access token cache.

use std::fmt;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Tokens are considered expired this long before the provider says so.
pub const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(300);

#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Holds the current access token. The lock is only taken to read or write
/// the slot, never while a refresh is in flight, so concurrent callers
/// holding an expired token may refresh more than once.
#[derive(Debug, Default)]
pub struct TokenCache {
    slot: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<String> {
        self.get_at(Instant::now()).await
    }

    async fn get_at(&self, now: Instant) -> Option<String> {
        let slot = self.slot.lock().await;
        slot.as_ref()
            .filter(|token| now < token.expires_at)
            .map(|token| token.access_token.clone())
    }

    /// Stores a token that the provider declared valid for `expires_in_secs`.
    pub async fn store(&self, access_token: String, expires_in_secs: u64) {
        let lifetime = Duration::from_secs(expires_in_secs).saturating_sub(TOKEN_EXPIRY_MARGIN);
        let mut slot = self.slot.lock().await;
        *slot = Some(CachedToken {
            access_token,
            expires_at: Instant::now() + lifetime,
        });
    }

    pub async fn clear(&self) {
        *self.slot.lock().await = None;
    }
}
