use super::store::KeyValueStore;
use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::warn;

/// Where a piece of personal state is loaded from and saved to.
pub trait Persistence<T>: Send + Sync {
    fn load(&self) -> Result<T>;
    fn save(&self, value: &T) -> Result<()>;
}

/// A value stored as JSON under a fixed key of a [`KeyValueStore`].
///
/// A missing key loads as `T::default()`. A stored value that can't be parsed
/// is logged and also loads as the default, so a bad entry never locks the
/// user out of a feature.
pub struct StoredValue<T> {
    store: Arc<dyn KeyValueStore>,
    key: String,
    _value: PhantomData<fn() -> T>,
}

impl<T> StoredValue<T> {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _value: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<T> Persistence<T> for StoredValue<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    fn load(&self) -> Result<T> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(key = %self.key, error = %err, "Discarding unreadable stored value");
                Ok(T::default())
            }
        }
    }

    fn save(&self, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .with_context(|| format!("Failed to serialize value for {}", self.key))?;
        self.store.set(&self.key, &raw)
    }
}

/// A state value together with the port it's persisted through. Every
/// mutation made through [`Persisted::update`] is saved right away.
pub struct Persisted<T> {
    value: T,
    port: Box<dyn Persistence<T>>,
}

impl<T> Persisted<T> {
    pub fn load(port: Box<dyn Persistence<T>>) -> Result<Self> {
        let value = port.load()?;
        Ok(Self { value, port })
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone> Persisted<T> {
    /// Applies `f` to a copy of the state and keeps it once saved. When the
    /// save fails the state is left as it was. The closure's return value is
    /// passed through.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> Result<R> {
        let mut next = self.value.clone();
        let result = f(&mut next);
        self.port.save(&next)?;
        self.value = next;
        Ok(result)
    }
}
