//! Client-side persistence for the dictionary: favorites, recent searches and
//! the cached word of the day, all kept behind a string-keyed [`KeyValueStore`].

use std::sync::Arc;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

mod favorites;
mod memory;
mod recent;
mod sqlite;
mod word_of_day;

pub use favorites::Favorites;
pub use memory::MemoryStore;
pub use recent::{RecentSearches, MAX_RECENT_SEARCHES};
pub use sqlite::SqliteStore;
pub use word_of_day::WordOfDay;

pub const FAVORITES_KEY: &str = "lexicon.favorites";
pub const RECENT_SEARCHES_KEY: &str = "lexicon.recent-searches";
pub const WORD_OF_DAY_KEY: &str = "lexicon.word-of-day";

/// Persistent string-to-string storage.
///
/// Writes are best-effort: a backend that cannot persist a value logs it and
/// carries on. A `set` that did succeed is visible to the next `get`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: &str);
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    async fn get(&self, key: &str) -> Option<String> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) {
        (**self).set(key, value).await
    }
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    async fn get(&self, key: &str) -> Option<String> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) {
        (**self).set(key, value).await
    }
}

/// Reads `key` as JSON. Missing and undecodable values are both `None`.
pub(crate) async fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = store.get(key).await?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(key, %error, "ignoring unreadable stored value");
            None
        }
    }
}

pub(crate) async fn save_json<T, S>(store: &S, key: &str, value: &T)
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw).await,
        Err(error) => tracing::warn!(key, %error, "failed to encode value"),
    }
}
