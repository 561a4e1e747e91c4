use chrono::{Local, NaiveDate};
use dictionary::WordEntry;
use serde::{Deserialize, Serialize};

use crate::{load_json, save_json, KeyValueStore, WORD_OF_DAY_KEY};

/// The entry and the day it was stored, written together so one is never
/// persisted without the other.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedWord {
    entry: WordEntry,
    refreshed_on: NaiveDate,
}

/// Single cached word of the day. Deciding when to refresh it is up to the caller.
pub struct WordOfDay<S> {
    store: S,
}

impl<S: KeyValueStore> WordOfDay<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    async fn cached(&self) -> Option<CachedWord> {
        load_json(&self.store, WORD_OF_DAY_KEY).await
    }

    /// Cached entry, stale or not.
    pub async fn get(&self) -> Option<WordEntry> {
        self.cached().await.map(|cached| cached.entry)
    }

    pub async fn refreshed_on(&self) -> Option<NaiveDate> {
        self.cached().await.map(|cached| cached.refreshed_on)
    }

    pub async fn is_stale(&self) -> bool {
        self.is_stale_on(today()).await
    }

    /// True unless the entry was stored on exactly `today`, so crossing
    /// midnight makes it stale however recent the refresh was.
    pub async fn is_stale_on(&self, today: NaiveDate) -> bool {
        self.refreshed_on().await != Some(today)
    }

    pub async fn set(&self, entry: WordEntry) {
        self.set_on(entry, today()).await
    }

    pub async fn set_on(&self, entry: WordEntry, today: NaiveDate) {
        let cached = CachedWord {
            entry,
            refreshed_on: today,
        };
        save_json(&self.store, WORD_OF_DAY_KEY, &cached).await;
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
