use dictionary::WordEntry;

use crate::{load_json, save_json, KeyValueStore, FAVORITES_KEY};

/// Saved entries in the order they were added, at most one per `word`.
///
/// Every call reads and rewrites the whole list.
pub struct Favorites<S> {
    store: S,
}

impl<S: KeyValueStore> Favorites<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<WordEntry> {
        load_json(&self.store, FAVORITES_KEY)
            .await
            .unwrap_or_default()
    }

    /// Appends `entry` unless its word is already saved, returns true if it was added.
    /// An existing entry is never overwritten.
    pub async fn add(&self, entry: &WordEntry) -> bool {
        let mut favorites = self.list().await;
        if favorites.iter().any(|favorite| favorite.word == entry.word) {
            return false;
        }
        favorites.push(entry.clone());
        save_json(&self.store, FAVORITES_KEY, &favorites).await;
        true
    }

    /// Attempt to remove a word, returns true if the word was removed
    pub async fn remove(&self, word: &str) -> bool {
        let mut favorites = self.list().await;
        let before = favorites.len();
        favorites.retain(|favorite| favorite.word != word);
        if favorites.len() == before {
            return false;
        }
        save_json(&self.store, FAVORITES_KEY, &favorites).await;
        true
    }

    pub async fn contains(&self, word: &str) -> bool {
        self.list()
            .await
            .iter()
            .any(|favorite| favorite.word == word)
    }

    /// Saves `entry` if it isn't saved yet, otherwise removes it.
    /// Returns whether the word is saved afterwards.
    pub async fn toggle(&self, entry: &WordEntry) -> bool {
        if self.remove(&entry.word).await {
            false
        } else {
            self.add(entry).await
        }
    }
}
