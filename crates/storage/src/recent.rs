use crate::{load_json, save_json, KeyValueStore, RECENT_SEARCHES_KEY};

pub const MAX_RECENT_SEARCHES: usize = 10;

/// Searched words, most recent first, without duplicates.
pub struct RecentSearches<S> {
    store: S,
}

impl<S: KeyValueStore> RecentSearches<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<String> {
        load_json(&self.store, RECENT_SEARCHES_KEY)
            .await
            .unwrap_or_default()
    }

    /// Moves `word` to the front, dropping whatever falls past the cap.
    pub async fn record(&self, word: &str) {
        let mut searches = self.list().await;
        searches.retain(|search| search != word);
        searches.insert(0, word.to_owned());
        searches.truncate(MAX_RECENT_SEARCHES);
        save_json(&self.store, RECENT_SEARCHES_KEY, &searches).await;
    }

    pub async fn clear(&self) {
        save_json(&self.store, RECENT_SEARCHES_KEY, &Vec::<String>::new()).await;
    }
}
