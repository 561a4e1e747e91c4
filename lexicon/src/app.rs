use dictionary::{Dictionary, DictionaryError, WordEntry};
use storage::{Favorites, KeyValueStore, RecentSearches, WordOfDay};

/// What the REPL calls into: the lookup client plus the three stores, all on
/// one shared backend.
pub struct Lexicon<S> {
    dict: Dictionary,
    favorites: Favorites<S>,
    recent: RecentSearches<S>,
    word_of_day: WordOfDay<S>,
}

impl<S: KeyValueStore + Clone> Lexicon<S> {
    pub fn new(dict: Dictionary, store: S) -> Self {
        Self {
            dict,
            favorites: Favorites::new(store.clone()),
            recent: RecentSearches::new(store.clone()),
            word_of_day: WordOfDay::new(store),
        }
    }
}

impl<S: KeyValueStore> Lexicon<S> {
    /// Looks `word` up and, when found, records it as typed in the history.
    pub async fn search(&self, word: &str) -> Result<Option<WordEntry>, DictionaryError> {
        let entry = self.dict.lookup(word).await?;
        if entry.is_some() {
            self.recent.record(word).await;
        }
        Ok(entry)
    }

    pub async fn select_favorite(&self, word: &str) -> Result<Option<WordEntry>, DictionaryError> {
        self.search(word).await
    }

    pub async fn select_recent(&self, word: &str) -> Result<Option<WordEntry>, DictionaryError> {
        self.search(word).await
    }

    pub async fn favorites(&self) -> Vec<WordEntry> {
        self.favorites.list().await
    }

    pub async fn is_favorite(&self, word: &str) -> bool {
        self.favorites.contains(word).await
    }

    pub async fn toggle_favorite(&self, entry: &WordEntry) -> bool {
        self.favorites.toggle(entry).await
    }

    pub async fn remove_favorite(&self, word: &str) -> bool {
        self.favorites.remove(word).await
    }

    pub async fn history(&self) -> Vec<String> {
        self.recent.list().await
    }

    pub async fn clear_history(&self) {
        self.recent.clear().await
    }

    /// Today's featured word. A stale cache triggers one random lookup; if that
    /// yields nothing the old entry is shown rather than none at all.
    pub async fn word_of_day(&self) -> Option<WordEntry> {
        if self.word_of_day.is_stale().await {
            match self.refresh_word_of_day().await {
                Some(entry) => Some(entry),
                None => self.word_of_day.get().await,
            }
        } else {
            match self.word_of_day.get().await {
                Some(entry) => Some(entry),
                None => self.refresh_word_of_day().await,
            }
        }
    }

    async fn refresh_word_of_day(&self) -> Option<WordEntry> {
        match self.dict.random_word().await {
            Ok(Some(entry)) => {
                tracing::info!(word = %entry.word, "refreshed word of the day");
                self.word_of_day.set(entry.clone()).await;
                Some(entry)
            }
            Ok(None) => {
                tracing::warn!("random word has no definition, keeping the cached one");
                None
            }
            Err(error) => {
                tracing::warn!(%error, "could not refresh word of the day");
                None
            }
        }
    }
}
