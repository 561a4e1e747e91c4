use dictionary_api::{get_definition, DICTIONARY_API_URL};

mod dictionary;
mod dictionary_api;
mod random_word;

pub use dictionary::{Phonetic, WordDefinition, WordEntry, WordMeaning};
pub use random_word::{pick_candidate, CANDIDATE_WORDS};

/// A lookup that could not be completed. An unknown word is not one of these,
/// it comes back as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("could not reach the dictionary: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("dictionary responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("could not read the dictionary response: {0}")]
    Deserialize(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_base_url(DICTIONARY_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn lookup(&self, word: &str) -> Result<Option<WordEntry>, DictionaryError> {
        get_definition(&self.client, &self.base_url, word)
            .await
            .map_err(|error| {
                tracing::warn!(word, %error, "dictionary lookup failed");
                error
            })
    }

    /// Looks up one word drawn from [`CANDIDATE_WORDS`]. A failed or empty
    /// lookup is returned as is; no other candidate is tried.
    pub async fn random_word(&self) -> Result<Option<WordEntry>, DictionaryError> {
        let Some(word) = pick_candidate(&mut rand::thread_rng()) else {
            return Ok(None);
        };
        self.lookup(word).await
    }
}
