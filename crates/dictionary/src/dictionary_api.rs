use reqwest::StatusCode;

use crate::{DictionaryError, WordEntry};

pub(crate) const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// `GET {base_url}/{word}` with the word embedded as typed.
///
/// The endpoint answers with an array of candidate entries; only the first one
/// is kept. A 404 means the word is unknown and is not an error.
pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Option<WordEntry>, DictionaryError> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), word);
    tracing::debug!(%url, "looking up word");
    let res = client.get(&url).send().await.map_err(DictionaryError::Fetch)?;
    match res.status() {
        StatusCode::NOT_FOUND => {
            tracing::debug!(word, "no definitions found");
            Ok(None)
        }
        status if !status.is_success() => Err(DictionaryError::Status(status)),
        _ => {
            let entries = res
                .json::<Vec<WordEntry>>()
                .await
                .map_err(DictionaryError::Deserialize)?;
            Ok(entries.into_iter().next())
        }
    }
}
