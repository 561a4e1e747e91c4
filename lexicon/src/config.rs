use std::env;

const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const DEFAULT_DATABASE_URL: &str = "sqlite://lexicon.db";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base of the lookup endpoint, the word is appended as the last path segment
    pub api_url: String,
    pub database_url: String,
    /// `EnvFilter` directive
    pub log_level: String,
}

impl Config {
    /// Reads `LEXICON_*` variables, loading a `.env` file first when one exists.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self {
            api_url: var_or("LEXICON_API_URL", DEFAULT_API_URL),
            database_url: var_or("LEXICON_DATABASE_URL", DEFAULT_DATABASE_URL),
            log_level: var_or("LEXICON_LOG", DEFAULT_LOG_LEVEL),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}
