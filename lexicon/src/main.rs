use std::sync::Arc;

use app::Lexicon;
use config::Config;
use dictionary::{Dictionary, DictionaryError, WordEntry};
use display::{print_definition, print_numbered, print_word_of_day};
use storage::{KeyValueStore, MemoryStore, SqliteStore};
use utilities::{input, pick, str_to_bool};

mod app;
mod config;
mod display;
mod logging;
mod utilities;

type Store = Arc<dyn KeyValueStore>;

const HELP: &str = "\
Commands:
  define <word>        look a word up (also: find, search)
  save                 add or remove the last shown word from favorites
  favorites [n]        list favorites, or open the n-th one
  remove <word>        remove a word from favorites
  history [n|clear]    list recent searches, open the n-th one, or clear them
  today                show the word of the day
  exit                 leave (also: quit, q)";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    logging::init_tracing(&config.log_level);

    let store = open_store(&config.database_url).await;
    let lexicon = Lexicon::new(Dictionary::with_base_url(&config.api_url), store);

    if let Some(entry) = lexicon.word_of_day().await {
        print_word_of_day(&entry);
    }
    println!("Type 'help' to see the available commands.");

    let mut last: Option<WordEntry> = None;
    loop {
        let line = input(">> ")?;
        if line.is_empty() {
            // stdin closed
            break;
        }
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };
        match command {
            "" => {}
            "exit" | "leave" | "quit" | "e" | "q" | "l" => {
                break;
            }
            "help" | "h" | "?" => {
                println!("{HELP}");
            }
            "define" | "find" | "search" => {
                if argument.is_empty() {
                    println!("Which word should I look up?");
                } else {
                    show(&lexicon, lexicon.search(argument).await, argument, &mut last).await;
                }
            }
            "save" => match &last {
                Some(entry) => {
                    if lexicon.toggle_favorite(entry).await {
                        println!("Added \"{}\" to favorites.", entry.word);
                    } else {
                        println!("Removed \"{}\" from favorites.", entry.word);
                    }
                }
                None => println!("Look a word up first."),
            },
            "favorites" | "favs" => {
                let favorites: Vec<String> = lexicon
                    .favorites()
                    .await
                    .into_iter()
                    .map(|entry| entry.word)
                    .collect();
                if argument.is_empty() {
                    print_numbered("Favorite words", "No favorites yet.", &favorites);
                } else if let Some(word) = pick(&favorites, argument) {
                    show(&lexicon, lexicon.select_favorite(word).await, word, &mut last).await;
                } else {
                    println!("There is no favorite number {argument}.");
                }
            }
            "remove" => {
                if lexicon.remove_favorite(argument).await {
                    println!("Removed \"{argument}\" from favorites.");
                } else {
                    println!("This word is not saved.");
                }
            }
            "history" => {
                let history = lexicon.history().await;
                if argument.is_empty() {
                    print_numbered("Recent searches", "No recent searches.", &history);
                } else if argument == "clear" {
                    let answer = input("Clear all recent searches? (y/N): ")?;
                    if str_to_bool(answer).unwrap_or(false) {
                        lexicon.clear_history().await;
                        println!("Cleared recent searches.");
                    }
                } else if let Some(word) = pick(&history, argument) {
                    show(&lexicon, lexicon.select_recent(word).await, word, &mut last).await;
                } else {
                    println!("There is no recent search number {argument}.");
                }
            }
            "today" => match lexicon.word_of_day().await {
                Some(entry) => {
                    print_word_of_day(&entry);
                    last = Some(entry);
                }
                None => println!("The word of the day is unavailable right now."),
            },
            _ => {
                println!("Unknown command {command}.");
            }
        }
    }
    Ok(())
}

async fn open_store(database_url: &str) -> Store {
    match SqliteStore::open(database_url).await {
        Ok(store) => Arc::new(store),
        Err(error) => {
            tracing::warn!(%error, database_url, "storage unavailable, nothing will be saved this session");
            Arc::new(MemoryStore::new())
        }
    }
}

async fn show(
    lexicon: &Lexicon<Store>,
    result: Result<Option<WordEntry>, DictionaryError>,
    word: &str,
    last: &mut Option<WordEntry>,
) {
    match result {
        Ok(Some(entry)) => {
            print_definition(&entry, lexicon.is_favorite(&entry.word).await);
            *last = Some(entry);
        }
        Ok(None) => {
            println!("No definitions found for \"{word}\". Please check the spelling or try another word.");
        }
        Err(error) => {
            println!("Encountered an error while searching for the word definition: {error}");
        }
    }
}
