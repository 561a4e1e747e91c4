use dictionary::WordEntry;

const PREVIEW_LENGTH: usize = 120;

pub fn print_definition(entry: &WordEntry, favorite: bool) {
    let star = if favorite { " ★" } else { "" };
    println!("Showing definition for '{}'{star}:", entry.word);
    if let Some(phonetic) = &entry.phonetic {
        println!("  {phonetic}");
    }
    if let Some(audio) = entry.audio_url() {
        println!("  listen: {audio}");
    }
    if let Some(origin) = &entry.origin {
        println!("  origin: {origin}");
    }
    for meaning in &entry.meanings {
        println!("    {}:", meaning.part_of_speech);
        for (index, definition) in meaning.definitions.iter().enumerate() {
            println!("      {}. {}", index + 1, definition.definition);
            if let Some(example) = &definition.example {
                println!("          example: \"{example}\"");
            }
            if !definition.synonyms.is_empty() {
                println!("          synonyms: {}", definition.synonyms.join(", "));
            }
            if !definition.antonyms.is_empty() {
                println!("          antonyms: {}", definition.antonyms.join(", "));
            }
        }
        if !meaning.synonyms.is_empty() {
            println!("      synonyms: {}", meaning.synonyms.join(", "));
        }
        if !meaning.antonyms.is_empty() {
            println!("      antonyms: {}", meaning.antonyms.join(", "));
        }
    }
    if let Some(source) = entry.source_urls.first() {
        println!("  source: {source}");
    }
}

pub fn print_word_of_day(entry: &WordEntry) {
    println!("Word of the day: {}", entry.word);
    if let Some(phonetic) = &entry.phonetic {
        println!("  {phonetic}");
    }
    let definition = entry.first_definition().unwrap_or_default();
    println!("  {}", preview(definition, PREVIEW_LENGTH));
}

pub fn print_numbered<T: AsRef<str>>(title: &str, empty: &str, words: &[T]) {
    if words.is_empty() {
        println!("{empty}");
        return;
    }
    println!("{title}:");
    for (index, word) in words.iter().enumerate() {
        println!("  [{}]: {}", index + 1, word.as_ref());
    }
}

/// Cuts `text` to at most `max` characters, marking the cut with `...`.
fn preview(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}
