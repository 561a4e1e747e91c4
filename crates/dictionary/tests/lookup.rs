use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use dictionary::{Dictionary, DictionaryError, CANDIDATE_WORDS};
use serde_json::{json, Value};

fn entry_json(word: &str) -> Value {
    json!({
        "word": word,
        "phonetic": "/ˌsɛɹ.ən.ˈdɪp.ɪ.ti/",
        "phonetics": [
            { "text": "/ˌsɛɹ.ən.ˈdɪp.ɪ.ti/", "audio": "" },
            { "text": "/ˌsɛɹ.ən.ˈdɪp.ə.ti/", "audio": "https://example.com/serendipity-us.mp3" }
        ],
        "meanings": [{
            "partOfSpeech": "noun",
            "definitions": [{
                "definition": "An unsought, unintended, and/or unexpected, but fortunate, discovery.",
                "example": "Finding that book was pure serendipity.",
                "synonyms": [],
                "antonyms": []
            }],
            "synonyms": ["chance", "fluke"],
            "antonyms": ["misfortune"]
        }],
        "license": { "name": "CC BY-SA 3.0", "url": "https://creativecommons.org/licenses/by-sa/3.0" },
        "sourceUrls": ["https://en.wiktionary.org/wiki/serendipity"]
    })
}

async fn known_words(Path(word): Path<String>) -> Response {
    match word.as_str() {
        "zzqqxx" => (
            StatusCode::NOT_FOUND,
            Json(json!({ "title": "No Definitions Found" })),
        )
            .into_response(),
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        "garbled" => (StatusCode::OK, "definitely not json").into_response(),
        "nothing" => Json(json!([])).into_response(),
        "twice" => Json(json!([entry_json("twice"), entry_json("second")])).into_response(),
        other => Json(json!([entry_json(other)])).into_response(),
    }
}

async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api/v2/entries/en")
}

async fn stub_dictionary() -> Dictionary {
    let router = Router::new().route("/api/v2/entries/en/:word", get(known_words));
    Dictionary::with_base_url(spawn_stub(router).await)
}

#[tokio::test]
async fn finds_a_known_word() {
    let dict = stub_dictionary().await;
    let entry = dict.lookup("serendipity").await.unwrap().unwrap();
    assert_eq!(entry.word, "serendipity");
    assert_eq!(entry.meanings[0].part_of_speech, "noun");
    assert_eq!(entry.meanings[0].synonyms, vec!["chance", "fluke"]);
    assert_eq!(
        entry.meanings[0].definitions[0].example.as_deref(),
        Some("Finding that book was pure serendipity.")
    );
    assert_eq!(
        entry.source_urls,
        vec!["https://en.wiktionary.org/wiki/serendipity"]
    );
    assert_eq!(
        entry.audio_url(),
        Some("https://example.com/serendipity-us.mp3")
    );
}

#[tokio::test]
async fn unknown_word_is_absent_not_an_error() {
    let dict = stub_dictionary().await;
    assert!(dict.lookup("zzqqxx").await.unwrap().is_none());
}

#[tokio::test]
async fn server_error_is_a_failed_lookup() {
    let dict = stub_dictionary().await;
    match dict.lookup("broken").await {
        Err(DictionaryError::Status(status)) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_failed_lookup() {
    let dict = stub_dictionary().await;
    assert!(matches!(
        dict.lookup("garbled").await,
        Err(DictionaryError::Deserialize(_))
    ));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_failed_lookup() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let dict = Dictionary::with_base_url(format!("http://{addr}/api/v2/entries/en"));
    assert!(matches!(
        dict.lookup("serendipity").await,
        Err(DictionaryError::Fetch(_))
    ));
}

#[tokio::test]
async fn only_the_first_candidate_is_kept() {
    let dict = stub_dictionary().await;
    let entry = dict.lookup("twice").await.unwrap().unwrap();
    assert_eq!(entry.word, "twice");
}

#[tokio::test]
async fn empty_array_is_absent() {
    let dict = stub_dictionary().await;
    assert!(dict.lookup("nothing").await.unwrap().is_none());
}

#[tokio::test]
async fn case_is_passed_through() {
    let dict = stub_dictionary().await;
    let entry = dict.lookup("Serendipity").await.unwrap().unwrap();
    assert_eq!(entry.word, "Serendipity");
}

#[tokio::test]
async fn trailing_slash_on_base_is_tolerated() {
    let router = Router::new().route("/api/v2/entries/en/:word", get(known_words));
    let base = format!("{}/", spawn_stub(router).await);
    let dict = Dictionary::with_base_url(base);
    assert!(dict.lookup("luminous").await.unwrap().is_some());
}

#[tokio::test]
async fn random_word_comes_from_the_pool() {
    let dict = stub_dictionary().await;
    let entry = dict.random_word().await.unwrap().unwrap();
    assert!(CANDIDATE_WORDS.contains(&entry.word.as_str()));
}

#[tokio::test]
async fn random_word_does_not_retry_on_failure() {
    let router = Router::new().route(
        "/api/v2/entries/en/:word",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let dict = Dictionary::with_base_url(spawn_stub(router).await);
    assert!(dict.random_word().await.is_err());
}
