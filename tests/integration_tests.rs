//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: config → API client → page walk → view sessions

use character_browser::cli::{render_detail, render_listing, OutputFormat};
use character_browser::config::ApiConfig;
use character_browser::view::{DetailSession, DetailState, ListingSession, ListingState};
use character_browser::{
    AppConfig, CancelToken, CharacterApi, CharacterId, CharacterSource, Error, FetchOutcome,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn character(id: u32, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": {"name": "Earth (C-137)", "url": ""},
        "location": {"name": "Citadel of Ricks", "url": ""},
        "image": format!("https://example.com/avatar/{id}.jpeg"),
        "episode": [],
        "url": "",
        "created": "2017-11-04T18:48:46.250Z"
    })
}

fn api_for(server: &MockServer) -> CharacterApi {
    let config = ApiConfig {
        base_url: format!("{}/api/character", server.uri()),
        ..ApiConfig::default()
    };
    CharacterApi::new(&config).unwrap()
}

/// Two-page listing: the first page points at `?page=2`, the second ends the walk
async fn mount_two_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/character"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "info": {"count": 3, "pages": 2, "next": null, "prev": null},
            "results": [character(3, "Summer Smith")]
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "info": {
                "count": 3,
                "pages": 2,
                "next": format!("{}/api/character?page=2", server.uri()),
                "prev": null
            },
            "results": [character(1, "Rick Sanchez"), character(2, "Morty Smith")]
        })))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Pagination Integration Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_all_follows_next_pointer() {
    let server = MockServer::start().await;
    mount_two_pages(&server).await;

    let api = api_for(&server);
    let outcome = api.fetch_all(&CancelToken::new()).await.unwrap();

    let ids: Vec<u32> = outcome
        .completed()
        .unwrap()
        .iter()
        .map(|c| c.id.get())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_fetch_all_cancelled_before_first_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(0)
        .mount(&server)
        .await;

    let cancel = CancelToken::new();
    cancel.cancel();

    let outcome = api_for(&server).fetch_all(&cancel).await.unwrap();
    assert!(matches!(outcome, FetchOutcome::Cancelled));
}

// ============================================================================
// Listing Session Integration Tests
// ============================================================================

#[tokio::test]
async fn test_listing_session_search_and_delete() {
    let server = MockServer::start().await;
    mount_two_pages(&server).await;

    let api = api_for(&server);
    let mut session = ListingSession::new();
    session.mount(&api).await;
    assert_eq!(session.collection().map(<[_]>::len), Some(3));

    session.set_query("SMITH");
    let visible_chars = session.visible();
    let visible: Vec<&str> = visible_chars.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(visible, vec!["Morty Smith", "Summer Smith"]);

    assert!(session.delete(CharacterId(2)));
    let out = render_listing(&session, OutputFormat::Pretty).unwrap();
    assert!(out.starts_with("Rick and Morty Characters (1)"));
    assert!(out.contains("Summer Smith"));
    assert!(!out.contains("Morty Smith"));
}

#[tokio::test]
async fn test_listing_session_failure_mid_walk_commits_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "info": {"next": format!("{}/api/character?page=2", server.uri())},
            "results": [character(1, "Rick Sanchez")]
        })))
        .mount(&server)
        .await;

    let mut session = ListingSession::new();
    session.mount(&api_for(&server)).await;

    assert_eq!(
        session.state(),
        &ListingState::Failed("Failed with status 500".to_string())
    );
    assert!(session.collection().is_none());
}

// ============================================================================
// Detail Session Integration Tests
// ============================================================================

#[tokio::test]
async fn test_detail_session_loads_character() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/character/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(character(1, "Rick Sanchez")))
        .mount(&server)
        .await;

    let mut session = DetailSession::new(CharacterId(1));
    session.load(&api_for(&server)).await;

    let out = render_detail(&session, OutputFormat::Pretty).unwrap();
    assert!(out.starts_with("Rick Sanchez\n"));
    assert!(out.contains("Origin:   Earth (C-137)"));
    assert!(out.ends_with("Location: Citadel of Ricks"));
}

#[tokio::test]
async fn test_detail_session_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/character/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Character not found"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.fetch_one(CharacterId(9999)).await.unwrap_err();
    assert!(matches!(err, Error::FetchFailed { status: 404 }));
    assert_eq!(err.to_string(), "fetch failed");

    let mut session = DetailSession::new(CharacterId(9999));
    session.load(&api).await;
    assert_eq!(
        session.state(),
        &DetailState::Failed("fetch failed".to_string())
    );
}

// ============================================================================
// Configuration Integration Tests
// ============================================================================

#[tokio::test]
async fn test_api_from_yaml_config() {
    let server = MockServer::start().await;
    mount_two_pages(&server).await;

    let yaml = format!(
        "api:\n  base_url: {}/api/character\n  timeout_secs: 5\n  rate_limit:\n    requests_per_second: 50\n    burst_size: 5\nnavigation:\n  delay_ms: 250\n",
        server.uri()
    );
    let config = AppConfig::from_yaml_str(&yaml).unwrap();
    config.validate().unwrap();
    assert_eq!(config.navigation.delay_ms, 250);

    let api = CharacterApi::new(&config.api).unwrap();
    let all = api
        .fetch_all(&CancelToken::new())
        .await
        .unwrap()
        .completed()
        .unwrap();
    assert_eq!(all.len(), 3);
}
