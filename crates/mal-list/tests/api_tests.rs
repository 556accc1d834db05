//! Integration tests for the list API
//!
//! Tests cover:
//! - List endpoints against a fake tracking site (shape, filtering, truncation)
//! - Upstream failures mapped to fixed 500 payloads, per endpoint
//! - Static shell serving and the API 404 fallback

mod common;

use axum::http::StatusCode;
use common::*;
use mal_list::LIST_LIMIT;
use serde_json::{json, Value};
use shared::{Config, ConfigOrigin};
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

async fn get_json(app: &TestApp, uri: &str) -> (StatusCode, Value) {
    let response = app
        .router
        .clone()
        .oneshot(test_request(uri))
        .await
        .unwrap();
    let status = response.status();
    (status, extract_json(response.into_body()).await)
}

// =============================================================================
// List endpoints
// =============================================================================

#[tokio::test]
async fn test_anime_list_shape() {
    let base_url = spawn_upstream(list_upstream(anime_entries(3), manga_entries(0))).await;
    let app = setup_app(&base_url);

    let (status, body) = get_json(&app, "/api/animelist").await;
    assert_eq!(status, StatusCode::OK);

    let items = body.as_array().expect("Should be an array");
    assert_eq!(items.len(), 3);

    let first = &items[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["title"], "Anime 1");
    assert_eq!(first["englishTitle"], "English 1");
    assert_eq!(first["episodesWatched"], 1);
    assert_eq!(first["totalEpisodes"], 24);
    assert_eq!(first["url"], format!("{}/anime/1/Anime_1", base_url));
    assert_eq!(first["image"], "https://cdn.myanimelist.net/images/anime/1/10001l.jpg");
    assert_eq!(
        first["status"],
        json!({"code": 2, "label": "Completed", "abv": "COM", "color": "#3b82f6"})
    );
    assert!(first.get("genres").is_none());
    assert!(first.get("mediaType").is_none());

    // Null English title defaults to empty
    assert_eq!(items[1]["englishTitle"], "");
    assert_eq!(items[1]["status"]["label"], "On Hold");
}

#[tokio::test]
async fn test_anime_list_unknown_status() {
    // id 5 maps to code 5
    let base_url = spawn_upstream(list_upstream(anime_entries(5), manga_entries(0))).await;
    let app = setup_app(&base_url);

    let (_, body) = get_json(&app, "/api/animelist").await;
    let fifth = &body[4];
    assert_eq!(fifth["status"]["code"], 5);
    assert_eq!(fifth["status"]["label"], "Unknown");
    assert_eq!(fifth["status"]["abv"], "UNK");
    assert_eq!(fifth["status"]["color"], "#6b7280");
}

#[tokio::test]
async fn test_lists_are_truncated_to_ten() {
    let base_url = spawn_upstream(list_upstream(anime_entries(40), manga_entries(50))).await;
    let app = setup_app(&base_url);

    for uri in ["/api/animelist", "/api/mangalist", "/api/novellist"] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body.as_array().unwrap().len(), 10, "{}", uri);
    }

    // Upstream order is kept
    let (_, body) = get_json(&app, "/api/animelist").await;
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_list_size_is_not_configurable() {
    let base_url = spawn_upstream(list_upstream(anime_entries(40), manga_entries(50))).await;

    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "[mal]\n\
             base_url = \"{}\"\n\
             username = \"EsieEyen\"\n\
             list_limit = 25\n\
             request_timeout_secs = 5\n\
             user_agent = \"test\"\n\
             [mal.query]\n\
             offset = 0\n\
             order = 5\n\
             status = 7\n",
            base_url
        ),
    )
    .unwrap();

    let (config, origin) = Config::load(&config_path).unwrap();
    assert_eq!(origin, ConfigOrigin::File);
    let app = setup_app_with_config(&config);

    for uri in ["/api/animelist", "/api/mangalist", "/api/novellist"] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body.as_array().unwrap().len(), LIST_LIMIT, "{}", uri);
    }
}

#[tokio::test]
async fn test_manga_list_only_returns_manga_types() {
    let base_url = spawn_upstream(list_upstream(anime_entries(0), manga_entries(50))).await;
    let app = setup_app(&base_url);

    let (status, body) = get_json(&app, "/api/mangalist").await;
    assert_eq!(status, StatusCode::OK);

    for item in body.as_array().unwrap() {
        let media_type = item["mediaType"].as_str().unwrap();
        assert!(
            ["Manga", "Manhwa", "Manhua"].contains(&media_type),
            "unexpected media type {}",
            media_type
        );
        assert_eq!(item["genres"], json!(["Action"]));
        assert_eq!(item["status"]["label"], "Reading");
        assert_eq!(item["status"]["abv"], "REA");
        assert_eq!(item["image"], "/placeholder.svg");
        assert!(item.get("chaptersRead").is_some());
        assert!(item.get("totalChapters").is_some());
    }
}

#[tokio::test]
async fn test_novel_list_only_returns_novel_types() {
    let base_url = spawn_upstream(list_upstream(anime_entries(0), manga_entries(12))).await;
    let app = setup_app(&base_url);

    let (status, body) = get_json(&app, "/api/novellist").await;
    assert_eq!(status, StatusCode::OK);

    // ids 2, 5, 9, 12 are Light Novel / Novel in the fixture cycle
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 5, 9, 12]);

    for item in body.as_array().unwrap() {
        let media_type = item["mediaType"].as_str().unwrap();
        assert!(["Light Novel", "Novel"].contains(&media_type));
    }
}

#[tokio::test]
async fn test_empty_upstream_list() {
    let base_url = spawn_upstream(list_upstream(json!([]), json!([]))).await;
    let app = setup_app(&base_url);

    let (status, body) = get_json(&app, "/api/novellist").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// =============================================================================
// Upstream failures
// =============================================================================

#[tokio::test]
async fn test_connection_refused_yields_500_for_every_list() {
    let app = setup_app(&refused_upstream());

    let expected = [
        ("/api/animelist", "Failed to fetch data from MAL (Anime)"),
        ("/api/mangalist", "Failed to fetch data from MAL (Manga)"),
        ("/api/novellist", "Failed to fetch data from MAL (Novel)"),
    ];

    for (uri, message) in expected {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body, json!({ "error": message }));
    }
}

#[tokio::test]
async fn test_upstream_error_status_yields_500() {
    let base_url = spawn_upstream(failing_upstream(
        StatusCode::SERVICE_UNAVAILABLE,
        "maintenance",
    ))
    .await;
    let app = setup_app(&base_url);

    let (status, body) = get_json(&app, "/api/mangalist").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch data from MAL (Manga)"}));
}

#[tokio::test]
async fn test_malformed_payload_yields_500() {
    let base_url = spawn_upstream(failing_upstream(StatusCode::OK, "<html>not json</html>")).await;
    let app = setup_app(&base_url);

    let (status, body) = get_json(&app, "/api/animelist").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch data from MAL (Anime)");
}

#[tokio::test]
async fn test_manga_failure_does_not_affect_anime() {
    // Anime records are valid, manga records are missing their ids
    let broken_manga = json!([{"manga_title": "No id", "manga_media_type_string": "Manga"}]);
    let base_url = spawn_upstream(list_upstream(anime_entries(2), broken_manga)).await;
    let app = setup_app(&base_url);

    let (anime_status, anime) = get_json(&app, "/api/animelist").await;
    assert_eq!(anime_status, StatusCode::OK);
    assert_eq!(anime.as_array().unwrap().len(), 2);

    let (manga_status, manga) = get_json(&app, "/api/mangalist").await;
    assert_eq!(manga_status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(manga["error"], "Failed to fetch data from MAL (Manga)");

    let (novel_status, _) = get_json(&app, "/api/novellist").await;
    assert_eq!(novel_status, StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Static shell
// =============================================================================

#[tokio::test]
async fn test_static_files_and_shell_fallback() {
    let app = setup_app(&refused_upstream());

    let response = app.router.clone().oneshot(test_request("/app.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(extract_text(response.into_body()).await, "console.log('gallery')");

    let response = app
        .router
        .clone()
        .oneshot(test_request("/gallery/anime"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(extract_text(response.into_body()).await, "<html>shell</html>");
}

#[tokio::test]
async fn test_unknown_api_route_is_json_404() {
    let app = setup_app(&refused_upstream());

    let (status, body) = get_json(&app, "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
}
