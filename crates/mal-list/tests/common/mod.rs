//! Test helpers: a fake tracking site and an app wired to it.

#![allow(dead_code)]

use axum::{
    body::Body,
    extract::{Path, Query},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use mal_list::{build_router, AppState, ListService};
use serde_json::{json, Value};
use shared::Config;
use std::collections::HashMap;
use tempfile::TempDir;

pub const USERNAME: &str = "EsieEyen";

/// Manga list media types, cycled to build a mixed fixture
pub const MEDIA_TYPES: [&str; 7] = [
    "Manga",
    "Light Novel",
    "Manhwa",
    "One-shot",
    "Novel",
    "Manhua",
    "Doujinshi",
];

/// Known codes plus one the lookup doesn't recognize
pub const STATUS_CODES: [i64; 6] = [1, 2, 3, 4, 6, 5];

pub fn anime_entries(count: u64) -> Value {
    let entries: Vec<Value> = (1..=count)
        .map(|id| {
            let english = if id % 2 == 0 {
                Value::Null
            } else {
                json!(format!("English {}", id))
            };
            let status = STATUS_CODES[(id % 6) as usize];
            json!({
                "anime_id": id,
                "anime_title": format!("Anime {}", id),
                "anime_title_eng": english,
                "status": status,
                "score": id % 11,
                "num_watched_episodes": id,
                "anime_num_episodes": 24,
                "anime_url": format!("/anime/{}/Anime_{}", id, id),
                "anime_image_path": format!("https://cdn.myanimelist.net/r/192x272/images/anime/{}/1000{}.jpg?s=abc", id, id),
            })
        })
        .collect();
    Value::Array(entries)
}

pub fn manga_entries(count: u64) -> Value {
    let entries: Vec<Value> = (1..=count)
        .map(|id| {
            json!({
                "manga_id": id,
                "manga_title": format!("Manga {}", id),
                "manga_english": "",
                "status": 1,
                "score": 8,
                "num_read_chapters": id * 3,
                "manga_num_chapters": 0,
                "manga_media_type_string": MEDIA_TYPES[(id as usize - 1) % MEDIA_TYPES.len()],
                "genres": [{"id": 1, "name": "Action"}],
                "manga_url": format!("/manga/{}", id),
                "manga_image_path": "",
            })
        })
        .collect();
    Value::Array(entries)
}

/// Reject requests that don't carry the fixed list query
fn check_request(user: &str, query: &HashMap<String, String>) -> Result<(), Response> {
    let expected = [("offset", "0"), ("order", "5"), ("status", "7")];
    let query_ok = expected
        .iter()
        .all(|(k, v)| query.get(*k).map(String::as_str) == Some(*v));

    if user != USERNAME || !query_ok {
        return Err((StatusCode::BAD_REQUEST, "unexpected list request").into_response());
    }
    Ok(())
}

/// Tracking site serving the given bodies for the two list endpoints
pub fn list_upstream(anime: Value, manga: Value) -> Router {
    Router::new()
        .route(
            "/animelist/:user/load.json",
            get(move |Path(user): Path<String>, Query(query): Query<HashMap<String, String>>| {
                let body = anime.clone();
                async move {
                    match check_request(&user, &query) {
                        Ok(()) => Json(body).into_response(),
                        Err(response) => response,
                    }
                }
            }),
        )
        .route(
            "/mangalist/:user/load.json",
            get(move |Path(user): Path<String>, Query(query): Query<HashMap<String, String>>| {
                let body = manga.clone();
                async move {
                    match check_request(&user, &query) {
                        Ok(()) => Json(body).into_response(),
                        Err(response) => response,
                    }
                }
            }),
        )
}

/// Tracking site answering every request with `status` and `body`
pub fn failing_upstream(status: StatusCode, body: &'static str) -> Router {
    Router::new().fallback(move || async move { (status, body) })
}

/// Serve `router` on an ephemeral port and return its base URL
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind fake upstream");
    let addr = listener.local_addr().expect("Should have local address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Fake upstream crashed");
    });

    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on
pub fn refused_upstream() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Should bind throwaway port");
    let addr = listener.local_addr().expect("Should have local address");
    drop(listener);
    format!("http://{}", addr)
}

/// App wired to `base_url`, with a throwaway static directory
pub struct TestApp {
    pub router: Router,
    pub static_dir: TempDir,
}

pub fn setup_app(base_url: &str) -> TestApp {
    let mut config = Config::default();
    config.mal.base_url = base_url.to_string();
    config.mal.request_timeout_secs = 5;
    setup_app_with_config(&config)
}

pub fn setup_app_with_config(config: &Config) -> TestApp {
    let static_dir = TempDir::new().expect("Should create static dir");
    std::fs::write(static_dir.path().join("index.html"), "<html>shell</html>")
        .expect("Should write index.html");
    std::fs::write(static_dir.path().join("app.js"), "console.log('gallery')")
        .expect("Should write app.js");

    let lists = ListService::from_config(config).expect("Should build list service");
    let router = build_router(AppState::new(lists), static_dir.path());

    TestApp { router, static_dir }
}

pub fn test_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

pub async fn extract_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}
