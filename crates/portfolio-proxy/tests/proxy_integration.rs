//! Proxy Integration Tests
//!
//! Runs the proxy router against a fake Roblox/YouTube upstream, both bound
//! on 127.0.0.1:0, and drives it over HTTP with reqwest.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use portfolio_proxy::{AppState, ProxyConfig, YoutubeCredentials};
use serde_json::{json, Value};
use tokio::net::TcpListener;

// ============================================================================
// Fake upstream
// ============================================================================

#[derive(Clone, Default)]
struct Upstream {
    base: Arc<String>,
    primary_hits: Arc<AtomicUsize>,
    fallback_hits: Arc<AtomicUsize>,
    playlist_hits: Arc<AtomicUsize>,
}

async fn thumbnails(State(up): State<Upstream>, Query(q): Query<HashMap<String, String>>) -> Response {
    match q.get("userIds").map(String::as_str) {
        Some("1") => Json(json!({"data": [{"imageUrl": format!("{}/img/avatar.webp", up.base)}]}))
            .into_response(),
        Some("2") => Json(json!({"data": [{"imageUrl": format!("{}/img/missing", up.base)}]}))
            .into_response(),
        Some("404") => Json(json!({"data": []})).into_response(),
        _ => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

async fn avatar_image() -> Response {
    ([(header::CONTENT_TYPE, "image/webp")], vec![1u8, 2, 3, 4]).into_response()
}

async fn presence_primary(State(up): State<Upstream>) -> StatusCode {
    up.primary_hits.fetch_add(1, Ordering::SeqCst);
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn presence_fallback(State(up): State<Upstream>, Json(body): Json<Value>) -> Json<Value> {
    up.fallback_hits.fetch_add(1, Ordering::SeqCst);
    let id = body["userIds"][0].clone();
    Json(json!({"userPresences": [{"userId": id, "userPresenceType": 2}]}))
}

async fn channels(Query(q): Query<HashMap<String, String>>) -> Json<Value> {
    if q.get("id").map(String::as_str) == Some("UC_empty") {
        return Json(json!({"items": []}));
    }
    Json(json!({"items": [{"contentDetails": {"relatedPlaylists": {"uploads": "UU1"}}}]}))
}

fn item(id: &str, published: &str) -> Value {
    json!({"snippet": {
        "title": format!("Video {}", id),
        "publishedAt": published,
        "thumbnails": {"high": {"url": format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", id)}},
        "resourceId": {"kind": "youtube#video", "videoId": id}
    }})
}

async fn playlist_items(
    State(up): State<Upstream>,
    Query(q): Query<HashMap<String, String>>,
) -> Json<Value> {
    up.playlist_hits.fetch_add(1, Ordering::SeqCst);
    match q.get("pageToken").map(String::as_str) {
        None => Json(json!({
            "items": [item("old", "2023-01-01T00:00:00Z"), item("mid", "2023-06-01T00:00:00Z")],
            "nextPageToken": "p2"
        })),
        _ => Json(json!({
            "items": [
                item("new", "2024-03-01T00:00:00Z"),
                {"snippet": {"title": "a playlist", "resourceId": {"kind": "youtube#playlist"}}}
            ]
        })),
    }
}

async fn spawn_upstream() -> Upstream {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let upstream = Upstream {
        base: Arc::new(base),
        ..Default::default()
    };
    let router = Router::new()
        .route("/thumbs", get(thumbnails))
        .route("/img/avatar.webp", get(avatar_image))
        .route("/presence-primary", post(presence_primary))
        .route("/presence-fallback", post(presence_fallback))
        .route("/yt/channels", get(channels))
        .route("/yt/playlistItems", get(playlist_items))
        .with_state(upstream.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    upstream
}

// ============================================================================
// Test Utilities
// ============================================================================

fn config_for(upstream: &Upstream) -> ProxyConfig {
    let base = upstream.base.as_str();
    ProxyConfig::parse_from([
        "portfolio-proxy".to_string(),
        "--host".into(),
        "127.0.0.1".into(),
        "--port".into(),
        "0".into(),
        "--thumbnail-api-base".into(),
        format!("{}/thumbs", base),
        "--presence-primary-url".into(),
        format!("{}/presence-primary", base),
        "--presence-fallback-url".into(),
        format!("{}/presence-fallback", base),
        "--youtube-api-base".into(),
        format!("{}/yt", base),
        "--upstream-timeout-secs".into(),
        "3".into(),
    ])
}

async fn spawn_proxy(upstream: &Upstream, channel: Option<&str>) -> String {
    let youtube = channel.map(|c| YoutubeCredentials {
        api_key: "test-key".into(),
        channel_id: c.into(),
    });
    let state = AppState::new(config_for(upstream), youtube).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(portfolio_proxy::serve(listener, state));
    format!("http://{}", addr)
}

// ============================================================================
// Avatar
// ============================================================================

#[tokio::test]
async fn avatar_bytes_are_relayed_with_cache_headers() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&upstream, Some("UC1")).await;

    for path in ["/api/avatar/1", "/avatar/1?size=420x420&format=Png&isCircular=true"] {
        let res = reqwest::get(format!("{}{}", proxy, path)).await.unwrap();
        assert_eq!(res.status(), 200);
        assert_eq!(res.headers()["content-type"], "image/webp");
        assert_eq!(res.headers()["cache-control"], "public, max-age=60");
        assert_eq!(res.headers()["access-control-allow-origin"], "*");
        assert_eq!(res.bytes().await.unwrap().as_ref(), &[1, 2, 3, 4]);
    }
}

#[tokio::test]
async fn avatar_error_statuses() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&upstream, Some("UC1")).await;

    let cases = [("404", 404u16), ("2", 502), ("999", 502)];
    for (id, status) in cases {
        let res = reqwest::get(format!("{}/api/avatar/{}", proxy, id)).await.unwrap();
        assert_eq!(res.status().as_u16(), status, "avatar {}", id);
        let body: Value = res.json().await.unwrap();
        assert!(body["error"].is_string());
    }
}

// ============================================================================
// Presence
// ============================================================================

#[tokio::test]
async fn presence_falls_back_and_caches() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&upstream, Some("UC1")).await;
    let client = reqwest::Client::new();

    let first: Value = client
        .post(format!("{}/api/presence", proxy))
        .json(&json!({"userIds": [3404416545u64]}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first["userPresences"][0]["userPresenceType"], 2);
    assert!(first.get("fromCache").is_none());
    assert_eq!(upstream.primary_hits.load(Ordering::SeqCst), 1);
    assert_eq!(upstream.fallback_hits.load(Ordering::SeqCst), 1);

    let second: Value = client
        .post(format!("{}/presence", proxy))
        .json(&json!({"userIds": ["3404416545"]}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(second["fromCache"], true);
    assert_eq!(upstream.fallback_hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn presence_without_ids_is_bad_request() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&upstream, Some("UC1")).await;
    let client = reqwest::Client::new();

    for body in [json!({"userIds": []}), json!({}), json!({"userIds": ["abc"]})] {
        let res = client
            .post(format!("{}/api/presence", proxy))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 400);
    }
    let res = client
        .post(format!("{}/api/presence", proxy))
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
}

// ============================================================================
// Videos and health
// ============================================================================

#[tokio::test]
async fn videos_are_paged_sorted_and_cached() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&upstream, Some("UC1")).await;

    let health: Value = reqwest::get(format!("{}/api/health", proxy))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health, json!({"ok": true, "cached": false, "expiresAt": null}));

    let first: Value = reqwest::get(format!("{}/api/videos", proxy))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first["source"], "api");
    let ids: Vec<_> = first["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["videoId"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
    assert_eq!(upstream.playlist_hits.load(Ordering::SeqCst), 2);

    let limited: Value = reqwest::get(format!("{}/api/videos?maxResults=1", proxy))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(limited["source"], "cache");
    assert_eq!(limited["items"].as_array().unwrap().len(), 1);
    assert_eq!(upstream.playlist_hits.load(Ordering::SeqCst), 2);

    let health: Value = reqwest::get(format!("{}/api/health", proxy))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["cached"], true);
    assert!(health["expiresAt"].is_i64());
}

#[tokio::test]
async fn videos_without_credentials_is_500() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&upstream, None).await;

    let res = reqwest::get(format!("{}/api/videos", proxy)).await.unwrap();
    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("YT_API_KEY"));
}

#[tokio::test]
async fn unknown_channel_is_500() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&upstream, Some("UC_empty")).await;
    let res = reqwest::get(format!("{}/api/videos", proxy)).await.unwrap();
    assert_eq!(res.status(), 500);
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
async fn preflight_gets_204_with_cors_headers() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&upstream, Some("UC1")).await;

    let res = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/api/presence", proxy))
        .header("Origin", "https://pimpolidev.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 204);
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
    assert_eq!(
        header_list(&res, "access-control-allow-methods"),
        vec!["get", "post", "options"]
    );
    assert_eq!(
        header_list(&res, "access-control-allow-headers"),
        vec!["content-type"]
    );
}

#[tokio::test]
async fn bare_options_still_gets_204() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&upstream, Some("UC1")).await;

    let res = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/api/avatar/42", proxy))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 204);
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
    assert!(res.bytes().await.unwrap().is_empty());
}

fn header_list(res: &reqwest::Response, name: &str) -> Vec<String> {
    res.headers()[name]
        .to_str()
        .unwrap()
        .split(',')
        .map(|v| v.trim().to_ascii_lowercase())
        .collect()
}
