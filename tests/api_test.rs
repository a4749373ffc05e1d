mod common;

use std::sync::Arc;

use axum::{
    Extension,
    body::to_bytes,
    extract::Query,
    http::{Method, Uri, header},
    response::IntoResponse,
};
use common::{CURRENT_URL, RECENT_URL, authorized_stub, state, track_json};
use nowplaying::{
    api::{self, WidgetQuery},
    server::AppState,
    types::{ThemeStyle, ThemeType},
};
use serde_json::json;

fn query(uri: &Uri) -> Query<Vec<(String, String)>> {
    Query::try_from_uri(uri).expect("query pairs")
}

fn idle_state() -> Arc<AppState<common::StubTransport>> {
    let stub = authorized_stub();
    stub.respond(CURRENT_URL, 204, "");
    stub.respond_json(RECENT_URL, &json!({ "items": [] }));
    Arc::new(state(&stub))
}

#[test]
fn test_repeated_keys_keep_last_value() {
    let uri = Uri::from_static("/?theme=vinyl&theme=ipod&style=dark&spin=1&unknown=x");
    let Query(pairs) = query(&uri);

    let config = WidgetQuery::from_pairs(pairs).into_config("1ED760");

    assert_eq!(config.theme, ThemeType::Ipod);
    assert_eq!(config.style, ThemeStyle::Dark);
    assert!(config.spin);
}

#[test]
fn test_legacy_keys_still_win_over_pairs() {
    let config = WidgetQuery::from_pairs([("theme_type", "retro"), ("theme", "vinyl")])
        .into_config("1ED760");
    assert_eq!(config.theme, ThemeType::Retro);
}

#[tokio::test]
async fn test_github_serves_uncached_svg() {
    let uri = Uri::from_static("/github?theme=vinyl&theme=ipod");
    let response = api::github(
        Method::GET,
        uri.clone(),
        query(&uri),
        Extension(idle_state()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "image/svg+xml"
    );
    let cache = response.headers()[header::CACHE_CONTROL].to_str().unwrap();
    assert!(cache.contains("no-cache"));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let svg = String::from_utf8(body.to_vec()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("theme-ipod"));
    assert!(svg.contains("Not Playing"));
}

#[tokio::test]
async fn test_widget_serves_html() {
    let uri = Uri::from_static("/?theme=retro&style=dark");
    let response = api::widget(Method::GET, uri.clone(), query(&uri), Extension(idle_state()))
        .await
        .into_response();

    assert_eq!(response.status(), 200);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&body).contains("theme-retro dark"));
}

#[tokio::test]
async fn test_link_embeds_current_track() {
    let stub = authorized_stub();
    stub.respond_json(
        CURRENT_URL,
        &json!({ "item": track_json("Song", "Artist", "4uLU6hMCjMI75M1A2tKUQC", &[]) }),
    );
    let state = Arc::new(state(&stub));

    let page = api::link(Method::GET, Uri::from_static("/link"), Extension(state))
        .await
        .0;

    assert!(page.contains("https://open.spotify.com/embed/track/4uLU6hMCjMI75M1A2tKUQC"));
}

#[tokio::test]
async fn test_health_reports_cold_caches() {
    // health never touches the network, so the real transport is fine here
    let state = Arc::new(AppState::from_settings(common::settings()));

    let body = api::health(Method::GET, Uri::from_static("/health"), Extension(state))
        .await
        .0;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "nowplaying");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["authenticated"], false);
    assert_eq!(body["cached_images"], 0);
    assert_eq!(body["cached_themes"], 0);
}

#[tokio::test]
async fn test_health_after_a_render() {
    let state = idle_state();
    let uri = Uri::from_static("/?theme=default");
    api::widget(Method::GET, uri.clone(), query(&uri), Extension(Arc::clone(&state))).await;

    let body = api::health(Method::GET, Uri::from_static("/health"), Extension(state))
        .await
        .0;

    assert_eq!(body["authenticated"], true);
    assert_eq!(body["cached_themes"], 1);
}
