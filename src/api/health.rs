use std::sync::Arc;

use axum::{
    Extension,
    http::{Method, Uri},
    response::Json,
};
use serde_json::{Value, json};

use crate::{info, server::AppState, spotify::Transport};

/// Liveness plus a peek at the process caches. Never contacts Spotify.
pub async fn health<T: Transport>(
    method: Method,
    uri: Uri,
    Extension(state): Extension<Arc<AppState<T>>>,
) -> Json<Value> {
    info!("{} {}", method, uri.path());
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "authenticated": state.auth.has_token().await,
        "cached_images": state.encoder.cached_urls().await,
        "cached_themes": state.themes.len(),
    }))
}
