#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc, sync::Mutex, time::Duration};

use nowplaying::{
    config::Settings,
    server::AppState,
    spotify::{HttpResponse, Transport, TransportError},
};
use serde_json::{Value, json};

pub const TOKEN_URL: &str = "http://stub.local/api/token";
pub const API_URL: &str = "http://stub.local/v1";
pub const CURRENT_URL: &str = "http://stub.local/v1/me/player/currently-playing";
pub const RECENT_URL: &str = "http://stub.local/v1/me/player/recently-played?limit=10";

/// Canned transport: answers by exact URL and counts every call.
#[derive(Default)]
pub struct StubTransport {
    routes: Mutex<HashMap<String, Result<HttpResponse, TransportError>>>,
    calls: Mutex<HashMap<String, usize>>,
    forms: Mutex<Vec<Vec<(String, String)>>>,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, url: &str, status: u16, body: impl Into<Vec<u8>>) {
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), Ok(HttpResponse::new(status, body)));
    }

    pub fn respond_json(&self, url: &str, body: &Value) {
        self.respond(url, 200, body.to_string());
    }

    pub fn fail(&self, url: &str, err: TransportError) {
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), Err(err));
    }

    pub fn calls(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    pub fn last_form(&self) -> Option<Vec<(String, String)>> {
        self.forms.lock().unwrap().last().cloned()
    }

    fn answer(&self, url: &str) -> Result<HttpResponse, TransportError> {
        *self.calls.lock().unwrap().entry(url.to_string()).or_insert(0) += 1;
        self.routes
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(TransportError::Request(format!("no route for {}", url))))
    }
}

impl Transport for StubTransport {
    async fn get(
        &self,
        url: &str,
        _bearer: Option<&str>,
        _timeout: Duration,
    ) -> Result<HttpResponse, TransportError> {
        self.answer(url)
    }

    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
        _timeout: Duration,
    ) -> Result<HttpResponse, TransportError> {
        self.forms.lock().unwrap().push(
            form.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self.answer(url)
    }
}

pub fn settings() -> Settings {
    Settings {
        client_id: "client".to_string(),
        client_secret: "secret".to_string(),
        refresh_token: "refresh".to_string(),
        spotify_api_url: API_URL.to_string(),
        token_url: TOKEN_URL.to_string(),
        static_dir: "does-not-exist".into(),
        ..Settings::default()
    }
}

pub fn state(stub: &Arc<StubTransport>) -> AppState<StubTransport> {
    AppState::with_transport(Arc::clone(stub), settings())
}

/// Stub with a working token endpoint.
pub fn authorized_stub() -> Arc<StubTransport> {
    let stub = StubTransport::new();
    stub.respond_json(TOKEN_URL, &json!({ "access_token": "token-123", "token_type": "Bearer" }));
    stub
}

pub fn track_json(name: &str, artist: &str, id: &str, images: &[&str]) -> Value {
    json!({
        "name": name,
        "id": id,
        "uri": format!("spotify:track:{}", id),
        "artists": [{ "name": artist }, { "name": "Featured" }],
        "album": {
            "images": images.iter().map(|url| json!({ "url": url, "height": 300, "width": 300 })).collect::<Vec<_>>()
        }
    })
}

pub fn history_entry(track: Value, played_at: &str) -> Value {
    json!({ "track": track, "played_at": played_at })
}
