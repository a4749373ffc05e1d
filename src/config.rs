//! Configuration management for the now-playing widget server.
//!
//! Values come from environment variables, optionally seeded from `.env`
//! files. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`<data_local_dir>/nowplaying/.env`)
//! 4. Application defaults
//!
//! Settings are read once at start-up and handed to the components that need
//! them; nothing here is re-read while the server runs.

use std::{
    env,
    path::{Path, PathBuf},
};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_EQ_COLOR: &str = "1ED760";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Loads `.env` files from the working directory and the local data
/// directory. Missing files are not an error; `dotenv` never overrides
/// variables that are already set, so the first file wins.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an
/// existing `.env` file cannot be parsed.
///
/// # Example
///
/// ```
/// use nowplaying::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    load_env_file(Path::new(".env"))?;

    let path = data_env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }
    load_env_file(&path)
}

fn load_env_file(path: &Path) -> Result<(), String> {
    if !path.is_file() {
        return Ok(());
    }
    dotenv::from_path(path)
        .map(|_| ())
        .map_err(|e| format!("{}: {}", path.display(), e))
}

fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("nowplaying/.env");
    path
}

fn var_or(keys: &[&str], default: &str) -> String {
    keys.iter()
        .find_map(|key| env::var(key).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| default.to_string())
}

/// Address the HTTP server binds to, e.g. `127.0.0.1:8000`.
pub fn server_addr() -> String {
    var_or(&["SERVER_ADDRESS"], DEFAULT_SERVER_ADDRESS)
}

/// Spotify application client id (`SPOTIFY_CLIENT_ID`, or `CLIENT_ID`).
pub fn spotify_client_id() -> String {
    var_or(&["SPOTIFY_CLIENT_ID", "CLIENT_ID"], "")
}

/// Spotify application client secret (`SPOTIFY_CLIENT_SECRET`, or
/// `CLIENT_SECRET`). Never log this value.
pub fn spotify_client_secret() -> String {
    var_or(&["SPOTIFY_CLIENT_SECRET", "CLIENT_SECRET"], "")
}

/// Long-lived refresh token exchanged for access tokens at runtime
/// (`SPOTIFY_REFRESH_TOKEN`, or `REFRESH_TOKEN`).
pub fn spotify_refresh_token() -> String {
    var_or(&["SPOTIFY_REFRESH_TOKEN", "REFRESH_TOKEN"], "")
}

/// Base URL of the Spotify Web API.
pub fn spotify_apiurl() -> String {
    var_or(&["SPOTIFY_API_URL"], DEFAULT_SPOTIFY_API_URL)
}

/// Token endpoint used for the refresh-token grant.
pub fn spotify_apitoken_url() -> String {
    var_or(&["SPOTIFY_API_TOKEN_URL"], DEFAULT_SPOTIFY_TOKEN_URL)
}

/// Equalizer colour used when a request does not pass `eq_color`.
pub fn default_eq_color() -> String {
    var_or(&["DEFAULT_EQ_COLOR"], DEFAULT_EQ_COLOR)
}

/// Directory holding `spotify.svg`, `vinyl.svg` and `vinyl-needle.svg`.
pub fn static_dir() -> PathBuf {
    PathBuf::from(var_or(&["STATIC_DIR"], DEFAULT_STATIC_DIR))
}

/// Snapshot of every setting the service needs.
#[derive(Debug, Clone)]
pub struct Settings {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub spotify_api_url: String,
    pub token_url: String,
    pub default_eq_color: String,
    pub server_addr: String,
    pub static_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            client_id: spotify_client_id(),
            client_secret: spotify_client_secret(),
            refresh_token: spotify_refresh_token(),
            spotify_api_url: spotify_apiurl(),
            token_url: spotify_apitoken_url(),
            default_eq_color: default_eq_color(),
            server_addr: server_addr(),
            static_dir: static_dir(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            refresh_token: String::new(),
            spotify_api_url: DEFAULT_SPOTIFY_API_URL.to_string(),
            token_url: DEFAULT_SPOTIFY_TOKEN_URL.to_string(),
            default_eq_color: DEFAULT_EQ_COLOR.to_string(),
            server_addr: DEFAULT_SERVER_ADDRESS.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}
