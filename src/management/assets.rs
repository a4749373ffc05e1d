use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
    time::Duration,
};

use base64::{Engine, engine::general_purpose::STANDARD};
use tokio::sync::{Mutex, OnceCell};

use crate::{spotify::transport::Transport, warning};

const IMAGE_TIMEOUT: Duration = Duration::from_secs(3);

const PLACEHOLDER_SVG: &str = r##"<svg width="120" height="120" xmlns="http://www.w3.org/2000/svg">
    <rect width="120" height="120" fill="#333"/>
    <circle cx="60" cy="60" r="40" fill="#555"/>
    <circle cx="60" cy="60" r="20" fill="#333"/>
    <circle cx="60" cy="60" r="5" fill="#555"/>
</svg>"##;

const LOGO_FALLBACK_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24">
    <circle cx="12" cy="12" r="12" fill="#1DB954"/>
    <path d="M17.9 10.9c-3.4-2-9-2.2-12.2-1.2-.5.2-1.1-.1-1.3-.6-.2-.5.1-1.1.6-1.3 3.8-1.2 10.1-.9 14 1.4.5.3.7.9.4 1.4-.3.4-.9.6-1.5.3zm-.3 2.9c-.3.4-.8.5-1.2.2-2.8-1.7-7.2-2.2-10.5-1.2-.4.1-.9-.1-1-.5-.1-.4.1-.9.5-1 3.8-1.2 8.7-.6 11.9 1.3.5.3.6.8.3 1.2zm-1.3 2.8c-.3.3-.6.4-1 .2-2.5-1.5-5.6-1.8-9.2-1-.3.1-.7-.1-.8-.5-.1-.3.1-.7.5-.8 4-.9 7.4-.5 10.2 1.2.3.2.4.6.3.9z" fill="white"/>
</svg>"##;

const VINYL_FALLBACK_SVG: &str = r##"<svg width="200" height="200" xmlns="http://www.w3.org/2000/svg">
    <circle cx="100" cy="100" r="95" fill="#000000"/>
    <circle cx="100" cy="100" r="30" fill="#171717"/>
    <circle cx="100" cy="100" r="5" fill="#000000"/>
    <circle cx="100" cy="100" r="80" fill="none" stroke="#333" stroke-width="1"/>
    <circle cx="100" cy="100" r="70" fill="none" stroke="#333" stroke-width="1"/>
    <circle cx="100" cy="100" r="60" fill="none" stroke="#333" stroke-width="1"/>
    <circle cx="100" cy="100" r="50" fill="none" stroke="#333" stroke-width="1"/>
    <circle cx="100" cy="100" r="40" fill="none" stroke="#333" stroke-width="1"/>
</svg>"##;

const NEEDLE_FALLBACK_SVG: &str = r##"<svg width="80" height="120" xmlns="http://www.w3.org/2000/svg">
    <g transform="rotate(-20 40 20)">
        <rect x="38" y="10" width="4" height="100" fill="#333333" rx="2"/>
        <circle cx="40" cy="10" r="8" fill="#555555" stroke="#333333" stroke-width="1"/>
        <rect x="30" y="100" width="20" height="10" fill="#555555" rx="2"/>
    </g>
</svg>"##;

/// Decorative images layered over the album art by some themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Vinyl,
    VinylNeedle,
}

impl Overlay {
    fn file_name(&self) -> &'static str {
        match self {
            Overlay::Vinyl => "vinyl.svg",
            Overlay::VinylNeedle => "vinyl-needle.svg",
        }
    }

    fn fallback(&self) -> &'static str {
        match self {
            Overlay::Vinyl => VINYL_FALLBACK_SVG,
            Overlay::VinylNeedle => NEEDLE_FALLBACK_SVG,
        }
    }
}

pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Turns remote images and local SVG assets into base64 payloads that can be
/// inlined into a widget.
///
/// Remote images are cached per URL and local assets are read at most once.
/// Neither cache is ever evicted.
pub struct AssetEncoder<T: Transport> {
    transport: Arc<T>,
    static_dir: PathBuf,
    cache: Mutex<HashMap<String, String>>,
    default_image: OnceLock<String>,
    logo: OnceCell<String>,
    vinyl: OnceCell<String>,
    vinyl_needle: OnceCell<String>,
}

impl<T: Transport> AssetEncoder<T> {
    pub fn new(transport: Arc<T>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            transport,
            static_dir: static_dir.into(),
            cache: Mutex::new(HashMap::new()),
            default_image: OnceLock::new(),
            logo: OnceCell::new(),
            vinyl: OnceCell::new(),
            vinyl_needle: OnceCell::new(),
        }
    }

    /// Fetches and encodes a remote image, reusing an earlier result for the
    /// same URL. Any failure yields the placeholder, which is not cached.
    pub async fn encode_url(&self, url: &str) -> String {
        if let Some(encoded) = self.cache.lock().await.get(url) {
            return encoded.clone();
        }

        // the lock is not held across the fetch; a racing duplicate fetch
        // just writes the same value twice
        let response = match self.transport.get(url, None, IMAGE_TIMEOUT).await {
            Ok(response) => response,
            Err(e) => {
                warning!("Failed to fetch image {}: {}", url, e);
                return self.get_default_image();
            }
        };

        if response.status != 200 {
            warning!("Image {} answered with status {}", url, response.status);
            return self.get_default_image();
        }

        let encoded = encode_bytes(&response.body);
        self.cache
            .lock()
            .await
            .insert(url.to_string(), encoded.clone());
        encoded
    }

    /// Number of remote images held in the cache.
    pub async fn cached_urls(&self) -> usize {
        self.cache.lock().await.len()
    }

    /// Placeholder album cover used whenever no real artwork is available.
    pub fn get_default_image(&self) -> String {
        self.default_image
            .get_or_init(|| encode_bytes(PLACEHOLDER_SVG.as_bytes()))
            .clone()
    }

    pub async fn get_logo(&self) -> String {
        self.logo
            .get_or_init(|| load_asset(&self.static_dir, "spotify.svg", LOGO_FALLBACK_SVG))
            .await
            .clone()
    }

    pub async fn get_decorative_overlay(&self, overlay: Overlay) -> String {
        let cell = match overlay {
            Overlay::Vinyl => &self.vinyl,
            Overlay::VinylNeedle => &self.vinyl_needle,
        };

        cell.get_or_init(|| load_asset(&self.static_dir, overlay.file_name(), overlay.fallback()))
            .await
            .clone()
    }
}

async fn load_asset(dir: &Path, file_name: &str, fallback: &str) -> String {
    let path = dir.join(file_name);
    match async_fs::read(&path).await {
        Ok(bytes) => encode_bytes(&bytes),
        Err(e) => {
            warning!(
                "Asset {} unavailable ({}), using built-in fallback",
                path.display(),
                e
            );
            encode_bytes(fallback.as_bytes())
        }
    }
}
