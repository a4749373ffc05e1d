use std::{sync::Arc, time::Duration};

use crate::{
    config::Settings,
    management::AssetEncoder,
    spotify::{
        auth::AuthClient,
        transport::{FetchError, Transport},
    },
    types::{CurrentlyPlayingResponse, RecentlyPlayedResponse, Track, TrackObject},
    utils, warning,
};

const PLAYER_TIMEOUT: Duration = Duration::from_secs(5);
const RECENT_LIMIT: u32 = 10;

/// Resolves the single track a widget should show.
///
/// Sources are tried in order: currently playing, then the most recent entry
/// of the play history, then a static "Not Playing" track. Nothing here ever
/// returns an error to the caller.
pub struct TrackResolver<T: Transport> {
    transport: Arc<T>,
    auth: Arc<AuthClient<T>>,
    encoder: Arc<AssetEncoder<T>>,
    api_url: String,
}

impl<T: Transport> TrackResolver<T> {
    pub fn new(
        transport: Arc<T>,
        auth: Arc<AuthClient<T>>,
        encoder: Arc<AssetEncoder<T>>,
        settings: &Settings,
    ) -> Self {
        Self {
            transport,
            auth,
            encoder,
            api_url: settings.spotify_api_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn get_current_track(&self) -> Track {
        let token = self.auth.get_token().await;
        if token.is_empty() {
            return self.default_track();
        }

        match self.fetch_current_track(&token).await {
            Ok(Some(track)) => return self.process_track(track).await,
            Ok(None) => {}
            Err(e) => warning!("Failed to fetch current track: {}", e),
        }

        match self.fetch_recent_track(&token).await {
            Ok(Some(track)) => return self.process_track(track).await,
            Ok(None) => {}
            Err(e) => warning!("Failed to fetch recent track: {}", e),
        }

        self.default_track()
    }

    /// `Ok(None)` covers "nothing playing": 204, an empty body, or no `item`.
    async fn fetch_current_track(&self, token: &str) -> Result<Option<TrackObject>, FetchError> {
        let url = format!("{}/me/player/currently-playing", self.api_url);
        let response = self
            .transport
            .get(&url, Some(token), PLAYER_TIMEOUT)
            .await?;

        if response.status != 200 {
            return match response.status {
                204 => Ok(None),
                status => Err(FetchError::Status(status)),
            };
        }
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let json: CurrentlyPlayingResponse = serde_json::from_slice(&response.body)?;
        Ok(json.item)
    }

    /// Picks the newest history entry by `played_at`; the API does not
    /// guarantee ordering.
    async fn fetch_recent_track(&self, token: &str) -> Result<Option<TrackObject>, FetchError> {
        let url = format!(
            "{}/me/player/recently-played?limit={}",
            self.api_url, RECENT_LIMIT
        );
        let response = self
            .transport
            .get(&url, Some(token), PLAYER_TIMEOUT)
            .await?;

        if response.status != 200 {
            return Err(FetchError::Status(response.status));
        }

        let mut json: RecentlyPlayedResponse = serde_json::from_slice(&response.body)?;
        utils::sort_by_played_at_desc(&mut json.items);
        Ok(json.items.into_iter().next().and_then(|entry| entry.track))
    }

    async fn process_track(&self, track: TrackObject) -> Track {
        let image_url = track
            .album
            .as_ref()
            .and_then(|album| utils::pick_album_image(&album.images));

        let album_image = match image_url {
            Some(url) => self.encoder.encode_url(url).await,
            None => self.encoder.get_default_image(),
        };

        let artist = track
            .artists
            .into_iter()
            .next()
            .and_then(|a| a.name)
            .unwrap_or_else(|| "Unknown Artist".to_string());

        Track {
            name: track.name.unwrap_or_else(|| "Unknown Track".to_string()),
            artist,
            album_image,
            uri: track.uri.unwrap_or_default(),
            id: track.id.unwrap_or_default(),
        }
    }

    pub fn default_track(&self) -> Track {
        Track {
            name: "Not Playing".to_string(),
            artist: "Spotify".to_string(),
            album_image: self.encoder.get_default_image(),
            uri: String::new(),
            id: String::new(),
        }
    }
}
