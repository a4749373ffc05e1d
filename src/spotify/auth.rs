use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    config::Settings,
    spotify::transport::{FetchError, Transport},
    types::TokenResponse,
    warning,
};

const TOKEN_TIMEOUT: Duration = Duration::from_secs(5);

/// Exchanges the configured refresh token for an access token and keeps it
/// for the rest of the process.
///
/// The cached token is never invalidated. Spotify access tokens expire after
/// an hour, so a long-running server will eventually send a stale token and
/// fall back to the default track until restarted.
pub struct AuthClient<T: Transport> {
    transport: Arc<T>,
    token_url: String,
    client_id: String,
    client_secret: String,
    refresh_token: String,
    token: Mutex<Option<String>>,
}

impl<T: Transport> AuthClient<T> {
    pub fn new(transport: Arc<T>, settings: &Settings) -> Self {
        Self {
            transport,
            token_url: settings.token_url.clone(),
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
            refresh_token: settings.refresh_token.clone(),
            token: Mutex::new(None),
        }
    }

    /// Returns the cached access token, performing the refresh-token grant on
    /// first use.
    ///
    /// An empty string means "unauthenticated": the exchange failed, timed out
    /// or returned a non-success status. Failures are not cached, so the next
    /// call tries again.
    pub async fn get_token(&self) -> String {
        // held across the exchange so concurrent first requests share one call
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            return token.clone();
        }

        match self.request_token().await {
            Ok(token) if !token.is_empty() => {
                *cached = Some(token.clone());
                token
            }
            Ok(_) => {
                warning!("Token endpoint answered without an access token");
                String::new()
            }
            Err(e) => {
                warning!("Token exchange failed: {}", e);
                String::new()
            }
        }
    }

    /// True once a token has been obtained and cached.
    pub async fn has_token(&self) -> bool {
        self.token.lock().await.is_some()
    }

    async fn request_token(&self) -> Result<String, FetchError> {
        let response = self
            .transport
            .post_form(
                &self.token_url,
                &[
                    ("grant_type", "refresh_token"),
                    ("refresh_token", self.refresh_token.as_str()),
                    ("client_id", self.client_id.as_str()),
                    ("client_secret", self.client_secret.as_str()),
                ],
                TOKEN_TIMEOUT,
            )
            .await?;

        if response.status != 200 {
            return Err(FetchError::Status(response.status));
        }

        let json: TokenResponse = serde_json::from_slice(&response.body)?;
        Ok(json.access_token)
    }
}
