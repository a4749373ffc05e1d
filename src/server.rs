use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    Res, api,
    config::Settings,
    error, info,
    management::AssetEncoder,
    spotify::{AuthClient, ReqwestTransport, TrackResolver, Transport},
    themes::ThemeRegistry,
};

/// Process-wide collaborators shared by every request. The token cache,
/// image cache and theme cache all live in here, so their lifetime is the
/// lifetime of this value.
pub struct AppState<T: Transport = ReqwestTransport> {
    pub settings: Settings,
    pub auth: Arc<AuthClient<T>>,
    pub encoder: Arc<AssetEncoder<T>>,
    pub resolver: TrackResolver<T>,
    pub themes: ThemeRegistry,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn from_settings(settings: Settings) -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new()), settings)
    }
}

impl<T: Transport> AppState<T> {
    pub fn with_transport(transport: Arc<T>, settings: Settings) -> Self {
        let auth = Arc::new(AuthClient::new(Arc::clone(&transport), &settings));
        let encoder = Arc::new(AssetEncoder::new(
            Arc::clone(&transport),
            settings.static_dir.clone(),
        ));
        let resolver = TrackResolver::new(
            transport,
            Arc::clone(&auth),
            Arc::clone(&encoder),
            &settings,
        );

        Self {
            settings,
            auth,
            encoder,
            resolver,
            themes: ThemeRegistry::new(),
        }
    }
}

pub fn router<T: Transport>(state: Arc<AppState<T>>) -> Router {
    Router::new()
        .route("/", get(api::widget::<T>))
        .route("/github", get(api::github::<T>))
        .route("/link", get(api::link::<T>))
        .route("/health", get(api::health::<T>))
        .layer(Extension(state))
}

pub async fn start_api_server(state: SharedState) -> Res<()> {
    let addr = match SocketAddr::from_str(&state.settings.server_addr) {
        Ok(addr) => addr,
        Err(e) => error!(
            "Failed to parse server address {}: {}",
            state.settings.server_addr, e
        ),
    };

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Widget server listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
