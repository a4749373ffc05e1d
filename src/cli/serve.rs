use std::sync::Arc;

use crate::{
    config::Settings,
    error,
    server::{self, AppState},
    warning,
};

/// Starts the widget server and blocks until it stops.
///
/// With `open` set, the default browser is pointed at the widget once the
/// listener task has been spawned.
pub async fn serve(settings: Settings, open: bool) {
    if settings.refresh_token.is_empty() {
        warning!("No refresh token configured; every widget will show the default track.");
    }

    let url = format!("http://{}/", settings.server_addr);
    let state = Arc::new(AppState::from_settings(settings));
    let server = tokio::spawn(server::start_api_server(state));

    if open && webbrowser::open(&url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        )
    }

    match server.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Widget server stopped. Err: {}", e),
        Err(e) => error!("Widget server task failed. Err: {}", e),
    }
}
