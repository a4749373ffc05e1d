use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

use crate::{config::Settings, error, server::AppState};

/// Resolves the current track once and prints it as JSON. The encoded album
/// image is summarized by its length to keep the output readable.
pub async fn track(settings: Settings) {
    let state = AppState::from_settings(settings);

    let pb = ProgressBar::new_spinner();
    pb.set_message("Asking Spotify what is playing...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let track = state.resolver.get_current_track().await;
    pb.finish_and_clear();

    let output = json!({
        "name": track.name,
        "artist": track.artist,
        "id": track.id,
        "uri": track.uri,
        "album_image_bytes": track.album_image.len(),
    });

    match serde_json::to_string_pretty(&output) {
        Ok(s) => println!("{}", s),
        Err(e) => error!("Cannot serialize track. Err: {}", e),
    }
}
