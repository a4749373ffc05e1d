use std::path::PathBuf;

use crate::{
    api::{WidgetQuery, render_for_query},
    config::Settings,
    error,
    server::AppState,
    success,
};

/// Options for a one-off render, mirroring the widget query parameters.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub theme: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
    pub eq_color: Option<String>,
    pub spin: bool,
    pub output: Option<PathBuf>,
}

/// Renders a single widget SVG to stdout or to `output`.
pub async fn render(settings: Settings, options: RenderOptions) {
    let state = AppState::from_settings(settings);

    let query = WidgetQuery {
        theme: options.theme,
        style: options.style,
        color: options.color,
        eq_color: options.eq_color,
        spin: Some(options.spin.to_string()),
        ..WidgetQuery::default()
    };
    let svg = render_for_query(&state, query).await;

    match options.output {
        Some(path) => match async_fs::write(&path, svg).await {
            Ok(()) => success!("Widget written to {}", path.display()),
            Err(e) => error!("Cannot write {}. Err: {}", path.display(), e),
        },
        None => println!("{}", svg),
    }
}
