use std::sync::Arc;

use axum::{
    Extension,
    extract::Query,
    http::{Method, Uri, header},
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use crate::{
    info,
    management::Overlay,
    render::{self, Template},
    server::AppState,
    spotify::Transport,
    types::{RenderContext, ThemeType, WidgetConfig},
};

/// Raw widget query. Every field is optional text so that no combination of
/// parameters is rejected before it reaches [`WidgetConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WidgetQuery {
    pub theme: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
    pub eq_color: Option<String>,
    pub spin: Option<String>,
    /// Legacy name for `theme`; wins when both are present.
    pub theme_type: Option<String>,
    /// Legacy name for `style`; wins when both are present.
    pub theme_style: Option<String>,
}

impl WidgetQuery {
    /// Folds raw `key=value` pairs into a query. A repeated key keeps its
    /// last value and unknown keys are ignored.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "theme" => &mut query.theme,
                "style" => &mut query.style,
                "color" => &mut query.color,
                "eq_color" => &mut query.eq_color,
                "spin" => &mut query.spin,
                "theme_type" => &mut query.theme_type,
                "theme_style" => &mut query.theme_style,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        query
    }

    pub fn into_config(self, default_eq_color: &str) -> WidgetConfig {
        let theme = self.theme_type.or(self.theme).unwrap_or_default();
        let style = self.theme_style.or(self.style).unwrap_or_default();
        let spin = self.spin.as_deref().is_some_and(is_truthy);
        let eq_color = self
            .eq_color
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| default_eq_color.to_string());

        WidgetConfig::from_query_params(&theme, &style, self.color.as_deref(), spin, &eq_color)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Runs the whole widget pipeline for one request: resolve the track, build
/// the base context, attach theme assets and let the theme transform it.
pub async fn widget_context<T: Transport>(
    state: &AppState<T>,
    config: &WidgetConfig,
) -> RenderContext {
    let track = state.resolver.get_current_track().await;
    let logo = state.encoder.get_logo().await;

    let mut context = render::prepare_rendering_data(&track, config, &logo);

    if config.theme == ThemeType::Vinyl {
        context.vinyl_svg = Some(state.encoder.get_decorative_overlay(Overlay::Vinyl).await);
        context.vinyl_needle_svg = Some(
            state
                .encoder
                .get_decorative_overlay(Overlay::VinylNeedle)
                .await,
        );
    }

    let theme = state
        .themes
        .get_theme(config.theme, config.style, config.color.as_deref());
    theme.transform_data(context)
}

pub async fn render_for_query<T: Transport>(state: &AppState<T>, query: WidgetQuery) -> String {
    let config = query.into_config(&state.settings.default_eq_color);
    let context = widget_context(state, &config).await;
    info!(
        "Rendering {} ({}) with template {}",
        config.theme,
        config.style,
        Template::resolve(&context).name()
    );
    render::render_widget(&context)
}

/// Query pairs are taken as a list so that duplicates never reject the
/// request.
pub async fn widget<T: Transport>(
    method: Method,
    uri: Uri,
    Query(pairs): Query<Vec<(String, String)>>,
    Extension(state): Extension<Arc<AppState<T>>>,
) -> Html<String> {
    info!("{} {}", method, uri.path());
    Html(render_for_query(state.as_ref(), WidgetQuery::from_pairs(pairs)).await)
}

/// SVG variant for README embeds; image proxies must not cache it.
pub async fn github<T: Transport>(
    method: Method,
    uri: Uri,
    Query(pairs): Query<Vec<(String, String)>>,
    Extension(state): Extension<Arc<AppState<T>>>,
) -> impl IntoResponse {
    info!("{} {}", method, uri.path());
    let svg = render_for_query(state.as_ref(), WidgetQuery::from_pairs(pairs)).await;
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
        ],
        svg,
    )
}

pub async fn link<T: Transport>(
    method: Method,
    uri: Uri,
    Extension(state): Extension<Arc<AppState<T>>>,
) -> Html<String> {
    info!("{} {}", method, uri.path());
    let track = state.resolver.get_current_track().await;
    Html(render::render_link_page(&track.id))
}
