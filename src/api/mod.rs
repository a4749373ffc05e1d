//! # API Module
//!
//! HTTP endpoints served by the widget server. Handlers are thin: they turn
//! query parameters into a [`crate::types::WidgetConfig`] and delegate to the
//! track resolver, rendering service and theme registry held in
//! [`crate::server::AppState`].
//!
//! ## Endpoints
//!
//! - [`widget`] - `GET /` themed widget as HTML
//! - [`github`] - `GET /github` the same widget as `image/svg+xml`
//! - [`link`] - `GET /link` page embedding Spotify's player for the track
//! - [`health`] - `GET /health` status and version
//!
//! ## Query Parameters
//!
//! `theme`, `style`, `color`, `eq_color` and `spin`. The legacy names
//! `theme_type` and `theme_style` are still accepted. Invalid values never
//! produce an error response; they are normalized to defaults.

mod health;
mod widget;

pub use health::health;
pub use widget::{WidgetQuery, github, link, render_for_query, widget, widget_context};
