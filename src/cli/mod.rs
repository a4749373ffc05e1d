//! # CLI Module
//!
//! Command implementations behind the `nowplaying` binary. Each command loads
//! nothing on its own: `main.rs` reads [`crate::config::Settings`] once and
//! hands it in.
//!
//! ## Commands
//!
//! - [`serve`] - run the HTTP widget server
//! - [`track`] - resolve the current track once and print it
//! - [`list_themes`] - table of available themes and their capabilities
//! - [`render`] - render one widget to stdout or a file
//!
//! ## Usage Patterns
//!
//! ```bash
//! nowplaying serve --open
//! nowplaying track
//! nowplaying themes
//! nowplaying render --theme vinyl --style dark --output badge.svg
//! ```

mod render;
mod serve;
mod themes;
mod track;

pub use render::RenderOptions;
pub use render::render;
pub use serve::serve;
pub use themes::list_themes;
pub use track::track;
