//! # Themes
//!
//! A theme is a strategy object that owns a bundle of CSS variables and a
//! transformation over the [`RenderContext`]. There is one implementation per
//! [`ThemeType`]; instances are built and cached by [`ThemeRegistry`].
//!
//! | Theme | Equalizer | Spin | Custom colour | Template |
//! |---|---|---|---|---|
//! | `default` | yes | yes | yes | `widget` |
//! | `vinyl` | no | forced on | yes | `vinyl` |
//! | `ipod` | no | no | yes | `ipod` |
//! | `retro` | no | no | no | `retro` |
//! | `windows98` | no | no | no | `windows98` |
//! | `frutiger_aero` | no | no | no | `frutiger_aero` |
//! | `macintosh` | no | no | no | `macintosh` |
//! | `windowsxp` | no | no | no | `windowsxp` |

use std::{collections::BTreeMap, fmt, sync::Arc};

use serde::Serialize;

use crate::{
    types::{RenderContext, ThemeStyle, ThemeType},
    utils,
};

mod default;
mod frutiger_aero;
mod ipod;
mod macintosh;
mod registry;
mod retro;
mod vinyl;
mod windows98;
mod windowsxp;

pub use default::DefaultTheme;
pub use frutiger_aero::FrutigerAeroTheme;
pub use ipod::IpodTheme;
pub use macintosh::MacintoshTheme;
pub use registry::{THEME_CACHE_CAPACITY, ThemeRegistry};
pub use retro::RetroTheme;
pub use vinyl::VinylTheme;
pub use windows98::Windows98Theme;
pub use windowsxp::WindowsXpTheme;

pub(crate) const SYSTEM_FONT: &str =
    "-apple-system, BlinkMacSystemFont, Segoe UI, Helvetica, Arial, sans-serif";

/// CSS variables handed to the templates. The six named fields exist for
/// every theme; `extra` carries the theme specific ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeCss {
    pub background_color: String,
    pub title_color: String,
    pub subtitle_color: String,
    pub album_border_radius: String,
    pub container_padding: String,
    pub text_font: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ThemeCss {
    pub fn new(
        background_color: &str,
        title_color: &str,
        subtitle_color: &str,
        album_border_radius: &str,
        container_padding: &str,
        text_font: &str,
    ) -> Self {
        Self {
            background_color: background_color.to_string(),
            title_color: title_color.to_string(),
            subtitle_color: subtitle_color.to_string(),
            album_border_radius: album_border_radius.to_string(),
            container_padding: container_padding.to_string(),
            text_font: text_font.to_string(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets an extension variable. Names of the base fields update the field
    /// itself.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match key {
            "background_color" => self.background_color = value,
            "title_color" => self.title_color = value,
            "subtitle_color" => self.subtitle_color = value,
            "album_border_radius" => self.album_border_radius = value,
            "container_padding" => self.container_padding = value,
            "text_font" => self.text_font = value,
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "background_color" => Some(&self.background_color),
            "title_color" => Some(&self.title_color),
            "subtitle_color" => Some(&self.subtitle_color),
            "album_border_radius" => Some(&self.album_border_radius),
            "container_padding" => Some(&self.container_padding),
            "text_font" => Some(&self.text_font),
            _ => self.extra.get(key).map(String::as_str),
        }
    }

    /// All variables as `(--css-name, value)` pairs, base fields first.
    pub fn variables(&self) -> Vec<(String, &str)> {
        let base = [
            ("background_color", self.background_color.as_str()),
            ("title_color", self.title_color.as_str()),
            ("subtitle_color", self.subtitle_color.as_str()),
            ("album_border_radius", self.album_border_radius.as_str()),
            ("container_padding", self.container_padding.as_str()),
            ("text_font", self.text_font.as_str()),
        ];

        base.into_iter()
            .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .map(|(k, v)| (format!("--{}", k.replace('_', "-")), v))
            .collect()
    }
}

/// State shared by every theme: its name, style and optional colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeBase {
    name: &'static str,
    style: ThemeStyle,
    /// Always `#`-prefixed when present.
    color: Option<String>,
}

impl ThemeBase {
    pub fn new(theme: ThemeType, style: ThemeStyle, color: Option<&str>) -> Self {
        Self {
            name: theme.as_str(),
            style,
            color: color.map(utils::with_hash_prefix),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn style(&self) -> ThemeStyle {
        self.style
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn is_dark(&self) -> bool {
        self.style.is_dark()
    }

    pub fn dark_or_light<'a>(&self, dark: &'a str, light: &'a str) -> &'a str {
        if self.is_dark() { dark } else { light }
    }

    /// Custom colour as a 60% opaque overlay, if one was given and parses.
    pub fn custom_overlay(&self) -> Option<String> {
        self.color
            .as_deref()
            .and_then(|c| utils::hex_to_rgba(c, 0.6))
    }

    /// Writes the CSS bundle and theme name into the context.
    pub fn stamp(&self, context: &mut RenderContext, css: ThemeCss) {
        context.css = Some(css);
        context.theme_name = Some(self.name.to_string());
    }
}

pub trait ThemeStrategy: Send + Sync + fmt::Debug {
    fn base(&self) -> &ThemeBase;

    fn css(&self) -> ThemeCss;

    /// Applies the theme to a prepared context.
    fn transform_data(&self, context: RenderContext) -> RenderContext;

    fn name(&self) -> &'static str {
        self.base().name()
    }

    fn style(&self) -> ThemeStyle {
        self.base().style()
    }

    fn color(&self) -> Option<&str> {
        self.base().color()
    }

    fn supports_equalizer(&self) -> bool {
        true
    }

    fn supports_spin(&self) -> bool {
        true
    }
}

/// Constructs a fresh strategy. Callers normally go through
/// [`ThemeRegistry::get_theme`] instead.
pub fn build_theme(
    theme: ThemeType,
    style: ThemeStyle,
    color: Option<&str>,
) -> Arc<dyn ThemeStrategy> {
    let base = ThemeBase::new(theme, style, color);
    match theme {
        ThemeType::Default => Arc::new(DefaultTheme::new(base)),
        ThemeType::Vinyl => Arc::new(VinylTheme::new(base)),
        ThemeType::Ipod => Arc::new(IpodTheme::new(base)),
        ThemeType::Retro => Arc::new(RetroTheme::new(base)),
        ThemeType::Windows98 => Arc::new(Windows98Theme::new(base)),
        ThemeType::FrutigerAero => Arc::new(FrutigerAeroTheme::new(base)),
        ThemeType::Macintosh => Arc::new(MacintoshTheme::new(base)),
        ThemeType::WindowsXp => Arc::new(WindowsXpTheme::new(base)),
    }
}
