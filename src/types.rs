use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::{themes::ThemeCss, utils};

/// A resolved track ready for rendering. `album_image` is always an encoded
/// payload, never a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artist: String,
    pub album_image: String,
    pub uri: String,
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeStyle {
    #[default]
    Light,
    Dark,
}

impl ThemeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeStyle::Light => "light",
            ThemeStyle::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeStyle::Dark)
    }
}

impl fmt::Display for ThemeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeStyle::Light),
            "dark" => Ok(ThemeStyle::Dark),
            other => Err(format!(
                "invalid value '{}'. Allowed: light, dark",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeType {
    #[default]
    Default,
    Vinyl,
    Ipod,
    Retro,
    Windows98,
    FrutigerAero,
    Macintosh,
    WindowsXp,
}

impl ThemeType {
    pub const ALL: [ThemeType; 8] = [
        ThemeType::Default,
        ThemeType::Vinyl,
        ThemeType::Ipod,
        ThemeType::Retro,
        ThemeType::Windows98,
        ThemeType::FrutigerAero,
        ThemeType::Macintosh,
        ThemeType::WindowsXp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeType::Default => "default",
            ThemeType::Vinyl => "vinyl",
            ThemeType::Ipod => "ipod",
            ThemeType::Retro => "retro",
            ThemeType::Windows98 => "windows98",
            ThemeType::FrutigerAero => "frutiger_aero",
            ThemeType::Macintosh => "macintosh",
            ThemeType::WindowsXp => "windowsxp",
        }
    }

    /// Only these themes honour a custom background colour.
    pub fn accepts_color(&self) -> bool {
        matches!(self, ThemeType::Default | ThemeType::Vinyl | ThemeType::Ipod)
    }

    /// Coerces a requested style to one the theme actually ships.
    pub fn coerce_style(&self, style: ThemeStyle) -> ThemeStyle {
        match self {
            ThemeType::Windows98 => ThemeStyle::Light,
            _ => style,
        }
    }

    /// Themes whose background is derived from the album art.
    pub fn uses_dynamic_background(&self) -> bool {
        matches!(self, ThemeType::Vinyl)
    }
}

impl fmt::Display for ThemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ThemeType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| {
                let allowed: Vec<&str> = ThemeType::ALL.iter().map(|t| t.as_str()).collect();
                format!(
                    "invalid value '{}'. Allowed: {}",
                    s.trim(),
                    allowed.join(", ")
                )
            })
    }
}

/// Validated widget request. Built through [`WidgetConfig::from_query_params`]
/// so the theme/style/colour invariants always hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub theme: ThemeType,
    pub style: ThemeStyle,
    /// Six hex digits without `#`. Only ever set for themes that accept it.
    pub color: Option<String>,
    pub spin: bool,
    pub eq_color: String,
}

impl WidgetConfig {
    /// Builds a config from raw request values. Nothing here fails: unknown
    /// themes fall back to `default`, unknown styles to `light`, and an
    /// unusable or disallowed colour is dropped.
    pub fn from_query_params(
        theme: &str,
        style: &str,
        color: Option<&str>,
        spin: bool,
        eq_color: &str,
    ) -> Self {
        let theme: ThemeType = theme.parse().unwrap_or_default();
        let style: ThemeStyle = style.parse().unwrap_or_default();

        Self::new(theme, style, color, spin, eq_color)
    }

    pub fn new(
        theme: ThemeType,
        style: ThemeStyle,
        color: Option<&str>,
        spin: bool,
        eq_color: &str,
    ) -> Self {
        let color = match color {
            Some(c) if theme.accepts_color() => utils::normalize_hex(c),
            _ => None,
        };

        Self {
            theme,
            style: theme.coerce_style(style),
            color,
            spin,
            eq_color: eq_color.trim().trim_start_matches('#').to_string(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.style.is_dark()
    }
}

/// Background colours derived from the album art for themes that want them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DynamicColors {
    pub primary_color: String,
    pub secondary_color: String,
    pub gradient: String,
    pub text_color: String,
}

/// Everything the template layer reads. Produced by
/// [`crate::render::prepare_rendering_data`] and then passed through
/// [`crate::themes::ThemeStrategy::transform_data`].
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub track_name: String,
    pub track_artist: String,
    pub track_id: String,
    pub base_64_track_image: String,
    pub logo: String,
    pub spin: bool,
    pub eq_color: String,
    pub show_equalizer: bool,
    pub bar_count: usize,
    pub theme: ThemeType,
    pub style: ThemeStyle,
    pub dynamic_colors: Option<DynamicColors>,
    pub css: Option<ThemeCss>,
    pub theme_name: Option<String>,
    pub template_name: Option<String>,
    pub use_vinyl_svg: bool,
    pub vinyl_svg: Option<String>,
    pub vinyl_needle_svg: Option<String>,
}

#[derive(Tabled)]
pub struct ThemeTableRow {
    pub name: String,
    pub equalizer: bool,
    pub spin: bool,
    pub custom_color: bool,
}

// Upstream payloads. Every field is defaulted: a missing key is treated the
// same as an empty one and never fails the whole decode.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentlyPlayingResponse {
    #[serde(default)]
    pub item: Option<TrackObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentlyPlayedResponse {
    #[serde(default)]
    pub items: Vec<PlayHistoryObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayHistoryObject {
    #[serde(default)]
    pub track: Option<TrackObject>,
    #[serde(default)]
    pub played_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackObject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<ArtistObject>,
    #[serde(default)]
    pub album: Option<AlbumObject>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistObject {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlbumObject {
    #[serde(default)]
    pub images: Vec<ImageObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageObject {
    #[serde(default)]
    pub url: String,
}
