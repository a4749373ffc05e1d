//! # Rendering
//!
//! [`prepare_rendering_data`] merges a track and a widget config into a
//! [`RenderContext`]; the active theme then transforms that context and
//! [`template::render_widget`] turns it into markup.

pub mod template;

pub use template::{Template, render_link_page, render_widget};

use crate::{
    types::{DynamicColors, RenderContext, Track, WidgetConfig},
    utils,
};

/// Number of equalizer bars drawn by every template that shows one.
pub const EQUALIZER_BAR_COUNT: usize = 10;

const LIGHT_DEFAULTS: (&str, &str) = ("#F6F8FA", "#E1E4E8");
const DARK_DEFAULTS: (&str, &str) = ("#161B22", "#0D1117");

/// Builds the base rendering context. Pure: no I/O and no theme lookup.
///
/// Gradient colours are only derived when the configured theme uses a
/// dynamic background. The equalizer is hidden when `eq_color` is `none`
/// (any case).
pub fn prepare_rendering_data(track: &Track, config: &WidgetConfig, logo: &str) -> RenderContext {
    let dynamic_colors = config
        .theme
        .uses_dynamic_background()
        .then(|| extract_gradient_colors(&track.album_image, config.is_dark()));

    RenderContext {
        track_name: track.name.clone(),
        track_artist: track.artist.clone(),
        track_id: track.id.clone(),
        base_64_track_image: track.album_image.clone(),
        logo: logo.to_string(),
        spin: config.spin,
        eq_color: config.eq_color.clone(),
        show_equalizer: !config.eq_color.eq_ignore_ascii_case("none"),
        bar_count: EQUALIZER_BAR_COUNT,
        theme: config.theme,
        style: config.style,
        dynamic_colors,
        css: None,
        theme_name: None,
        template_name: None,
        use_vinyl_svg: false,
        vinyl_svg: None,
        vinyl_needle_svg: None,
    }
}

/// Stand-in for colour extraction: the hue comes from a hash of the encoded
/// image, saturation and lightness from the style. Empty payloads get one of
/// two fixed palettes.
pub fn extract_gradient_colors(album_image: &str, is_dark: bool) -> DynamicColors {
    let text_color = if is_dark { "#FFFFFF" } else { "#000000" };

    if album_image.is_empty() {
        let (primary, secondary) = if is_dark { DARK_DEFAULTS } else { LIGHT_DEFAULTS };
        return DynamicColors {
            primary_color: primary.to_string(),
            secondary_color: secondary.to_string(),
            gradient: format!("linear-gradient(135deg, {}, {})", primary, secondary),
            text_color: text_color.to_string(),
        };
    }

    let hue = (utils::payload_hash(album_image) % 1000) % 360;
    let (saturation, lightness_primary, lightness_secondary) =
        if is_dark { (70, 20, 30) } else { (40, 80, 70) };

    let primary = format!("hsl({}, {}%, {}%)", hue, saturation, lightness_primary);
    let secondary = format!(
        "hsl({}, {}%, {}%)",
        (hue + 30) % 360,
        saturation,
        lightness_secondary
    );

    DynamicColors {
        gradient: format!("linear-gradient(135deg, {}, {})", primary, secondary),
        primary_color: primary,
        secondary_color: secondary,
        text_color: text_color.to_string(),
    }
}
