use crate::types::RenderContext;

use super::{ThemeBase, ThemeCss, ThemeStrategy};

/// Pixel-style audio player with static level dots.
#[derive(Debug)]
pub struct RetroTheme {
    base: ThemeBase,
}

impl RetroTheme {
    pub fn new(base: ThemeBase) -> Self {
        Self { base }
    }
}

impl ThemeStrategy for RetroTheme {
    fn base(&self) -> &ThemeBase {
        &self.base
    }

    fn css(&self) -> ThemeCss {
        let b = &self.base;
        ThemeCss::new(
            b.dark_or_light("#232731", "#c6c6c6"),
            b.dark_or_light("#4df3ad", "#2eb532"),
            b.dark_or_light("#3dd38d", "#269a2a"),
            "4px",
            "15px",
            "sans-serif, -apple-system, BlinkMacSystemFont, Segoe UI, Helvetica, Arial",
        )
    }

    fn transform_data(&self, mut context: RenderContext) -> RenderContext {
        let b = &self.base;
        let css = self
            .css()
            // 3D bevel
            .with("border_top_color", b.dark_or_light("#181b22", "#9a9a9a"))
            .with("border_left_color", b.dark_or_light("#181b22", "#9a9a9a"))
            .with("border_right_color", b.dark_or_light("#40495f", "white"))
            .with("border_bottom_color", b.dark_or_light("#40495f", "white"))
            .with("button_border", b.dark_or_light("#12141c", "#9a9a9a"))
            .with("panel_bg_color", b.dark_or_light("#10242f", "#041e2e"))
            .with("button_bg_color", b.dark_or_light("#303644", "#e1e1e1"))
            .with("button_color", b.dark_or_light("#4cf3ad", "#2fb532"))
            .with("equalizer_bar_color", b.dark_or_light("#4df3ad", "#0100fb"))
            .with(
                "equalizer_progress_color",
                b.dark_or_light("#242424", "#181a29"),
            )
            .with(
                "overlay_color",
                b.dark_or_light("rgba(0,0,0,0.7)", "rgba(0,0,0,0.5)"),
            );

        context.show_equalizer = false;
        context.template_name = Some("retro".to_string());

        b.stamp(&mut context, css);
        context
    }

    fn supports_equalizer(&self) -> bool {
        false
    }

    fn supports_spin(&self) -> bool {
        false
    }
}
