use crate::types::RenderContext;

use super::{SYSTEM_FONT, ThemeBase, ThemeCss, ThemeStrategy};

/// Click-wheel player; a custom colour paints the body.
#[derive(Debug)]
pub struct IpodTheme {
    base: ThemeBase,
}

impl IpodTheme {
    pub fn new(base: ThemeBase) -> Self {
        Self { base }
    }
}

impl ThemeStrategy for IpodTheme {
    fn base(&self) -> &ThemeBase {
        &self.base
    }

    fn css(&self) -> ThemeCss {
        ThemeCss::new(
            self.base.color().unwrap_or("#e2e2e3"),
            "#555555",
            "#666666",
            "20px",
            "15px",
            SYSTEM_FONT,
        )
    }

    fn transform_data(&self, mut context: RenderContext) -> RenderContext {
        context.spin = false;
        context.show_equalizer = false;

        let css = self
            .css()
            .with(
                "controls_bg",
                self.base
                    .dark_or_light("rgba(49,49,50,1)", "rgba(255,255,255,1)"),
            )
            .with("controls_border", "#e6e6e6")
            .with("controls_shadow", "0 4px 10px rgba(0, 0, 0, 0.05)")
            .with("icon_color", "#b6b4b3")
            .with("album_border_color", "#000000")
            .with("album_border_width", "4px")
            .with(
                "overlay_color",
                self.base
                    .dark_or_light("rgba(0,0,0,0.6)", "rgba(0,0,0,0.45)"),
            );

        self.base.stamp(&mut context, css);
        context
    }

    fn supports_equalizer(&self) -> bool {
        false
    }

    fn supports_spin(&self) -> bool {
        false
    }
}
