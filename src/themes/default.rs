use crate::types::RenderContext;

use super::{SYSTEM_FONT, ThemeBase, ThemeCss, ThemeStrategy};

/// Blurred album art behind a card, with the equalizer.
#[derive(Debug)]
pub struct DefaultTheme {
    base: ThemeBase,
}

impl DefaultTheme {
    pub fn new(base: ThemeBase) -> Self {
        Self { base }
    }
}

impl ThemeStrategy for DefaultTheme {
    fn base(&self) -> &ThemeBase {
        &self.base
    }

    fn css(&self) -> ThemeCss {
        let background = self
            .base
            .color()
            .unwrap_or_else(|| self.base.dark_or_light("#161B22", "#F6F8FA"));

        ThemeCss::new(
            background,
            "#FFFFFF",
            self.base.dark_or_light("#BBBBBB", "#DDDDDD"),
            "10px",
            "20px",
            SYSTEM_FONT,
        )
    }

    fn transform_data(&self, mut context: RenderContext) -> RenderContext {
        let overlay = self.base.custom_overlay().unwrap_or_else(|| {
            self.base
                .dark_or_light("rgba(0,0,0,0.6)", "rgba(0,0,0,0.25)")
                .to_string()
        });

        let mut css = self.css().with("overlay_color", overlay);
        if context.spin {
            css.album_border_radius = "50%".to_string();
        }

        self.base.stamp(&mut context, css);
        context
    }
}
