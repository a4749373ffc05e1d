use crate::types::RenderContext;

use super::{SYSTEM_FONT, ThemeBase, ThemeCss, ThemeStrategy};

/// Spinning record over a gradient derived from the album art.
#[derive(Debug)]
pub struct VinylTheme {
    base: ThemeBase,
}

impl VinylTheme {
    pub fn new(base: ThemeBase) -> Self {
        Self { base }
    }
}

impl ThemeStrategy for VinylTheme {
    fn base(&self) -> &ThemeBase {
        &self.base
    }

    fn css(&self) -> ThemeCss {
        let background = self
            .base
            .color()
            .unwrap_or_else(|| self.base.dark_or_light("#161B22", "#F6F8FA"));

        let overlay = match self.base.color() {
            Some(_) => self
                .base
                .custom_overlay()
                .unwrap_or_else(|| "rgba(0,0,0,0.6)".to_string()),
            None => self
                .base
                .dark_or_light("rgba(0,0,0,0.6)", "rgba(0,0,0,0.45)")
                .to_string(),
        };

        ThemeCss::new(
            background,
            "#FFFFFF",
            self.base.dark_or_light("#BBBBBB", "#DDDDDD"),
            "50%",
            "15px",
            SYSTEM_FONT,
        )
        .with("overlay_color", overlay)
        .with("spin_duration", "10s")
    }

    fn transform_data(&self, mut context: RenderContext) -> RenderContext {
        context.spin = true;
        context.show_equalizer = false;
        context.use_vinyl_svg = true;
        context.template_name = Some("vinyl".to_string());

        self.base.stamp(&mut context, self.css());
        context
    }

    fn supports_equalizer(&self) -> bool {
        false
    }
}
