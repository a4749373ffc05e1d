use crate::types::RenderContext;

use super::{ThemeBase, ThemeCss, ThemeStrategy};

/// Vista/7 glass window with glossy buttons.
#[derive(Debug)]
pub struct FrutigerAeroTheme {
    base: ThemeBase,
}

impl FrutigerAeroTheme {
    pub fn new(base: ThemeBase) -> Self {
        Self { base }
    }
}

impl ThemeStrategy for FrutigerAeroTheme {
    fn base(&self) -> &ThemeBase {
        &self.base
    }

    fn css(&self) -> ThemeCss {
        ThemeCss::new(
            "#a7c7eb",
            "#ffffff",
            "#ddddff",
            "3px",
            "0px",
            "'Segoe UI', 'Lucida Grande', 'Lucida Sans Unicode', 'Lucida Sans', sans-serif",
        )
    }

    fn transform_data(&self, mut context: RenderContext) -> RenderContext {
        let css = self
            .css()
            .with(
                "header_gradient",
                "linear-gradient(to bottom, #3a7ab3 0%, #346ea7 100%)",
            )
            .with("header_border", "#265786")
            .with(
                "header_shine",
                "linear-gradient(to bottom, rgba(255, 255, 255, 0.4) 0%, rgba(255, 255, 255, 0.1) 100%)",
            )
            .with(
                "content_gradient",
                "linear-gradient(to bottom, #c4daf5 0%, #a7c7eb 100%)",
            )
            .with(
                "glass_shine",
                "linear-gradient(to bottom, rgba(255, 255, 255, 0.7) 0%, rgba(255, 255, 255, 0.15) 50%, rgba(255, 255, 255, 0) 100%)",
            )
            .with(
                "controls_gradient",
                "linear-gradient(to bottom, #cedce7 0%, #596a72 100%)",
            )
            .with(
                "button_gradient",
                "linear-gradient(to bottom, #dce8f4 0%, #7c8d9e 100%)",
            )
            .with(
                "button_shine",
                "linear-gradient(to bottom, rgba(255, 255, 255, 0.9) 0%, rgba(255, 255, 255, 0.1) 100%)",
            )
            .with("album_border", "rgba(255, 255, 255, 0.5)")
            .with("album_shadow", "0 1px 4px rgba(0, 0, 0, 0.3)")
            .with("text_shadow", "0 1px 2px rgba(0, 0, 0, 0.5)");

        context.spin = false;
        context.show_equalizer = false;
        context.template_name = Some("frutiger_aero".to_string());

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
