use crate::types::RenderContext;

use super::{ThemeBase, ThemeCss, ThemeStrategy};

/// Media Player 11 style skin.
#[derive(Debug)]
pub struct WindowsXpTheme {
    base: ThemeBase,
}

impl WindowsXpTheme {
    pub fn new(base: ThemeBase) -> Self {
        Self { base }
    }
}

impl ThemeStrategy for WindowsXpTheme {
    fn base(&self) -> &ThemeBase {
        &self.base
    }

    fn css(&self) -> ThemeCss {
        ThemeCss::new(
            "#394152",
            "#FFFFFF",
            "#CCCCCC",
            "0px",
            "0px",
            "'Tahoma', sans-serif",
        )
    }

    fn transform_data(&self, mut context: RenderContext) -> RenderContext {
        let css = self
            .css()
            .with("player_active_white", "rgb(239, 247, 255)")
            .with("player_disable_white", "rgba(239, 247, 255, 0.3)")
            .with("gradient_top", "rgb(0, 0, 0)")
            .with("gradient_middle", "rgb(57, 65, 82)")
            .with("gradient_bottom_1", "rgb(102, 108, 132)")
            .with("gradient_bottom_2", "rgb(17, 20, 25)")
            .with("button_blue", "#00109c")
            .with("control_shadow", "0 0 5px rgba(0, 82, 198, 0.5)");

        context.spin = false;
        context.show_equalizer = false;
        context.template_name = Some("windowsxp".to_string());

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
