use crate::types::RenderContext;

use super::{ThemeBase, ThemeCss, ThemeStrategy};

#[derive(Debug)]
pub struct MacintoshTheme {
    base: ThemeBase,
}

impl MacintoshTheme {
    pub fn new(base: ThemeBase) -> Self {
        Self { base }
    }
}

impl ThemeStrategy for MacintoshTheme {
    fn base(&self) -> &ThemeBase {
        &self.base
    }

    fn css(&self) -> ThemeCss {
        // subtitle sits on the black status bar
        ThemeCss::new(
            "#E8E8E8",
            "#000000",
            "#FFFFFF",
            "0px",
            "0px",
            "'Chicago', monospace",
        )
    }

    fn transform_data(&self, mut context: RenderContext) -> RenderContext {
        context.spin = false;
        context.show_equalizer = false;
        context.template_name = Some("macintosh".to_string());

        self.base.stamp(&mut context, self.css());
        context
    }

    fn supports_equalizer(&self) -> bool {
        false
    }

    fn supports_spin(&self) -> bool {
        false
    }
}
