use crate::types::RenderContext;

use super::{ThemeBase, ThemeCss, ThemeStrategy};

/// Classic CD player window. Light only.
#[derive(Debug)]
pub struct Windows98Theme {
    base: ThemeBase,
}

impl Windows98Theme {
    pub fn new(base: ThemeBase) -> Self {
        Self { base }
    }
}

impl ThemeStrategy for Windows98Theme {
    fn base(&self) -> &ThemeBase {
        &self.base
    }

    fn css(&self) -> ThemeCss {
        ThemeCss::new(
            "#C0C0C0",
            "#000000",
            "#000000",
            "0px",
            "1px",
            "'IBM Plex Mono', monospace",
        )
    }

    fn transform_data(&self, mut context: RenderContext) -> RenderContext {
        let css = self
            .css()
            .with(
                "titlebar_bg",
                "linear-gradient(to right, navy, rgb(16, 132, 208))",
            )
            .with("button_face", "#C0C0C0")
            .with("button_highlight", "#FFFFFF")
            .with("button_shadow", "#808080")
            .with("button_dark_shadow", "#000000");

        context.spin = false;
        context.show_equalizer = false;
        context.template_name = Some("windows98".to_string());

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
