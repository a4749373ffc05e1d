use tabled::Table;

use crate::{
    themes::ThemeRegistry,
    types::{ThemeStyle, ThemeTableRow, ThemeType},
};

/// Prints every registered theme with its capabilities.
pub fn list_themes() {
    let registry = ThemeRegistry::new();

    let rows: Vec<ThemeTableRow> = ThemeType::ALL
        .into_iter()
        .map(|theme_type| {
            let theme = registry.get_theme(theme_type, ThemeStyle::Light, None);
            ThemeTableRow {
                name: theme.name().to_string(),
                equalizer: theme.supports_equalizer(),
                spin: theme.supports_spin(),
                custom_color: theme_type.accepts_color(),
            }
        })
        .collect();

    println!("{}", Table::new(rows));
}
