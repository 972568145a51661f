use crate::cli::commands::open_kv;
use crate::config::Config;
use crate::core::theme::ThemeLogic;
use crate::errors::AppResult;
use crate::models::palette::{self, CLASS_COLORS};
use crate::utils::colors::{RESET, ansi_for_class_color};
use crate::utils::table::{Column, Table};

/// Print the palette offered to `add --color` / `edit --color`.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let kv = open_kv(cfg)?;
    let theme = ThemeLogic::load(&kv, &cfg.theme_key, cfg.default_theme)?;

    let mut table = Table::new(vec![
        Column::new("Label", 12),
        Column::new("Value", 70),
    ]);

    for c in CLASS_COLORS.iter() {
        let mut label = format!("{}{}{}", ansi_for_class_color(c.value, theme), c.label, RESET);
        if c.value == palette::default_color() {
            label.push('*');
        }
        table.add_row(vec![label, c.value.to_string()]);
    }

    println!("{}", table.render());
    println!("* preselected for new classes");
    Ok(())
}
