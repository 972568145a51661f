//! Fixed color palette offered by the class form.
//!
//! Values are presentation tags; the core stores whatever string it gets.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CLASS_COLORS: [PaletteColor; 8] = [
    PaletteColor {
        label: "Moviy",
        value: "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200",
    },
    PaletteColor {
        label: "Yashil",
        value: "bg-emerald-100 text-emerald-800 dark:bg-emerald-900 dark:text-emerald-200",
    },
    PaletteColor {
        label: "Qizil",
        value: "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200",
    },
    PaletteColor {
        label: "Sariq",
        value: "bg-amber-100 text-amber-800 dark:bg-amber-900 dark:text-amber-200",
    },
    PaletteColor {
        label: "Binafsha",
        value: "bg-violet-100 text-violet-800 dark:bg-violet-900 dark:text-violet-200",
    },
    PaletteColor {
        label: "Pushti",
        value: "bg-pink-100 text-pink-800 dark:bg-pink-900 dark:text-pink-200",
    },
    PaletteColor {
        label: "Kulrang",
        value: "bg-slate-100 text-slate-800 dark:bg-slate-700 dark:text-slate-200",
    },
    PaletteColor {
        label: "To'q sariq",
        value: "bg-orange-100 text-orange-800 dark:bg-orange-900 dark:text-orange-200",
    },
];

/// Color preselected for a new class.
pub fn default_color() -> &'static str {
    CLASS_COLORS[0].value
}

pub fn by_value(value: &str) -> Option<&'static PaletteColor> {
    CLASS_COLORS.iter().find(|c| c.value == value)
}

/// Resolve user input: a palette label (any case) or an exact palette value.
pub fn resolve(input: &str) -> Option<&'static PaletteColor> {
    let wanted = input.trim();
    CLASS_COLORS
        .iter()
        .find(|c| c.label.eq_ignore_ascii_case(wanted) || c.value == wanted)
}
