//! Light/dark preference, stored next to the schedule in the same medium.

use crate::core::kv::KeyValueStore;
use crate::errors::AppResult;
use crate::models::Theme;
use tracing::{debug, warn};

pub struct ThemeLogic;

impl ThemeLogic {
    /// Stored preference, or `fallback` when absent or unreadable.
    pub fn load(kv: &impl KeyValueStore, key: &str, fallback: Theme) -> AppResult<Theme> {
        let theme = match kv.get(key)? {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                warn!(key, value = %raw, "unknown stored theme, using {}", fallback);
                fallback
            }),
            None => fallback,
        };
        Ok(theme)
    }

    pub fn save(kv: &mut impl KeyValueStore, key: &str, theme: Theme) -> AppResult<()> {
        debug!(key, %theme, "theme saved");
        kv.set(key, theme.as_str())
    }

    /// Flip the stored preference and return the new value.
    pub fn toggle(kv: &mut impl KeyValueStore, key: &str, fallback: Theme) -> AppResult<Theme> {
        let next = Self::load(&*kv, key, fallback)?.toggled();
        Self::save(kv, key, next)?;
        Ok(next)
    }
}
