//! # Theme Store
//!
//! Light/dark preference, persisted under `theme` as `"light"` / `"dark"`.
//! A pure display preference; nothing else reads it.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::StoreResult;
use crate::storage::{keys, Storage};

/// Display theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub const fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Store for the display theme.
#[derive(Debug)]
pub struct ThemeStore {
    theme: Theme,
    storage: Storage,
}

impl ThemeStore {
    /// Loads the theme (light when the key is absent).
    pub fn load(storage: Storage) -> StoreResult<Self> {
        let theme: Theme = storage.get_json(keys::THEME)?.unwrap_or_default();
        Ok(ThemeStore { theme, storage })
    }

    /// The active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Sets and persists the theme.
    pub fn set(&mut self, theme: Theme) -> StoreResult<()> {
        self.storage.set_json(keys::THEME, &theme)?;
        debug!(?theme, "Theme changed");
        self.theme = theme;
        Ok(())
    }

    /// Flips between light and dark.
    pub fn toggle(&mut self) -> StoreResult<Theme> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    #[test]
    fn test_defaults_to_light() {
        let theme = ThemeStore::load(Storage::new(MemoryBackend::default())).unwrap();
        assert_eq!(theme.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let storage = Storage::new(MemoryBackend::default());
        {
            let mut theme = ThemeStore::load(storage.clone()).unwrap();
            assert_eq!(theme.toggle().unwrap(), Theme::Dark);
        }

        // Persisted as the plain string form.
        assert_eq!(
            storage.get_json::<String>(keys::THEME).unwrap(),
            Some("dark".to_string())
        );

        let theme = ThemeStore::load(storage).unwrap();
        assert_eq!(theme.theme(), Theme::Dark);
    }
}
