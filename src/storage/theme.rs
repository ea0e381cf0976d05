//! Theme preference storage

use crate::storage::KeyValueStore;
use crate::types::theme::Theme;
use std::sync::Arc;

/// Store key holding "light" or "dark"
pub const THEME_KEY: &str = "theme";

/// Holds the current theme and writes every change back to the store
pub struct ThemeHolder {
    theme: Theme,
    store: Arc<dyn KeyValueStore>,
}

impl ThemeHolder {
    /// Restore the stored theme, falling back to dark
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let theme = match store.get(THEME_KEY) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
                tracing::warn!("Unknown stored theme {:?}, using default", value);
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!("Failed to read theme, using default: {}", e);
                Theme::default()
            }
        };
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip between light and dark; returns the new value
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            tracing::warn!("Failed to save theme: {}", e);
        }
    }
}
