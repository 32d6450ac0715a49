//! Process-wide light/dark display preference
//!
//! Initialized once at startup from the persisted preference (when a state
//! file is configured) and mutated only through [`ThemeStore::toggle`]. The
//! flag affects rendering only.

use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct ThemeStore {
    mode: Arc<RwLock<ThemeMode>>,
    state_file: Option<PathBuf>,
}

impl ThemeStore {
    /// Loads the stored preference if one exists, otherwise uses the default.
    pub fn load(state_file: Option<PathBuf>, default: ThemeMode) -> Self {
        let mode = state_file
            .as_deref()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|contents| ThemeMode::parse(&contents))
            .unwrap_or(default);

        Self {
            mode: Arc::new(RwLock::new(mode)),
            state_file,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        *self.mode.read()
    }

    /// Flips the preference and persists it. The sole write path.
    pub fn toggle(&self) -> ThemeMode {
        let mut mode = self.mode.write();
        *mode = mode.flipped();

        if let Some(path) = &self.state_file {
            if let Err(e) = std::fs::write(path, mode.as_str()) {
                warn!("Failed to persist theme preference: {}", e);
            }
        }

        *mode
    }
}
