use log::debug;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

pub const DESIGN_STORAGE_KEY: &str = "designConfig";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
    Sepia,
}

impl Theme {
    /// The theme toggle cycles dark → light → sepia → dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Sepia,
            Self::Sepia => Self::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignConfig {
    pub theme: Theme,
    pub font: String,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font: "sans-serif".to_string(),
        }
    }
}

// Imports and the persisted blob may carry only some of the fields; the
// missing ones keep their current values.
#[derive(Debug, Default, Deserialize)]
struct PartialDesignConfig {
    #[serde(default)]
    theme: Option<Theme>,
    #[serde(default)]
    font: Option<String>,
}

impl DesignConfig {
    pub fn load(store: &KeyValueStore) -> Self {
        let mut cfg = Self::default();
        if let Some(raw) = store.get(DESIGN_STORAGE_KEY) {
            match serde_json::from_str::<PartialDesignConfig>(&raw) {
                Ok(stored) => cfg.overlay(stored),
                Err(e) => debug!("Ignoring corrupt design config: {e}"),
            }
        }
        cfg
    }

    pub fn save(&self, store: &KeyValueStore) {
        if let Ok(raw) = serde_json::to_string(self) {
            store.set(DESIGN_STORAGE_KEY, raw);
        }
    }

    /// Apply a pasted JSON snippet; parse failures leave the config as is.
    pub fn apply_import(&mut self, raw: &str) {
        match serde_json::from_str::<PartialDesignConfig>(raw) {
            Ok(imported) => self.overlay(imported),
            Err(e) => debug!("Ignoring design import: {e}"),
        }
    }

    fn overlay(&mut self, partial: PartialDesignConfig) {
        if let Some(theme) = partial.theme {
            self.theme = theme;
        }
        if let Some(font) = partial.font {
            self.font = font;
        }
    }
}

pub fn presets() -> &'static [(&'static str, Theme, &'static str)] {
    &[
        ("default", Theme::Dark, "sans-serif"),
        ("ocean", Theme::Light, "serif"),
        ("forest", Theme::Sepia, "monospace"),
    ]
}

pub fn preset(name: &str) -> Option<DesignConfig> {
    presets()
        .iter()
        .find(|(preset_name, _, _)| *preset_name == name)
        .map(|(_, theme, font)| DesignConfig {
            theme: *theme,
            font: font.to_string(),
        })
}

// Current design state, loaded once and persisted on every change.
pub static DESIGN: Lazy<Mutex<DesignConfig>> =
    Lazy::new(|| Mutex::new(DesignConfig::load(&crate::storage::STORE)));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_stored() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyValueStore::open(dir.path());
        let cfg = DesignConfig::load(&store);
        assert_eq!(cfg, DesignConfig::default());
    }

    #[test]
    fn test_load_applies_partial_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyValueStore::open(dir.path());
        store.set(DESIGN_STORAGE_KEY, r#"{"theme":"sepia"}"#);

        let cfg = DesignConfig::load(&store);
        assert_eq!(cfg.theme, Theme::Sepia);
        assert_eq!(cfg.font, "sans-serif");
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyValueStore::open(dir.path());
        store.set(DESIGN_STORAGE_KEY, "{nope");

        assert_eq!(DesignConfig::load(&store), DesignConfig::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyValueStore::open(dir.path());

        let cfg = DesignConfig {
            theme: Theme::Light,
            font: "monospace".to_string(),
        };
        cfg.save(&store);
        assert_eq!(DesignConfig::load(&store), cfg);
    }

    #[test]
    fn test_import_applies_known_fields_and_ignores_garbage() {
        let mut cfg = DesignConfig::default();

        cfg.apply_import(r#"{"font":"serif"}"#);
        assert_eq!(cfg.theme, Theme::Dark);
        assert_eq!(cfg.font, "serif");

        let before = cfg.clone();
        cfg.apply_import("not json at all");
        assert_eq!(cfg, before);

        cfg.apply_import(r#"{"theme":"neon"}"#);
        assert_eq!(cfg, before);
    }

    #[test]
    fn test_theme_cycle() {
        assert_eq!(Theme::Dark.next(), Theme::Light);
        assert_eq!(Theme::Light.next(), Theme::Sepia);
        assert_eq!(Theme::Sepia.next(), Theme::Dark);
    }

    #[test]
    fn test_presets() {
        let ocean = preset("ocean").unwrap();
        assert_eq!(ocean.theme, Theme::Light);
        assert_eq!(ocean.font, "serif");
        assert!(preset("missing").is_none());
    }
}
