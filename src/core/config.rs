//! core/config.rs
//! Persistent app settings: one small JSON blob in the platform config
//! directory.
//!
//! Every field carries a serde default so old/partial/corrupt files
//! degrade to defaults instead of refusing to load.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::queue::DEFAULT_VOLUME;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Which of the two UI layouts to render. Both share the same state,
/// update loop, and playback backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UiVariant {
    Classic,
    #[default]
    Modern,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_volume")]
    pub volume: f32,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub ui: UiVariant,

    /// Queue contents at last save, restored on startup (existing
    /// files only).
    #[serde(default)]
    pub last_playlist: Vec<PathBuf>,

    #[serde(default)]
    pub last_index: usize,

    /// Start playing `last_index` as soon as the app opens.
    #[serde(default)]
    pub resume_on_start: bool,

    #[serde(default = "default_fade_in_ms")]
    pub fade_in_ms: u64,
}

fn default_volume() -> f32 {
    DEFAULT_VOLUME
}

fn default_fade_in_ms() -> u64 {
    500
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            theme: Theme::default(),
            ui: UiVariant::default(),
            last_playlist: Vec::new(),
            last_index: 0,
            resume_on_start: false,
            fade_in_ms: default_fade_in_ms(),
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("resona")
            .join("config.json")
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &std::path::Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("{}: {e}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(path, json).map_err(|e| format!("{}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let s = Settings::load_from(std::path::Path::new("/nope/config.json"));
        assert_eq!(s.volume, DEFAULT_VOLUME);
        assert_eq!(s.theme, Theme::Dark);
        assert_eq!(s.ui, UiVariant::Modern);
        assert!(!s.resume_on_start);
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let s = Settings::load_from(&path);
        assert_eq!(s.fade_in_ms, 500);
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{"volume": 0.25, "theme": "light"}"#).unwrap();

        let s = Settings::load_from(&path);
        assert_eq!(s.volume, 0.25);
        assert_eq!(s.theme, Theme::Light);
        assert_eq!(s.ui, UiVariant::Modern);
        assert_eq!(s.fade_in_ms, 500);
    }

    #[test]
    fn roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("deep").join("config.json");

        let mut s = Settings::default();
        s.volume = 0.9;
        s.ui = UiVariant::Classic;
        s.last_playlist = vec![PathBuf::from("/music/a.mp3")];
        s.last_index = 3;
        s.resume_on_start = true;

        s.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path);

        assert_eq!(loaded.volume, 0.9);
        assert_eq!(loaded.ui, UiVariant::Classic);
        assert_eq!(loaded.last_playlist, s.last_playlist);
        assert_eq!(loaded.last_index, 3);
        assert!(loaded.resume_on_start);
    }
}
