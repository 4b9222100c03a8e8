use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const MIN_FONT_SCALE: f32 = 0.8;
pub const MAX_FONT_SCALE: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    System,
    Dark,
    Light,
}

impl Appearance {
    pub const ALL: &[Appearance] = &[Appearance::System, Appearance::Dark, Appearance::Light];
}

impl std::fmt::Display for Appearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Appearance::System => write!(f, "System"),
            Appearance::Dark => write!(f, "Dark"),
            Appearance::Light => write!(f, "Light"),
        }
    }
}

/// User preferences persisted between launches.
///
/// Expansion state is not stored here; it lives only as long as the
/// loaded result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub appearance: Appearance,
    pub high_contrast: bool,
    pub font_scale: f32,
    /// Directory of the last opened results file, used to seed the file dialog.
    pub last_directory: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            appearance: Appearance::System,
            high_contrast: false,
            font_scale: 1.0,
            last_directory: None,
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("Facelog").join("settings.json"))
    }

    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .map(|json| Self::from_json(&json))
            .unwrap_or_default()
    }

    /// Parse stored settings, falling back to defaults on malformed input.
    pub fn from_json(json: &str) -> Self {
        let mut settings: Settings = serde_json::from_str(json).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable settings: {e}");
            Settings::default()
        });
        settings.font_scale = settings.font_scale.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE);
        settings
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            match serde_json::to_string_pretty(self) {
                Ok(json) => {
                    if let Err(e) = fs::write(&path, json) {
                        log::warn!("Failed to save settings to {}: {e}", path.display());
                    }
                }
                Err(e) => log::warn!("Failed to serialize settings: {e}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_fields() {
        let settings = Settings {
            appearance: Appearance::Dark,
            high_contrast: true,
            font_scale: 1.2,
            last_directory: Some(PathBuf::from("/tmp/results")),
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json), settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::from_json(r#"{"appearance": "light"}"#);
        assert_eq!(settings.appearance, Appearance::Light);
        assert!(!settings.high_contrast);
        assert_eq!(settings.font_scale, 1.0);
        assert!(settings.last_directory.is_none());
    }

    #[test]
    fn test_malformed_json_falls_back_to_defaults() {
        assert_eq!(Settings::from_json("{ nope"), Settings::default());
    }

    #[test]
    fn test_font_scale_is_clamped() {
        let settings = Settings::from_json(r#"{"font_scale": 4.0}"#);
        assert_eq!(settings.font_scale, MAX_FONT_SCALE);
    }

    #[test]
    fn test_appearance_display() {
        assert_eq!(Appearance::System.to_string(), "System");
        assert_eq!(Appearance::Dark.to_string(), "Dark");
    }
}
