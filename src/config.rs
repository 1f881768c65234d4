use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tools::ToolSettings;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Startup configuration. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Canvas background; also the color the eraser paints with
    pub background: Color32,
    /// Maximum number of undo steps kept, 0 for unbounded
    pub history_limit: usize,
    /// File name used by the save action; its extension picks the format
    pub export_file_name: String,
    /// Directory saved images are written to on native builds
    pub export_dir: String,
    /// Tool settings used when nothing was persisted from a previous run
    pub default_settings: ToolSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            history_limit: 50,
            export_file_name: "canvasImg.jpg".to_owned(),
            export_dir: ".".to_owned(),
            default_settings: ToolSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads the file named by `SKETCHPAD_CONFIG`, or the defaults when it
    /// is unset or unreadable.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let path = std::env::var(CONFIG_ENV_VAR).ok();
        #[cfg(target_arch = "wasm32")]
        let path: Option<String> = None;

        Self::load_or_default(path.as_deref())
    }

    /// Loads `path` if given, falling back to the defaults on any error
    pub fn load_or_default(path: Option<&str>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(err) => {
                log::error!("Ignoring config {path}: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "history_limit": 5, "default_settings": { "tool": "circle" } }"#).unwrap();

        assert_eq!(config.history_limit, 5);
        assert_eq!(config.default_settings.tool, ToolKind::Circle);
        assert_eq!(config.default_settings.brush_width, 5.0);
        assert_eq!(config.export_file_name, "canvasImg.jpg");
        assert_eq!(config.background, Color32::WHITE);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(AppConfig::from_json("{ nope"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_unreadable_config_falls_back_to_defaults() {
        assert!(matches!(
            AppConfig::load_file("/nonexistent/sketchpad.json"),
            Err(ConfigError::Io(_))
        ));
        assert_eq!(
            AppConfig::load_or_default(Some("/nonexistent/sketchpad.json")),
            AppConfig::default()
        );
        assert_eq!(AppConfig::load_or_default(None), AppConfig::default());
    }

    #[test]
    fn test_config_file_is_loaded() {
        let path = std::env::temp_dir().join(format!("sketchpad-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "export_file_name": "out.png" }"#).unwrap();

        let config = AppConfig::load_or_default(path.to_str());
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.export_file_name, "out.png");
        assert_eq!(config.history_limit, 50);
    }
}
