//! Extrude configuration file handling
//!
//! An optional `extrude.toml` in the working directory sets defaults for
//! every command:
//!
//! ```toml
//! theme = "theme.toml"
//!
//! [viewport]
//! width = 1280
//! height = 800
//!
//! [output]
//! pretty = true
//! gradient_size = 256
//! ```

use anyhow::{Context, Result};
use extrude_cn::viewport::Viewport;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "extrude.toml";

/// Defaults shared by all commands
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExtrudeConfig {
    /// Theme TOML, relative to the config file
    #[serde(default)]
    pub theme: Option<PathBuf>,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Viewport assumed when a command is not given one
#[derive(Debug, Deserialize, Serialize)]
pub struct ViewportConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    1280.0
}

fn default_height() -> f32 {
    800.0
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Pretty-print scene JSON
    #[serde(default = "default_true")]
    pub pretty: bool,
    /// Edge length of exported gradient PNGs
    #[serde(default = "default_gradient_size")]
    pub gradient_size: u32,
}

fn default_true() -> bool {
    true
}

fn default_gradient_size() -> u32 {
    256
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_true(),
            gradient_size: default_gradient_size(),
        }
    }
}

impl ExtrudeConfig {
    /// Load `extrude.toml` from a directory, or defaults if there is none
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let mut config: ExtrudeConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        if let Some(theme) = config.theme.take() {
            config.theme = Some(path.join(theme));
        }
        Ok(config)
    }

    /// Viewport from the config, with the width optionally overridden
    pub fn viewport(&self, width: Option<f32>) -> Viewport {
        Viewport::new(width.unwrap_or(self.viewport.width), self.viewport.height)
    }

    /// Serialize a value as JSON honoring `output.pretty`
    pub fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.output.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.context("Failed to serialize scene")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = std::env::temp_dir().join("extrude-config-missing");
        let config = ExtrudeConfig::load_from_dir(&dir).unwrap();
        assert!(config.theme.is_none());
        assert_eq!(config.viewport(None), Viewport::new(1280.0, 800.0));
        assert_eq!(config.viewport(Some(375.0)).width, 375.0);
    }

    #[test]
    fn test_partial_file() {
        let dir = std::env::temp_dir().join(format!("extrude-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(CONFIG_FILE),
            "theme = \"compact.toml\"\n[output]\npretty = false\n",
        )
        .unwrap();

        let config = ExtrudeConfig::load_from_dir(&dir).unwrap();
        assert_eq!(config.theme, Some(dir.join("compact.toml")));
        assert!(!config.output.pretty);
        assert_eq!(config.output.gradient_size, 256);
        assert_eq!(config.viewport.height, 800.0);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_compact_json() {
        let config: ExtrudeConfig = toml::from_str("[output]\npretty = false").unwrap();
        assert_eq!(config.to_json(&[1, 2]).unwrap(), "[1,2]");
    }
}
