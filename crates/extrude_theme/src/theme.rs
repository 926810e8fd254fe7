//! Theme bundle and presets

use crate::error::Result;
use crate::tokens::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Every token group the resolvers read
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrudeTheme {
    pub sizes: SizeTokens,
    pub shapes: ShapeTokens,
    pub camera: CameraTokens,
    pub container: ContainerTokens,
    pub motion: MotionTokens,
    pub textures: TextureTokens,
}

impl ExtrudeTheme {
    /// The earlier, smaller button tables
    ///
    /// Boxes are sized for a fixed camera at 2.5 units, the radius is
    /// tighter and pressing pushes the button down instead of leaving it in
    /// place.
    pub fn compact() -> Self {
        Self {
            sizes: SizeTokens {
                base: SizeTable::new(
                    BaseDimensions::new(1.5, 0.5, 0.15),
                    BaseDimensions::new(2.0, 0.7, 0.2),
                    BaseDimensions::new(2.5, 0.9, 0.25),
                    BaseDimensions::new(3.0, 1.1, 0.3),
                ),
                ..SizeTokens::default()
            },
            shapes: ShapeTokens {
                square_radius: 0.01,
                rounded_radius: 0.15,
            },
            camera: CameraTokens {
                base_distance: SizeTable::uniform(2.5),
                default_distance: 2.5,
                max_text_multiplier: 1.0,
                mobile_distance_multiplier: 1.0,
                narrow_fov_multiplier: 1.0,
                mobile_fov_multiplier: 1.0,
                // Never scale for wide screens
                reference_width: f32::MIN_POSITIVE,
                ..CameraTokens::default()
            },
            motion: MotionTokens {
                press_offset: 0.15,
                ..MotionTokens::default()
            },
            ..Self::default()
        }
    }

    /// Parse a theme from TOML; missing groups keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a theme file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let theme = Self::from_toml_str(&content)?;
        tracing::debug!("loaded theme from {}", path.display());
        Ok(theme)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the theme to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let theme = ExtrudeTheme::from_toml_str(
            r#"
            [camera]
            base_fov = 45.0

            [shapes]
            rounded_radius = 0.3
            "#,
        )
        .unwrap();

        assert_eq!(theme.camera.base_fov, 45.0);
        assert_eq!(theme.camera.default_distance, 5.0);
        assert_eq!(theme.shapes.rounded_radius, 0.3);
        assert_eq!(theme.shapes.square_radius, 0.01);
        assert_eq!(theme.sizes, SizeTokens::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let theme = ExtrudeTheme::compact();
        let text = theme.to_toml_string().unwrap();
        let back = ExtrudeTheme::from_toml_str(&text).unwrap();
        assert_eq!(back, theme);
    }

    #[test]
    fn test_size_table_requires_every_tier() {
        let result = ExtrudeTheme::from_toml_str(
            r#"
            [camera.base_distance]
            small = 3.0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(ExtrudeTheme::from_toml_str("[camera\nbase_fov = ").is_err());
    }
}
