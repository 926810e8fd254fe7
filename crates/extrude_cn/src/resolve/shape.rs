//! Corner radius from the shape option

use crate::macros::lossy_enum_conversions;
use extrude_theme::ShapeTokens;
use serde::{Deserialize, Serialize};

/// Box silhouette
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Shape {
    /// Nearly sharp corners
    Square,
    /// Fully rounded ends
    Pill,
    #[default]
    Rounded,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Square => "square",
            Shape::Pill => "pill",
            Shape::Rounded => "rounded",
        }
    }

    /// Parse a shape name; unrecognized names fall back to `Rounded`
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "square" => Shape::Square,
            "pill" => Shape::Pill,
            "rounded" => Shape::Rounded,
            other => {
                tracing::debug!("unknown shape {:?}, using rounded", other);
                Shape::default()
            }
        }
    }
}

lossy_enum_conversions!(Shape);

/// Corner radius for a box of `height`
pub fn corner_radius(shape: Shape, height: f32, tokens: &ShapeTokens) -> f32 {
    match shape {
        Shape::Square => tokens.square_radius,
        Shape::Pill => height / 2.0,
        Shape::Rounded => tokens.rounded_radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pill_is_half_height() {
        let tokens = ShapeTokens::default();
        for h in [0.5, 2.4, 3.0, 4.2] {
            assert_eq!(corner_radius(Shape::Pill, h, &tokens), h / 2.0);
        }
    }

    #[test]
    fn test_square_ignores_height() {
        let tokens = ShapeTokens::default();
        assert_eq!(corner_radius(Shape::Square, 1.0, &tokens), 0.01);
        assert_eq!(corner_radius(Shape::Square, 9.0, &tokens), 0.01);
    }

    #[test]
    fn test_unknown_shape_is_rounded() {
        let tokens = ShapeTokens::default();
        let shape = Shape::from("hexagon");
        assert_eq!(shape, Shape::Rounded);
        assert_eq!(corner_radius(shape, 3.0, &tokens), 0.5);
    }

    #[test]
    fn test_serde_is_lenient() {
        let shape: Shape = serde_json::from_str("\"Pill\"").unwrap();
        assert_eq!(shape, Shape::Pill);
        let shape: Shape = serde_json::from_str("\"blob\"").unwrap();
        assert_eq!(shape, Shape::Rounded);
        assert_eq!(serde_json::to_string(&Shape::Square).unwrap(), "\"square\"");
    }
}
