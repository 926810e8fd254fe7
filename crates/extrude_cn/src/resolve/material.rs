//! Frame finishes

use crate::macros::lossy_enum_conversions;
use extrude_3d::PhysicalMaterial;
use extrude_core::Color;
use serde::{Deserialize, Serialize};

/// Finish of the frame around an image
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum FrameStyle {
    #[default]
    Metal,
    Glass,
    Matte,
    Glossy,
}

impl FrameStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameStyle::Metal => "metal",
            FrameStyle::Glass => "glass",
            FrameStyle::Matte => "matte",
            FrameStyle::Glossy => "glossy",
        }
    }

    /// Parse a frame style; unrecognized names fall back to `Metal`
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "metal" => FrameStyle::Metal,
            "glass" => FrameStyle::Glass,
            "matte" => FrameStyle::Matte,
            "glossy" => FrameStyle::Glossy,
            other => {
                tracing::debug!("unknown frame style {:?}, using metal", other);
                FrameStyle::default()
            }
        }
    }
}

lossy_enum_conversions!(FrameStyle);

/// Physical material for a frame of the given finish
pub fn frame_material(style: FrameStyle, color: Color) -> PhysicalMaterial {
    let material = PhysicalMaterial::with_color(color);
    match style {
        FrameStyle::Metal => material.metalness(0.9).roughness(0.2).clearcoat(0.5, 0.0),
        FrameStyle::Glass => material
            .metalness(0.1)
            .roughness(0.1)
            .transmission(0.9, 0.5)
            .clearcoat(1.0, 0.0),
        FrameStyle::Matte => material.metalness(0.1).roughness(0.8).clearcoat(0.0, 0.0),
        FrameStyle::Glossy => material.metalness(0.3).roughness(0.2).clearcoat(1.0, 0.1),
    }
}
