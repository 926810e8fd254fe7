//! Geometry descriptors
//!
//! The renderer tessellates; these only carry the parameters.

use serde::Serialize;

/// Bevel applied to extruded text
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bevel {
    pub size: f32,
    pub thickness: f32,
}

/// Geometry primitives used by the components
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    /// Box with rounded edges
    RoundedBox {
        width: f32,
        height: f32,
        depth: f32,
        radius: f32,
    },
    /// Axis-aligned box
    Box { width: f32, height: f32, depth: f32 },
    /// Flat plane facing +Z
    Plane { width: f32, height: f32 },
    /// Extruded text mesh
    Text3D {
        content: String,
        font: String,
        size: f32,
        height: f32,
        letter_spacing: f32,
        line_height: f32,
        bevel: Option<Bevel>,
    },
}

impl Geometry {
    pub fn rounded_box(width: f32, height: f32, depth: f32, radius: f32) -> Self {
        // Radius can never exceed half the shorter front edge
        let max_radius = width.min(height) / 2.0;
        Geometry::RoundedBox {
            width,
            height,
            depth,
            radius: radius.clamp(0.0, max_radius.max(0.0)),
        }
    }

    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Geometry::Box {
            width,
            height,
            depth,
        }
    }

    pub fn plane(width: f32, height: f32) -> Self {
        Geometry::Plane { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_box_clamps_radius() {
        match Geometry::rounded_box(10.0, 3.0, 0.8, 2.0) {
            Geometry::RoundedBox { radius, .. } => assert_eq!(radius, 1.5),
            other => panic!("unexpected geometry {:?}", other),
        }
    }
}
