//! Physical PBR material

use super::Side;
use crate::texture::TextureSource;
use extrude_core::Color;
use serde::Serialize;

/// Extended PBR material (like Three.js MeshPhysicalMaterial)
///
/// Metallic-roughness workflow plus the clearcoat, transmission and sheen
/// layers used for glass and lacquered finishes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PhysicalMaterial {
    /// Base color (albedo)
    pub color: Color,
    /// Albedo texture map, multiplied with `color`
    pub map: Option<TextureSource>,
    /// Metalness factor (0.0 = dielectric, 1.0 = metal)
    pub metalness: f32,
    /// Roughness factor (0.0 = smooth/mirror, 1.0 = rough)
    pub roughness: f32,
    /// Clearcoat layer strength
    pub clearcoat: f32,
    /// Clearcoat roughness
    pub clearcoat_roughness: f32,
    /// Light transmission through the surface (glass)
    pub transmission: f32,
    /// Volume thickness used with transmission
    pub thickness: f32,
    /// Sheen intensity
    pub sheen: f32,
    pub sheen_roughness: f32,
    pub sheen_color: Color,
    /// Reflectivity for non-metals
    pub reflectivity: f32,
    /// Opacity
    pub opacity: f32,
    /// Transparent
    pub transparent: bool,
    /// Depth write enabled
    pub depth_write: bool,
    /// Environment map intensity
    pub env_map_intensity: f32,
    /// Which side to render
    pub side: Side,
}

impl Default for PhysicalMaterial {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            map: None,
            metalness: 0.0,
            roughness: 1.0,
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
            transmission: 0.0,
            thickness: 0.0,
            sheen: 0.0,
            sheen_roughness: 1.0,
            sheen_color: Color::BLACK,
            reflectivity: 0.5,
            opacity: 1.0,
            transparent: false,
            depth_write: true,
            env_map_intensity: 1.0,
            side: Side::Front,
        }
    }
}

impl PhysicalMaterial {
    /// Create a new physical material
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with color
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Set color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the color map
    pub fn map(mut self, map: Option<TextureSource>) -> Self {
        self.map = map;
        self
    }

    /// Set metalness
    pub fn metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness.clamp(0.0, 1.0);
        self
    }

    /// Set roughness
    pub fn roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    /// Set clearcoat strength and roughness
    pub fn clearcoat(mut self, clearcoat: f32, roughness: f32) -> Self {
        self.clearcoat = clearcoat.max(0.0);
        self.clearcoat_roughness = roughness.clamp(0.0, 1.0);
        self
    }

    /// Set transmission and thickness
    pub fn transmission(mut self, transmission: f32, thickness: f32) -> Self {
        self.transmission = transmission.clamp(0.0, 1.0);
        self.thickness = thickness.max(0.0);
        self
    }

    /// Set environment map intensity
    pub fn env_map_intensity(mut self, intensity: f32) -> Self {
        self.env_map_intensity = intensity;
        self
    }

    /// Set opacity; anything below 1.0 switches to blended rendering
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self.transparent = self.opacity < 1.0;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_toggles_transparency() {
        let opaque = PhysicalMaterial::new().opacity(1.0);
        assert!(!opaque.transparent);

        let glass = PhysicalMaterial::new().opacity(0.3);
        assert!(glass.transparent);
        assert_eq!(glass.opacity, 0.3);
    }

    #[test]
    fn test_factors_are_clamped() {
        let m = PhysicalMaterial::new().metalness(1.5).roughness(-0.2);
        assert_eq!(m.metalness, 1.0);
        assert_eq!(m.roughness, 0.0);
    }
}
