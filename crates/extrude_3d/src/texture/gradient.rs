//! Linear gradient textures

use super::RasterTexture;
use extrude_core::Color;
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

/// Two-stop linear gradient
///
/// `angle_degrees` rotates the gradient axis: 0 runs left to right, 90 top
/// to bottom (raster y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    pub from: Color,
    pub to: Color,
    #[serde(default, alias = "angle")]
    pub angle_degrees: f32,
}

impl GradientSpec {
    pub fn new(from: Color, to: Color, angle_degrees: f32) -> Self {
        Self {
            from,
            to,
            angle_degrees,
        }
    }

    /// Build from color strings; a stop that does not parse becomes white
    pub fn parse(from: &str, to: &str, angle_degrees: f32) -> Self {
        Self::new(
            Color::parse_or(from, Color::WHITE),
            Color::parse_or(to, Color::WHITE),
            angle_degrees,
        )
    }

    /// Gradient parameter at a raster position, clamped to `[0, 1]`
    fn t_at(&self, x: f32, y: f32, size: f32) -> f32 {
        let (sin, cos) = self.angle_degrees.to_radians().sin_cos();
        let half = size / 2.0;
        // Axis runs from the `from` edge through the center to the `to` edge
        let start_x = half - cos * half;
        let start_y = half - sin * half;
        let axis_x = cos * size;
        let axis_y = sin * size;
        let len_sq = axis_x * axis_x + axis_y * axis_y;
        if len_sq <= f32::EPSILON {
            return 0.0;
        }
        (((x - start_x) * axis_x + (y - start_y) * axis_y) / len_sq).clamp(0.0, 1.0)
    }
}

/// Paint `spec` into a `size`×`size` raster
///
/// Returns `None` when there is no gradient, in which case the caller keeps
/// its flat color. Pixels are sampled at their centers, so the same spec and
/// size always give the same bytes.
pub fn build_gradient_texture(spec: Option<&GradientSpec>, size: u32) -> Option<RasterTexture> {
    let mut spec = *spec?;
    if size == 0 {
        tracing::debug!("zero-sized gradient requested, skipping texture");
        return None;
    }
    if !spec.angle_degrees.is_finite() {
        tracing::debug!("gradient angle {} is not finite, using 0", spec.angle_degrees);
        spec.angle_degrees = 0.0;
    }

    let extent = size as f32;
    let image = RgbaImage::from_fn(size, size, |x, y| {
        let t = spec.t_at(x as f32 + 0.5, y as f32 + 0.5, extent);
        Rgba(Color::lerp(&spec.from, &spec.to, t).to_rgba8())
    });

    tracing::trace!(
        "painted {}x{} gradient {} -> {} at {} deg",
        size,
        size,
        spec.from,
        spec.to,
        spec.angle_degrees
    );
    Some(RasterTexture::new(image))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [u8; 4], b: [u8; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= 2)
    }

    #[test]
    fn test_no_spec_no_texture() {
        assert!(build_gradient_texture(None, 256).is_none());
    }

    #[test]
    fn test_horizontal_red_to_green() {
        let spec = GradientSpec::parse("#ff0000", "#00ff00", 0.0);
        let texture = build_gradient_texture(Some(&spec), 256).unwrap();

        assert_eq!((texture.width(), texture.height()), (256, 256));
        assert!(texture.needs_update());
        for y in [0, 128, 255] {
            assert!(close(texture.pixel(0, y), [255, 0, 0, 255]));
            assert!(close(texture.pixel(255, y), [0, 255, 0, 255]));
        }
        // Columns are uniform at 0 degrees
        assert_eq!(texture.pixel(100, 0), texture.pixel(100, 255));
    }

    #[test]
    fn test_vertical_runs_top_to_bottom() {
        let spec = GradientSpec::new(Color::BLACK, Color::WHITE, 90.0);
        let texture = build_gradient_texture(Some(&spec), 64).unwrap();

        assert!(close(texture.pixel(10, 0), [0, 0, 0, 255]));
        assert!(close(texture.pixel(10, 63), [255, 255, 255, 255]));
        assert_eq!(texture.pixel(0, 32), texture.pixel(63, 32));
    }

    #[test]
    fn test_diagonal_corners_are_endpoints() {
        let spec = GradientSpec::new(Color::RED, Color::BLUE, 45.0);
        let texture = build_gradient_texture(Some(&spec), 128).unwrap();

        assert!(close(texture.pixel(0, 0), [255, 0, 0, 255]));
        assert!(close(texture.pixel(127, 127), [0, 0, 255, 255]));
    }

    #[test]
    fn test_same_spec_same_bytes() {
        let spec = GradientSpec::parse("#0a4674", "#60a5fa", 90.0);
        let a = build_gradient_texture(Some(&spec), 256).unwrap();
        let b = build_gradient_texture(Some(&spec), 256).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_bad_stop_falls_back_to_white() {
        let spec = GradientSpec::parse("nonsense", "#000000", 0.0);
        assert_eq!(spec.from, Color::WHITE);
    }

    #[test]
    fn test_non_finite_angle_runs_left_to_right() {
        let horizontal = GradientSpec::parse("#ff0000", "#00ff00", 0.0);
        let expected = build_gradient_texture(Some(&horizontal), 64).unwrap();
        for angle in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let spec = GradientSpec::parse("#ff0000", "#00ff00", angle);
            let texture = build_gradient_texture(Some(&spec), 64).unwrap();
            assert!(close(texture.pixel(0, 32), [255, 0, 0, 255]));
            assert_eq!(texture.as_raw(), expected.as_raw());
        }
    }

    #[test]
    fn test_zero_size_is_none() {
        let spec = GradientSpec::new(Color::RED, Color::GREEN, 0.0);
        assert!(build_gradient_texture(Some(&spec), 0).is_none());
    }
}
