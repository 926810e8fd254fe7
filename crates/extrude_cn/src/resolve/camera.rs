//! Camera calibration
//!
//! Buttons pull the camera back for long labels, for large tiers and on
//! narrow screens so the box never clips the canvas edges.

use extrude_3d::PerspectiveCamera;
use extrude_theme::{CameraTokens, SizeCategory};

/// Camera distance along +Z and vertical field of view in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSpec {
    pub distance: f32,
    pub fov: f32,
}

impl CameraSpec {
    pub fn new(distance: f32, fov: f32) -> Self {
        Self { distance, fov }
    }

    pub fn to_camera(self) -> PerspectiveCamera {
        PerspectiveCamera::looking_from(self.distance, self.fov)
    }
}

/// Camera for a button of `size` with a `text_len` character label
///
/// A zero `viewport_width` means the viewport has not been measured yet and
/// yields the default placement.
pub fn calibrate(
    size: SizeCategory,
    text_len: usize,
    viewport_width: f32,
    tokens: &CameraTokens,
) -> CameraSpec {
    if viewport_width <= 0.0 {
        return CameraSpec::new(tokens.default_distance, tokens.default_fov);
    }

    let scale = (viewport_width / tokens.reference_width).min(1.0);
    let text_multiplier = (text_len as f32 / tokens.text_length_divisor)
        .max(1.0)
        .min(tokens.max_text_multiplier);
    let screen_multiplier = if viewport_width < tokens.mobile_breakpoint {
        tokens.mobile_distance_multiplier
    } else {
        1.0
    };
    let distance = (tokens.base_distance.get(size) * text_multiplier * screen_multiplier / scale)
        .clamp(tokens.min_distance, tokens.max_distance.max(tokens.min_distance));

    let fov = if viewport_width < tokens.narrow_breakpoint {
        tokens.base_fov * tokens.narrow_fov_multiplier
    } else if viewport_width < tokens.mobile_breakpoint {
        tokens.base_fov * tokens.mobile_fov_multiplier
    } else {
        tokens.base_fov
    };

    CameraSpec::new(distance, fov)
}

/// Depth at which the stage sits behind the component
pub fn stage_offset(viewport_width: f32, tokens: &CameraTokens) -> f32 {
    if viewport_width < tokens.mobile_breakpoint {
        tokens.mobile_stage_offset
    } else {
        tokens.desktop_stage_offset
    }
}

/// Camera that frames a `width`×`height` image plane
pub fn image_camera(width: f32, height: f32) -> CameraSpec {
    CameraSpec::new(width.max(height) * 1.5, 50.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use extrude_theme::SizeTable;

    #[test]
    fn test_unmeasured_viewport_uses_default() {
        let tokens = CameraTokens::default();
        for size in SizeCategory::ALL {
            assert_eq!(calibrate(size, 0, 0.0, &tokens), CameraSpec::new(5.0, 40.0));
            assert_eq!(calibrate(size, 200, 0.0, &tokens), CameraSpec::new(5.0, 40.0));
        }
    }

    #[test]
    fn test_desktop_short_label() {
        let spec = calibrate(SizeCategory::Medium, 6, 1440.0, &CameraTokens::default());
        assert_eq!(spec, CameraSpec::new(4.5, 40.0));
    }

    #[test]
    fn test_long_label_capped() {
        let tokens = CameraTokens::default();
        let spec = calibrate(SizeCategory::Small, 60, 1200.0, &tokens);
        assert!((spec.distance - 3.5 * 1.3).abs() < 1e-5);
    }

    #[test]
    fn test_mobile_pulls_back_and_widens() {
        let tokens = CameraTokens::default();
        let spec = calibrate(SizeCategory::Medium, 6, 600.0, &tokens);
        // 4.5 * 1.5 / 0.5
        assert!((spec.distance - 13.5).abs() < 1e-4);
        assert!((spec.fov - 52.0).abs() < 1e-4);

        let phone = calibrate(SizeCategory::Medium, 6, 400.0, &tokens);
        assert!((phone.fov - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_tiny_viewport_stays_in_bounds() {
        let tokens = CameraTokens::default();
        let spec = calibrate(SizeCategory::Medium, 5, 1.0, &tokens);
        assert_eq!(spec.distance, tokens.max_distance);
        assert!((spec.fov - 60.0).abs() < 1e-4);

        let close = CameraTokens {
            base_distance: SizeTable::uniform(0.5),
            ..CameraTokens::default()
        };
        let spec = calibrate(SizeCategory::Small, 1, 1440.0, &close);
        assert_eq!(spec.distance, close.min_distance);
    }

    #[test]
    fn test_stage_offset() {
        let tokens = CameraTokens::default();
        assert_eq!(stage_offset(500.0, &tokens), -1.0);
        assert_eq!(stage_offset(1024.0, &tokens), -0.3);
    }

    #[test]
    fn test_image_camera_frames_long_side() {
        assert_eq!(image_camera(4.0, 3.0), CameraSpec::new(6.0, 50.0));
    }
}
