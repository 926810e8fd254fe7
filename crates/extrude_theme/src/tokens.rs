//! Design tokens
//!
//! Token groups are plain serde structs. Each group is `#[serde(default)]`
//! so a theme file only needs the values it changes; a [`SizeTable`] that
//! is present must list all four tiers.

use extrude_animation::SpringConfig;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;

/// Discrete sizing tier shared by every component
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum SizeCategory {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 4] = [
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
        SizeCategory::XLarge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
            SizeCategory::XLarge => "xlarge",
        }
    }

    /// Parse a size name; unrecognized names fall back to `Medium`
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "small" | "sm" => SizeCategory::Small,
            "medium" | "md" => SizeCategory::Medium,
            "large" | "lg" => SizeCategory::Large,
            "xlarge" | "xl" | "x-large" => SizeCategory::XLarge,
            other => {
                tracing::debug!("unknown size {:?}, using medium", other);
                SizeCategory::default()
            }
        }
    }
}

impl From<&str> for SizeCategory {
    fn from(name: &str) -> Self {
        Self::parse_lossy(name)
    }
}

impl From<String> for SizeCategory {
    fn from(name: String) -> Self {
        Self::parse_lossy(&name)
    }
}

impl From<SizeCategory> for &'static str {
    fn from(size: SizeCategory) -> Self {
        size.as_str()
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per size tier
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeTable<T> {
    pub small: T,
    pub medium: T,
    pub large: T,
    pub xlarge: T,
}

impl<T> SizeTable<T> {
    pub const fn new(small: T, medium: T, large: T, xlarge: T) -> Self {
        Self {
            small,
            medium,
            large,
            xlarge,
        }
    }

    pub fn get(&self, size: SizeCategory) -> &T {
        match size {
            SizeCategory::Small => &self.small,
            SizeCategory::Medium => &self.medium,
            SizeCategory::Large => &self.large,
            SizeCategory::XLarge => &self.xlarge,
        }
    }
}

impl<T: Copy> SizeTable<T> {
    /// Same value for every tier
    pub const fn uniform(value: T) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Base box dimensions for a size tier, in scene units
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseDimensions {
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
}

impl BaseDimensions {
    pub const fn new(width: f32, height: f32, font_size: f32) -> Self {
        Self {
            width,
            height,
            font_size,
        }
    }
}

/// Box sizing tables
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeTokens {
    /// Minimum dimensions per tier
    pub base: SizeTable<BaseDimensions>,
    /// Width multiplier applied to the text estimate per tier
    pub multiplier: SizeTable<f32>,
    /// Average glyph advance as a fraction of the font size
    pub char_width_factor: f32,
}

impl Default for SizeTokens {
    fn default() -> Self {
        Self {
            base: SizeTable::new(
                BaseDimensions::new(8.0, 2.4, 0.8),
                BaseDimensions::new(10.0, 3.0, 1.0),
                BaseDimensions::new(12.0, 3.6, 1.2),
                BaseDimensions::new(14.0, 4.2, 1.4),
            ),
            multiplier: SizeTable::new(0.8, 1.0, 1.2, 1.4),
            char_width_factor: 0.6,
        }
    }
}

/// Corner radii for box shapes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeTokens {
    pub square_radius: f32,
    pub rounded_radius: f32,
}

impl Default for ShapeTokens {
    fn default() -> Self {
        Self {
            square_radius: 0.01,
            rounded_radius: 0.5,
        }
    }
}

/// Camera calibration tables
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTokens {
    /// Camera distance per tier before adjustments
    pub base_distance: SizeTable<f32>,
    /// Distance used before the viewport has been measured
    pub default_distance: f32,
    /// Vertical field of view in degrees
    pub base_fov: f32,
    /// Field of view used before the viewport has been measured
    pub default_fov: f32,
    /// Viewport width at which wide-screen scaling saturates
    pub reference_width: f32,
    /// Below this width the layout is treated as mobile
    pub mobile_breakpoint: f32,
    /// Below this width the layout is treated as a narrow phone
    pub narrow_breakpoint: f32,
    /// Text length that counts as one "unit" of pull-back
    pub text_length_divisor: f32,
    /// Cap on the text-length pull-back
    pub max_text_multiplier: f32,
    /// Distance multiplier below the mobile breakpoint
    pub mobile_distance_multiplier: f32,
    /// Field of view multiplier below the narrow breakpoint
    pub narrow_fov_multiplier: f32,
    /// Field of view multiplier below the mobile breakpoint
    pub mobile_fov_multiplier: f32,
    /// Stage depth offset below the mobile breakpoint
    pub mobile_stage_offset: f32,
    /// Stage depth offset otherwise
    pub desktop_stage_offset: f32,
    /// Closest the calibrated camera may get
    pub min_distance: f32,
    /// Farthest the calibrated camera may get
    pub max_distance: f32,
}

impl Default for CameraTokens {
    fn default() -> Self {
        Self {
            base_distance: SizeTable::new(3.5, 4.5, 5.5, 7.0),
            default_distance: 5.0,
            base_fov: 40.0,
            default_fov: 40.0,
            reference_width: 1200.0,
            mobile_breakpoint: 768.0,
            narrow_breakpoint: 480.0,
            text_length_divisor: 12.0,
            max_text_multiplier: 1.3,
            mobile_distance_multiplier: 1.5,
            narrow_fov_multiplier: 1.5,
            mobile_fov_multiplier: 1.3,
            mobile_stage_offset: -1.0,
            desktop_stage_offset: -0.3,
            min_distance: 2.0,
            max_distance: 40.0,
        }
    }
}

/// `clamp(min_px, viewport_percent vh, max_px)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContainerHeight {
    pub min_px: f32,
    pub viewport_percent: f32,
    pub max_px: f32,
}

impl ContainerHeight {
    pub const fn new(min_px: f32, viewport_percent: f32, max_px: f32) -> Self {
        Self {
            min_px,
            viewport_percent,
            max_px,
        }
    }
}

/// Host container sizing per tier
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerTokens {
    pub height: SizeTable<ContainerHeight>,
}

impl Default for ContainerTokens {
    fn default() -> Self {
        Self {
            height: SizeTable::new(
                ContainerHeight::new(200.0, 30.0, 300.0),
                ContainerHeight::new(250.0, 40.0, 400.0),
                ContainerHeight::new(300.0, 50.0, 500.0),
                ContainerHeight::new(350.0, 60.0, 600.0),
            ),
        }
    }
}

/// Interaction motion tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionTokens {
    /// Scale target while hovered
    pub hover_scale: f32,
    /// Downward offset while pressed
    pub press_offset: f32,
    pub hover_spring: SpringConfig,
    pub rotation_spring: SpringConfig,
    /// Tilt applied by the rock animation, radians
    pub rock_angle: f32,
    /// Seconds before the rock animation returns
    pub rock_duration: f32,
}

impl Default for MotionTokens {
    fn default() -> Self {
        Self {
            hover_scale: 1.1,
            press_offset: 0.0,
            hover_spring: SpringConfig::hover(),
            rotation_spring: SpringConfig::rotation(),
            rock_angle: PI * 0.1,
            rock_duration: 0.2,
        }
    }
}

/// Procedural texture sizes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureTokens {
    /// Edge length of gradient rasters, in pixels
    pub gradient_size: u32,
}

impl Default for TextureTokens {
    fn default() -> Self {
        Self { gradient_size: 256 }
    }
}
