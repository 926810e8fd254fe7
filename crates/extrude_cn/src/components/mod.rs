//! Components
//!
//! Each component owns its props plus whatever transient state it needs
//! (interaction, animation clocks) and rebuilds its scene from scratch on
//! every call.

pub mod button;
pub mod image;
pub mod model;
mod motion;
pub mod text;

pub use button::{button, Button, ButtonProps};
pub use image::{image, Image, ImageProps};
pub use model::{model, Model, ModelProps};
pub use motion::{Animator, IdleAnimation, ModelAnimation};
pub use text::{text, Text, TextProps};

use extrude_3d::GradientSpec;
use extrude_core::Color;
use serde::{Deserialize, Serialize};

/// Gradient as written in props
///
/// Stops are kept as strings so a bad color degrades to white instead of
/// rejecting the whole props document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientProp {
    pub from: String,
    pub to: String,
    /// Degrees; 0 runs left to right
    #[serde(default)]
    pub angle: f32,
}

impl GradientProp {
    pub fn new(from: impl Into<String>, to: impl Into<String>, angle: f32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            angle,
        }
    }

    pub fn spec(&self) -> GradientSpec {
        GradientSpec::parse(&self.from, &self.to, self.angle)
    }
}

/// Parse a prop color, logging and substituting `fallback` when invalid
pub(crate) fn prop_color(value: &str, fallback: Color) -> Color {
    Color::parse_or(value, fallback)
}
