//! Environment stages
//!
//! A stage wraps a component in image-based lighting from an environment
//! preset, a studio light arrangement and a soft contact shadow underneath.

use extrude_core::{Color, Vec3};
use serde::Serialize;

/// HDR environment used for reflections and ambient light
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentPreset {
    #[default]
    City,
    Studio,
    Sunset,
    Dawn,
    Night,
    Warehouse,
    Forest,
    Apartment,
    Park,
    Lobby,
}

/// Light arrangement around the subject
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StagePreset {
    /// Key light high and to the side, classic portrait setup
    #[default]
    Rembrandt,
    Portrait,
    Upfront,
    Soft,
}

/// Soft shadow rendered below the subject
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactShadow {
    pub color: Color,
    pub opacity: f32,
    pub blur: f32,
    /// How far below the subject shadows are gathered
    pub far: Option<f32>,
    /// Color blend strength
    pub color_blend: Option<f32>,
    /// Accumulated frames; 1 renders the shadow once
    pub frames: Option<u32>,
}

impl ContactShadow {
    pub fn new(color: Color, opacity: f32, blur: f32) -> Self {
        Self {
            color,
            opacity: opacity.clamp(0.0, 1.0),
            blur,
            far: None,
            color_blend: None,
            frames: None,
        }
    }

    pub fn far(mut self, far: f32) -> Self {
        self.far = Some(far);
        self
    }

    pub fn color_blend(mut self, blend: f32) -> Self {
        self.color_blend = Some(blend);
        self
    }

    pub fn frames(mut self, frames: u32) -> Self {
        self.frames = Some(frames);
        self
    }
}

/// Environment-lit wrapper around a component
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stage {
    pub position: Vec3,
    pub environment: EnvironmentPreset,
    pub preset: StagePreset,
    pub intensity: f32,
    pub shadow: Option<ContactShadow>,
    /// Let the stage refit the camera to the subject
    pub adjust_camera: bool,
}

impl Stage {
    /// City environment with Rembrandt lighting
    pub fn city(intensity: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            environment: EnvironmentPreset::City,
            preset: StagePreset::Rembrandt,
            intensity,
            shadow: None,
            adjust_camera: true,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn shadow(mut self, shadow: ContactShadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn adjust_camera(mut self, adjust: bool) -> Self {
        self.adjust_camera = adjust;
        self
    }
}
