//! # Extrude 3D
//!
//! The scene description components hand to the external renderer.
//!
//! This crate provides:
//! - **Scene graph**: groups, meshes, text, models and float wrappers
//! - **Three.js-style materials**: physical, basic, shadow-catcher, wobble and distort
//! - **Lights and stages**: the fixed lighting rigs and environment stages components use
//! - **Raster textures**: procedural gradients painted on the CPU and uploaded by the renderer
//!
//! Nothing here draws. A [`Scene`] is plain data that serializes to JSON for
//! inspection and is consumed by whichever renderer hosts the component.
//!
//! ```rust
//! use extrude_3d::{build_gradient_texture, GradientSpec};
//! use extrude_core::Color;
//!
//! let spec = GradientSpec::new(Color::RED, Color::GREEN, 0.0);
//! let texture = build_gradient_texture(Some(&spec), 64).unwrap();
//! assert!(texture.needs_update());
//! assert!(build_gradient_texture(None, 64).is_none());
//! ```

pub mod geometry;
pub mod lights;
pub mod materials;
pub mod scene;
pub mod texture;

pub use geometry::{Bevel, Geometry};
pub use lights::{Light, ShadowConfig};
pub use materials::{
    BasicMaterial, DistortMaterial, Material, PhysicalMaterial, ShadowMaterial, Side,
    WobbleMaterial,
};
pub use scene::{
    ContactShadow, EnvironmentPreset, MeshNode, ModelNode, OrbitControls, PerspectiveCamera,
    Scene, SceneNode, Stage, StagePreset, TextAnchor, TextNode, Transform,
};
pub use texture::{build_gradient_texture, GradientSpec, RasterTexture, SharedTexture, TextureSource};
