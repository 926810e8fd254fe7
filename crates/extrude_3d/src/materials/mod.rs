//! Material system

mod basic;
mod effects;
mod physical;

pub use basic::{BasicMaterial, ShadowMaterial};
pub use effects::{DistortMaterial, WobbleMaterial};
pub use physical::PhysicalMaterial;

use extrude_core::Color;
use serde::Serialize;

/// Which side of faces to render
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Render front faces only
    #[default]
    Front,
    /// Render back faces only
    Back,
    /// Render both sides
    Double,
}

/// Any material a component mesh can carry
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Material {
    Physical(PhysicalMaterial),
    Basic(BasicMaterial),
    Shadow(ShadowMaterial),
    Wobble(WobbleMaterial),
    Distort(DistortMaterial),
}

impl Material {
    /// Base color
    pub fn base_color(&self) -> Color {
        match self {
            Material::Physical(m) => m.color,
            Material::Basic(m) => m.color,
            Material::Shadow(m) => m.color,
            Material::Wobble(m) => m.color,
            Material::Distort(m) => m.color,
        }
    }

    /// Whether the renderer must sort and blend this material
    pub fn is_transparent(&self) -> bool {
        match self {
            Material::Physical(m) => m.transparent || m.opacity < 1.0,
            Material::Basic(m) => m.transparent || m.opacity < 1.0,
            Material::Shadow(_) => true,
            Material::Wobble(m) => m.transparent || m.opacity < 1.0,
            Material::Distort(_) => false,
        }
    }
}

impl From<PhysicalMaterial> for Material {
    fn from(m: PhysicalMaterial) -> Self {
        Material::Physical(m)
    }
}

impl From<BasicMaterial> for Material {
    fn from(m: BasicMaterial) -> Self {
        Material::Basic(m)
    }
}

impl From<ShadowMaterial> for Material {
    fn from(m: ShadowMaterial) -> Self {
        Material::Shadow(m)
    }
}

impl From<WobbleMaterial> for Material {
    fn from(m: WobbleMaterial) -> Self {
        Material::Wobble(m)
    }
}

impl From<DistortMaterial> for Material {
    fn from(m: DistortMaterial) -> Self {
        Material::Distort(m)
    }
}
