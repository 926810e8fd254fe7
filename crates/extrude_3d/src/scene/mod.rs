//! Scene graph
//!
//! A [`Scene`] is rebuilt on every render pass from component props and
//! interaction state, then handed to the renderer and dropped.

mod camera;
mod stage;

pub use camera::{OrbitControls, PerspectiveCamera};
pub use stage::{ContactShadow, EnvironmentPreset, Stage, StagePreset};

use crate::geometry::Geometry;
use crate::lights::Light;
use crate::materials::Material;
use extrude_animation::FloatMotion;
use extrude_core::{Color, Vec3};
use serde::Serialize;
use smallvec::SmallVec;

/// Position, Euler rotation (radians) and scale
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }
}

/// A mesh: geometry plus material
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MeshNode {
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    /// Whether the renderer should deliver pointer events for this mesh
    pub interactive: bool,
}

impl MeshNode {
    pub fn new(geometry: Geometry, material: impl Into<Material>) -> Self {
        Self {
            geometry,
            material: material.into(),
            transform: Transform::IDENTITY,
            cast_shadow: false,
            receive_shadow: false,
            interactive: false,
        }
    }

    pub fn at(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn shadows(mut self, cast: bool, receive: bool) -> Self {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }
}

/// Horizontal and vertical anchoring of flat text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    #[default]
    Center,
    Start,
    End,
}

/// Flat text rendered as a signed-distance-field quad
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextNode {
    pub content: String,
    pub font: Option<String>,
    pub font_size: f32,
    pub color: Color,
    pub opacity: f32,
    pub anchor_x: TextAnchor,
    pub anchor_y: TextAnchor,
    pub transform: Transform,
}

/// An externally loaded glTF/GLB model
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModelNode {
    pub src: String,
    pub transform: Transform,
    /// Overrides applied to every mesh material of the model
    pub metalness: f32,
    pub roughness: f32,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub interactive: bool,
}

/// Node of the scene tree
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum SceneNode {
    Group {
        transform: Transform,
        children: Vec<SceneNode>,
    },
    Mesh(MeshNode),
    Text(TextNode),
    Model(ModelNode),
    /// Children bob according to `motion`
    Float {
        motion: FloatMotion,
        children: Vec<SceneNode>,
    },
    /// Children are re-centered on the origin by the renderer
    Center {
        scale: Vec3,
        children: Vec<SceneNode>,
    },
}

impl SceneNode {
    pub fn group(transform: Transform, children: Vec<SceneNode>) -> Self {
        SceneNode::Group {
            transform,
            children,
        }
    }

    pub fn children(&self) -> &[SceneNode] {
        match self {
            SceneNode::Group { children, .. }
            | SceneNode::Float { children, .. }
            | SceneNode::Center { children, .. } => children,
            SceneNode::Mesh(_) | SceneNode::Text(_) | SceneNode::Model(_) => &[],
        }
    }

    /// Depth-first visit of this node and its descendants
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a SceneNode)) {
        f(self);
        for child in self.children() {
            child.visit(f);
        }
    }

    /// All meshes in depth-first order
    pub fn meshes(&self) -> Vec<&MeshNode> {
        let mut meshes = Vec::new();
        self.visit(&mut |node| {
            if let SceneNode::Mesh(mesh) = node {
                meshes.push(mesh);
            }
        });
        meshes
    }

    /// All flat text nodes in depth-first order
    pub fn texts(&self) -> Vec<&TextNode> {
        let mut texts = Vec::new();
        self.visit(&mut |node| {
            if let SceneNode::Text(text) = node {
                texts.push(text);
            }
        });
        texts
    }
}

/// Everything the renderer needs for one component canvas
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub camera: PerspectiveCamera,
    /// Enable shadow maps
    pub shadows: bool,
    /// Canvas clear color; `None` is transparent
    pub background: Option<Color>,
    pub lights: SmallVec<[Light; 4]>,
    pub stage: Option<Stage>,
    pub orbit_controls: Option<OrbitControls>,
    /// Accessible label for the canvas
    pub label: Option<String>,
    pub disabled: bool,
    pub root: SceneNode,
}

impl Scene {
    pub fn new(camera: PerspectiveCamera, root: SceneNode) -> Self {
        Self {
            camera,
            shadows: true,
            background: None,
            lights: SmallVec::new(),
            stage: None,
            orbit_controls: None,
            label: None,
            disabled: false,
            root,
        }
    }

    pub fn light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    pub fn stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    pub fn orbit_controls(mut self, controls: Option<OrbitControls>) -> Self {
        self.orbit_controls = controls;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Pretty JSON for inspection
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::PhysicalMaterial;

    fn sample_scene() -> Scene {
        let mesh = MeshNode::new(
            Geometry::rounded_box(2.0, 0.7, 0.5, 0.15),
            PhysicalMaterial::with_color(Color::BLUE),
        )
        .shadows(true, true)
        .interactive(true);
        let root = SceneNode::group(
            Transform::IDENTITY,
            vec![SceneNode::Float {
                motion: FloatMotion::default(),
                children: vec![SceneNode::Mesh(mesh)],
            }],
        );
        Scene::new(PerspectiveCamera::looking_from(2.5, 40.0), root).light(Light::ambient(0.4))
    }

    #[test]
    fn test_visit_finds_nested_meshes() {
        let scene = sample_scene();
        let meshes = scene.root.meshes();
        assert_eq!(meshes.len(), 1);
        assert!(meshes[0].interactive);
    }

    #[test]
    fn test_scene_serializes() {
        let json = sample_scene().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["root"]["node"], "group");
        assert_eq!(value["root"]["children"][0]["node"], "float");
        assert_eq!(value["lights"][0]["type"], "ambient");
        assert_eq!(value["camera"]["position"], serde_json::json!([0.0, 0.0, 2.5]));
    }
}
