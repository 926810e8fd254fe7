//! Extruded 3D text
//!
//! Text is wrapped for its container, extruded with a bevel and dropped
//! above a shadow-catching floor. The surface is either a gradient, a
//! wobbling material or a distorting one.

use super::{prop_color, Animator, GradientProp, IdleAnimation};
use crate::loading::{AssetState, Fallback, LoadBoundary, LoadingAnimation, Rendered};
use crate::resolve::{layout_text, TextLayout};
use crate::viewport::Viewport;
use extrude_3d::{
    build_gradient_texture, Bevel, DistortMaterial, Geometry, Light, Material, MeshNode,
    OrbitControls, PerspectiveCamera, PhysicalMaterial, Scene, SceneNode, ShadowConfig,
    ShadowMaterial, TextureSource, Transform, WobbleMaterial,
};
use extrude_animation::FloatMotion;
use extrude_core::{Color, Vec3};
use extrude_theme::ThemeState;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// Typeface used when props name none
pub const DEFAULT_FONT: &str = "helvetiker_regular.typeface.json";

/// Text props
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextProps {
    pub content: String,
    pub color: String,
    pub gradient: Option<GradientProp>,
    pub font: String,
    #[serde(alias = "fontSize")]
    pub font_size: f32,
    /// Extrusion depth
    pub height: f32,
    #[serde(alias = "letterSpacing")]
    pub letter_spacing: f32,
    #[serde(alias = "lineHeight")]
    pub line_height: f32,
    #[serde(alias = "bevelEnabled")]
    pub bevel_enabled: bool,
    #[serde(alias = "bevelSize")]
    pub bevel_size: f32,
    #[serde(alias = "bevelThickness")]
    pub bevel_thickness: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub distort: f32,
    #[serde(alias = "distortSpeed")]
    pub distort_speed: f32,
    #[serde(alias = "floatIntensity")]
    pub float_intensity: f32,
    #[serde(alias = "shadowColor")]
    pub shadow_color: String,
    #[serde(alias = "shadowOpacity")]
    pub shadow_opacity: f32,
    pub animation: IdleAnimation,
    /// Fixed canvas height in CSS pixels; derived from the wrapped text otherwise
    #[serde(alias = "canvasHeight")]
    pub canvas_height: Option<f32>,
    pub wobble: bool,
    #[serde(alias = "wobbleSpeed")]
    pub wobble_speed: f32,
    #[serde(alias = "wobbleStrength")]
    pub wobble_strength: f32,
    #[serde(alias = "orbitControls")]
    pub orbit_controls: bool,
    #[serde(alias = "loadingAnimation")]
    pub loading_animation: LoadingAnimation,
    #[serde(alias = "loadingColor")]
    pub loading_color: String,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            content: "Hello World".to_string(),
            color: "#ffffff".to_string(),
            gradient: None,
            font: DEFAULT_FONT.to_string(),
            font_size: 1.0,
            height: 0.2,
            letter_spacing: 0.05,
            line_height: 1.2,
            bevel_enabled: true,
            bevel_size: 0.02,
            bevel_thickness: 0.02,
            metalness: 0.5,
            roughness: 0.2,
            distort: 0.2,
            distort_speed: 2.0,
            float_intensity: 0.5,
            shadow_color: "#000000".to_string(),
            shadow_opacity: 0.2,
            animation: IdleAnimation::default(),
            canvas_height: None,
            wobble: false,
            wobble_speed: 1.0,
            wobble_strength: 0.1,
            orbit_controls: false,
            loading_animation: LoadingAnimation::default(),
            loading_color: "#000000".to_string(),
        }
    }
}

impl TextProps {
    /// Surface material: gradient, then wobble, then distort
    pub fn material(&self, gradient_size: u32) -> Material {
        let color = prop_color(&self.color, Color::WHITE);
        if let Some(gradient) = &self.gradient {
            let texture = build_gradient_texture(Some(&gradient.spec()), gradient_size);
            return PhysicalMaterial::with_color(Color::WHITE)
                .map(texture.map(TextureSource::from))
                .metalness(self.metalness)
                .roughness(self.roughness)
                .into();
        }
        if self.wobble {
            return WobbleMaterial {
                color,
                factor: self.wobble_strength,
                speed: self.wobble_speed,
                metalness: self.metalness,
                roughness: self.roughness,
                ..Default::default()
            }
            .into();
        }
        DistortMaterial {
            color,
            distort: self.distort,
            speed: self.distort_speed,
            radius: 1.0,
            metalness: self.metalness,
            roughness: self.roughness,
        }
        .into()
    }
}

/// Create a text component
pub fn text(content: impl Into<String>) -> Text {
    Text::from_props(TextProps {
        content: content.into(),
        ..Default::default()
    })
}

/// A text instance
#[derive(Clone, Debug)]
pub struct Text {
    props: TextProps,
    animator: Animator,
    fallback: Option<Fallback>,
}

impl Text {
    pub fn from_props(props: TextProps) -> Self {
        let animator = Animator::new(props.animation.as_model_animation(), 1.0);
        Self {
            props,
            animator,
            fallback: None,
        }
    }

    pub fn props(&self) -> &TextProps {
        &self.props
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.props.color = color.into();
        self
    }

    pub fn gradient(mut self, from: impl Into<String>, to: impl Into<String>, angle: f32) -> Self {
        self.props.gradient = Some(GradientProp::new(from, to, angle));
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.props.font = font.into();
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.props.font_size = size;
        self
    }

    /// Extrusion depth
    pub fn height(mut self, height: f32) -> Self {
        self.props.height = height;
        self
    }

    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.props.letter_spacing = spacing;
        self
    }

    pub fn bevel(mut self, enabled: bool) -> Self {
        self.props.bevel_enabled = enabled;
        self
    }

    pub fn metalness(mut self, metalness: f32) -> Self {
        self.props.metalness = metalness;
        self
    }

    pub fn roughness(mut self, roughness: f32) -> Self {
        self.props.roughness = roughness;
        self
    }

    pub fn distort(mut self, distort: f32, speed: f32) -> Self {
        self.props.distort = distort;
        self.props.distort_speed = speed;
        self
    }

    pub fn wobble(mut self, strength: f32, speed: f32) -> Self {
        self.props.wobble = true;
        self.props.wobble_strength = strength;
        self.props.wobble_speed = speed;
        self
    }

    pub fn float_intensity(mut self, intensity: f32) -> Self {
        self.props.float_intensity = intensity;
        self
    }

    pub fn shadow(mut self, color: impl Into<String>, opacity: f32) -> Self {
        self.props.shadow_color = color.into();
        self.props.shadow_opacity = opacity;
        self
    }

    pub fn animation(mut self, animation: IdleAnimation) -> Self {
        self.props.animation = animation;
        self.animator.set_animation(animation.as_model_animation(), 1.0);
        self
    }

    pub fn canvas_height(mut self, height: f32) -> Self {
        self.props.canvas_height = Some(height);
        self
    }

    pub fn orbit_controls(mut self, enabled: bool) -> Self {
        self.props.orbit_controls = enabled;
        self
    }

    pub fn fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn loading_animation(mut self, animation: LoadingAnimation) -> Self {
        self.props.loading_animation = animation;
        self
    }

    pub fn tick(&mut self, dt: f32) {
        self.animator.tick(dt);
    }

    /// Wrapped lines and block size for a container
    pub fn layout(&self, container: Viewport) -> TextLayout {
        let mut layout = layout_text(&self.props.content, container.width, self.props.font_size);
        if let Some(height) = self.props.canvas_height {
            layout.height = height;
        }
        layout
    }

    pub fn loading_fallback(&self) -> Fallback {
        match &self.fallback {
            Some(fallback) => fallback.clone(),
            None => Fallback::indicator(
                self.props.loading_animation,
                prop_color(&self.props.loading_color, Color::BLACK),
            ),
        }
    }

    /// Scene once the typeface has loaded, the fallback until then
    pub fn render<T>(&self, font: &AssetState<T>, container: Viewport) -> Rendered {
        LoadBoundary::resolve(font, self.loading_fallback(), |_| self.scene(container))
    }

    /// Scene for a container of the given size
    pub fn scene(&self, container: Viewport) -> Scene {
        let props = &self.props;
        let layout = self.layout(container);
        let theme = ThemeState::get();

        let bevel = props.bevel_enabled.then_some(Bevel {
            size: props.bevel_size,
            thickness: props.bevel_thickness,
        });
        let glyphs = MeshNode::new(
            Geometry::Text3D {
                content: layout.text(),
                font: props.font.clone(),
                size: props.font_size,
                height: props.height,
                letter_spacing: props.letter_spacing,
                line_height: props.line_height,
                bevel,
            },
            props.material(theme.textures.gradient_size),
        )
        .shadows(true, false);

        let content = match props.animation {
            IdleAnimation::Float => SceneNode::Float {
                motion: FloatMotion::new(1.0, 0.0, props.float_intensity),
                children: vec![SceneNode::Mesh(glyphs)],
            },
            IdleAnimation::Spin | IdleAnimation::None => SceneNode::group(
                Transform::IDENTITY.with_rotation(self.animator.rotation()),
                vec![SceneNode::Mesh(glyphs)],
            ),
        };

        let floor = MeshNode::new(
            Geometry::plane(100.0, 100.0),
            ShadowMaterial::new(
                prop_color(&props.shadow_color, Color::BLACK),
                props.shadow_opacity,
            ),
        )
        .at(Transform::from_position(Vec3::new(0.0, -2.0, 0.0))
            .with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)))
        .shadows(false, true);

        let root = SceneNode::group(
            Transform::IDENTITY,
            vec![
                SceneNode::Mesh(floor),
                SceneNode::Center {
                    scale: Vec3::splat(layout.scale * 1.5),
                    children: vec![content],
                },
            ],
        );

        let orbit = props.orbit_controls.then(|| OrbitControls {
            enable_zoom: false,
            enable_pan: false,
            ..Default::default()
        });

        Scene::new(PerspectiveCamera::looking_from(5.0, 50.0), root)
            .light(Light::ambient(1.0))
            .light(Light::point(Vec3::new(10.0, 10.0, 10.0), 100.0).with_shadow(ShadowConfig::default()))
            .orbit_controls(orbit)
            .label(props.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs(scene: &Scene) -> MeshNode {
        scene
            .root
            .meshes()
            .into_iter()
            .find(|m| matches!(m.geometry, Geometry::Text3D { .. }))
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_default_material_distorts() {
        let scene = text("Hello").scene(Viewport::new(800.0, 200.0));
        match glyphs(&scene).material {
            Material::Distort(m) => {
                assert_eq!(m.distort, 0.2);
                assert_eq!(m.speed, 2.0);
                assert_eq!(m.color, Color::WHITE);
            }
            other => panic!("unexpected material {:?}", other),
        }
    }

    #[test]
    fn test_gradient_wins_over_wobble() {
        let scene = text("Hi")
            .wobble(0.3, 1.0)
            .gradient("#ff0000", "#0000ff", 0.0)
            .scene(Viewport::new(800.0, 200.0));
        match glyphs(&scene).material {
            Material::Physical(m) => assert!(m.map.is_some()),
            other => panic!("unexpected material {:?}", other),
        }
    }

    #[test]
    fn test_wobble_material() {
        let scene = text("Hi").wobble(0.3, 4.0).scene(Viewport::new(800.0, 200.0));
        assert!(matches!(glyphs(&scene).material, Material::Wobble(_)));
    }

    #[test]
    fn test_wrapped_content_reaches_geometry() {
        let scene = text("Add depth to your web experience").scene(Viewport::new(420.0, 200.0));
        match glyphs(&scene).geometry {
            Geometry::Text3D { content, bevel, .. } => {
                assert_eq!(content, "Add depth to\nyour web\nexperience");
                assert_eq!(bevel.map(|b| b.size), Some(0.02));
            }
            other => panic!("unexpected geometry {:?}", other),
        }
    }

    #[test]
    fn test_shadow_floor() {
        let scene = text("Hi").shadow("#333333", 0.4).scene(Viewport::UNMEASURED);
        let floor = scene.root.meshes()[0].clone();
        assert_eq!(floor.transform.position.y, -2.0);
        assert!(floor.receive_shadow);
        match floor.material {
            Material::Shadow(m) => assert_eq!(m.opacity, 0.4),
            other => panic!("unexpected material {:?}", other),
        }
    }

    #[test]
    fn test_unmeasured_center_scale() {
        let scene = text("Hi").scene(Viewport::UNMEASURED);
        match &scene.root.children()[1] {
            SceneNode::Center { scale, .. } => assert_eq!(*scale, Vec3::splat(1.5)),
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn test_canvas_height_override() {
        let t = text("Hello World").canvas_height(240.0);
        assert_eq!(t.layout(Viewport::new(600.0, 0.0)).height, 240.0);
        assert_eq!(text("Hello World").layout(Viewport::UNMEASURED).height, 100.0);
    }

    #[test]
    fn test_orbit_controls_rotate_only() {
        let scene = text("Hi").orbit_controls(true).scene(Viewport::UNMEASURED);
        let orbit = scene.orbit_controls.unwrap();
        assert!(orbit.enable_rotate && !orbit.enable_zoom && !orbit.enable_pan);
    }
}
