//! glTF model on a city-lit stage

use super::{prop_color, Animator, ModelAnimation};
use crate::interaction::ClickHandler;
use crate::loading::{AssetState, Fallback, LoadBoundary, LoadingAnimation, Rendered};
use extrude_3d::{
    ContactShadow, Light, ModelNode, OrbitControls, PerspectiveCamera, Scene, SceneNode, Stage,
    Transform,
};
use extrude_animation::FloatMotion;
use extrude_core::{event_types, Color, EventType, Vec3};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Model props
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelProps {
    /// URL or path of a glTF/GLB file
    pub src: String,
    pub alt: Option<String>,
    pub scale: f32,
    pub position: Vec3,
    /// Euler rotation in radians
    pub rotation: Vec3,
    #[serde(alias = "floatIntensity")]
    pub float_intensity: f32,
    #[serde(alias = "floatSpeed")]
    pub float_speed: f32,
    /// Applied to every material of the model
    pub metalness: f32,
    pub roughness: f32,
    #[serde(alias = "shadowColor")]
    pub shadow_color: Option<String>,
    #[serde(alias = "shadowOpacity")]
    pub shadow_opacity: Option<f32>,
    pub animation: ModelAnimation,
    /// Let orbit controls turn the model when idle
    #[serde(alias = "autoRotate")]
    pub auto_rotate: bool,
    #[serde(alias = "rotateSpeed")]
    pub rotate_speed: f32,
    #[serde(alias = "animationSpeed")]
    pub animation_speed: f32,
    #[serde(alias = "cameraDistance")]
    pub camera_distance: f32,
    #[serde(alias = "enableOrbitControls")]
    pub enable_orbit_controls: bool,
    #[serde(alias = "orbitControlsOptions")]
    pub orbit_controls_options: OrbitControls,
    #[serde(alias = "loadingAnimation")]
    pub loading_animation: LoadingAnimation,
    #[serde(alias = "loadingColor")]
    pub loading_color: String,
}

impl Default for ModelProps {
    fn default() -> Self {
        Self {
            src: String::new(),
            alt: None,
            scale: 1.0,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            float_intensity: 1.0,
            float_speed: 1.0,
            metalness: 0.5,
            roughness: 0.2,
            shadow_color: None,
            shadow_opacity: None,
            animation: ModelAnimation::default(),
            auto_rotate: false,
            rotate_speed: 0.5,
            animation_speed: 1.0,
            camera_distance: 7.0,
            enable_orbit_controls: false,
            orbit_controls_options: OrbitControls::default(),
            // Models show an empty placeholder unless told otherwise
            loading_animation: LoadingAnimation::None,
            loading_color: "#000000".to_string(),
        }
    }
}

/// Create a model component for `src`
pub fn model(src: impl Into<String>) -> Model {
    Model::from_props(ModelProps {
        src: src.into(),
        ..Default::default()
    })
}

/// A model instance
#[derive(Clone)]
pub struct Model {
    props: ModelProps,
    animator: Animator,
    fallback: Option<Fallback>,
    on_click: Option<ClickHandler>,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("props", &self.props)
            .field("animator", &self.animator)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl Model {
    pub fn from_props(props: ModelProps) -> Self {
        let animator = Animator::new(props.animation, props.animation_speed);
        Self {
            props,
            animator,
            fallback: None,
            on_click: None,
        }
    }

    pub fn props(&self) -> &ModelProps {
        &self.props
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.props.alt = Some(alt.into());
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.props.scale = scale;
        self
    }

    pub fn position(mut self, position: Vec3) -> Self {
        self.props.position = position;
        self
    }

    pub fn rotation(mut self, rotation: Vec3) -> Self {
        self.props.rotation = rotation;
        self
    }

    pub fn float(mut self, intensity: f32, speed: f32) -> Self {
        self.props.float_intensity = intensity;
        self.props.float_speed = speed;
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

    pub fn shadow(mut self, color: impl Into<String>, opacity: f32) -> Self {
        self.props.shadow_color = Some(color.into());
        self.props.shadow_opacity = Some(opacity);
        self
    }

    pub fn animation(mut self, animation: ModelAnimation, speed: f32) -> Self {
        self.props.animation = animation;
        self.props.animation_speed = speed;
        self.animator.set_animation(animation, speed);
        self
    }

    pub fn camera_distance(mut self, distance: f32) -> Self {
        self.props.camera_distance = distance;
        self
    }

    /// Let the user orbit the model
    pub fn orbit_controls(mut self, options: OrbitControls) -> Self {
        self.props.enable_orbit_controls = true;
        self.props.orbit_controls_options = options;
        self
    }

    pub fn auto_rotate(mut self, speed: f32) -> Self {
        self.props.auto_rotate = true;
        self.props.rotate_speed = speed;
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

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(handler));
        self
    }

    pub fn handle_event(&mut self, event: EventType) -> bool {
        if event != event_types::CLICK {
            return false;
        }
        match &self.on_click {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.animator.tick(dt);
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

    /// Scene once the model file has loaded, the fallback until then
    pub fn render<T>(&self, asset: &AssetState<T>) -> Rendered {
        LoadBoundary::resolve(asset, self.loading_fallback(), |_| self.scene())
    }

    /// Scene for the current props and animation clock
    ///
    /// The camera distance comes from props and does not follow the viewport.
    pub fn scene(&self) -> Scene {
        let props = &self.props;

        let position = props.position + Vec3::new(0.0, self.animator.offset_y(), 0.0);
        let rotation = props.rotation + self.animator.rotation();
        let node = SceneNode::Model(ModelNode {
            src: props.src.clone(),
            transform: Transform::from_position(position)
                .with_rotation(rotation)
                .with_scale(props.scale),
            metalness: props.metalness.clamp(0.0, 1.0),
            roughness: props.roughness.clamp(0.0, 1.0),
            cast_shadow: true,
            receive_shadow: true,
            interactive: self.on_click.is_some(),
        });

        let content = if props.animation.wraps_in_float() {
            SceneNode::Float {
                motion: FloatMotion::new(props.float_speed, 1.0, props.float_intensity),
                children: vec![node],
            }
        } else {
            node
        };

        let orbit = props.enable_orbit_controls.then(|| {
            let controls = props.orbit_controls_options.clone();
            if props.auto_rotate {
                controls.auto_rotate(props.rotate_speed)
            } else {
                controls
            }
        });

        let shadow = ContactShadow::new(
            props
                .shadow_color
                .as_deref()
                .map_or(Color::BLACK, |c| prop_color(c, Color::BLACK)),
            props.shadow_opacity.unwrap_or(0.5),
            1.0,
        );

        let mut scene = Scene::new(
            PerspectiveCamera::looking_from(props.camera_distance, 50.0),
            SceneNode::group(Transform::IDENTITY, vec![content]),
        )
        .light(Light::ambient(0.0))
        .stage(Stage::city(1.0).adjust_camera(false).shadow(shadow))
        .orbit_controls(orbit);
        if let Some(alt) = &props.alt {
            scene = scene.label(alt.clone());
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_node(scene: &Scene) -> ModelNode {
        let mut found = None;
        scene.root.visit(&mut |node| {
            if let SceneNode::Model(m) = node {
                found = Some(m.clone());
            }
        });
        found.unwrap()
    }

    #[test]
    fn test_defaults() {
        let scene = model("/duck.glb").scene();
        assert_eq!(scene.camera.position.z, 7.0);
        assert_eq!(scene.camera.fov, 50.0);
        assert!(scene.orbit_controls.is_none());
        let stage = scene.stage.as_ref().unwrap();
        assert!(!stage.adjust_camera);
        assert_eq!(stage.shadow.as_ref().map(|s| s.opacity), Some(0.5));
        assert!(matches!(scene.root.children()[0], SceneNode::Float { .. }));
        assert_eq!(model_node(&scene).metalness, 0.5);
    }

    #[test]
    fn test_bounce_moves_model() {
        let mut m = model("/duck.glb")
            .position(Vec3::new(0.0, 1.0, 0.0))
            .animation(ModelAnimation::Bounce, 2.0);
        m.tick(0.25);
        let node = model_node(&m.scene());
        let expected = 1.0 + (0.5f32).sin() * 0.1;
        assert!((node.transform.position.y - expected).abs() < 1e-6);
    }

    #[test]
    fn test_spin_adds_to_rotation() {
        let mut m = model("/duck.glb")
            .rotation(Vec3::new(0.0, 1.0, 0.0))
            .animation(ModelAnimation::SpinHorizontal, 1.0);
        m.tick(0.5);
        let node = model_node(&m.scene());
        assert!((node.transform.rotation.y - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_orbit_controls() {
        let scene = model("/duck.glb")
            .orbit_controls(OrbitControls::default())
            .auto_rotate(0.5)
            .scene();
        let orbit = scene.orbit_controls.unwrap();
        assert!(orbit.auto_rotate);
        assert_eq!(orbit.auto_rotate_speed, 0.5);
        assert!(!orbit.enable_zoom);
        assert_eq!(orbit.max_distance, 20.0);
    }

    #[test]
    fn test_props_from_json() {
        let props: ModelProps = serde_json::from_str(
            r#"{
                "src": "/robot.glb",
                "animation": "spinVertical",
                "cameraDistance": 10,
                "position": [0, -1, 0],
                "orbitControlsOptions": { "enable_zoom": true }
            }"#,
        )
        .unwrap();
        assert_eq!(props.animation, ModelAnimation::SpinVertical);
        assert_eq!(props.camera_distance, 10.0);
        assert_eq!(props.position, Vec3::new(0.0, -1.0, 0.0));
        assert!(props.orbit_controls_options.enable_zoom);
        assert!(props.orbit_controls_options.enable_rotate);
    }

    #[test]
    fn test_loading_model_shows_placeholder() {
        let rendered = model("/duck.glb").render(&AssetState::<()>::Loading);
        match rendered.fallback() {
            Some(Fallback::Indicator(indicator)) => assert!(indicator.dots.is_empty()),
            other => panic!("expected empty indicator, got {:?}", other),
        }
    }
}
