//! Floating image plane with an optional frame

use super::{prop_color, Animator, IdleAnimation};
use crate::interaction::ClickHandler;
use crate::loading::{AssetState, Fallback, LoadBoundary, LoadingAnimation, Rendered};
use crate::resolve::{frame_material, image_camera, image_canvas_height, FrameStyle};
use extrude_3d::{
    BasicMaterial, Geometry, Light, Material, MeshNode, Scene, SceneNode, ShadowConfig,
    TextureSource, Transform, WobbleMaterial,
};
use extrude_animation::FloatMotion;
use extrude_core::{event_types, Color, EventType, Vec3};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Image props
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageProps {
    pub src: String,
    pub alt: Option<String>,
    /// Plane size in scene units
    pub width: f32,
    pub height: f32,
    pub scale: f32,
    pub depth: f32,
    #[serde(alias = "floatIntensity")]
    pub float_intensity: f32,
    #[serde(alias = "floatSpeed")]
    pub float_speed: f32,
    pub opacity: f32,
    pub grayscale: bool,
    pub animation: IdleAnimation,
    pub frame: bool,
    #[serde(alias = "frameColor")]
    pub frame_color: String,
    #[serde(alias = "frameWidth")]
    pub frame_width: f32,
    #[serde(alias = "frameStyle")]
    pub frame_style: FrameStyle,
    /// Wobble the plane; ignored when framed
    pub wobble: bool,
    #[serde(alias = "wobbleSpeed")]
    pub wobble_speed: f32,
    #[serde(alias = "wobbleStrength")]
    pub wobble_strength: f32,
    #[serde(alias = "loadingAnimation")]
    pub loading_animation: LoadingAnimation,
    #[serde(alias = "loadingColor")]
    pub loading_color: String,
}

impl Default for ImageProps {
    fn default() -> Self {
        Self {
            src: String::new(),
            alt: None,
            width: 1.0,
            height: 1.0,
            scale: 1.0,
            depth: 0.1,
            float_intensity: 1.0,
            float_speed: 1.0,
            opacity: 1.0,
            grayscale: false,
            animation: IdleAnimation::default(),
            frame: false,
            frame_color: "#ffffff".to_string(),
            frame_width: 0.05,
            frame_style: FrameStyle::default(),
            wobble: false,
            wobble_speed: 1.0,
            wobble_strength: 0.1,
            loading_animation: LoadingAnimation::default(),
            loading_color: "#000000".to_string(),
        }
    }
}

/// Create an image component for `src`
pub fn image(src: impl Into<String>) -> Image {
    Image::from_props(ImageProps {
        src: src.into(),
        ..Default::default()
    })
}

/// An image instance
#[derive(Clone)]
pub struct Image {
    props: ImageProps,
    animator: Animator,
    fallback: Option<Fallback>,
    on_click: Option<ClickHandler>,
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("props", &self.props)
            .field("animator", &self.animator)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl Image {
    pub fn from_props(props: ImageProps) -> Self {
        let animator = Animator::new(props.animation.as_model_animation(), props.float_speed);
        Self {
            props,
            animator,
            fallback: None,
            on_click: None,
        }
    }

    pub fn props(&self) -> &ImageProps {
        &self.props
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.props.alt = Some(alt.into());
        self
    }

    /// Plane size in scene units
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.props.width = width;
        self.props.height = height;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.props.scale = scale;
        self
    }

    pub fn depth(mut self, depth: f32) -> Self {
        self.props.depth = depth;
        self
    }

    pub fn float(mut self, intensity: f32, speed: f32) -> Self {
        self.props.float_intensity = intensity;
        self.props.float_speed = speed;
        self.animator
            .set_animation(self.props.animation.as_model_animation(), speed);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.props.opacity = opacity;
        self
    }

    pub fn grayscale(mut self, grayscale: bool) -> Self {
        self.props.grayscale = grayscale;
        self
    }

    pub fn animation(mut self, animation: IdleAnimation) -> Self {
        self.props.animation = animation;
        self.animator
            .set_animation(animation.as_model_animation(), self.props.float_speed);
        self
    }

    /// Surround the plane with a frame
    pub fn frame(mut self, style: FrameStyle, color: impl Into<String>, width: f32) -> Self {
        self.props.frame = true;
        self.props.frame_style = style;
        self.props.frame_color = color.into();
        self.props.frame_width = width;
        self
    }

    pub fn wobble(mut self, strength: f32, speed: f32) -> Self {
        self.props.wobble = true;
        self.props.wobble_strength = strength;
        self.props.wobble_speed = speed;
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

    pub fn loading_color(mut self, color: impl Into<String>) -> Self {
        self.props.loading_color = color.into();
        self
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(handler));
        self
    }

    /// Feed a pointer event; only clicks matter to images
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

    /// Canvas height in CSS pixels for a container `container_width` wide
    pub fn canvas_height(&self, container_width: f32) -> f32 {
        image_canvas_height(container_width, self.props.width, self.props.height)
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

    /// Scene once the image texture has loaded, the fallback until then
    pub fn render<T>(&self, texture: &AssetState<T>) -> Rendered {
        LoadBoundary::resolve(texture, self.loading_fallback(), |_| self.scene())
    }

    pub fn scene(&self) -> Scene {
        let props = &self.props;
        let map = TextureSource::Url(props.src.clone());

        let picture_material: Material = if !props.frame && props.wobble {
            WobbleMaterial {
                map: Some(map),
                factor: props.wobble_strength,
                speed: props.wobble_speed,
                opacity: props.opacity,
                transparent: true,
                alpha_test: 0.1,
                ..Default::default()
            }
            .into()
        } else {
            BasicMaterial {
                grayscale: props.grayscale,
                ..BasicMaterial::textured(map, props.opacity)
            }
            .into()
        };

        let picture = MeshNode::new(Geometry::plane(props.width, props.height), picture_material)
            .interactive(self.on_click.is_some());
        let picture_z = if props.frame { 0.01 } else { props.depth };

        let mut layers = Vec::with_capacity(2);
        if props.frame {
            let frame = MeshNode::new(
                Geometry::cuboid(
                    props.width + props.frame_width * 2.0,
                    props.height + props.frame_width * 2.0,
                    props.depth + 0.01,
                ),
                frame_material(props.frame_style, prop_color(&props.frame_color, Color::WHITE)),
            )
            .at(Transform::from_position(Vec3::new(0.0, 0.0, -props.depth / 2.0)))
            .shadows(true, true);
            layers.push(SceneNode::Mesh(frame));
        }
        layers.push(SceneNode::group(
            Transform::from_position(Vec3::new(0.0, 0.0, picture_z)),
            vec![SceneNode::Mesh(picture)],
        ));

        let content = if self.animator.animation().wraps_in_float() {
            vec![SceneNode::Float {
                motion: FloatMotion::new(props.float_speed, 0.2, props.float_intensity),
                children: layers,
            }]
        } else {
            layers
        };

        let root = SceneNode::group(
            Transform::IDENTITY
                .with_rotation(self.animator.rotation())
                .with_scale(props.scale),
            content,
        );

        let mut scene = Scene::new(image_camera(props.width, props.height).to_camera(), root)
            .light(Light::ambient(0.5))
            .light(Light::directional(Vec3::new(5.0, 5.0, 5.0), 1.0).with_shadow(ShadowConfig::default()))
            .light(Light::directional(Vec3::new(-5.0, 5.0, -5.0), 0.5));
        if let Some(alt) = &props.alt {
            scene = scene.label(alt.clone());
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_image_floats() {
        let scene = image("/photo.png").size(4.0, 3.0).scene();
        assert_eq!(scene.camera.position.z, 6.0);
        assert_eq!(scene.camera.fov, 50.0);
        assert!(matches!(scene.root.children()[0], SceneNode::Float { .. }));

        let meshes = scene.root.meshes();
        assert_eq!(meshes.len(), 1);
        match &meshes[0].material {
            Material::Basic(m) => {
                assert_eq!(m.map, Some(TextureSource::Url("/photo.png".into())));
                assert_eq!(m.alpha_test, 0.1);
            }
            other => panic!("unexpected material {:?}", other),
        }
    }

    #[test]
    fn test_frame_wraps_picture() {
        let scene = image("/art.jpg")
            .frame(FrameStyle::Glass, "#ffffff", 0.1)
            .wobble(0.3, 2.0)
            .scene();
        let meshes = scene.root.meshes();
        assert_eq!(meshes.len(), 2);
        match &meshes[0].geometry {
            Geometry::Box { width, depth, .. } => {
                assert!((width - 1.2).abs() < 1e-6);
                assert!((depth - 0.11).abs() < 1e-6);
            }
            other => panic!("unexpected geometry {:?}", other),
        }
        // Framed pictures never wobble
        assert!(matches!(meshes[1].material, Material::Basic(_)));
    }

    #[test]
    fn test_unframed_wobble() {
        let scene = image("/a.png").wobble(0.2, 3.0).scene();
        match &scene.root.meshes()[0].material {
            Material::Wobble(m) => {
                assert_eq!(m.factor, 0.2);
                assert_eq!(m.speed, 3.0);
            }
            other => panic!("unexpected material {:?}", other),
        }
    }

    #[test]
    fn test_spin_rotates_root() {
        let mut img = image("/a.png").animation(IdleAnimation::Spin);
        img.tick(0.5);
        let scene = img.scene();
        match &scene.root {
            SceneNode::Group { transform, children } => {
                assert!((transform.rotation.y - 0.5).abs() < 1e-6);
                assert!(!matches!(children[0], SceneNode::Float { .. }));
            }
            other => panic!("unexpected root {:?}", other),
        }
    }

    #[test]
    fn test_failed_texture_shows_fallback() {
        let img = image("/missing.png").loading_animation(LoadingAnimation::Dots);
        let state: AssetState<()> = AssetState::Failed(extrude_core::ExtrudeError::asset_load(
            "image",
            "/missing.png",
            "not found",
        ));
        assert!(img.render(&state).is_fallback());
    }

    #[test]
    fn test_click_handler() {
        let hits = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let mut img = image("/a.png").on_click(move || {
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        });
        assert!(!img.handle_event(event_types::POINTER_ENTER));
        assert!(img.handle_event(event_types::CLICK));
        assert_eq!(hits.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert!(img.scene().root.meshes()[0].interactive);
    }

    #[test]
    fn test_canvas_height() {
        assert_eq!(image("/a.png").size(2.0, 1.0).canvas_height(600.0), 300.0);
    }
}
