//! Extruded 3D button
//!
//! A rounded box with a flat label on its front face, floating on a
//! city-lit stage with a contact shadow. Width follows the label, the
//! camera pulls back on small screens, and clicks play a spin, flip or
//! rock animation.
//!
//! # Example
//!
//! ```rust
//! use extrude_cn::prelude::*;
//!
//! let mut glass = cn::button("Glass Button")
//!     .opacity(0.3)
//!     .animation(AnimationKind::Flip)
//!     .shadow_color("white")
//!     .gradient("#ff0000", "#003838", 45.0)
//!     .on_click(|| println!("clicked"));
//!
//! glass.handle_event(event_types::POINTER_ENTER);
//! glass.handle_event(event_types::CLICK);
//! glass.tick(1.0 / 60.0);
//!
//! let scene = glass.scene(Viewport::new(1440.0, 900.0));
//! assert_eq!(scene.camera.fov, 40.0);
//! ```

use super::{prop_color, GradientProp};
use crate::interaction::{AnimationKind, ButtonInteraction};
use crate::loading::{AssetState, Fallback, LoadBoundary, LoadingAnimation, Rendered};
use crate::resolve::{
    calibrate, container_height, corner_radius, resolve_dimensions, stage_offset, CameraSpec,
    ResolvedDimensions, Shape,
};
use crate::viewport::Viewport;
use extrude_3d::{
    build_gradient_texture, ContactShadow, Geometry, Light, MeshNode, PhysicalMaterial, Scene,
    SceneNode, ShadowConfig, Stage, TextAnchor, TextNode, TextureSource, Transform,
};
use extrude_animation::FloatMotion;
use extrude_core::{Color, EventType, Vec3};
use extrude_theme::{ExtrudeTheme, SizeCategory, ThemeState};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const DEFAULT_COLOR: Color = Color::rgb(0x1e as f32 / 255.0, 0x88 as f32 / 255.0, 0xe5 as f32 / 255.0);

/// Button props
///
/// Every field is optional in serialized form; camelCase names are accepted
/// as aliases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonProps {
    pub text: String,
    pub disabled: bool,
    pub color: String,
    pub size: SizeCategory,
    pub shape: Shape,
    /// Box depth in scene units
    pub depth: f32,
    /// Grow on hover
    pub hover: bool,
    #[serde(alias = "textColor")]
    pub text_color: String,
    pub opacity: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub animation: AnimationKind,
    #[serde(alias = "shadowColor")]
    pub shadow_color: Option<String>,
    #[serde(alias = "shadowOpacity")]
    pub shadow_opacity: Option<f32>,
    pub gradient: Option<GradientProp>,
    /// Font asset for the label; `None` uses the renderer's default
    pub font: Option<String>,
    #[serde(alias = "loadingAnimation")]
    pub loading_animation: LoadingAnimation,
    #[serde(alias = "loadingColor")]
    pub loading_color: String,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            text: "Button".to_string(),
            disabled: false,
            color: "#1e88e5".to_string(),
            size: SizeCategory::default(),
            shape: Shape::default(),
            depth: 0.8,
            hover: true,
            text_color: "#ffffff".to_string(),
            opacity: 1.0,
            metalness: 0.3,
            roughness: 0.2,
            animation: AnimationKind::default(),
            shadow_color: None,
            shadow_opacity: None,
            gradient: None,
            font: None,
            loading_animation: LoadingAnimation::default(),
            loading_color: "#000000".to_string(),
        }
    }
}

/// Create a button with a label
pub fn button(text: impl Into<String>) -> Button {
    Button::from_props(ButtonProps {
        text: text.into(),
        ..Default::default()
    })
}

/// A button instance: props plus interaction state
#[derive(Clone, Debug)]
pub struct Button {
    props: ButtonProps,
    interaction: ButtonInteraction,
    fallback: Option<Fallback>,
}

impl Button {
    pub fn from_props(props: ButtonProps) -> Self {
        let theme = ThemeState::get();
        let mut interaction = ButtonInteraction::new(props.animation, &theme.motion);
        interaction.set_disabled(props.disabled);
        interaction.set_hover_enabled(props.hover);
        Self {
            props,
            interaction,
            fallback: None,
        }
    }

    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    pub fn interaction(&self) -> &ButtonInteraction {
        &self.interaction
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.props.text = text.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self.interaction.set_disabled(disabled);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.props.color = color.into();
        self
    }

    pub fn size(mut self, size: SizeCategory) -> Self {
        self.props.size = size;
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.props.shape = shape;
        self
    }

    pub fn depth(mut self, depth: f32) -> Self {
        self.props.depth = depth;
        self
    }

    pub fn hover(mut self, hover: bool) -> Self {
        self.props.hover = hover;
        self.interaction.set_hover_enabled(hover);
        self
    }

    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.props.text_color = color.into();
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.props.opacity = opacity;
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

    pub fn animation(mut self, animation: AnimationKind) -> Self {
        self.props.animation = animation;
        self.interaction.set_animation(animation);
        self
    }

    pub fn shadow_color(mut self, color: impl Into<String>) -> Self {
        self.props.shadow_color = Some(color.into());
        self
    }

    pub fn shadow_opacity(mut self, opacity: f32) -> Self {
        self.props.shadow_opacity = Some(opacity);
        self
    }

    /// Paint the box with a two-stop gradient instead of a flat color
    pub fn gradient(mut self, from: impl Into<String>, to: impl Into<String>, angle: f32) -> Self {
        self.props.gradient = Some(GradientProp::new(from, to, angle));
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.props.font = Some(font.into());
        self
    }

    /// Shown instead of the built-in loading indicator
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

    /// Set the click handler
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.interaction.set_on_click(Some(Arc::new(handler)));
        self
    }

    /// Set the hover listener, used by hosts to switch the cursor
    pub fn on_hover<F>(mut self, handler: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.interaction.set_on_hover(Some(Arc::new(handler)));
        self
    }

    /// Feed a pointer event from the renderer
    pub fn handle_event(&mut self, event: EventType) -> bool {
        self.interaction.handle_event(event)
    }

    /// Advance springs by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.interaction.tick(dt);
    }

    pub fn dimensions(&self, theme: &ExtrudeTheme) -> ResolvedDimensions {
        resolve_dimensions(self.props.size, &self.props.text, &theme.sizes)
    }

    pub fn camera(&self, viewport: Viewport, theme: &ExtrudeTheme) -> CameraSpec {
        calibrate(
            self.props.size,
            self.props.text.chars().count(),
            viewport.width,
            &theme.camera,
        )
    }

    /// Height of the host container in CSS pixels
    pub fn container_height(&self, viewport: Viewport) -> f32 {
        let theme = ThemeState::get();
        container_height(self.props.size, viewport.height, &theme.container)
    }

    /// Fallback shown while the label font loads
    pub fn loading_fallback(&self) -> Fallback {
        match &self.fallback {
            Some(fallback) => fallback.clone(),
            None => Fallback::indicator(
                self.props.loading_animation,
                prop_color(&self.props.loading_color, Color::BLACK),
            ),
        }
    }

    /// Scene for the current props and interaction state
    pub fn scene(&self, viewport: Viewport) -> Scene {
        self.scene_with_theme(viewport, &ThemeState::get())
    }

    /// Scene once `font` has loaded, the fallback until then
    pub fn render<T>(&self, font: &AssetState<T>, viewport: Viewport) -> Rendered {
        LoadBoundary::resolve(font, self.loading_fallback(), |_| self.scene(viewport))
    }

    pub fn scene_with_theme(&self, viewport: Viewport, theme: &ExtrudeTheme) -> Scene {
        let props = &self.props;
        let dims = self.dimensions(theme);
        let radius = corner_radius(props.shape, dims.height, &theme.shapes);
        let camera = self.camera(viewport, theme);

        let gradient = props.gradient.as_ref().map(GradientProp::spec);
        let texture = build_gradient_texture(gradient.as_ref(), theme.textures.gradient_size);
        // A gradient map is multiplied with the base color, so keep it white
        let base_color = if texture.is_some() {
            Color::WHITE
        } else {
            prop_color(&props.color, DEFAULT_COLOR)
        };
        let material = PhysicalMaterial::with_color(base_color)
            .map(texture.map(TextureSource::from))
            .metalness(props.metalness)
            .roughness(props.roughness)
            .opacity(props.opacity)
            .env_map_intensity(1.5);

        let body = MeshNode::new(
            Geometry::rounded_box(dims.width, dims.height, props.depth, radius),
            material,
        )
        .shadows(true, true)
        .interactive(!props.disabled);

        let label = TextNode {
            content: props.text.clone(),
            font: props.font.clone(),
            font_size: dims.font_size,
            color: prop_color(&props.text_color, Color::WHITE),
            opacity: props.opacity,
            anchor_x: TextAnchor::Center,
            anchor_y: TextAnchor::Center,
            transform: Transform::from_position(Vec3::new(0.0, 0.0, props.depth / 2.0 + 0.01)),
        };

        let pose = self.interaction.motion().pose();
        let root = SceneNode::group(
            Transform::from_position(Vec3::new(0.0, pose.offset_y, 0.0))
                .with_rotation(pose.rotation)
                .with_scale(pose.scale),
            vec![SceneNode::Float {
                motion: FloatMotion::new(2.0, 1.0, 1.0).with_range(-0.3, 0.3),
                children: vec![SceneNode::Mesh(body), SceneNode::Text(label)],
            }],
        );

        let shadow = ContactShadow::new(
            props
                .shadow_color
                .as_deref()
                .map_or(Color::BLACK, |c| prop_color(c, Color::BLACK)),
            props.shadow_opacity.unwrap_or(0.7),
            5.0,
        )
        .color_blend(2.0)
        .frames(1);

        Scene::new(camera.to_camera(), root)
            .light(Light::ambient(0.4))
            .light(Light::directional(Vec3::new(5.0, 5.0, 5.0), 1.5).with_shadow(ShadowConfig::default()))
            .light(Light::point(Vec3::new(-5.0, -5.0, -5.0), 0.7))
            .light(
                Light::spot(Vec3::new(0.0, 5.0, 2.0), 0.8, 0.6, 0.8)
                    .with_shadow(ShadowConfig::default().with_bias(-0.0001)),
            )
            .stage(
                Stage::city(0.5)
                    .at(Vec3::new(0.0, 0.0, stage_offset(viewport.width, &theme.camera)))
                    .shadow(shadow),
            )
            .label(props.text.clone())
            .disabled(props.disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extrude_3d::{Material, TextureSource};
    use extrude_core::event_types::*;

    fn body(scene: &Scene) -> MeshNode {
        scene.root.meshes()[0].clone()
    }

    #[test]
    fn test_defaults() {
        let theme = ExtrudeTheme::default();
        let scene = button("Click").scene_with_theme(Viewport::new(1440.0, 900.0), &theme);
        let mesh = body(&scene);
        match mesh.geometry {
            Geometry::RoundedBox {
                width,
                height,
                depth,
                radius,
            } => {
                assert_eq!((width, height, depth, radius), (10.0, 3.0, 0.8, 0.5));
            }
            other => panic!("unexpected geometry {:?}", other),
        }
        assert_eq!(mesh.material.base_color().to_hex_string(), "#1e88e5");
        assert!(mesh.interactive);
        assert_eq!(scene.lights.len(), 4);
        assert_eq!(scene.stage.as_ref().map(|s| s.position.z), Some(-0.3));
    }

    #[test]
    fn test_gradient_replaces_color() {
        let theme = ExtrudeTheme::default();
        let scene = button("Go")
            .color("#ff00ff")
            .gradient("#0a4674", "#60a5fa", 90.0)
            .scene_with_theme(Viewport::new(1024.0, 768.0), &theme);
        match body(&scene).material {
            Material::Physical(m) => {
                assert_eq!(m.color, Color::WHITE);
                match m.map {
                    Some(TextureSource::Raster(texture)) => {
                        assert_eq!(texture.width(), 256);
                        assert!(texture.needs_update());
                    }
                    other => panic!("expected raster map, got {:?}", other),
                }
            }
            other => panic!("unexpected material {:?}", other),
        }
    }

    #[test]
    fn test_pill_radius_follows_height() {
        let theme = ExtrudeTheme::default();
        let scene = button("Pill")
            .size(SizeCategory::Large)
            .shape(Shape::Pill)
            .scene_with_theme(Viewport::new(1440.0, 900.0), &theme);
        match body(&scene).geometry {
            Geometry::RoundedBox { radius, .. } => assert_eq!(radius, 1.8),
            other => panic!("unexpected geometry {:?}", other),
        }
    }

    #[test]
    fn test_disabled_button_is_inert() {
        let theme = ExtrudeTheme::default();
        let mut disabled = button("Nope").disabled(true);
        for event in [POINTER_ENTER, POINTER_DOWN, POINTER_UP, CLICK] {
            assert!(!disabled.handle_event(event));
        }
        let scene = disabled.scene_with_theme(Viewport::UNMEASURED, &theme);
        assert!(scene.disabled);
        assert!(!body(&scene).interactive);
    }

    #[test]
    fn test_unmeasured_viewport() {
        let theme = ExtrudeTheme::default();
        let scene = button("Hi").scene_with_theme(Viewport::UNMEASURED, &theme);
        assert_eq!(scene.camera.position.z, 5.0);
        assert_eq!(scene.camera.fov, 40.0);
    }

    #[test]
    fn test_props_from_json() {
        let props: ButtonProps = serde_json::from_str(
            r##"{
                "text": "View Components",
                "size": "large",
                "shape": "hexagon",
                "textColor": "whitesmoke",
                "animation": "wiggle",
                "gradient": { "from": "#0a4674", "to": "#60a5fa", "angle": 90 }
            }"##,
        )
        .unwrap();
        assert_eq!(props.size, SizeCategory::Large);
        assert_eq!(props.shape, Shape::Rounded);
        assert_eq!(props.animation, AnimationKind::Spin);
        assert_eq!(props.text_color, "whitesmoke");
        assert_eq!(props.depth, 0.8);
        assert_eq!(props.gradient.map(|g| g.angle), Some(90.0));
    }

    #[test]
    fn test_bad_colors_fall_back() {
        let theme = ExtrudeTheme::default();
        let scene = button("X")
            .color("not-a-color")
            .shadow_color("nope")
            .scene_with_theme(Viewport::new(1440.0, 900.0), &theme);
        assert_eq!(body(&scene).material.base_color().to_hex_string(), "#1e88e5");
        let shadow = scene.stage.and_then(|s| s.shadow).unwrap();
        assert_eq!(shadow.color, Color::BLACK);
    }

    #[test]
    fn test_font_loading_shows_indicator() {
        let btn = button("Load").loading_animation(LoadingAnimation::Pulse);
        let rendered = btn.render(&AssetState::<()>::Loading, Viewport::UNMEASURED);
        match rendered.fallback() {
            Some(Fallback::Indicator(indicator)) => {
                assert_eq!(indicator.animation, LoadingAnimation::Pulse);
            }
            other => panic!("expected indicator, got {:?}", other),
        }
        let rendered = btn.render(&AssetState::Ready(()), Viewport::UNMEASURED);
        assert!(rendered.scene().is_some());
    }
}
