//! Loading boundary
//!
//! Fonts, image textures and models load asynchronously in the renderer.
//! Until they are ready a component shows a fallback: either one the
//! caller supplied or a small built-in loading indicator.

use crate::macros::lossy_enum_conversions;
use extrude_3d::Scene;
use extrude_core::{Color, ExtrudeError};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Load state of the asset a component depends on
#[derive(Clone, Debug, PartialEq)]
pub enum AssetState<T> {
    Loading,
    Ready(T),
    /// Terminal until a new state is supplied
    Failed(ExtrudeError),
}

impl<T> Default for AssetState<T> {
    fn default() -> Self {
        AssetState::Loading
    }
}

impl<T> AssetState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, AssetState::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            AssetState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ExtrudeError> {
        match self {
            AssetState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<extrude_core::Result<T>> for AssetState<T> {
    fn from(result: extrude_core::Result<T>) -> Self {
        match result {
            Ok(value) => AssetState::Ready(value),
            Err(err) => AssetState::Failed(err),
        }
    }
}

/// Built-in loading indicator style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum LoadingAnimation {
    /// Rotating ring with a solid top arc
    #[default]
    Spinner,
    /// Breathing dot
    Pulse,
    /// Three staggered dots
    Dots,
    /// Empty placeholder
    None,
}

impl LoadingAnimation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingAnimation::Spinner => "spinner",
            LoadingAnimation::Pulse => "pulse",
            LoadingAnimation::Dots => "dots",
            LoadingAnimation::None => "none",
        }
    }

    /// Parse an indicator name; unrecognized names fall back to `Spinner`
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "spinner" => LoadingAnimation::Spinner,
            "pulse" => LoadingAnimation::Pulse,
            "dots" => LoadingAnimation::Dots,
            "none" => LoadingAnimation::None,
            other => {
                tracing::debug!("unknown loading animation {:?}, using spinner", other);
                LoadingAnimation::default()
            }
        }
    }

    /// Indicator drawn in `color`
    pub fn indicator(self, color: Color) -> LoadingIndicator {
        let mut dots = SmallVec::new();
        match self {
            LoadingAnimation::Spinner => dots.push(IndicatorDot {
                diameter: 40.0,
                fill: None,
                border: Some(IndicatorBorder {
                    width: 3.0,
                    // 0x20 alpha track under a solid top arc
                    color: color.with_alpha(32.0 / 255.0),
                    accent: color,
                }),
                delay: 0.0,
            }),
            LoadingAnimation::Pulse => dots.push(IndicatorDot {
                diameter: 40.0,
                fill: Some(color),
                border: None,
                delay: 0.0,
            }),
            LoadingAnimation::Dots => {
                for i in 0..3 {
                    dots.push(IndicatorDot {
                        diameter: 12.0,
                        fill: Some(color),
                        border: None,
                        delay: i as f32 * 0.16,
                    });
                }
            }
            LoadingAnimation::None => {}
        }

        let (keyframes, period, gap) = match self {
            LoadingAnimation::Spinner => (Some(IndicatorKeyframes::Spin), 1.0, 0.0),
            LoadingAnimation::Pulse => (Some(IndicatorKeyframes::Pulse), 1.5, 0.0),
            LoadingAnimation::Dots => (Some(IndicatorKeyframes::Dots), 1.4, 8.0),
            LoadingAnimation::None => (None, 0.0, 0.0),
        };

        LoadingIndicator {
            animation: self,
            dots,
            gap,
            period,
            keyframes,
        }
    }
}

lossy_enum_conversions!(LoadingAnimation);

/// Keyframe track of an indicator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKeyframes {
    /// Linear 0° → 360°
    Spin,
    /// Ease in-out scale 0.8 → 1 → 0.8 with opacity 0.5 → 1 → 0.5
    Pulse,
    /// Ease in-out scale 0.7 → 1 → 0.7
    Dots,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IndicatorBorder {
    pub width: f32,
    pub color: Color,
    /// Color of the leading arc
    pub accent: Color,
}

/// Round element of an indicator, sized in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IndicatorDot {
    pub diameter: f32,
    pub fill: Option<Color>,
    pub border: Option<IndicatorBorder>,
    /// Animation delay in seconds
    pub delay: f32,
}

/// Centered loading indicator
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoadingIndicator {
    pub animation: LoadingAnimation,
    pub dots: SmallVec<[IndicatorDot; 3]>,
    /// Horizontal gap between dots
    pub gap: f32,
    /// Seconds per cycle, looped forever
    pub period: f32,
    pub keyframes: Option<IndicatorKeyframes>,
}

/// What to show while an asset is not ready
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fallback {
    /// Caller-supplied placeholder scene
    Custom { scene: Box<Scene> },
    Indicator(LoadingIndicator),
}

impl Fallback {
    pub fn custom(scene: Scene) -> Self {
        Fallback::Custom {
            scene: Box::new(scene),
        }
    }

    pub fn indicator(animation: LoadingAnimation, color: Color) -> Self {
        Fallback::Indicator(animation.indicator(color))
    }
}

/// Output of a component render
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "render", rename_all = "snake_case")]
pub enum Rendered {
    Scene { scene: Box<Scene> },
    Fallback { fallback: Fallback },
}

impl Rendered {
    pub fn scene(&self) -> Option<&Scene> {
        match self {
            Rendered::Scene { scene } => Some(scene),
            Rendered::Fallback { .. } => None,
        }
    }

    pub fn fallback(&self) -> Option<&Fallback> {
        match self {
            Rendered::Fallback { fallback } => Some(fallback),
            Rendered::Scene { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Rendered::Fallback { .. })
    }
}

/// Picks between a component's scene and its fallback
pub struct LoadBoundary;

impl LoadBoundary {
    /// Render `build(asset)` when the asset is ready, `fallback` otherwise
    ///
    /// The scene builder only runs for a ready asset.
    pub fn resolve<T>(
        state: &AssetState<T>,
        fallback: Fallback,
        build: impl FnOnce(&T) -> Scene,
    ) -> Rendered {
        match state {
            AssetState::Ready(asset) => Rendered::Scene {
                scene: Box::new(build(asset)),
            },
            AssetState::Loading => Rendered::Fallback { fallback },
            AssetState::Failed(err) => {
                tracing::warn!("{}, showing fallback", err);
                Rendered::Fallback { fallback }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extrude_3d::{PerspectiveCamera, SceneNode, Transform};

    fn empty_scene() -> Scene {
        Scene::new(
            PerspectiveCamera::default(),
            SceneNode::group(Transform::IDENTITY, Vec::new()),
        )
    }

    #[test]
    fn test_failed_asset_renders_fallback() {
        let state: AssetState<()> =
            AssetState::Failed(ExtrudeError::asset_load("model", "/duck.glb", "404"));
        let fallback = Fallback::indicator(LoadingAnimation::Dots, Color::BLACK);
        let mut built = false;
        let rendered = LoadBoundary::resolve(&state, fallback.clone(), |_| {
            built = true;
            empty_scene()
        });
        assert!(!built);
        assert_eq!(rendered.fallback(), Some(&fallback));
    }

    #[test]
    fn test_ready_asset_renders_scene() {
        let state = AssetState::Ready(3u32);
        let rendered = LoadBoundary::resolve(
            &state,
            Fallback::indicator(LoadingAnimation::None, Color::BLACK),
            |n| empty_scene().label(n.to_string()),
        );
        assert_eq!(rendered.scene().and_then(|s| s.label.as_deref()), Some("3"));
    }

    #[test]
    fn test_custom_fallback_is_kept() {
        let custom = Fallback::custom(empty_scene().label("placeholder"));
        let rendered = LoadBoundary::resolve(&AssetState::<()>::Loading, custom.clone(), |_| {
            empty_scene()
        });
        assert_eq!(rendered.fallback(), Some(&custom));
    }

    #[test]
    fn test_spinner_indicator() {
        let indicator = LoadingAnimation::Spinner.indicator(Color::RED);
        assert_eq!(indicator.dots.len(), 1);
        let border = indicator.dots[0].border.unwrap();
        assert_eq!(border.width, 3.0);
        assert_eq!(border.color.to_rgba8(), [255, 0, 0, 0x20]);
        assert_eq!(indicator.period, 1.0);
    }

    #[test]
    fn test_dots_stagger() {
        let indicator = LoadingAnimation::Dots.indicator(Color::BLACK);
        let delays: Vec<f32> = indicator.dots.iter().map(|d| d.delay).collect();
        assert_eq!(delays, vec![0.0, 0.16, 0.32]);
        assert_eq!(indicator.gap, 8.0);
        assert!(LoadingAnimation::None.indicator(Color::BLACK).dots.is_empty());
    }

    #[test]
    fn test_result_into_state() {
        let state: AssetState<u8> = Err(ExtrudeError::Other("gone".into())).into();
        assert!(state.error().is_some());
        let state: AssetState<u8> = Ok(1).into();
        assert_eq!(state.ready(), Some(&1));
    }
}
