//! # Extrude Component Library (extrude_cn)
//!
//! Decorative 3D components described as scene trees for an external
//! renderer.
//!
//! Every component follows the same pipeline on each build: look up the
//! size tier, adjust for content and viewport, derive shape and camera
//! parameters, optionally paint a gradient texture, then emit a
//! [`Scene`](extrude_3d::Scene).
//!
//! - **Resolvers** (`resolve`): pure functions from props and theme tokens to numbers
//! - **Components**: `button`, `image`, `model` and `text` builders
//! - **Interaction**: the hover/press state machine and click animations
//! - **Loading**: the boundary that swaps in a fallback while assets load
//! - **Viewport**: resize observation with handles that deregister on drop
//!
//! ## Example
//!
//! ```rust
//! use extrude_cn::prelude::*;
//!
//! let button = cn::button("View Components")
//!     .size(SizeCategory::Large)
//!     .shape(Shape::Rounded)
//!     .gradient("#0a4674", "#60a5fa", 90.0);
//!
//! let scene = button.scene(Viewport::new(1280.0, 800.0));
//! assert_eq!(scene.label.as_deref(), Some("View Components"));
//! ```

mod macros;

pub mod components;
pub mod interaction;
pub mod loading;
pub mod resolve;
pub mod viewport;

pub use components::*;

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::components::button::button;
    pub use crate::components::image::image;
    pub use crate::components::model::model;
    pub use crate::components::text::text;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::button::{button, Button, ButtonProps};
    pub use crate::components::image::{image, Image, ImageProps};
    pub use crate::components::model::{model, Model, ModelProps};
    pub use crate::components::text::{text, Text, TextProps};
    pub use crate::components::{GradientProp, IdleAnimation};
    pub use crate::interaction::{AnimationKind, ButtonInteraction, InteractionState};
    pub use crate::loading::{AssetState, Fallback, LoadBoundary, LoadingAnimation, Rendered};
    pub use crate::resolve::{FrameStyle, Shape};
    pub use crate::viewport::{ObserverHandle, Viewport, ViewportObserver};
    pub use extrude_core::{event_types, Color};
    pub use extrude_theme::{ExtrudeTheme, SizeCategory, ThemeState};
}
