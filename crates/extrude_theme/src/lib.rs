//! Extrude Theme
//!
//! Numeric tables the resolvers read from. Every number that shapes a
//! component (base dimensions per size tier, corner radii, camera distances,
//! viewport breakpoints, spring tunings) lives here as configuration rather
//! than as a constant in component code.
//!
//! - [`ExtrudeTheme`] bundles the token groups and loads from TOML
//! - [`ThemeState`] holds the process-wide active theme
//!
//! ```rust
//! use extrude_theme::{ExtrudeTheme, SizeCategory};
//!
//! let theme = ExtrudeTheme::from_toml_str(r#"
//!     [camera.base_distance]
//!     small = 3.0
//!     medium = 4.0
//!     large = 5.0
//!     xlarge = 6.0
//! "#).unwrap();
//! assert_eq!(*theme.camera.base_distance.get(SizeCategory::Medium), 4.0);
//! // Untouched values keep their defaults
//! assert_eq!(theme.camera.base_fov, 40.0);
//! ```

pub mod error;
pub mod state;
pub mod theme;
pub mod tokens;

pub use error::{Result, ThemeError};
pub use state::ThemeState;
pub use theme::ExtrudeTheme;
pub use tokens::{
    BaseDimensions, CameraTokens, ContainerHeight, ContainerTokens, MotionTokens, ShapeTokens,
    SizeCategory, SizeTable, SizeTokens, TextureTokens,
};
