//! Style resolvers
//!
//! Pure functions from props and theme tokens to the numbers a scene is
//! built from. They never fail: out-of-range or unrecognized inputs
//! degrade to the documented default.

mod camera;
mod container;
mod material;
mod shape;
mod size;
mod text_layout;

pub use camera::{calibrate, image_camera, stage_offset, CameraSpec};
pub use container::{container_height, image_canvas_height};
pub use material::{frame_material, FrameStyle};
pub use shape::{corner_radius, Shape};
pub use size::{resolve_dimensions, ResolvedDimensions};
pub use text_layout::{layout_text, TextLayout};
