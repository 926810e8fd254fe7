//! Extrude Core
//!
//! Foundational types shared by every Extrude crate:
//!
//! - **Color**: RGBA colors parsed from hex strings and CSS color names
//! - **Vec3**: positions, rotations and scales handed to the scene renderer
//! - **Events**: pointer event identifiers delivered by the host renderer
//! - **State transitions**: the trait interaction state machines implement
//!
//! # Example
//!
//! ```rust
//! use extrude_core::Color;
//!
//! let blue = Color::parse("#1e88e5").unwrap();
//! assert_eq!(blue.to_rgba8(), [0x1e, 0x88, 0xe5, 0xff]);
//! ```

pub mod color;
pub mod error;
pub mod events;
pub mod math;
pub mod state;

pub use color::Color;
pub use error::{ExtrudeError, Result};
pub use events::{event_name, event_types, EventType};
pub use math::Vec3;
pub use state::StateTransitions;
