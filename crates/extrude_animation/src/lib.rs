//! Extrude Animation System
//!
//! Values the components feed to the renderer every frame.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs configured with mass, tension and friction
//! - **Float Motion**: the idle bobbing applied around buttons, images and models
//! - **Timers**: one-shot delays such as the rock-and-return on click

pub mod float;
pub mod spring;
pub mod timer;

pub use float::{FloatMotion, FloatPose};
pub use spring::{Spring, SpringConfig, SpringVec3};
pub use timer::Timeout;
