//! Button interaction
//!
//! Pointer events from the renderer drive a small finite state machine.
//! Hover and press set spring targets; a click plays the configured
//! animation and fires the click callback once.
//!
//! ```rust
//! use extrude_cn::interaction::{AnimationKind, ButtonInteraction, InteractionState};
//! use extrude_core::event_types::*;
//! use extrude_theme::MotionTokens;
//!
//! let mut button = ButtonInteraction::new(AnimationKind::Flip, &MotionTokens::default());
//! button.handle_event(POINTER_ENTER);
//! button.handle_event(POINTER_DOWN);
//! assert_eq!(button.state(), InteractionState::Pressed);
//! button.handle_event(POINTER_UP);
//! button.handle_event(CLICK);
//! assert_eq!(button.state(), InteractionState::Hovered);
//! ```

use crate::macros::lossy_enum_conversions;
use extrude_animation::{Spring, SpringVec3, Timeout};
use extrude_core::events::{event_name, event_types, EventType};
use extrude_core::{StateTransitions, Vec3};
use extrude_theme::MotionTokens;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use std::sync::Arc;

/// Pointer interaction state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

impl InteractionState {
    /// Whether the pointer is over the component
    pub fn is_pointer_over(&self) -> bool {
        matches!(self, InteractionState::Hovered | InteractionState::Pressed)
    }
}

impl StateTransitions for InteractionState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use event_types::*;
        match (self, event) {
            (InteractionState::Idle, POINTER_ENTER) => Some(InteractionState::Hovered),
            (InteractionState::Hovered, POINTER_LEAVE) => Some(InteractionState::Idle),
            (InteractionState::Hovered, POINTER_DOWN) => Some(InteractionState::Pressed),
            (InteractionState::Pressed, POINTER_UP) => Some(InteractionState::Hovered),
            // Pointer left while held
            (InteractionState::Pressed, POINTER_LEAVE) => Some(InteractionState::Idle),
            _ => None,
        }
    }
}

/// Animation played on click
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum AnimationKind {
    /// Full turn around the vertical axis
    #[default]
    Spin,
    /// Full turn around the horizontal axis
    Flip,
    /// Short tilt that springs back
    Rock,
    None,
}

impl AnimationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationKind::Spin => "spin",
            AnimationKind::Flip => "flip",
            AnimationKind::Rock => "rock",
            AnimationKind::None => "none",
        }
    }

    /// Parse an animation name; unrecognized names fall back to `Spin`
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "spin" => AnimationKind::Spin,
            "flip" => AnimationKind::Flip,
            "rock" => AnimationKind::Rock,
            "none" => AnimationKind::None,
            other => {
                tracing::debug!("unknown animation {:?}, using spin", other);
                AnimationKind::default()
            }
        }
    }
}

lossy_enum_conversions!(AnimationKind);

/// Transform offsets applied to the button group
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonPose {
    pub scale: f32,
    pub offset_y: f32,
    pub rotation: Vec3,
}

/// Springs behind hover, press and click animations
#[derive(Clone, Debug)]
pub struct ButtonMotion {
    scale: Spring,
    offset_y: Spring,
    rotation: SpringVec3,
    rock_reset: Option<Timeout>,
    hover_scale: f32,
    press_offset: f32,
    rock_angle: f32,
    rock_duration: f32,
}

impl ButtonMotion {
    pub fn new(tokens: &MotionTokens) -> Self {
        Self {
            scale: Spring::new(tokens.hover_spring, 1.0),
            offset_y: Spring::new(tokens.hover_spring, 0.0),
            rotation: SpringVec3::new(tokens.rotation_spring, Vec3::ZERO),
            rock_reset: None,
            hover_scale: tokens.hover_scale,
            press_offset: tokens.press_offset,
            rock_angle: tokens.rock_angle,
            rock_duration: tokens.rock_duration,
        }
    }

    /// Retarget scale and offset for an interaction state
    pub fn follow(&mut self, state: InteractionState, hover_enabled: bool) {
        let scale = if hover_enabled && state.is_pointer_over() {
            self.hover_scale
        } else {
            1.0
        };
        self.scale.set_target(scale);

        let offset = if state == InteractionState::Pressed {
            -self.press_offset
        } else {
            0.0
        };
        self.offset_y.set_target(offset);
    }

    /// Start a click animation
    pub fn trigger(&mut self, kind: AnimationKind) {
        let mut target = self.rotation.target();
        match kind {
            AnimationKind::Spin => target.y += TAU,
            AnimationKind::Flip => target.x += TAU,
            AnimationKind::Rock => {
                target.x = self.rock_angle;
                self.rock_reset = Some(Timeout::new(self.rock_duration));
            }
            AnimationKind::None => return,
        }
        self.rotation.set_target(target);
    }

    /// Advance springs and timers by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if let Some(timeout) = self.rock_reset.as_mut() {
            if timeout.tick(dt) {
                let mut target = self.rotation.target();
                target.x = 0.0;
                self.rotation.set_target(target);
                self.rock_reset = None;
            }
        }
        self.scale.step(dt);
        self.offset_y.step(dt);
        self.rotation.step(dt);
    }

    pub fn pose(&self) -> ButtonPose {
        ButtonPose {
            scale: self.scale.value(),
            offset_y: self.offset_y.value(),
            rotation: self.rotation.value(),
        }
    }

    /// Rotation the springs are heading to
    pub fn rotation_target(&self) -> Vec3 {
        self.rotation.target()
    }

    pub fn scale_target(&self) -> f32 {
        self.scale.target()
    }

    /// True when nothing is moving and no timer is pending
    pub fn is_settled(&self) -> bool {
        self.rock_reset.is_none()
            && self.scale.is_settled()
            && self.offset_y.is_settled()
            && self.rotation.is_settled()
    }
}

/// Click callback
pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// Hover callback, receives whether the pointer is over the component
pub type HoverHandler = Arc<dyn Fn(bool) + Send + Sync>;

/// Per-instance interaction state of a button
#[derive(Clone)]
pub struct ButtonInteraction {
    state: InteractionState,
    disabled: bool,
    hover_enabled: bool,
    animation: AnimationKind,
    motion: ButtonMotion,
    on_click: Option<ClickHandler>,
    on_hover: Option<HoverHandler>,
}

impl std::fmt::Debug for ButtonInteraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonInteraction")
            .field("state", &self.state)
            .field("disabled", &self.disabled)
            .field("hover_enabled", &self.hover_enabled)
            .field("animation", &self.animation)
            .field("motion", &self.motion)
            .finish_non_exhaustive()
    }
}

impl ButtonInteraction {
    pub fn new(animation: AnimationKind, tokens: &MotionTokens) -> Self {
        Self {
            state: InteractionState::Idle,
            disabled: false,
            hover_enabled: true,
            animation,
            motion: ButtonMotion::new(tokens),
            on_click: None,
            on_hover: None,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn motion(&self) -> &ButtonMotion {
        &self.motion
    }

    pub fn set_animation(&mut self, animation: AnimationKind) {
        self.animation = animation;
    }

    pub fn set_hover_enabled(&mut self, enabled: bool) {
        self.hover_enabled = enabled;
        self.motion.follow(self.state, enabled);
    }

    pub fn set_on_click(&mut self, handler: Option<ClickHandler>) {
        self.on_click = handler;
    }

    pub fn set_on_hover(&mut self, handler: Option<HoverHandler>) {
        self.on_hover = handler;
    }

    /// Enable or disable the button
    ///
    /// Disabling drops any hover or press and notifies the hover listener
    /// if the pointer was over the button.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled && self.state != InteractionState::Idle {
            let was_over = self.state.is_pointer_over();
            self.state = InteractionState::Idle;
            self.motion.follow(self.state, self.hover_enabled);
            if was_over {
                self.notify_hover(false);
            }
        }
        self.disabled = disabled;
    }

    /// Feed a pointer event; returns whether anything changed
    pub fn handle_event(&mut self, event: EventType) -> bool {
        if self.disabled {
            tracing::trace!("disabled button ignored {}", event_name(event));
            return false;
        }

        if event == event_types::CLICK {
            self.motion.trigger(self.animation);
            if let Some(handler) = &self.on_click {
                handler();
            }
            return true;
        }

        let Some(next) = self.state.on_event(event) else {
            return false;
        };
        tracing::trace!(
            "button {:?} -> {:?} on {}",
            self.state,
            next,
            event_name(event)
        );

        let was_over = self.state.is_pointer_over();
        self.state = next;
        self.motion.follow(next, self.hover_enabled);
        if was_over != next.is_pointer_over() {
            self.notify_hover(next.is_pointer_over());
        }
        true
    }

    /// Advance animations by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.motion.tick(dt);
    }

    /// Whether the host should show a pointer cursor
    pub fn shows_pointer(&self) -> bool {
        !self.disabled && self.state.is_pointer_over()
    }

    fn notify_hover(&self, over: bool) {
        if let Some(handler) = &self.on_hover {
            handler(over);
        }
    }
}
