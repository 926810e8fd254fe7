//! Pointer events delivered by the host renderer
//!
//! The renderer owns hit testing and dispatch. Components only see the
//! event id for the mesh they registered interest in.

/// Event type identifier
pub type EventType = u32;

/// Event type constants
pub mod event_types {
    use super::EventType;

    pub const POINTER_ENTER: EventType = 1;
    pub const POINTER_LEAVE: EventType = 2;
    pub const POINTER_DOWN: EventType = 3;
    pub const POINTER_UP: EventType = 4;
    pub const CLICK: EventType = 5;
}

/// Human-readable event name, for logs
pub fn event_name(event: EventType) -> &'static str {
    use event_types::*;
    match event {
        POINTER_ENTER => "pointer_enter",
        POINTER_LEAVE => "pointer_leave",
        POINTER_DOWN => "pointer_down",
        POINTER_UP => "pointer_up",
        CLICK => "click",
        _ => "unknown",
    }
}
