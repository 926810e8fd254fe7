//! Interaction state transitions

use crate::events::EventType;
use std::hash::Hash;

/// A finite set of interaction states driven by pointer events
///
/// # Example
///
/// ```rust
/// use extrude_core::{event_types::*, StateTransitions};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum Toggle {
///     Off,
///     On,
/// }
///
/// impl StateTransitions for Toggle {
///     fn on_event(&self, event: u32) -> Option<Self> {
///         match (self, event) {
///             (Toggle::Off, CLICK) => Some(Toggle::On),
///             (Toggle::On, CLICK) => Some(Toggle::Off),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Toggle::Off.on_event(CLICK), Some(Toggle::On));
/// assert_eq!(Toggle::Off.on_event(POINTER_UP), None);
/// ```
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}
