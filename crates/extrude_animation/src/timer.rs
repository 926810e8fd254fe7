//! One-shot timers driven by frame deltas

/// Fires once after a delay
///
/// ```rust
/// use extrude_animation::Timeout;
///
/// let mut timeout = Timeout::new(0.2);
/// assert!(!timeout.tick(0.1));
/// assert!(timeout.tick(0.15));
/// assert!(!timeout.tick(1.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timeout {
    remaining: f32,
    fired: bool,
}

impl Timeout {
    /// Create a timeout of `seconds`
    pub fn new(seconds: f32) -> Self {
        Self {
            remaining: seconds.max(0.0),
            fired: false,
        }
    }

    /// Advance by `dt` seconds; true exactly once, on the tick that expires it
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.fired {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn is_pending(&self) -> bool {
        !self.fired
    }

    pub fn remaining(&self) -> f32 {
        self.remaining.max(0.0)
    }
}
