//! Widget event handling types.
//!
//! Widgets receive already-targeted [`webdom::Event`]s and report whether
//! they acted on them, keeping whatever delivers events (a page driver, a
//! test harness) a thin dispatcher.

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
