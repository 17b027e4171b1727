//! The widget's submit-state flag.

/// Whether the last submit attempt had a selection.
///
/// Set only by the submit path. `Valid` is terminal for the instance's
/// lifetime; `Invalid` is recoverable by reselecting and resubmitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validity {
    /// No submit has been attempted yet.
    #[default]
    Unsubmitted,
    /// The last submit carried a selection; the widget has rendered its
    /// terminal thank-you view.
    Valid,
    /// The last submit carried no selection.
    Invalid,
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Validity::Invalid)
    }
}
