//! Mount-time error types.

use thiserror::Error;

/// The host markup does not satisfy the widget's shape contract.
///
/// Raised only while mounting; a failed mount signals a page-authoring
/// defect and aborts initialization for that container alone. Once a widget
/// is mounted, its event handling never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// The container has no descendant form.
    #[error("no form found under container '{container}'")]
    MissingForm { container: String },

    /// The form has no option-stack element to anchor messages to.
    #[error("no option stack found in form '{form}'")]
    MissingOptionStack { form: String },

    /// Strict mount: the radio count does not match the rating scale.
    #[error("expected {expected} radio inputs, found {found}")]
    RadioCount { expected: usize, found: usize },

    /// Strict mount: a radio input's direct parent is not a label.
    #[error("radio input '{radio}' is not wrapped in a label")]
    UnwrappedRadio { radio: String },

    /// Strict mount: a radio carries a value outside the rating scale.
    #[error("radio value '{value}' is outside the rating scale")]
    ValueOutOfScale { value: String },
}
