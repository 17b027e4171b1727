//! Form validation result types.
//!
//! Validation failure is widget state, not an error value: a widget reports
//! its current standing through [`ValidationResult`] and stays interactive.
//!
//! # Example
//!
//! ```ignore
//! let result = widget.validate();
//! if let Some(error) = result.first_error() {
//!     log::debug!("{} is missing: {}", error.field_name, error.message);
//! }
//! ```

mod result;

pub use result::{FieldError, ValidationResult};
