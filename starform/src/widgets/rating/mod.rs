//! Rating widget - a 1-to-5 radio rating form with submit validation.
//!
//! The widget owns its container subtree outright. It is mounted against a
//! container holding the markup contract below, receives targeted events
//! through [`RatingWidget::handle_event`], and renders either an accessible
//! validation error or a terminal thank-you view.
//!
//! # Markup expected
//!
//! ```ignore
//! let card = Element::div()
//!     .class("rating")
//!     .child(
//!         Element::form()
//!             .child(Element::div().class("stack-vertical").children(options))
//!             .child(Element::button().attr("type", "submit").text("Submit")),
//!     );
//! // each option:
//! //   label.rating__option > input.sr-only[type=radio][name=rating][value=1..5]
//! let widget = RatingWidget::mount(card)?;
//! ```

mod events;
mod render;
mod state;

pub use state::{RatingConfig, RatingWidget};

/// Form field name shared by every rating radio.
pub const FIELD_NAME: &str = "rating";
/// Class of the column holding the selectable options.
pub const OPTION_STACK_CLASS: &str = "stack-vertical";
/// Class of the page-level widget container.
pub const CONTAINER_CLASS: &str = "rating";
/// Class and stable id of the validation message element.
pub const ERROR_CLASS: &str = "rating__error";
pub const ERROR_ID: &str = "error";
/// Class that hides an element visually while leaving it announced.
pub const SR_ONLY_CLASS: &str = "sr-only";

/// Invalid marker on the container, driving the attention animation.
pub const INVALID_ATTR: &str = "data-invalid";
/// Accessible invalid indicator on each radio.
pub const ARIA_INVALID_ATTR: &str = "aria-invalid";
/// Focus marker on an option label.
pub const FOCUSED_ATTR: &str = "data-focused";
/// Selection marker on an option label.
pub const SELECTED_ATTR: &str = "data-selected";

/// Message shown when submit finds no selection.
pub const NO_RATING_MSG: &str = "Error: no rating was selected.";
