//! Widgets built on the webdom element layer.

pub mod events;
pub mod rating;

pub use events::EventResult;
pub use rating::{RatingConfig, RatingWidget};
