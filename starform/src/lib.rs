pub mod bootstrap;
pub mod error;
pub mod markup;
pub mod score;
pub mod validation;
pub mod validity;
pub mod widgets;

pub use error::StructuralError;
pub use score::Score;
pub use validity::Validity;
pub use widgets::rating::{RatingConfig, RatingWidget};

pub mod prelude {
    pub use crate::bootstrap::{mount_all, mount_page};
    pub use crate::error::StructuralError;
    pub use crate::markup::rating_card;
    pub use crate::score::Score;
    pub use crate::validation::{FieldError, ValidationResult};
    pub use crate::validity::Validity;
    pub use crate::widgets::events::EventResult;
    pub use crate::widgets::rating::{RatingConfig, RatingWidget};

    pub use webdom::{Element, Event, MediaPrefs};
}
