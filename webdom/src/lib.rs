pub mod attr;
pub mod element;
pub mod event;
pub mod form;
pub mod html;
pub mod media;
pub mod select;

pub use element::{
    find_element, find_element_mut, find_parent, find_parent_mut, Content, Element, Tag,
};
pub use event::Event;
pub use media::MediaPrefs;
