//! Batch attribute mutation over element collections.

use crate::element::Element;

/// Set an attribute on every element in the collection.
pub fn set_attribute<'a>(
    els: impl IntoIterator<Item = &'a mut Element>,
    name: &str,
    value: &str,
) {
    for el in els {
        el.set_attribute(name, value);
    }
}

/// Remove an attribute from every element in the collection.
pub fn remove_attribute<'a>(els: impl IntoIterator<Item = &'a mut Element>, name: &str) {
    for el in els {
        el.remove_attribute(name);
    }
}
