//! Form value extraction.
//!
//! The detached-tree analog of reading `FormData` off a form element:
//! checkable inputs contribute their value only while `checked`, other
//! inputs contribute whatever `value` they carry.

use std::collections::HashMap;

use crate::element::{Element, Tag};

/// Collect the current `name -> value` pairs of a form subtree.
pub fn form_values(form: &Element) -> HashMap<String, String> {
    let mut values = HashMap::new();
    collect_values(form, &mut values);
    values
}

/// The current value of a single named field, if any input carries one.
pub fn value_of(form: &Element, name: &str) -> Option<String> {
    form_values(form).remove(name)
}

fn collect_values(el: &Element, values: &mut HashMap<String, String>) {
    if el.tag == Tag::Input {
        if let (Some(name), Some(value)) = (el.get_attribute("name"), el.get_attribute("value")) {
            let checkable = matches!(el.get_attribute("type"), Some("radio") | Some("checkbox"));
            if !checkable || el.has_attribute("checked") {
                values.insert(name.to_string(), value.to_string());
            }
        }
    }
    for child in el.child_elements() {
        collect_values(child, values);
    }
}
