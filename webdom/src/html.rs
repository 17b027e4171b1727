//! Minimal HTML serialization of an element tree.
//!
//! Good enough to inspect what a widget rendered; no escaping, no pretty
//! printing. Attributes are emitted in sorted order so output is stable.

use crate::element::{Content, Element, Tag};

/// Serialize a subtree to HTML text.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

fn write_element(el: &Element, out: &mut String) {
    // Bare text runs render without a wrapping tag.
    if el.tag == Tag::Span {
        if let Content::Text(text) = &el.content {
            out.push_str(text);
            return;
        }
    }

    out.push('<');
    out.push_str(el.tag.as_str());
    out.push_str(&format!(" id=\"{}\"", el.id));
    if !el.classes.is_empty() {
        out.push_str(&format!(" class=\"{}\"", el.classes.join(" ")));
    }
    let mut attributes: Vec<_> = el.attributes.iter().collect();
    attributes.sort();
    for (name, value) in attributes {
        if value.is_empty() {
            out.push_str(&format!(" {name}"));
        } else {
            out.push_str(&format!(" {name}=\"{value}\""));
        }
    }

    // Void elements carry no content.
    if matches!(el.tag, Tag::Input | Tag::Img) {
        out.push_str(" />");
        return;
    }
    out.push('>');

    match &el.content {
        Content::None => {}
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    out.push_str(&format!("</{}>", el.tag.as_str()));
}
