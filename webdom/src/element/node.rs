use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// The element kinds the widget layer works with.
///
/// This is deliberately the small subset of HTML the rating markup contract
/// names, not a general HTML vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Form,
    Label,
    Input,
    Button,
    Img,
    Heading,
    Paragraph,
    Span,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Form => "form",
            Tag::Label => "label",
            Tag::Input => "input",
            Tag::Button => "button",
            Tag::Img => "img",
            Tag::Heading => "h2",
            Tag::Paragraph => "p",
            Tag::Span => "span",
        }
    }
}

/// An owned node in a detached element tree.
///
/// Elements are addressed by string id rather than by reference; tree
/// operations look nodes up from a root. Ids are auto-generated and unique
/// per process unless overridden with [`Element::id`].
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Markup state
    pub attributes: HashMap<String, String>,
    pub classes: Vec<String>,
}

impl Element {
    fn with_tag(prefix: &str, tag: Tag) -> Self {
        Self {
            id: generate_id(prefix),
            tag,
            content: Content::None,
            attributes: HashMap::new(),
            classes: Vec::new(),
        }
    }

    pub fn div() -> Self {
        Self::with_tag("div", Tag::Div)
    }

    pub fn form() -> Self {
        Self::with_tag("form", Tag::Form)
    }

    pub fn label() -> Self {
        Self::with_tag("label", Tag::Label)
    }

    pub fn input() -> Self {
        Self::with_tag("input", Tag::Input)
    }

    pub fn button(text: impl Into<String>) -> Self {
        let mut el = Self::with_tag("button", Tag::Button);
        el.content = Content::Text(text.into());
        el
    }

    pub fn img() -> Self {
        Self::with_tag("img", Tag::Img)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        let mut el = Self::with_tag("h", Tag::Heading);
        el.content = Content::Text(text.into());
        el
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        let mut el = Self::with_tag("p", Tag::Paragraph);
        el.content = Content::Text(text.into());
        el
    }

    /// A bare text run.
    pub fn text(content: impl Into<String>) -> Self {
        let mut el = Self::with_tag("text", Tag::Span);
        el.content = Content::Text(content.into());
        el
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markup state
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.add_class(name);
        self
    }

    pub fn classes(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for name in names {
            self.add_class(name);
        }
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    // -------------------------------------------------------------------------
    // Attribute access
    // -------------------------------------------------------------------------

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    // -------------------------------------------------------------------------
    // Class access
    // -------------------------------------------------------------------------

    pub fn add_class(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.classes.contains(&name) {
            self.classes.push(name);
        }
    }

    pub fn remove_class(&mut self, name: &str) {
        self.classes.retain(|c| c != name);
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    // -------------------------------------------------------------------------
    // Content access
    // -------------------------------------------------------------------------

    /// Child elements, or an empty slice for text/empty content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Replace any content with the given text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    /// Insert a child before any existing children
    /// (`insertAdjacentElement("afterbegin")`).
    pub fn insert_first(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.insert(0, child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Replace the entire content with new children (`innerHTML = ...`).
    pub fn replace_content(&mut self, children: Vec<Element>) {
        self.content = Content::Children(children);
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(el: &Element, out: &mut String) {
    match &el.content {
        Content::None => {}
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}
