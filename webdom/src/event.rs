/// High-level UI events with element targeting.
///
/// Events are produced by whatever hosts the tree (a test harness, a demo
/// driver, browser glue) and delivered to widgets; the `target` is the id of
/// the element the event fired on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Form submission was requested. Default navigation is never performed;
    /// delivery to a widget is the whole effect.
    Submit { target: String },
    /// A checkable input's value changed.
    Change { target: String },
    /// Element gained focus.
    Focus { target: String },
    /// Element lost focus.
    Blur { target: String },
    /// A CSS animation on the element ran to completion.
    AnimationEnd { target: String },
}

impl Event {
    /// The id of the element the event fired on.
    pub fn target(&self) -> &str {
        match self {
            Event::Submit { target }
            | Event::Change { target }
            | Event::Focus { target }
            | Event::Blur { target }
            | Event::AnimationEnd { target } => target,
        }
    }
}
