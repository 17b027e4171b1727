//! Canonical rating-card markup.
//!
//! Builds the container shape the widget's mount contract expects; the demo
//! and test suites start from this instead of hand-rolling trees.

use webdom::Element;

use crate::score::Score;
use crate::widgets::rating::{CONTAINER_CLASS, FIELD_NAME, OPTION_STACK_CLASS, SR_ONLY_CLASS};

/// One selectable option: a label wrapping its (visually hidden) radio.
fn option(score: Score) -> Element {
    let value = score.to_string();
    Element::label()
        .class("rating__option")
        .child(
            Element::input()
                .class(SR_ONLY_CLASS)
                .attr("type", "radio")
                .attr("name", FIELD_NAME)
                .attr("value", &value)
                .attr("aria-required", "true"),
        )
        .child(Element::text(value))
}

/// The full interactive rating card, one option per scale value.
pub fn rating_card() -> Element {
    Element::div().class(CONTAINER_CLASS).child(
        Element::form()
            .child(
                Element::div()
                    .class(OPTION_STACK_CLASS)
                    .children(Score::ALL.into_iter().map(option)),
            )
            .child(Element::button("Submit").attr("type", "submit")),
    )
}
