//! Rendering for the rating widget's two message surfaces.

use webdom::element::find_element_mut;
use webdom::{select, Element};

use super::state::RatingWidget;
use super::{ERROR_CLASS, ERROR_ID, SR_ONLY_CLASS};

const THANK_YOU_IMG: &str = "assets/illustration-thank-you.svg";
const THANK_YOU_COPY: &str = "We appreciate you taking the time to give a rating. \
     If you ever need more support, don't hesitate to get in touch!";

impl RatingWidget {
    /// Show or refresh the validation message.
    ///
    /// An existing message element is updated in place so the page never
    /// holds two; otherwise one is created and inserted at the top of the
    /// option stack.
    pub(super) fn render_validation_error(&mut self, msg: &str) {
        if let Some(existing) =
            select::find_first_mut(&mut self.root, &|el| el.has_class(ERROR_CLASS))
        {
            existing.set_text(msg);
            return;
        }

        let mut alert = Element::div()
            .id(ERROR_ID)
            .class(ERROR_CLASS)
            .class("color-orange")
            .attr("role", "alert");
        if !self.prefs.prefers_reduced_motion() {
            // The attention animation reveals the message visually; the
            // alert role announces it to screen readers either way.
            alert = alert.class(SR_ONLY_CLASS);
        }
        alert.set_text(msg);

        let Some(stack) = find_element_mut(&mut self.root, &self.stack_id) else {
            log::warn!(
                "[RatingWidget] option stack {} disappeared, dropping message",
                self.stack_id
            );
            return;
        };
        stack.insert_first(alert);
    }

    /// Replace the widget's entire content with the thank-you view.
    ///
    /// One-way: the selectable form is gone for the rest of the instance's
    /// lifetime.
    pub(super) fn render_thank_you(&mut self, selected: &str) {
        let view = Element::div()
            .classes(["stack-vertical", "align-center"])
            .child(
                Element::img()
                    .class("rating__thank-you-img")
                    .attr("src", THANK_YOU_IMG)
                    .attr("alt", ""),
            )
            .child(
                Element::paragraph(format!("You selected {selected} out of 5"))
                    .classes(["p-1", "color-orange", "bg-dark-blue", "lh-tight", "br-standard"]),
            )
            .child(Element::heading("Thank you!"))
            .child(Element::paragraph(THANK_YOU_COPY).class("text-center"));

        self.root.replace_content(vec![view]);
    }
}
