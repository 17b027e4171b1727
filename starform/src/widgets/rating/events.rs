//! Event handling for the rating widget.

use webdom::element::{find_element_mut, find_parent_mut};
use webdom::{Event, Tag};

use crate::score::Score;
use crate::validity::Validity;
use crate::widgets::events::EventResult;

use super::state::RatingWidget;
use super::{FOCUSED_ATTR, INVALID_ATTR, NO_RATING_MSG, SELECTED_ATTR};

impl RatingWidget {
    /// Deliver a targeted event to the widget.
    ///
    /// Events aimed at elements the widget does not own are `Ignored`, as is
    /// everything except animation end once the widget has settled.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        // The attention animation finishing clears the invalid marker no
        // matter which state the widget is in.
        if let Event::AnimationEnd { target } = event {
            if *target == self.root.id {
                self.root.remove_attribute(INVALID_ATTR);
                return EventResult::Consumed;
            }
            return EventResult::Ignored;
        }

        if self.validity.is_valid() {
            // Terminal: the thank-you view has no interactive surface left.
            return EventResult::Ignored;
        }

        match event {
            Event::Submit { target } if *target == self.form_id => {
                self.submit();
                EventResult::Consumed
            }
            Event::Focus { target } if self.owns_radio(target) => {
                self.mark_label(target, FOCUSED_ATTR, true);
                EventResult::Consumed
            }
            Event::Blur { target } if self.owns_radio(target) => {
                self.mark_label(target, FOCUSED_ATTR, false);
                EventResult::Consumed
            }
            Event::Change { target } if self.owns_radio(target) => {
                self.change_selection(target);
                EventResult::Consumed
            }
            _ => {
                log::trace!("[RatingWidget] ignoring event for {}", event.target());
                EventResult::Ignored
            }
        }
    }

    fn owns_radio(&self, id: &str) -> bool {
        self.radio_ids.iter().any(|radio_id| radio_id == id)
    }

    /// Set or clear a marker attribute on the label wrapping a radio.
    fn mark_label(&mut self, radio_id: &str, name: &str, on: bool) {
        match find_parent_mut(&mut self.root, radio_id) {
            Some(label) if label.tag == Tag::Label => {
                if on {
                    label.set_attribute(name, "");
                } else {
                    label.remove_attribute(name);
                }
            }
            _ => {
                // Only reachable on lenient mounts with unwrapped radios.
                log::debug!("[RatingWidget] radio {radio_id} has no label wrapper, skipping {name}");
            }
        }
    }

    /// Mirror native radio-group behavior in the detached tree: the changed
    /// input becomes checked and its label selected, clearing all siblings.
    fn change_selection(&mut self, target: &str) {
        let radio_ids = self.radio_ids.clone();
        for radio_id in &radio_ids {
            let selected = radio_id == target;
            if let Some(radio) = find_element_mut(&mut self.root, radio_id) {
                if selected {
                    radio.set_attribute("checked", "");
                } else {
                    radio.remove_attribute("checked");
                }
            }
            self.mark_label(radio_id, SELECTED_ATTR, selected);
        }
    }

    fn submit(&mut self) {
        match self.current_value() {
            // No rating was selected, show error
            None => {
                log::debug!("[RatingWidget::submit] no rating selected");
                self.set_validity(Validity::Invalid);
                self.render_validation_error(NO_RATING_MSG);
            }
            // Rating was selected, settle into the thank-you view
            Some(value) => {
                log::debug!("[RatingWidget::submit] rating={value}");
                let accepted = if self.strict {
                    match Score::parse(&value) {
                        Some(score) => score.to_string(),
                        // Mount checked every radio value against the scale,
                        // so an off-scale value here is a broken markup
                        // contract, not user input.
                        None => panic!("radio value '{value}' is outside the rating scale"),
                    }
                } else {
                    value
                };
                self.set_validity(Validity::Valid);
                self.render_thank_you(&accepted);
                self.selected_value = Some(accepted);
            }
        }
    }
}
