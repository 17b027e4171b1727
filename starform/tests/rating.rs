use starform::prelude::*;
use webdom::{find_element, find_parent, select, Tag};

fn mount_card() -> RatingWidget {
    RatingWidget::mount(rating_card()).expect("canonical card mounts")
}

/// Id of the mounted radio carrying the given value.
fn radio_id(widget: &RatingWidget, value: &str) -> String {
    select::find_first(widget.root(), &|el| {
        el.tag == Tag::Input && el.get_attribute("value") == Some(value)
    })
    .map(|el| el.id.clone())
    .expect("radio present")
}

fn submit(widget: &mut RatingWidget) -> EventResult {
    widget.handle_event(&Event::Submit {
        target: widget.form_id().to_string(),
    })
}

fn error_nodes(widget: &RatingWidget) -> Vec<&Element> {
    select::collect(widget.root(), &|el| el.has_class("rating__error"))
}

/// A card with an arbitrary option count, each wrapped in a label.
fn card_with(count: usize) -> Element {
    card_with_values((1..=count).map(|i| i.to_string()))
}

fn card_with_values(values: impl IntoIterator<Item = String>) -> Element {
    let options = values.into_iter().map(|value| {
        Element::label().class("rating__option").child(
            Element::input()
                .attr("type", "radio")
                .attr("name", "rating")
                .attr("value", value),
        )
    });
    Element::div().class("rating").child(
        Element::form()
            .child(Element::div().class("stack-vertical").children(options))
            .child(Element::button("Submit").attr("type", "submit")),
    )
}

// ============================================================================
// Mounting
// ============================================================================

#[test]
fn test_mount_requires_form() {
    let container = Element::div().class("rating");

    let err = RatingWidget::mount(container).expect_err("no form to bind");
    assert!(matches!(err, StructuralError::MissingForm { .. }));
}

#[test]
fn test_mount_requires_option_stack() {
    let container = Element::div()
        .class("rating")
        .child(Element::form().child(Element::button("Submit").attr("type", "submit")));

    let err = RatingWidget::mount(container).expect_err("no stack to anchor messages");
    assert!(matches!(err, StructuralError::MissingOptionStack { .. }));
}

#[test]
fn test_strict_mount_rejects_wrong_radio_count() {
    let err = RatingWidget::mount(card_with(4)).expect_err("four radios is not a scale");
    assert_eq!(
        err,
        StructuralError::RadioCount {
            expected: 5,
            found: 4
        }
    );
}

#[test]
fn test_lenient_mount_accepts_any_radio_count() {
    let widget = RatingWidget::mount_with(card_with(3), RatingConfig::lenient())
        .expect("lenient mount takes the group as-is");
    assert_eq!(widget.radio_ids().len(), 3);
}

#[test]
fn test_strict_mount_rejects_unwrapped_radio() {
    let options = (1..=5).map(|i| {
        Element::input()
            .attr("type", "radio")
            .attr("name", "rating")
            .attr("value", i.to_string())
    });
    let container = Element::div().class("rating").child(
        Element::form().child(Element::div().class("stack-vertical").children(options)),
    );

    let err = RatingWidget::mount(container).expect_err("radios must sit in labels");
    assert!(matches!(err, StructuralError::UnwrappedRadio { .. }));
}

#[test]
fn test_strict_mount_rejects_value_out_of_scale() {
    let values = ["1", "2", "3", "4", "9"].map(String::from);

    let err = RatingWidget::mount(card_with_values(values)).expect_err("9 is off the scale");
    assert_eq!(
        err,
        StructuralError::ValueOutOfScale {
            value: "9".to_string()
        }
    );
}

#[test]
fn test_fresh_widget_is_unsubmitted() {
    let widget = mount_card();
    assert_eq!(widget.validity(), Validity::Unsubmitted);
    assert_eq!(widget.selected_value(), None);
    assert_eq!(widget.error_message(), None);
}

// ============================================================================
// Submit without a selection
// ============================================================================

#[test]
fn test_submit_without_selection_goes_invalid() {
    let mut widget = mount_card();

    assert!(submit(&mut widget).is_handled());

    assert!(widget.validity().is_invalid());
    assert!(widget.root().has_attribute("data-invalid"));
    for id in widget.radio_ids().to_vec() {
        let radio = find_element(widget.root(), &id).expect("radio still present");
        assert_eq!(radio.get_attribute("aria-invalid"), Some("error"));
    }
}

#[test]
fn test_validation_message_is_announced() {
    let mut widget = mount_card();
    submit(&mut widget);

    let errors = error_nodes(&widget);
    assert_eq!(errors.len(), 1);
    let alert = errors[0];
    assert_eq!(alert.id, "error");
    assert_eq!(alert.get_attribute("role"), Some("alert"));
    assert_eq!(alert.text_content(), "Error: no rating was selected.");
    // Hidden visually until the attention animation reveals it.
    assert!(alert.has_class("sr-only"));

    // Inserted at the top of the option stack.
    let stack = select::find_first(widget.root(), &|el| el.has_class("stack-vertical"))
        .expect("stack present");
    assert_eq!(stack.child_elements()[0].id, "error");
}

#[test]
fn test_repeated_submit_keeps_a_single_message() {
    let mut widget = mount_card();

    submit(&mut widget);
    submit(&mut widget);
    submit(&mut widget);

    assert_eq!(error_nodes(&widget).len(), 1);
    assert_eq!(
        widget.error_message(),
        Some("Error: no rating was selected.".to_string())
    );
}

#[test]
fn test_reduced_motion_message_stays_visible() {
    let config = RatingConfig::default().prefs(MediaPrefs::reduced_motion());
    let mut widget =
        RatingWidget::mount_with(rating_card(), config).expect("canonical card mounts");
    submit(&mut widget);

    let errors = error_nodes(&widget);
    assert_eq!(errors.len(), 1);
    assert!(!errors[0].has_class("sr-only"));
    assert_eq!(errors[0].get_attribute("role"), Some("alert"));
}

// ============================================================================
// Option interaction
// ============================================================================

#[test]
fn test_focus_and_blur_toggle_label_marker() {
    let mut widget = mount_card();
    let radio = radio_id(&widget, "2");

    widget.handle_event(&Event::Focus {
        target: radio.clone(),
    });
    let label = find_parent(widget.root(), &radio).expect("label present");
    assert!(label.has_attribute("data-focused"));

    widget.handle_event(&Event::Blur {
        target: radio.clone(),
    });
    let label = find_parent(widget.root(), &radio).expect("label present");
    assert!(!label.has_attribute("data-focused"));
}

#[test]
fn test_change_moves_the_selection_marker() {
    let mut widget = mount_card();
    let second = radio_id(&widget, "2");
    let fourth = radio_id(&widget, "4");

    widget.handle_event(&Event::Change {
        target: second.clone(),
    });
    assert!(find_parent(widget.root(), &second)
        .expect("label present")
        .has_attribute("data-selected"));

    widget.handle_event(&Event::Change {
        target: fourth.clone(),
    });
    assert!(!find_parent(widget.root(), &second)
        .expect("label present")
        .has_attribute("data-selected"));
    assert!(find_parent(widget.root(), &fourth)
        .expect("label present")
        .has_attribute("data-selected"));

    let marked = select::collect(widget.root(), &|el| {
        el.tag == Tag::Label && el.has_attribute("data-selected")
    });
    assert_eq!(marked.len(), 1);
}

#[test]
fn test_events_for_foreign_targets_are_ignored() {
    let mut widget = mount_card();

    let result = widget.handle_event(&Event::Submit {
        target: "someone-elses-form".to_string(),
    });
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(widget.validity(), Validity::Unsubmitted);

    let result = widget.handle_event(&Event::Change {
        target: "someone-elses-radio".to_string(),
    });
    assert_eq!(result, EventResult::Ignored);
}

// ============================================================================
// Submit with a selection
// ============================================================================

#[test]
fn test_submit_with_selection_settles_the_widget() {
    let mut widget = mount_card();
    let third = radio_id(&widget, "3");

    widget.handle_event(&Event::Change { target: third });
    assert_eq!(submit(&mut widget), EventResult::Consumed);

    assert_eq!(widget.validity(), Validity::Valid);
    assert_eq!(widget.selected_value(), Some("3"));
    assert!(!widget.root().has_attribute("data-invalid"));
    assert!(widget
        .root()
        .text_content()
        .contains("You selected 3 out of 5"));
    assert!(widget.root().text_content().contains("Thank you!"));

    // The selectable form is gone.
    let radios = select::collect(widget.root(), &|el| el.tag == Tag::Input);
    assert!(radios.is_empty());
    assert!(find_element(widget.root(), widget.form_id()).is_none());
}

#[test]
fn test_success_after_failure_clears_the_error_surface() {
    let mut widget = mount_card();
    submit(&mut widget);
    assert_eq!(widget.validity(), Validity::Invalid);

    let fifth = radio_id(&widget, "5");
    widget.handle_event(&Event::Change { target: fifth });
    submit(&mut widget);

    assert_eq!(widget.validity(), Validity::Valid);
    assert!(!widget.root().has_attribute("data-invalid"));
    assert_eq!(widget.error_message(), None);
    assert!(widget
        .root()
        .text_content()
        .contains("You selected 5 out of 5"));
}

#[test]
fn test_settled_widget_ignores_further_events() {
    let mut widget = mount_card();
    let third = radio_id(&widget, "3");
    widget.handle_event(&Event::Change {
        target: third.clone(),
    });
    submit(&mut widget);

    assert_eq!(submit(&mut widget), EventResult::Ignored);
    assert_eq!(
        widget.handle_event(&Event::Change { target: third }),
        EventResult::Ignored
    );
    assert_eq!(widget.validity(), Validity::Valid);
    assert!(widget
        .root()
        .text_content()
        .contains("You selected 3 out of 5"));
}

// ============================================================================
// Animation end
// ============================================================================

#[test]
fn test_animation_end_clears_the_invalid_marker() {
    let mut widget = mount_card();
    submit(&mut widget);
    assert!(widget.root().has_attribute("data-invalid"));

    let result = widget.handle_event(&Event::AnimationEnd {
        target: widget.container_id().to_string(),
    });
    assert_eq!(result, EventResult::Consumed);
    assert!(!widget.root().has_attribute("data-invalid"));
    // The flag itself is untouched; only the marker driving the animation.
    assert_eq!(widget.validity(), Validity::Invalid);
}

#[test]
fn test_animation_end_is_honored_in_any_state() {
    let mut widget = mount_card();

    // Before any submit.
    let result = widget.handle_event(&Event::AnimationEnd {
        target: widget.container_id().to_string(),
    });
    assert_eq!(result, EventResult::Consumed);

    // After settling.
    let third = radio_id(&widget, "3");
    widget.handle_event(&Event::Change { target: third });
    submit(&mut widget);
    let result = widget.handle_event(&Event::AnimationEnd {
        target: widget.container_id().to_string(),
    });
    assert_eq!(result, EventResult::Consumed);

    // Other elements' animations are not ours.
    let result = widget.handle_event(&Event::AnimationEnd {
        target: "elsewhere".to_string(),
    });
    assert_eq!(result, EventResult::Ignored);
}

// ============================================================================
// Validation audit
// ============================================================================

#[test]
fn test_validate_reports_the_missing_field() {
    let widget = mount_card();

    let result = widget.validate();
    assert!(result.is_invalid());
    let error = result.first_error().expect("one field error");
    assert_eq!(error.field_name, "rating");
    assert_eq!(error.widget_id, widget.container_id());
    assert_eq!(error.message, "Error: no rating was selected.");

    // Auditing renders nothing.
    assert_eq!(widget.error_message(), None);
    assert!(!widget.root().has_attribute("data-invalid"));
}

#[test]
fn test_validate_passes_once_selected() {
    let mut widget = mount_card();
    let first = radio_id(&widget, "1");
    widget.handle_event(&Event::Change { target: first });

    assert!(widget.validate().is_valid());
}

#[test]
fn test_lenient_widget_passes_value_through() {
    let values = ["ok", "fine", "great"].map(String::from);
    let mut widget = RatingWidget::mount_with(card_with_values(values), RatingConfig::lenient())
        .expect("lenient mount takes the group as-is");

    let target = widget.radio_ids()[1].clone();
    widget.handle_event(&Event::Change { target });
    submit(&mut widget);

    assert_eq!(widget.validity(), Validity::Valid);
    assert_eq!(widget.selected_value(), Some("fine"));
    assert!(widget
        .root()
        .text_content()
        .contains("You selected fine out of 5"));
}
