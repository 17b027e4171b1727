//! Rating widget state and mounting.

use webdom::element::{find_element, find_parent};
use webdom::{attr, form, select};
use webdom::{Element, MediaPrefs, Tag};

use crate::error::StructuralError;
use crate::score::Score;
use crate::validation::{FieldError, ValidationResult};
use crate::validity::Validity;

use super::{ARIA_INVALID_ATTR, ERROR_CLASS, FIELD_NAME, INVALID_ATTR, NO_RATING_MSG, OPTION_STACK_CLASS};

/// Per-widget configuration.
#[derive(Debug, Clone, Copy)]
pub struct RatingConfig {
    /// Enforce the markup contract in full at mount time: exactly one radio
    /// per scale value, each wrapped in a label. Lenient widgets accept any
    /// radio group and pass the submitted value through unchecked.
    pub strict: bool,
    /// Host media preferences, read when rendering the validation message.
    pub prefs: MediaPrefs,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            strict: true,
            prefs: MediaPrefs::default(),
        }
    }
}

impl RatingConfig {
    /// The unchecked pass-through variant.
    pub fn lenient() -> Self {
        Self {
            strict: false,
            ..Default::default()
        }
    }

    pub fn prefs(mut self, prefs: MediaPrefs) -> Self {
        self.prefs = prefs;
        self
    }
}

pub(super) fn is_radio(el: &Element) -> bool {
    el.tag == Tag::Input && el.get_attribute("type") == Some("radio")
}

/// An interactive rating form bound to one container.
///
/// Mounting takes ownership of the container subtree; the form, option
/// stack, and radio inputs discovered then stay fixed for the widget's
/// lifetime. All interaction flows through
/// [`handle_event`](RatingWidget::handle_event).
#[derive(Debug)]
pub struct RatingWidget {
    pub(super) root: Element,
    pub(super) form_id: String,
    pub(super) stack_id: String,
    pub(super) radio_ids: Vec<String>,
    pub(super) validity: Validity,
    pub(super) selected_value: Option<String>,
    pub(super) strict: bool,
    pub(super) prefs: MediaPrefs,
}

impl RatingWidget {
    /// Mount the strict variant against a container.
    pub fn mount(root: Element) -> Result<Self, StructuralError> {
        Self::mount_with(root, RatingConfig::default())
    }

    /// Mount against a container with explicit configuration.
    pub fn mount_with(root: Element, config: RatingConfig) -> Result<Self, StructuralError> {
        let form_el = select::find_first(&root, &|el| el.tag == Tag::Form).ok_or_else(|| {
            StructuralError::MissingForm {
                container: root.id.clone(),
            }
        })?;
        let form_id = form_el.id.clone();

        let stack = select::find_first(form_el, &|el| el.has_class(OPTION_STACK_CLASS))
            .ok_or_else(|| StructuralError::MissingOptionStack {
                form: form_id.clone(),
            })?;
        let stack_id = stack.id.clone();

        let radios = select::collect(form_el, &is_radio);

        if config.strict {
            if radios.len() != Score::ALL.len() {
                return Err(StructuralError::RadioCount {
                    expected: Score::ALL.len(),
                    found: radios.len(),
                });
            }
            for radio in &radios {
                match find_parent(&root, &radio.id) {
                    Some(parent) if parent.tag == Tag::Label => {}
                    _ => {
                        return Err(StructuralError::UnwrappedRadio {
                            radio: radio.id.clone(),
                        })
                    }
                }
                let value = radio.get_attribute("value").unwrap_or("");
                if Score::parse(value).is_none() {
                    return Err(StructuralError::ValueOutOfScale {
                        value: value.to_string(),
                    });
                }
            }
        }

        let radio_ids: Vec<String> = radios.iter().map(|el| el.id.clone()).collect();

        log::debug!(
            "[RatingWidget::mount] container={} form={} radios={}",
            root.id,
            form_id,
            radio_ids.len()
        );

        Ok(Self {
            root,
            form_id,
            stack_id,
            radio_ids,
            validity: Validity::Unsubmitted,
            selected_value: None,
            strict: config.strict,
            prefs: config.prefs,
        })
    }

    // -------------------------------------------------------------------------
    // State transitions
    // -------------------------------------------------------------------------

    /// Transition the validity flag, applying the associated markup effects:
    /// the invalid marker on the container and the accessible invalid
    /// indicator on every radio.
    pub fn set_validity(&mut self, validity: Validity) {
        match validity {
            Validity::Invalid => {
                self.root.set_attribute(INVALID_ATTR, "");
                attr::set_attribute(
                    select::collect_mut(&mut self.root, &is_radio),
                    ARIA_INVALID_ATTR,
                    "error",
                );
            }
            Validity::Valid | Validity::Unsubmitted => {
                self.root.remove_attribute(INVALID_ATTR);
                attr::remove_attribute(select::collect_mut(&mut self.root, &is_radio), ARIA_INVALID_ATTR);
            }
        }
        self.validity = validity;
    }

    /// Audit the current form state without mutating anything.
    pub fn validate(&self) -> ValidationResult {
        match self.current_value() {
            Some(_) => ValidationResult::Valid,
            None => ValidationResult::Invalid(vec![FieldError {
                field_name: FIELD_NAME.to_string(),
                widget_id: self.root.id.clone(),
                message: NO_RATING_MSG.to_string(),
            }]),
        }
    }

    pub(super) fn current_value(&self) -> Option<String> {
        let form_el = find_element(&self.root, &self.form_id)?;
        form::value_of(form_el, FIELD_NAME)
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// The owned container subtree.
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn container_id(&self) -> &str {
        &self.root.id
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// The radio inputs discovered at mount, in document order.
    pub fn radio_ids(&self) -> &[String] {
        &self.radio_ids
    }

    /// The accepted value once the widget has settled, if any.
    pub fn selected_value(&self) -> Option<&str> {
        self.selected_value.as_deref()
    }

    /// Text of the currently displayed validation message, if one is shown.
    pub fn error_message(&self) -> Option<String> {
        select::find_first(&self.root, &|el| el.has_class(ERROR_CLASS)).map(Element::text_content)
    }
}
