//! Page-level composition root.
//!
//! Widget discovery is a bootstrap concern; the core only ever takes an
//! already-resolved container. A structurally broken container aborts its
//! own widget and nothing else.

use webdom::{select, Element};

use crate::widgets::rating::{RatingConfig, RatingWidget, CONTAINER_CLASS};

/// Mount a widget on each already-resolved container, skipping broken ones.
pub fn mount_all(containers: impl IntoIterator<Item = Element>) -> Vec<RatingWidget> {
    mount_all_with(containers, RatingConfig::default())
}

/// [`mount_all`] with explicit configuration.
pub fn mount_all_with(
    containers: impl IntoIterator<Item = Element>,
    config: RatingConfig,
) -> Vec<RatingWidget> {
    containers
        .into_iter()
        .filter_map(|container| {
            let id = container.id.clone();
            match RatingWidget::mount_with(container, config) {
                Ok(widget) => Some(widget),
                Err(err) => {
                    log::warn!("[bootstrap] skipping container '{id}': {err}");
                    None
                }
            }
        })
        .collect()
}

/// Detach every `.rating` container from a page tree and mount each.
pub fn mount_page(page: &mut Element) -> Vec<RatingWidget> {
    mount_page_with(page, RatingConfig::default())
}

/// [`mount_page`] with explicit configuration.
pub fn mount_page_with(page: &mut Element, config: RatingConfig) -> Vec<RatingWidget> {
    let containers = select::detach_all(page, &|el| el.has_class(CONTAINER_CLASS));
    mount_all_with(containers, config)
}
