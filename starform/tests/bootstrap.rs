use starform::bootstrap::{mount_all, mount_page};
use starform::markup::rating_card;
use starform::Validity;
use webdom::{select, Element};

#[test]
fn test_mount_page_detaches_every_container() {
    let mut page = Element::div()
        .id("page")
        .child(Element::heading("How did we do?"))
        .child(rating_card())
        .child(Element::div().id("main").child(rating_card()));

    let widgets = mount_page(&mut page);

    assert_eq!(widgets.len(), 2);
    for widget in &widgets {
        assert_eq!(widget.validity(), Validity::Unsubmitted);
        assert_eq!(widget.radio_ids().len(), 5);
    }
    // The page no longer holds the containers; the widgets own them.
    assert!(select::find_first(&page, &|el| el.has_class("rating")).is_none());
}

#[test]
fn test_broken_container_only_aborts_its_own_widget() {
    let empty_card = Element::div().id("empty-card").class("rating");

    let widgets = mount_all(vec![rating_card(), empty_card, rating_card()]);

    assert_eq!(widgets.len(), 2);
}
