use webdom::html::to_html;
use webdom::Element;

#[test]
fn test_to_html_nests_and_orders_attributes() {
    let card = Element::div()
        .id("card")
        .class("rating")
        .child(
            Element::input()
                .id("choice")
                .attr("type", "radio")
                .attr("name", "rating")
                .attr("value", "2"),
        )
        .child(Element::paragraph("Thanks").id("copy"));

    assert_eq!(
        to_html(&card),
        "<div id=\"card\" class=\"rating\">\
         <input id=\"choice\" name=\"rating\" type=\"radio\" value=\"2\" />\
         <p id=\"copy\">Thanks</p>\
         </div>"
    );
}

#[test]
fn test_to_html_renders_text_runs_bare() {
    let label = Element::label().id("opt").child(Element::text("3"));

    assert_eq!(to_html(&label), "<label id=\"opt\">3</label>");
}

#[test]
fn test_to_html_valueless_attribute_is_boolean() {
    let mut div = Element::div().id("root");
    div.set_attribute("data-invalid", "");

    assert_eq!(to_html(&div), "<div id=\"root\" data-invalid></div>");
}
