use pretty_assertions::assert_eq;
use ztml::prelude::*;

#[test]
fn prelude_covers_building_and_rendering() {
    let page = html::main()
        .z_req("/feed")
        .z_trigger("load")
        .child(
            svg::svg()
                .view_box("0 0 10 10")
                .child(svg::circle().cx("5").cy("5").r("5").fill("teal")),
        )
        .child(mathml::math().child(mathml::msup().child(mathml::mi().text("e")).child(mathml::mn().text("2"))));

    let compact = page.render();
    assert_eq!(Renderer::new().render(&page), compact);
    assert_eq!(
        compact,
        concat!(
            r#"<main z-req="/feed" z-trigger="load">"#,
            r#"<svg viewBox="0 0 10 10"><circle cx="5" cy="5" r="5" fill="teal"></circle></svg>"#,
            r#"<math><msup><mi>e</mi><mn>2</mn></msup></math>"#,
            "</main>"
        )
    );
}

#[test]
fn untyped_escape_hatch() {
    let custom = Element::new("my-widget", false)
        .attr("size", "large")
        .child(html::span().text("inside"));

    assert_eq!(
        ztml::ssr::render(&custom),
        r#"<my-widget size="large"><span>inside</span></my-widget>"#
    );
}
