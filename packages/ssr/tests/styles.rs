use pretty_assertions::assert_eq;
use ztml_html::prelude::*;

#[test]
fn static_styles() {
    assert_eq!(
        ztml_ssr::render(&html::div().style("width", "100px")),
        r#"<div style="width:100px"></div>"#
    );
}

#[test]
fn partially_dynamic_styles() {
    let dynamic = 123;

    assert_eq!(
        ztml_ssr::render(
            &html::div()
                .style("width", "100px")
                .style_f("height", format_args!("{dynamic}px"))
        ),
        r#"<div style="width:100px;height:123px"></div>"#
    );
}

#[test]
fn restyling_keeps_the_first_position() {
    let div = html::div()
        .style("width", "1px")
        .style("height", "2px")
        .style("width", "3px");

    assert_eq!(
        ztml_ssr::render(&div),
        r#"<div style="width:3px;height:2px"></div>"#
    );
}

#[test]
fn style_from_pairs_and_maps() {
    let div = html::div()
        .style_pairs(["color", "red", "margin", "0"])
        .style_map([("padding", "1em")]);

    assert_eq!(
        ztml_ssr::render(&div),
        r#"<div style="color:red;margin:0;padding:1em"></div>"#
    );
}

#[test]
fn removing_every_style_drops_the_attribute() {
    let div = html::div()
        .style("color", "red")
        .style_remove("color");

    assert_eq!(ztml_ssr::render(&div), "<div></div>");
}
