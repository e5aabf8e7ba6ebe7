use pretty_assertions::assert_eq;
use ztml_html::prelude::*;

#[test]
fn category_order_is_fixed() {
    // set in reverse category order on purpose
    let el = svg::rect()
        .custom_data("kind", "bar")
        .style("fill", "red")
        .class("bar")
        .opacity(0.5)
        .path_length(100.0)
        .id("r1")
        .width("10");

    assert_eq!(
        el.render(),
        r#"<rect id="r1" width="10" opacity="0.5" pathLength="100" class="bar" style="fill:red" data-kind="bar"></rect>"#
    );
}

#[test]
fn integer_attributes() {
    let mi = mathml::mi().scriptlevel(3).text("x");
    assert_eq!(mi.render(), r#"<mi scriptlevel="3">x</mi>"#);

    let input = html::input().tabindex(-1);
    assert_eq!(input.render(), r#"<input tabindex="-1"/>"#);
}

#[test]
fn boolean_attributes_render_literally() {
    let details = html::details().open(true).hidden_f(format_args!("{}", "until-found"));
    assert_eq!(
        details.render(),
        r#"<details open="true" hidden="until-found"></details>"#
    );

    assert_eq!(
        html::div().draggable(false).render(),
        r#"<div draggable="false"></div>"#
    );
}

#[test]
fn conditional_setters() {
    let active = true;
    let disabled = false;

    let button = html::button()
        .if_id(active, "go")
        .if_disabled(disabled, true)
        .if_class(active, "active")
        .if_class(disabled, "muted")
        .if_style(disabled, "color", "gray")
        .if_custom_data(active, "state", "on");

    assert_eq!(
        button.render(),
        r#"<button id="go" class="active" data-state="on"></button>"#
    );
}

#[test]
fn formatted_setters() {
    let page = 7;
    let a = html::a()
        .href_f(format_args!("/page/{page}"))
        .class_f(format_args!("page-{page}"))
        .if_title_f(page > 5, format_args!("page {page} of {}", 9));

    assert_eq!(
        a.render(),
        r#"<a href="/page/7" title="page 7 of 9" class="page-7"></a>"#
    );
}

#[test]
fn remove_setters() {
    let el = html::div()
        .id("x")
        .tabindex(0)
        .class(["a", "b", "c"])
        .style("color", "red")
        .style("margin", "0")
        .custom_data("k", "v")
        .id_remove()
        .tabindex_remove()
        .class_remove("b")
        .style_remove("color")
        .custom_data_remove("k");

    assert_eq!(el.render(), r#"<div class="a c" style="margin:0"></div>"#);
}

#[test]
fn removed_then_set_moves_to_the_end() {
    let el = html::div().id("x").title("t").id_remove().id("y");
    assert_eq!(el.render(), r#"<div title="t" id="y"></div>"#);
}

#[test]
fn overwriting_keeps_the_first_position() {
    let el = html::div().id("x").title("t").id("y");
    assert_eq!(el.render(), r#"<div id="y" title="t"></div>"#);
}

#[test]
fn empty_token_lists_are_omitted() {
    let el = html::div().class("a").class_remove("a");
    assert_eq!(el.render(), "<div></div>");
}

#[test]
fn empty_tokens_are_omitted() {
    assert_eq!(html::div().class("").render(), "<div></div>");
    assert_eq!(html::div().class(["", " "]).render(), "<div></div>");
}

#[test]
fn tokens_holding_the_delimiter_are_split() {
    let el = html::div().class("a b").class("a");
    assert_eq!(el.render(), r#"<div class="a b"></div>"#);

    let el = el.class_remove("a b").class(["c  d", "d"]);
    assert_eq!(el.render(), r#"<div class="c d"></div>"#);
}

#[test]
fn comma_lists() {
    let img = html::img().srcset(["a.png 1x", "b.png 2x"]).srcset("a.png 1x");
    assert_eq!(img.render(), r#"<img srcset="a.png 1x,b.png 2x"/>"#);
}

#[test]
fn choice_attributes() {
    let a = html::a()
        .target(Target::Blank)
        .referrerpolicy(ReferrerPolicy::NoReferrer)
        .rel(["noopener", "noreferrer"]);

    assert_eq!(
        a.render(),
        r#"<a target="_blank" referrerpolicy="no-referrer" rel="noopener noreferrer"></a>"#
    );
}

#[test]
fn svg_presentation_attributes() {
    let path = svg::path()
        .d("M0 0L10 10")
        .stroke("black")
        .stroke_width("2")
        .stroke_linecap(StrokeLinecap::Round)
        .fill_rule(FillRule::Evenodd)
        .fill_opacity(0.25);

    assert_eq!(
        path.render(),
        r#"<path d="M0 0L10 10" stroke="black" stroke-width="2" stroke-linecap="round" fill-rule="evenodd" fill-opacity="0.25"></path>"#
    );
}

#[test]
fn svg_filter_inputs() {
    let blur = svg::fe_gaussian_blur()
        .input("SourceGraphic")
        .std_deviation("5")
        .edge_mode(EdgeMode::Duplicate);

    assert_eq!(
        blur.render(),
        r#"<feGaussianBlur in="SourceGraphic" stdDeviation="5" edgeMode="duplicate"></feGaussianBlur>"#
    );
}

#[test]
fn element_attributes_shadow_shared_ones() {
    // `fill` on animation elements takes the animation choice, not a paint
    let animate = svg::animate()
        .attribute_name("opacity")
        .fill(AnimationFill::Freeze);

    assert_eq!(
        animate.render(),
        r#"<animate attributeName="opacity" fill="freeze"></animate>"#
    );
}

#[test]
fn mathml_attributes() {
    let mo = mathml::mo()
        .form(OperatorForm::Prefix)
        .stretchy(false)
        .mathvariant(MathVariant::Bold)
        .mathcolor("red")
        .text("(");

    assert_eq!(
        mo.render(),
        r#"<mo form="prefix" stretchy="false" mathvariant="bold" mathcolor="red">(</mo>"#
    );
}

#[test]
fn z_attributes() {
    let button = html::button()
        .z_req("/items")
        .z_req_method(ZReqMethod::Post)
        .z_target("#list")
        .z_swap("inner")
        .z_trigger("click")
        .z_json(r#"{"id":1}"#);

    assert_eq!(
        button.render(),
        concat!(
            r##"<button z-req="/items" z-req-method="post" z-target="#list" z-swap="inner" "##,
            r#"z-trigger="click" z-json="{&#34;id&#34;:1}"></button>"#
        )
    );
}

#[test]
fn z_req_method_empty_choice() {
    let form = html::form().z_req_method(ZReqMethod::Empty);
    assert_eq!(form.render(), r#"<form z-req-method=""></form>"#);
}

#[test]
fn z_attributes_on_svg_and_mathml() {
    assert_eq!(
        svg::g().z_action("zoom").render(),
        r#"<g z-action="zoom"></g>"#
    );
    assert_eq!(
        mathml::mrow().z_data("x").render(),
        r#"<mrow z-data="x"></mrow>"#
    );
}

#[test]
fn flat_attribute_pairs() {
    let el = html::div().attrs(["role", "note", "aria-live", "polite"]);
    assert_eq!(el.render(), r#"<div role="note" aria-live="polite"></div>"#);
}

#[test]
#[should_panic(expected = "got 3")]
fn odd_attribute_pairs_panic() {
    let _ = html::div().attrs(["a", "b", "c"]);
}

#[test]
fn odd_attribute_pairs_write_nothing() {
    let err = html::div().id("keep").try_attrs(["a", "b", "c"]).unwrap_err();
    assert_eq!(err.to_string(), "expected an even number of key/value strings, got 3");

    let el = html::div().id("keep");
    let el = el.clone().try_attrs(["a", "b"]).unwrap_or(el);
    assert_eq!(el.render(), r#"<div id="keep" a="b"></div>"#);
}

#[test]
#[should_panic(expected = "got 1")]
fn odd_style_pairs_panic() {
    let _ = html::div().style_pairs(["color"]);
}
