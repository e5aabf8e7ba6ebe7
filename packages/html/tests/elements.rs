use pretty_assertions::assert_eq;
use ztml_html::prelude::*;

#[test]
fn svg_with_image() {
    let logo = svg::svg()
        .width("100")
        .height("100")
        .id("root")
        .child(svg::image().href("a.png"));

    assert_eq!(
        logo.render(),
        r#"<svg width="100" height="100" id="root"><image href="a.png"></image></svg>"#
    );
}

#[test]
fn svg_elements_are_never_self_closing() {
    assert!(!svg::SvgCircle::SELF_CLOSING);
    assert_eq!(svg::circle().r("4").render(), r#"<circle r="4"></circle>"#);
}

#[test]
fn html_void_elements() {
    for (el, expected) in [
        (html::br().into_element(), "<br/>"),
        (html::hr().into_element(), "<hr/>"),
        (html::img().src("a.png").into_element(), r#"<img src="a.png"/>"#),
        (html::input().into_element(), "<input/>"),
        (html::wbr().into_element(), "<wbr/>"),
    ] {
        assert!(el.is_self_closing());
        assert_eq!(el.render(), expected);
    }
}

#[test]
fn void_elements_drop_children() {
    let img = html::img().alt("logo").text("ignored");

    assert_eq!(img.element().descendants().len(), 1);
    assert_eq!(img.render(), r#"<img alt="logo"/>"#);
}

#[test]
fn mathml_class_deduplicates() {
    let ms = mathml::ms().class(["a", "b"]).class("a");
    assert_eq!(ms.render(), r#"<ms class="a b"></ms>"#);
}

#[test]
fn mathml_fraction() {
    let frac = mathml::math().display(MathDisplay::Block).child(
        mathml::mfrac()
            .child(mathml::mi().text("x"))
            .child(mathml::mn().text("2")),
    );

    assert_eq!(
        frac.render(),
        r#"<math display="block"><mfrac><mi>x</mi><mn>2</mn></mfrac></math>"#
    );
}

#[test]
fn tags_and_constructors_agree() {
    assert_eq!(html::HtmlDiv::TAG, "div");
    assert_eq!(svg::SvgClipPath::TAG, "clipPath");
    assert_eq!(svg::SvgFeGaussianBlur::TAG, "feGaussianBlur");
    assert_eq!(mathml::MathmlAnnotationXml::TAG, "annotation-xml");
    assert_eq!(svg::clip_path().render(), "<clipPath></clipPath>");
    assert_eq!(svg::r#use().href("#a").render(), r##"<use href="#a"></use>"##);
    assert_eq!(html::HtmlDiv::default(), html::div());
}

#[test]
fn display_matches_render() {
    let p = html::p().id("x").text("hi");
    assert_eq!(p.to_string(), p.render());
}

#[test]
fn typed_elements_convert_into_untyped() {
    let el: Element = html::section().id("s").into();
    assert_eq!(el.tag(), "section");
    assert_eq!(el.string_attribute("id"), Some("s"));
}

#[test]
fn nested_form() {
    let form = html::form()
        .action("/login")
        .method(FormMethod::Post)
        .child(
            html::label()
                .r#for("user")
                .text("User"),
        )
        .child(
            html::input()
                .id("user")
                .name("user")
                .r#type(InputType::Text)
                .required(true)
                .maxlength(32),
        )
        .child(html::button().r#type(ButtonType::Submit).text("Sign in"));

    assert_eq!(
        form.render(),
        concat!(
            r#"<form action="/login" method="post">"#,
            r#"<label for="user">User</label>"#,
            r#"<input id="user" name="user" type="text" required="true" maxlength="32"/>"#,
            r#"<button type="submit">Sign in</button>"#,
            "</form>"
        )
    );
}
