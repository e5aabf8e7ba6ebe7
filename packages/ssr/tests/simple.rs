use pretty_assertions::assert_eq;
use ztml_html::prelude::*;

#[test]
fn simple() {
    assert_eq!(ztml_ssr::render(&html::div().text("hello!")), "<div>hello!</div>");
}

#[test]
fn lists() {
    let list = html::ul().children((0..5).map(|i| html::li().text_f(format_args!("item {i}"))));

    assert_eq!(
        ztml_ssr::render(&list),
        "<ul><li>item 0</li><li>item 1</li><li>item 2</li><li>item 3</li><li>item 4</li></ul>"
    );
}

#[test]
fn dynamic() {
    let dynamic = 123;
    let div = html::div()
        .text("Hello world 1 -->")
        .text_f(format_args!("{dynamic}"))
        .text("<-- Hello world 2");

    assert_eq!(
        ztml_ssr::render(&div),
        "<div>Hello world 1 --&#62;123&#60;-- Hello world 2</div>"
    );
}

#[test]
fn fragments() {
    let div = html::div().child(fragment([
        html::p().text("f1").into_node(),
        html::p().text("f2").into_node(),
        text("tail"),
    ]));

    assert_eq!(
        ztml_ssr::render(&div),
        "<div><p>f1</p><p>f2</p>tail</div>"
    );
}

#[test]
fn optional_children() {
    let signed_in = false;
    let nav = html::nav()
        .child(signed_in.then(|| html::a().href("/logout").text("Log out")))
        .child((!signed_in).then(|| html::a().href("/login").text("Log in")));

    assert_eq!(
        ztml_ssr::render(&nav),
        r#"<nav><a href="/login">Log in</a></nav>"#
    );
}

// token lists render after plain strings, whatever the call order
#[test]
fn void_elements() {
    let head = html::head()
        .child(html::meta().charset("utf-8"))
        .child(html::link().rel("stylesheet").href("/main.css"));

    assert_eq!(
        ztml_ssr::render(&head),
        r#"<head><meta charset="utf-8"/><link href="/main.css" rel="stylesheet"/></head>"#
    );
}

#[test]
fn full_document() {
    let page = html::html()
        .lang("en")
        .child(html::head().child(html::title().text("ztml")))
        .child(html::body().child(html::h1().text("Hello")));

    assert_eq!(
        ztml_ssr::render_document(&page),
        r#"<!DOCTYPE html><html lang="en"><head><title>ztml</title></head><body><h1>Hello</h1></body></html>"#
    );
}
