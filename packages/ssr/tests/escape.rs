use pretty_assertions::assert_eq;
use ztml_html::prelude::*;

#[test]
fn escape_attribute_values() {
    let input = html::input().attr("disabled", "\"><div>");

    assert_eq!(
        ztml_ssr::render(&input),
        "<input disabled=\"&#34;&#62;&#60;div&#62;\"/>"
    );
}

#[test]
fn escape_typed_attribute_values() {
    let link = html::a().href("/search?q=a&b").title("it's \"quoted\"");

    assert_eq!(
        ztml_ssr::render(&link),
        "<a href=\"/search?q=a&#38;b\" title=\"it&#39;s &#34;quoted&#34;\"></a>"
    );
}

#[test]
fn escape_text() {
    let div = html::div().text("</diiiiiiiiv>");

    assert_eq!(
        ztml_ssr::render(&div),
        "<div>&#60;/diiiiiiiiv&#62;</div>"
    );
}

#[test]
fn escaped_markup_is_written_verbatim() {
    let div = html::div().escaped("<b>bold</b> & <i>italic</i>");

    assert_eq!(
        ztml_ssr::render(&div),
        "<div><b>bold</b> & <i>italic</i></div>"
    );
}

#[test]
fn escape_tokens_and_style_values() {
    let div = html::div()
        .class("a<b")
        .style("content", "\"x\"")
        .custom_data("note", "1 > 0");

    assert_eq!(
        ztml_ssr::render(&div),
        "<div class=\"a&#60;b\" style=\"content:&#34;x&#34;\" data-note=\"1 &#62; 0\"></div>"
    );
}
