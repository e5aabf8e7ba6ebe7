//! The element node every generated element type wraps.

use crate::render::write_escaped;
use crate::{DelimitedBuilder, KvBuilder, Node, OrderedMap};
use std::borrow::Cow;
use std::fmt::{self, Write};

/// One markup tag, its attributes and its children.
///
/// Attributes live in separate categories and always render in this order:
///
/// 1. string attributes
/// 2. integer attributes
/// 3. float attributes
/// 4. delimited attributes (`class="a b"`)
/// 5. key/value attributes (`style="a:1;b:2"`)
/// 6. custom data attributes (`data-key="value"`)
///
/// Within a category the order is the order in which names were first set.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: Cow<'static, str>,
    self_closing: bool,
    string_attributes: OrderedMap<String, String>,
    int_attributes: OrderedMap<String, i64>,
    float_attributes: OrderedMap<String, f64>,
    delimited_strings: OrderedMap<String, DelimitedBuilder<String>>,
    kv_strings: OrderedMap<String, KvBuilder>,
    custom_data_attributes: OrderedMap<String, String>,
    descendants: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<Cow<'static, str>>, self_closing: bool) -> Self {
        Self {
            tag: tag.into(),
            self_closing,
            string_attributes: OrderedMap::new(),
            int_attributes: OrderedMap::new(),
            float_attributes: OrderedMap::new(),
            delimited_strings: OrderedMap::new(),
            kv_strings: OrderedMap::new(),
            custom_data_attributes: OrderedMap::new(),
            descendants: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    pub fn descendants(&self) -> &[Node] {
        &self.descendants
    }

    /// Append a child. Self-closing elements keep it but never render it.
    pub fn push_child(&mut self, child: Node) {
        if self.self_closing {
            tracing::warn!(
                tag = %self.tag,
                "child appended to a self-closing element will not be rendered"
            );
        }
        self.descendants.push(child);
    }

    pub fn set_string_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.string_attributes.set(name.into(), value.into());
    }

    pub fn remove_string_attribute(&mut self, name: &str) {
        self.string_attributes.delete(name);
    }

    pub fn string_attribute(&self, name: &str) -> Option<&str> {
        self.string_attributes.get(name).map(String::as_str)
    }

    pub fn set_int_attribute(&mut self, name: impl Into<String>, value: i64) {
        self.int_attributes.set(name.into(), value);
    }

    pub fn remove_int_attribute(&mut self, name: &str) {
        self.int_attributes.delete(name);
    }

    pub fn int_attribute(&self, name: &str) -> Option<i64> {
        self.int_attributes.get(name).copied()
    }

    /// Set a float attribute, rendered with `Display` (`100.0` as `100`).
    ///
    /// Values must be finite: `NaN` and the infinities have no markup form. Very large
    /// magnitudes are written out in full, without an exponent.
    pub fn set_float_attribute(&mut self, name: impl Into<String>, value: f64) {
        debug_assert!(value.is_finite(), "float attribute must be finite, got {value}");
        self.float_attributes.set(name.into(), value);
    }

    pub fn remove_float_attribute(&mut self, name: &str) {
        self.float_attributes.delete(name);
    }

    pub fn float_attribute(&self, name: &str) -> Option<f64> {
        self.float_attributes.get(name).copied()
    }

    /// Set a `data-<key>` attribute. The `data-` prefix is added at render time.
    pub fn set_custom_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom_data_attributes.set(key.into(), value.into());
    }

    pub fn remove_custom_data(&mut self, key: &str) {
        self.custom_data_attributes.delete(key);
    }

    pub fn custom_data_attribute(&self, key: &str) -> Option<&str> {
        self.custom_data_attributes.get(key).map(String::as_str)
    }

    /// The token list behind `name`, created with `delimiter` on first use.
    ///
    /// An existing builder keeps the delimiter it was created with.
    pub fn delimited_mut(
        &mut self,
        name: impl Into<String>,
        delimiter: &'static str,
    ) -> &mut DelimitedBuilder<String> {
        self.delimited_strings
            .get_or_insert_with(name.into(), || DelimitedBuilder::new(delimiter))
    }

    pub fn delimited(&self, name: &str) -> Option<&DelimitedBuilder<String>> {
        self.delimited_strings.get(name)
    }

    pub fn remove_delimited(&mut self, name: &str) {
        self.delimited_strings.delete(name);
    }

    /// The key/value list behind `name`, created with `:` and `;` on first use.
    pub fn kv_mut(&mut self, name: impl Into<String>) -> &mut KvBuilder {
        self.kv_strings
            .get_or_insert_with(name.into(), KvBuilder::style)
    }

    pub fn kv(&self, name: &str) -> Option<&KvBuilder> {
        self.kv_strings.get(name)
    }

    pub fn remove_kv(&mut self, name: &str) {
        self.kv_strings.delete(name);
    }

    /// Write ` name="value"` for every attribute, in category order.
    pub fn write_attributes(&self, buf: &mut impl Write) -> fmt::Result {
        for (name, value) in &self.string_attributes {
            write!(buf, " {name}=\"")?;
            write_escaped(buf, value)?;
            buf.write_char('"')?;
        }

        for (name, value) in &self.int_attributes {
            write!(buf, " {name}=\"{value}\"")?;
        }

        for (name, value) in &self.float_attributes {
            write!(buf, " {name}=\"{value}\"")?;
        }

        // lists that render to nothing are left out entirely
        for (name, tokens) in &self.delimited_strings {
            let value = tokens.render();
            if value.is_empty() {
                continue;
            }
            write!(buf, " {name}=\"")?;
            write_escaped(buf, &value)?;
            buf.write_char('"')?;
        }

        for (name, entries) in &self.kv_strings {
            let value = entries.render();
            if value.is_empty() {
                continue;
            }
            write!(buf, " {name}=\"")?;
            write_escaped(buf, &value)?;
            buf.write_char('"')?;
        }

        for (key, value) in &self.custom_data_attributes {
            write!(buf, " data-{key}=\"")?;
            write_escaped(buf, value)?;
            buf.write_char('"')?;
        }

        Ok(())
    }

    /// Write `<tag attrs>` or, for self-closing elements, `<tag attrs/>`.
    pub fn write_open_tag(&self, buf: &mut impl Write) -> fmt::Result {
        write!(buf, "<{}", self.tag)?;
        self.write_attributes(buf)?;
        if self.self_closing {
            buf.write_str("/>")
        } else {
            buf.write_char('>')
        }
    }

    /// Write `</tag>`. Self-closing elements have nothing to close.
    pub fn write_close_tag(&self, buf: &mut impl Write) -> fmt::Result {
        if self.self_closing {
            return Ok(());
        }
        write!(buf, "</{}>", self.tag)
    }

    /// Depth-first, pre-order serialization of this element and its children.
    pub fn write_to(&self, buf: &mut impl Write) -> fmt::Result {
        self.write_open_tag(buf)?;
        if self.self_closing {
            return Ok(());
        }
        for child in &self.descendants {
            child.write_to(buf)?;
        }
        self.write_close_tag(buf)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Render;
    use pretty_assertions::assert_eq;

    #[test]
    fn categories_render_in_fixed_order() {
        let mut el = Element::new("div", false);
        el.set_custom_data("x", "1");
        el.kv_mut("style").add("color", "red");
        el.delimited_mut("class", " ").add(["a".to_string()]);
        el.set_float_attribute("opacity", 0.5);
        el.set_int_attribute("tabindex", 3);
        el.set_string_attribute("id", "main");

        assert_eq!(
            el.render(),
            r#"<div id="main" tabindex="3" opacity="0.5" class="a" style="color:red" data-x="1"></div>"#
        );
    }

    #[test]
    fn empty_lists_are_omitted() {
        let mut el = Element::new("span", false);
        el.delimited_mut("class", " ");
        el.kv_mut("style").add("a", "b").remove("a");

        assert_eq!(el.render(), "<span></span>");
    }

    #[test]
    fn lists_rendering_to_nothing_are_omitted() {
        let mut el = Element::new("span", false);
        el.delimited_mut("class", " ").add([String::new()]);
        el.kv_mut("style");

        assert_eq!(el.render(), "<span></span>");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "float attribute must be finite")]
    fn non_finite_floats_are_rejected() {
        Element::new("rect", false).set_float_attribute("opacity", f64::NAN);
    }

    #[test]
    fn self_closing_ignores_children() {
        let mut el = Element::new("br", true);
        el.set_string_attribute("id", "x");
        el.push_child(Node::text("dropped"));

        assert_eq!(el.descendants().len(), 1);
        assert_eq!(el.render(), r#"<br id="x"/>"#);
    }

    #[test]
    fn numbers_use_plain_decimal_text() {
        let mut el = Element::new("rect", false);
        el.set_int_attribute("rx", -4);
        el.set_float_attribute("width", 100.0);
        el.set_float_attribute("opacity", 0.25);

        assert_eq!(
            el.render(),
            r#"<rect rx="-4" width="100" opacity="0.25"></rect>"#
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut el = Element::new("input", true);
        el.set_string_attribute("value", "\"><b>&");

        assert_eq!(
            el.render(),
            r#"<input value="&#34;&#62;&#60;b&#62;&#38;"/>"#
        );
    }

    #[test]
    fn remove_then_reset_moves_to_end() {
        let mut el = Element::new("a", false);
        el.set_string_attribute("href", "/");
        el.set_string_attribute("id", "home");
        el.remove_string_attribute("href");
        el.set_string_attribute("href", "/home");

        assert_eq!(el.string_attribute("href"), Some("/home"));
        assert_eq!(el.render(), r#"<a id="home" href="/home"></a>"#);
    }
}
