//! Fluent building on top of [`Element`].
//!
//! Every generated element type implements [`HasElement`]; the blanket impls below give
//! all of them the shared chaining API and the [`Render`] capability.

use crate::error::{into_pairs, Result};
use crate::{Element, IntoNode, Node, Render};
use std::fmt::{self, Write};

/// Access to the [`Element`] a typed builder wraps.
pub trait HasElement: Sized {
    fn element(&self) -> &Element;

    fn element_mut(&mut self) -> &mut Element;

    fn into_element(self) -> Element;
}

impl HasElement for Element {
    fn element(&self) -> &Element {
        self
    }

    fn element_mut(&mut self) -> &mut Element {
        self
    }

    fn into_element(self) -> Element {
        self
    }
}

impl<T: HasElement> Render for T {
    fn render_to(&self, buf: &mut impl Write) -> fmt::Result {
        self.element().write_to(buf)
    }
}

/// One or more tokens for a delimited attribute such as `class`.
///
/// A single string is one token: `.class("a")`, `.class(["a", "b"])`.
pub trait IntoTokens {
    fn into_tokens(self) -> Vec<String>;
}

impl IntoTokens for &str {
    fn into_tokens(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoTokens for String {
    fn into_tokens(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoTokens for &String {
    fn into_tokens(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<T: Into<String>, const N: usize> IntoTokens for [T; N] {
    fn into_tokens(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<String>> IntoTokens for Vec<T> {
    fn into_tokens(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<String> + Clone> IntoTokens for &[T] {
    fn into_tokens(self) -> Vec<String> {
        self.iter().cloned().map(Into::into).collect()
    }
}

/// The chaining API shared by every element type.
///
/// All methods consume the builder and hand it back so trees read top-down:
///
/// ```rust
/// use ztml_core::{Element, ElementBuilder, Render};
///
/// let html = Element::new("p", false)
///     .attr("id", "intro")
///     .text("1 < 2")
///     .render();
///
/// assert_eq!(html, r#"<p id="intro">1 &#60; 2</p>"#);
/// ```
pub trait ElementBuilder: HasElement {
    fn child(mut self, child: impl IntoNode) -> Self {
        self.element_mut().push_child(child.into_node());
        self
    }

    fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoNode,
    {
        for child in children {
            self.element_mut().push_child(child.into_node());
        }
        self
    }

    fn if_children<I>(self, condition: bool, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoNode,
    {
        if condition {
            self.children(children)
        } else {
            self
        }
    }

    /// Append `if_true` when `condition` holds and `if_false` otherwise.
    fn tern_children<A, B>(self, condition: bool, if_true: A, if_false: B) -> Self
    where
        A: IntoIterator,
        A::Item: IntoNode,
        B: IntoIterator,
        B::Item: IntoNode,
    {
        if condition {
            self.children(if_true)
        } else {
            self.children(if_false)
        }
    }

    fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    fn text_f(self, args: fmt::Arguments<'_>) -> Self {
        self.text(args.to_string())
    }

    fn if_text(self, condition: bool, text: impl Into<String>) -> Self {
        if condition {
            self.text(text)
        } else {
            self
        }
    }

    fn if_text_f(self, condition: bool, args: fmt::Arguments<'_>) -> Self {
        if condition {
            self.text_f(args)
        } else {
            self
        }
    }

    fn escaped(self, markup: impl Into<String>) -> Self {
        self.child(Node::Escaped(markup.into()))
    }

    fn escaped_f(self, args: fmt::Arguments<'_>) -> Self {
        self.escaped(args.to_string())
    }

    fn if_escaped(self, condition: bool, markup: impl Into<String>) -> Self {
        if condition {
            self.escaped(markup)
        } else {
            self
        }
    }

    fn if_escaped_f(self, condition: bool, args: fmt::Arguments<'_>) -> Self {
        if condition {
            self.escaped_f(args)
        } else {
            self
        }
    }

    /// Set an arbitrary string attribute.
    fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.element_mut().set_string_attribute(name, value);
        self
    }

    fn if_attr(self, condition: bool, name: impl Into<String>, value: impl Into<String>) -> Self {
        if condition {
            self.attr(name, value)
        } else {
            self
        }
    }

    fn attr_remove(mut self, name: &str) -> Self {
        self.element_mut().remove_string_attribute(name);
        self
    }

    /// Set string attributes from a flat `[name1, value1, name2, value2, ..]` list.
    ///
    /// # Panics
    ///
    /// An odd number of strings is a bug in the caller. Nothing is written and the call panics.
    #[track_caller]
    fn attrs(self, flat: impl IntoIterator<Item = impl Into<String>>) -> Self {
        match self.try_attrs(flat) {
            Ok(this) => this,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like [`ElementBuilder::attrs`] but reports an odd-length list instead of panicking.
    fn try_attrs(mut self, flat: impl IntoIterator<Item = impl Into<String>>) -> Result<Self> {
        let pairs = into_pairs(flat.into_iter().map(Into::into).collect())?;
        for (name, value) in pairs {
            self.element_mut().set_string_attribute(name, value);
        }
        Ok(self)
    }

    /// Set `data-<key>`.
    fn custom_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.element_mut().set_custom_data(key, value);
        self
    }

    fn custom_data_f(self, key: impl Into<String>, args: fmt::Arguments<'_>) -> Self {
        self.custom_data(key, args.to_string())
    }

    fn if_custom_data(
        self,
        condition: bool,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        if condition {
            self.custom_data(key, value)
        } else {
            self
        }
    }

    fn custom_data_remove(mut self, key: &str) -> Self {
        self.element_mut().remove_custom_data(key);
        self
    }
}

impl<T: HasElement> ElementBuilder for T {}
