use crate::render::write_escaped;
use crate::{Element, HasElement, Render};
use std::fmt::{self, Write};

/// A child in the element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A nested element.
    Element(Element),

    /// Plain text, escaped when rendered.
    Text(String),

    /// Markup that is written out byte for byte. Sanitizing it is the caller's job.
    Escaped(String),

    /// A run of nodes rendered in order with no wrapping tag.
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn escaped(markup: impl Into<String>) -> Self {
        Node::Escaped(markup.into())
    }

    pub fn write_to(&self, buf: &mut impl Write) -> fmt::Result {
        match self {
            Node::Element(el) => el.write_to(buf),
            Node::Text(text) => write_escaped(buf, text),
            Node::Escaped(markup) => buf.write_str(markup),
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.write_to(buf)?;
                }
                Ok(())
            }
        }
    }
}

impl Render for Node {
    fn render_to(&self, buf: &mut impl Write) -> fmt::Result {
        self.write_to(buf)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Plain text that is escaped on render.
pub fn text(text: impl Into<String>) -> Node {
    Node::text(text)
}

/// Pre-escaped markup written verbatim.
pub fn escaped(markup: impl Into<String>) -> Node {
    Node::escaped(markup)
}

/// Group several children without a wrapping element.
pub fn fragment<I>(children: I) -> Node
where
    I: IntoIterator,
    I::Item: IntoNode,
{
    Node::Fragment(children.into_iter().map(IntoNode::into_node).collect())
}

/// Conversion into a child [`Node`].
///
/// Strings become text nodes, every element type becomes an element node and `None`
/// becomes an empty fragment.
pub trait IntoNode {
    fn into_node(self) -> Node;
}

impl IntoNode for Node {
    fn into_node(self) -> Node {
        self
    }
}

impl<T: HasElement> IntoNode for T {
    fn into_node(self) -> Node {
        Node::Element(self.into_element())
    }
}

impl IntoNode for &str {
    fn into_node(self) -> Node {
        Node::Text(self.to_string())
    }
}

impl IntoNode for String {
    fn into_node(self) -> Node {
        Node::Text(self)
    }
}

impl IntoNode for &String {
    fn into_node(self) -> Node {
        Node::Text(self.clone())
    }
}

impl<T: IntoNode> IntoNode for Option<T> {
    fn into_node(self) -> Node {
        match self {
            Some(node) => node.into_node(),
            None => Node::Fragment(Vec::new()),
        }
    }
}

impl IntoNode for Vec<Node> {
    fn into_node(self) -> Node {
        Node::Fragment(self)
    }
}
