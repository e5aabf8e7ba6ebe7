use crate::RenderError;
use std::fmt::Write;
use ztml_core::{write_escaped, Element, HasElement, Node, Render};

/// Renders element trees to strings, formatters or byte sinks.
///
/// The default configuration produces the canonical compact markup, byte for byte the
/// same as [`Render::render`].
#[derive(Debug, Clone)]
pub struct Renderer {
    /// should we put every element on its own line, indented by depth?
    pub pretty: bool,

    /// Spaces per nesting level when `pretty` is set
    pub indent: usize,

    /// Prefix the output with `<!DOCTYPE html>`
    pub doctype: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
            doctype: false,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer that indents nested elements.
    pub fn pretty() -> Self {
        let renderer = Self {
            pretty: true,
            ..Self::default()
        };
        tracing::debug!(indent = renderer.indent, "pretty renderer configured");
        renderer
    }

    pub fn render(&self, root: &impl HasElement) -> String {
        let mut buf = String::new();
        // a String sink never errors
        let _ = self.render_to(&mut buf, root);
        buf
    }

    pub fn render_to(&self, buf: &mut impl Write, root: &impl HasElement) -> std::fmt::Result {
        let root = root.element();
        tracing::trace!(tag = root.tag(), pretty = self.pretty, "rendering element tree");

        self.write_doctype(buf)?;
        if self.pretty {
            self.write_element_pretty(buf, root, 0)
        } else {
            root.render_to(buf)
        }
    }

    pub fn render_node(&self, node: &Node) -> String {
        let mut buf = String::new();
        let _ = self.render_node_to(&mut buf, node);
        buf
    }

    pub fn render_node_to(&self, buf: &mut impl Write, node: &Node) -> std::fmt::Result {
        self.write_doctype(buf)?;
        if self.pretty {
            self.write_node_pretty(buf, node, 0)
        } else {
            node.render_to(buf)
        }
    }

    /// Render into a byte sink such as a file or a socket.
    ///
    /// The markup is assembled in memory first so a failing sink never sees half a document.
    pub fn render_to_writer(
        &self,
        writer: &mut impl std::io::Write,
        root: &impl HasElement,
    ) -> Result<(), RenderError> {
        let mut buf = String::new();
        self.render_to(&mut buf, root)?;
        writer.write_all(buf.as_bytes())?;
        tracing::trace!(bytes = buf.len(), "markup written");
        Ok(())
    }

    fn write_doctype(&self, buf: &mut impl Write) -> std::fmt::Result {
        if !self.doctype {
            return Ok(());
        }
        buf.write_str("<!DOCTYPE html>")?;
        if self.pretty {
            buf.write_char('\n')?;
        }
        Ok(())
    }

    fn write_indent(&self, buf: &mut impl Write, depth: usize) -> std::fmt::Result {
        for _ in 0..depth * self.indent {
            buf.write_char(' ')?;
        }
        Ok(())
    }

    fn write_element_pretty(
        &self,
        buf: &mut impl Write,
        element: &Element,
        depth: usize,
    ) -> std::fmt::Result {
        self.write_indent(buf, depth)?;
        element.write_open_tag(buf)?;

        if element.is_self_closing() {
            return buf.write_char('\n');
        }

        let children = element.descendants();

        // text-only content stays on the same line as its tags
        if children.iter().all(is_inline) {
            for child in children {
                child.render_to(buf)?;
            }
            element.write_close_tag(buf)?;
            return buf.write_char('\n');
        }

        buf.write_char('\n')?;
        for child in children {
            self.write_node_pretty(buf, child, depth + 1)?;
        }
        self.write_indent(buf, depth)?;
        element.write_close_tag(buf)?;
        buf.write_char('\n')
    }

    fn write_node_pretty(&self, buf: &mut impl Write, node: &Node, depth: usize) -> std::fmt::Result {
        match node {
            Node::Element(element) => self.write_element_pretty(buf, element, depth),
            Node::Text(text) => {
                self.write_indent(buf, depth)?;
                write_escaped(buf, text)?;
                buf.write_char('\n')
            }
            Node::Escaped(markup) => {
                self.write_indent(buf, depth)?;
                buf.write_str(markup)?;
                buf.write_char('\n')
            }
            Node::Fragment(nodes) => {
                for node in nodes {
                    self.write_node_pretty(buf, node, depth)?;
                }
                Ok(())
            }
        }
    }
}

fn is_inline(node: &Node) -> bool {
    match node {
        Node::Text(_) | Node::Escaped(_) => true,
        Node::Element(_) => false,
        Node::Fragment(nodes) => nodes.iter().all(is_inline),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ztml_core::ElementBuilder;

    fn list() -> Element {
        Element::new("ul", false)
            .child(Element::new("li", false).text("one"))
            .child(Element::new("li", false).text("two"))
    }

    #[test]
    fn compact_matches_render() {
        let tree = list();
        assert_eq!(Renderer::new().render(&tree), tree.render());
    }

    #[test]
    fn pretty_indents_nested_elements() {
        let out = Renderer::pretty().render(&list());
        assert_eq!(out, "<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>\n");
    }

    #[test]
    fn pretty_honors_indent_width() {
        let renderer = Renderer {
            pretty: true,
            indent: 4,
            ..Renderer::default()
        };
        let out = renderer.render(&list());
        assert_eq!(out, "<ul>\n    <li>one</li>\n    <li>two</li>\n</ul>\n");
    }

    #[test]
    fn empty_and_void_elements_stay_on_one_line() {
        let tree = Element::new("div", false)
            .child(Element::new("br", true))
            .child(Element::new("span", false));
        let out = Renderer::pretty().render(&tree);
        assert_eq!(out, "<div>\n  <br/>\n  <span></span>\n</div>\n");
    }

    #[test]
    fn doctype_prefix() {
        let renderer = Renderer {
            doctype: true,
            ..Renderer::default()
        };
        let out = renderer.render(&Element::new("html", false));
        assert_eq!(out, "<!DOCTYPE html><html></html>");
    }
}
