//! Render ztml element trees to markup.
//!
//! Every element already knows how to write itself compactly through
//! [`ztml_core::Render`]. This crate adds the output options on top: indentation for
//! humans, a doctype prefix for whole documents, and `io::Write` sinks.

pub mod renderer;

use ztml_core::HasElement;

pub use crate::renderer::Renderer;

/// Failure while rendering into a byte sink.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to format markup")]
    Fmt(#[from] std::fmt::Error),

    #[error("failed to write markup: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience function to render an element tree with the default settings.
pub fn render(root: &impl HasElement) -> String {
    Renderer::new().render(root)
}

/// A convenience function to render an element tree with indentation.
pub fn render_pretty(root: &impl HasElement) -> String {
    Renderer::pretty().render(root)
}

/// Render a full document: `<!DOCTYPE html>` followed by `root`.
pub fn render_document(root: &impl HasElement) -> String {
    let renderer = Renderer {
        doctype: true,
        ..Renderer::default()
    };
    renderer.render(root)
}
