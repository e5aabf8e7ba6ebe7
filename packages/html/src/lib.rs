//! # ztml namespace for HTML, SVG and MathML
//!
//! One wrapper type per element, each with strongly typed setters for the attributes that
//! element accepts. Every setter is a thin projection onto the untyped [`ztml_core::Element`]
//! underneath, so rendering, ordering and escaping behave identically for all of them.
//!
//! ```rust
//! use ztml_html::prelude::*;
//!
//! let logo = svg::svg()
//!     .width("100")
//!     .height("100")
//!     .id("root")
//!     .child(svg::image().href("a.png"));
//!
//! assert_eq!(
//!     logo.render(),
//!     r#"<svg width="100" height="100" id="root"><image href="a.png"></image></svg>"#
//! );
//! ```
//!
//! Each setter comes in a family: `id`, `if_id` (conditional), `id_f` (from
//! `format_args!`), `if_id_f` and `id_remove`. Token lists such as `class` deduplicate,
//! and `style` keeps one entry per property.

#[macro_use]
mod macros;

pub mod choices;
mod global_attributes;
pub mod html;
pub mod mathml;
pub mod svg;

pub use global_attributes::{GlobalAttributes, ZAttributes};
pub use mathml::MathmlAttributes;
pub use svg::SvgAttributes;

/// A string that isn't one of the legal values of a choice enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{value}` is not a valid {choice}")]
pub struct UnknownChoice {
    pub choice: &'static str,
    pub value: String,
}

pub mod prelude {
    pub use crate::choices::*;
    pub use crate::{html, mathml, svg};
    pub use crate::{GlobalAttributes, MathmlAttributes, SvgAttributes, ZAttributes};
    pub use ztml_core::prelude::*;
}
