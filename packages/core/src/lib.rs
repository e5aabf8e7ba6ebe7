//! # ztml-core
//!
//! The attribute storage and rendering engine under every ztml element type.
//!
//! An [`Element`] keeps its attributes in insertion-ordered maps split by kind
//! (string, integer, float, delimited token lists, key/value lists and `data-*`
//! values) and its children as a list of [`Node`]s. Rendering walks the tree depth
//! first and always emits the attribute categories in the same order, so the same
//! tree produces byte-identical markup every time.
//!
//! Generated element types wrap an [`Element`] and implement [`HasElement`], which
//! gives them the [`ElementBuilder`] chaining methods and the [`Render`] capability.

mod builder;
mod delimited;
mod element;
mod error;
mod kv;
mod node;
mod ordered_map;
mod render;

pub use builder::{ElementBuilder, HasElement, IntoTokens};
pub use delimited::DelimitedBuilder;
pub use element::Element;
pub use error::{Error, Result};
pub use kv::KvBuilder;
pub use node::{escaped, fragment, text, IntoNode, Node};
pub use ordered_map::OrderedMap;
pub use render::{escape, write_escaped, Render};

pub mod prelude {
    pub use crate::{
        escaped, fragment, text, Element, ElementBuilder, HasElement, IntoNode, Node, Render,
    };
}
