//! Typed HTML, SVG and MathML builders with deterministic server-side rendering.
//!
//! ```rust
//! use ztml::prelude::*;
//!
//! let card = html::article()
//!     .class("card")
//!     .child(html::h2().text("Totals"))
//!     .child(html::p().text_f(format_args!("{} items", 3)));
//!
//! assert_eq!(
//!     card.render(),
//!     r#"<article class="card"><h2>Totals</h2><p>3 items</p></article>"#
//! );
//! ```

pub use ztml_core as core;

#[cfg(feature = "html")]
pub use ztml_html as elements;

#[cfg(feature = "ssr")]
pub use ztml_ssr as ssr;

pub mod prelude {
    pub use ztml_core::prelude::*;

    #[cfg(feature = "html")]
    pub use ztml_html::prelude::*;

    #[cfg(feature = "ssr")]
    pub use ztml_ssr::Renderer;
}
