//! The capability shared by everything that can be serialized to markup.

use std::fmt::{self, Write};

/// Anything that can write itself out as markup.
///
/// Rendering into a `String` can't fail; the `fmt::Result` only exists so the same code
/// can write straight into a [`fmt::Formatter`] or any other sink.
pub trait Render {
    fn render_to(&self, buf: &mut impl Write) -> fmt::Result;

    fn render(&self) -> String {
        let mut out = String::new();
        // a String sink never errors
        let _ = self.render_to(&mut out);
        out
    }
}

/// Write `value` with `&`, `<`, `>`, `"` and `'` replaced by entities.
pub fn write_escaped(buf: &mut impl Write, value: &str) -> fmt::Result {
    write!(buf, "{}", askama_escape::escape(value, askama_escape::Html))
}

/// Escape `value` into a new string.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let _ = write_escaped(&mut out, value);
    out
}
