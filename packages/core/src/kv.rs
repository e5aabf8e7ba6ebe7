use crate::error::{into_pairs, Result};
use crate::OrderedMap;
use std::fmt::{self, Display, Write};

/// Ordered key/value pairs rendered with two delimiters, such as a `style` declaration list.
///
/// Rendering never emits a trailing entry delimiter: `width:1px;height:2px`.
#[derive(Debug, Clone, PartialEq)]
pub struct KvBuilder {
    pair_delimiter: &'static str,
    entry_delimiter: &'static str,
    entries: OrderedMap<String, String>,
}

impl Default for KvBuilder {
    fn default() -> Self {
        Self::style()
    }
}

impl KvBuilder {
    pub fn new(pair_delimiter: &'static str, entry_delimiter: &'static str) -> Self {
        Self {
            pair_delimiter,
            entry_delimiter,
            entries: OrderedMap::new(),
        }
    }

    /// `key:value;key:value`
    pub fn style() -> Self {
        Self::new(":", ";")
    }

    /// Set `key`, keeping its position if it already exists.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.set(key.into(), value.into());
        self
    }

    pub fn extend<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.add(key, value);
        }
        self
    }

    /// Add a flat `[k1, v1, k2, v2, ..]` list.
    ///
    /// Odd lengths are rejected before any entry is written.
    pub fn try_add_pairs(
        &mut self,
        flat: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<&mut Self> {
        let pairs = into_pairs(flat.into_iter().map(Into::into).collect())?;
        Ok(self.extend(pairs))
    }

    /// Like [`KvBuilder::try_add_pairs`] but panics on an odd-length list.
    #[track_caller]
    pub fn add_pairs(&mut self, flat: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
        match self.try_add_pairs(flat) {
            Ok(this) => this,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.entries.delete(key);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = self.write_to(&mut out);
        out
    }

    pub fn write_to(&self, buf: &mut impl Write) -> fmt::Result {
        for (idx, (key, value)) in self.entries.iter().enumerate() {
            if idx > 0 {
                buf.write_str(self.entry_delimiter)?;
            }
            buf.write_str(key)?;
            buf.write_str(self.pair_delimiter)?;
            buf.write_str(value)?;
        }
        Ok(())
    }
}

impl Display for KvBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn re_adding_a_key_keeps_its_position() {
        let mut style = KvBuilder::style();
        style.add("width", "1px").add("height", "2px").add("width", "3px");
        assert_eq!(style.render(), "width:3px;height:2px");
    }

    #[test]
    fn no_trailing_delimiter() {
        let mut style = KvBuilder::style();
        style.add("color", "red");
        assert_eq!(style.render(), "color:red");
        assert!(!style.render().ends_with(';'));
    }

    #[test]
    fn remove_by_key() {
        let mut style = KvBuilder::style();
        style.add("a", "1").add("b", "2").add("c", "3");
        style.remove("b").remove("nope");
        assert_eq!(style.render(), "a:1;c:3");
        assert_eq!(style.get("b"), None);
    }

    #[test]
    fn odd_pairs_write_nothing() {
        let mut style = KvBuilder::style();
        let err = style.try_add_pairs(["a", "1", "b"]).unwrap_err();
        assert_eq!(err, Error::OddPairs { count: 3 });
        assert!(style.is_empty());

        style.add_pairs(["a", "1", "b", "2"]);
        assert_eq!(style.render(), "a:1;b:2");
    }

    #[test]
    #[should_panic(expected = "got 1")]
    fn add_pairs_panics_on_odd_count() {
        KvBuilder::style().add_pairs(["lonely"]);
    }

    #[test]
    fn other_delimiters() {
        let mut params = KvBuilder::new("=", "&");
        params.extend([("q", "rust"), ("page", "2")]);
        assert_eq!(params.to_string(), "q=rust&page=2");
    }
}
