use std::fmt::{self, Display, Write};

/// A duplicate-free token list joined by a single delimiter, such as `class`.
#[derive(Debug, Clone, PartialEq)]
pub struct DelimitedBuilder<T> {
    delimiter: &'static str,
    tokens: Vec<T>,
}

impl<T: PartialEq + Display> DelimitedBuilder<T> {
    pub fn new(delimiter: &'static str) -> Self {
        Self {
            delimiter,
            tokens: Vec::new(),
        }
    }

    /// A builder joined by a single space.
    pub fn spaced() -> Self {
        Self::new(" ")
    }

    /// A builder joined by a comma.
    pub fn comma() -> Self {
        Self::new(",")
    }

    pub fn delimiter(&self) -> &'static str {
        self.delimiter
    }

    /// Append every token that is not already present, keeping first-seen order.
    pub fn add(&mut self, tokens: impl IntoIterator<Item = T>) -> &mut Self {
        for token in tokens {
            if !self.tokens.contains(&token) {
                self.tokens.push(token);
            }
        }
        self
    }

    /// Drop every given token that is present.
    pub fn remove(&mut self, tokens: impl IntoIterator<Item = T>) -> &mut Self {
        for token in tokens {
            self.tokens.retain(|existing| existing != &token);
        }
        self
    }

    pub fn contains(&self, token: &T) -> bool {
        self.tokens.contains(token)
    }

    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // writing into a String can't fail
        let _ = self.write_to(&mut out);
        out
    }

    pub fn write_to(&self, buf: &mut impl Write) -> fmt::Result {
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx > 0 {
                buf.write_str(self.delimiter)?;
            }
            write!(buf, "{token}")?;
        }
        Ok(())
    }
}

impl DelimitedBuilder<String> {
    /// Like [`DelimitedBuilder::add`], but each string may carry several tokens.
    ///
    /// `"a b"` adds `a` and `b` to a spaced list. Empty pieces are dropped.
    pub fn add_split(&mut self, values: impl IntoIterator<Item = String>) -> &mut Self {
        let tokens: Vec<String> = values
            .into_iter()
            .flat_map(|value| split_tokens(&value, self.delimiter))
            .collect();
        self.add(tokens)
    }

    /// Like [`DelimitedBuilder::remove`], splitting each string the same way as `add_split`.
    pub fn remove_split(&mut self, values: impl IntoIterator<Item = String>) -> &mut Self {
        let tokens: Vec<String> = values
            .into_iter()
            .flat_map(|value| split_tokens(&value, self.delimiter))
            .collect();
        self.remove(tokens)
    }
}

fn split_tokens(value: &str, delimiter: &str) -> Vec<String> {
    if delimiter.trim().is_empty() {
        return value.split_whitespace().map(str::to_string).collect();
    }
    value
        .split(delimiter)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

impl<T: PartialEq + Display> Display for DelimitedBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_not_re_added() {
        let mut classes = DelimitedBuilder::spaced();
        classes.add(["a", "b"]).add(["a"]);
        assert_eq!(classes.render(), "a b");

        classes.add(["c", "b", "c"]);
        assert_eq!(classes.render(), "a b c");
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut classes = DelimitedBuilder::spaced();
        classes.add(["one", "two", "three", "four"]);
        classes.remove(["two", "missing"]);
        assert_eq!(classes.render(), "one three four");
    }

    #[test]
    fn empty_renders_empty_string() {
        let mut classes = DelimitedBuilder::<&str>::spaced();
        assert_eq!(classes.render(), "");

        classes.add(["x"]).remove(["x"]);
        assert!(classes.is_empty());
        assert_eq!(classes.render(), "");
    }

    #[test]
    fn split_values_deduplicate_per_token() {
        let mut classes = DelimitedBuilder::spaced();
        classes.add_split(["a  b".to_string(), String::new()]);
        classes.add_split(["b a c".to_string()]);
        assert_eq!(classes.render(), "a b c");

        classes.remove_split(["a c".to_string()]);
        assert_eq!(classes.render(), "b");
    }

    #[test]
    fn split_comma_values_keep_inner_spaces() {
        let mut srcset = DelimitedBuilder::comma();
        srcset.add_split(["a.png 1x, b.png 2x".to_string(), "a.png 1x".to_string()]);
        assert_eq!(srcset.render(), "a.png 1x,b.png 2x");
    }

    #[test]
    fn custom_delimiter() {
        let mut list = DelimitedBuilder::comma();
        list.add([1, 2, 3]);
        assert_eq!(list.render(), "1,2,3");
    }
}
