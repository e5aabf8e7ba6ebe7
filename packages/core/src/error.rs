/// Errors raised while building an element tree.
///
/// The panicking builder methods (`attrs`, `style_pairs`, ...) format these same
/// errors as their panic message. The `try_*` variants hand them back instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("expected an even number of key/value strings, got {count}")]
    OddPairs { count: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Split a flat `[k1, v1, k2, v2, ..]` list into pairs, refusing odd lengths before
/// anything is produced.
pub(crate) fn into_pairs(flat: Vec<String>) -> Result<Vec<(String, String)>> {
    if flat.len() % 2 != 0 {
        return Err(Error::OddPairs { count: flat.len() });
    }

    let mut pairs = Vec::with_capacity(flat.len() / 2);
    let mut iter = flat.into_iter();
    while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
        pairs.push((key, value));
    }
    Ok(pairs)
}
