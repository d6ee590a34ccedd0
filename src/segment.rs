use crate::tables::{decompose, is_safe_start, CharVec};

/// Splits the canonical decomposition of `text` into independent segments.
///
/// A new segment begins before every safe start code point after the first
/// one, so no decomposition mapping and no canonical reordering can reach
/// across a boundary. The segments concatenate back to `decompose(text)`.
pub(crate) fn segments(text: &str) -> Vec<CharVec> {
    let mut segments = Vec::new();
    let mut current = CharVec::new();
    for ch in decompose(text).chars() {
        if !current.is_empty() && is_safe_start(ch) {
            segments.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}
