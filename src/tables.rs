//! Unicode data the enumeration relies on.
//!
//! Per-code-point properties and the normalization forms come straight from
//! `unicode-normalization`. The reverse view of the decomposition mappings
//! (which code points decompose to a given sequence, and which code points
//! ever occur after the first position of a decomposition) is not provided by
//! that crate, so it is derived once by walking every scalar value.

use once_cell::sync::Lazy;
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};
use unicode_normalization::UnicodeNormalization;

/// A short run of code points, sized for a full canonical decomposition.
pub(crate) type CharVec = SmallVec<[char; 8]>;

/// Which composites may be substituted for their decompositions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Composites {
    /// Every code point with a canonical decomposition, including
    /// composition exclusions such as U+212B ANGSTROM SIGN. This yields the
    /// whole canonical equivalence class.
    #[default]
    All,
    /// Only primary composites, the ones canonical composition can produce.
    Primary,
}

struct Composite {
    ch: char,
    excluded: bool,
}

struct ClosureTable {
    composites: HashMap<CharVec, SmallVec<[Composite; 2]>>,
    non_initial: HashSet<char>,
    max_decomposition_len: usize,
}

static CLOSURE_TABLE: Lazy<ClosureTable> = Lazy::new(ClosureTable::build);

impl ClosureTable {
    fn build() -> Self {
        let mut composites: HashMap<CharVec, SmallVec<[Composite; 2]>> = HashMap::new();
        let mut non_initial = HashSet::new();
        let mut max_decomposition_len = 1;

        for ch in (0..=char::MAX as u32).filter_map(char::from_u32) {
            let decomposition = match canonical_decomposition(ch) {
                Some(decomposition) => decomposition,
                None => continue,
            };
            non_initial.extend(decomposition.iter().skip(1).copied());
            max_decomposition_len = max_decomposition_len.max(decomposition.len());
            composites.entry(decomposition).or_default().push(Composite {
                ch,
                excluded: is_composition_excluded(ch),
            });
        }

        tracing::debug!(
            decompositions = composites.len(),
            non_initial = non_initial.len(),
            max_decomposition_len,
            "built canonical closure table"
        );

        ClosureTable {
            composites,
            non_initial,
            max_decomposition_len,
        }
    }
}

/// Full canonical decomposition, canonically ordered.
pub fn decompose(text: &str) -> String {
    text.nfd().collect()
}

/// Canonical composition.
pub fn compose(text: &str) -> String {
    text.nfc().collect()
}

pub(crate) fn combining_class(ch: char) -> u8 {
    unicode_normalization::char::canonical_combining_class(ch)
}

/// The full canonical decomposition of `ch`, or `None` if it decomposes to itself.
pub(crate) fn canonical_decomposition(ch: char) -> Option<CharVec> {
    let mut decomposition = CharVec::new();
    unicode_normalization::char::decompose_canonical(ch, |c| decomposition.push(c));
    if let [single] = decomposition[..] {
        if single == ch {
            return None;
        }
    }
    Some(decomposition)
}

/// Returns whether `ch` has a canonical decomposition that canonical
/// composition never restores.
pub(crate) fn is_composition_excluded(ch: char) -> bool {
    canonical_decomposition(ch).is_some() && !std::iter::once(ch).nfc().eq(std::iter::once(ch))
}

/// Returns whether text can be split before `ch` without changing which
/// spellings are canonically equivalent on either side.
///
/// That holds when `ch` has combining class 0 and never appears after the
/// first position of any canonical decomposition.
pub fn is_safe_start(ch: char) -> bool {
    combining_class(ch) == 0 && !CLOSURE_TABLE.non_initial.contains(&ch)
}

/// Calls `f` with every code point whose full canonical decomposition is `window`.
pub(crate) fn for_each_composite<F>(window: &[char], mode: Composites, mut f: F)
where
    F: FnMut(char),
{
    if let Some(entries) = CLOSURE_TABLE.composites.get(window) {
        for composite in entries.iter() {
            if mode == Composites::All || !composite.excluded {
                f(composite.ch);
            }
        }
    }
}

pub(crate) fn max_decomposition_len() -> usize {
    CLOSURE_TABLE.max_decomposition_len
}
