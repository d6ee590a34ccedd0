use crate::{
    permute::permute_keyed,
    tables::{
        canonical_decomposition, combining_class, for_each_composite, max_decomposition_len,
        CharVec, Composites,
    },
    Options,
};
use std::collections::{HashSet, VecDeque};
use unicode_normalization::UnicodeNormalization;

/// Closed set of spellings of one segment, kept in discovery order.
struct Closure {
    seen: HashSet<CharVec>,
    found: Vec<CharVec>,
    pending: VecDeque<CharVec>,
}

impl Closure {
    fn new() -> Self {
        Closure {
            seen: HashSet::new(),
            found: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    fn record(&mut self, spelling: CharVec) {
        if self.seen.insert(spelling.clone()) {
            self.found.push(spelling.clone());
            self.pending.push_back(spelling);
        }
    }

    fn record_replaced(&mut self, spelling: &[char], at: usize, len: usize, with: &[char]) {
        let mut replaced = CharVec::with_capacity(spelling.len() - len + with.len());
        replaced.extend_from_slice(&spelling[..at]);
        replaced.extend_from_slice(with);
        replaced.extend_from_slice(&spelling[at + len..]);
        self.record(replaced);
    }

    fn recompose(&mut self, spelling: &[char], mode: Composites) {
        let max_len = max_decomposition_len();
        for start in 0..spelling.len() {
            let longest = max_len.min(spelling.len() - start);
            for len in 1..=longest {
                let mut composites = CharVec::new();
                for_each_composite(&spelling[start..start + len], mode, |ch| composites.push(ch));
                for composite in composites {
                    self.record_replaced(spelling, start, len, &[composite]);
                }
            }
        }
    }

    fn decompose(&mut self, spelling: &[char]) {
        for (i, &ch) in spelling.iter().enumerate() {
            if let Some(decomposition) = canonical_decomposition(ch) {
                self.record_replaced(spelling, i, 1, &decomposition);
            }
        }
    }
}

/// Computes every spelling canonically equivalent to `segment`.
///
/// `segment` must be canonically decomposed and ordered. The first entry of
/// the result is always `segment` itself.
pub(crate) fn expand(segment: &[char], options: Options) -> Vec<String> {
    let mut closure = Closure::new();
    closure.record(segment.iter().copied().collect());

    // Every reordering that still decomposes to `segment` is a spelling of
    // its own; the others are dropped before they can seed anything. Marks
    // of equal class never pass one another, so only class orders are tried.
    let is_anchor = |ch: char| options.skip_zeros && combining_class(ch) == 0;
    let class = |ch: char| u32::from(combining_class(ch));
    for ordering in permute_keyed(segment, is_anchor, class) {
        if ordering.iter().copied().nfd().eq(segment.iter().copied()) {
            closure.record(ordering);
        }
    }

    while let Some(spelling) = closure.pending.pop_front() {
        closure.recompose(&spelling, options.composites);
        closure.decompose(&spelling);
    }

    tracing::trace!(
        segment = %segment.iter().collect::<String>().escape_unicode(),
        alternatives = closure.found.len(),
        "expanded segment"
    );

    closure
        .found
        .into_iter()
        .map(|spelling| spelling.into_iter().collect())
        .collect()
}
