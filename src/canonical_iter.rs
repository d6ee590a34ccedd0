use crate::{closure::expand, segment::segments, tables::Composites};
use std::{fmt, iter::FusedIterator};

/// Knobs for how a [`CanonicalIterator`] computes its alternatives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Options {
    /// Keep combining class 0 code points fixed while reordering marks.
    ///
    /// This never changes the produced spellings, only how much work it
    /// takes to find them.
    pub skip_zeros: bool,
    /// Which composites may stand in for their decompositions.
    pub composites: Composites,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            skip_zeros: true,
            composites: Composites::All,
        }
    }
}

/// Enumerates every string canonically equivalent to a source string.
///
/// All the combinatorial work happens in [`set_source`](Self::set_source);
/// afterwards each call to [`next`](Self::next) only concatenates one
/// alternative per segment.
///
/// ```
/// use canonstr::CanonicalIterator;
///
/// let mut it = CanonicalIterator::new("x\u{0307}\u{0327}");
/// assert_eq!(3, it.count());
/// let all = it.iter().collect::<Vec<_>>();
/// assert_eq!("x\u{0327}\u{0307}", all[0]);
/// assert!(all.contains(&"\u{1E8B}\u{0327}".to_string()));
/// ```
#[derive(Clone)]
pub struct CanonicalIterator {
    source: String,
    options: Options,
    alternatives: Vec<Vec<String>>,
    current: Vec<usize>,
    done: bool,
}

impl CanonicalIterator {
    /// Creates an iterator over the spellings equivalent to `source`.
    pub fn new(source: &str) -> Self {
        Self::with_options(source, Options::default())
    }

    /// Creates an iterator over the spellings equivalent to `source`, using `options`.
    pub fn with_options(source: &str, options: Options) -> Self {
        let mut it = CanonicalIterator {
            source: String::new(),
            options,
            alternatives: Vec::new(),
            current: Vec::new(),
            done: false,
        };
        it.set_source(source);
        it
    }

    /// Replaces the source string and recomputes every segment's alternatives.
    pub fn set_source(&mut self, source: &str) {
        let options = self.options;
        self.alternatives = segments(source)
            .iter()
            .map(|segment| expand(segment, options))
            .collect();
        self.source = source.to_owned();
        self.current = vec![0; self.alternatives.len()];
        self.done = false;

        tracing::debug!(
            segments = self.alternatives.len(),
            combinations = self.count(),
            "canonical iterator source set"
        );
    }

    /// Returns the source string as it was given.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the options alternatives are computed with.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Returns the next equivalent string, or `None` once every combination
    /// has been produced.
    ///
    /// The first string produced is always the canonical decomposition of
    /// the source. Further calls keep returning `None` until
    /// [`reset`](Self::reset) or [`set_source`](Self::set_source).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let result = self
            .alternatives
            .iter()
            .zip(&self.current)
            .map(|(alternatives, &idx)| alternatives[idx].as_str())
            .collect::<String>();

        if !self.advance() {
            self.done = true;
        }
        Some(result)
    }

    /// Steps the odometer, last segment fastest. Returns `false` once every
    /// digit has wrapped around.
    fn advance(&mut self) -> bool {
        for k in (0..self.current.len()).rev() {
            self.current[k] += 1;
            if self.current[k] < self.alternatives[k].len() {
                return true;
            }
            self.current[k] = 0;
        }
        false
    }

    /// Rewinds to the first combination without recomputing anything.
    pub fn reset(&mut self) {
        self.current.fill(0);
        self.done = false;
    }

    /// Returns how many strings a full pass produces, saturating at `usize::MAX`.
    pub fn count(&self) -> usize {
        self.alternatives
            .iter()
            .fold(1usize, |count, alternatives| {
                count.saturating_mul(alternatives.len())
            })
    }

    /// Returns the alternatives of each segment, in text order.
    ///
    /// The first alternative of a segment is its canonical decomposition.
    pub fn segments(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.alternatives.iter().map(Vec::as_slice)
    }

    /// Returns a standard iterator that drives this one.
    pub fn iter(&mut self) -> Iter<'_> {
        Iter { inner: self }
    }

    fn remaining(&self) -> Option<usize> {
        if self.done {
            return Some(0);
        }
        let mut consumed = 0usize;
        for (alternatives, &idx) in self.alternatives.iter().zip(&self.current) {
            consumed = consumed
                .checked_mul(alternatives.len())?
                .checked_add(idx)?;
        }
        let count = self.count();
        if count == usize::MAX {
            return None;
        }
        Some(count - consumed)
    }
}

impl fmt::Debug for CanonicalIterator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanonicalIterator")
            .field("source", &self.source)
            .field("options", &self.options)
            .field("segments", &self.alternatives.len())
            .field("current", &self.current)
            .field("done", &self.done)
            .finish()
    }
}

/// A standard [`Iterator`] over the remaining strings of a [`CanonicalIterator`].
#[derive(Debug)]
pub struct Iter<'it> {
    inner: &'it mut CanonicalIterator,
}

impl<'it> Iterator for Iter<'it> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.inner.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (0, None),
        }
    }
}

impl<'it> FusedIterator for Iter<'it> {}
