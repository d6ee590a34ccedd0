use crate::tables::{combining_class, CharVec};
use smallvec::SmallVec;
use std::collections::BTreeSet;

/// Returns every distinct ordering of the code points in `source`.
///
/// With `skip_zeros`, code points of canonical combining class 0 stay where
/// they are and only the runs between them are permuted. Such code points
/// never reorder under canonical equivalence, so both modes agree on every
/// ordering that is canonically equivalent to `source`; the flag only cuts
/// down how many orderings get generated.
///
/// ```
/// let all = canonstr::permute("ABC", false);
/// assert_eq!(6, all.len());
/// assert!(all.contains("CBA"));
/// ```
pub fn permute(source: &str, skip_zeros: bool) -> BTreeSet<String> {
    permute_by(source, |ch| skip_zeros && combining_class(ch) == 0)
}

/// Returns every distinct ordering of `source` that keeps each code point
/// matching `is_anchor` in its original position.
pub fn permute_by<F>(source: &str, is_anchor: F) -> BTreeSet<String>
where
    F: Fn(char) -> bool,
{
    let chars = source.chars().collect::<CharVec>();
    permute_chars(&chars, is_anchor)
        .into_iter()
        .map(|perm| perm.into_iter().collect())
        .collect()
}

pub(crate) fn permute_chars<F>(source: &[char], is_anchor: F) -> BTreeSet<CharVec>
where
    F: Fn(char) -> bool,
{
    permute_keyed(source, is_anchor, u32::from)
}

/// Like [`permute_chars`], but orders the movable runs by `key` only: code
/// points sharing a key keep their relative order. Keying by combining class
/// yields exactly the reorderings canonical ordering can undo.
pub(crate) fn permute_keyed<F, K>(source: &[char], is_anchor: F, key: K) -> BTreeSet<CharVec>
where
    F: Fn(char) -> bool,
    K: Fn(char) -> u32,
{
    let mut results = BTreeSet::new();
    results.insert(CharVec::new());

    let mut rest = source;
    while !rest.is_empty() {
        let piece_len = if is_anchor(rest[0]) {
            1
        } else {
            rest.iter().take_while(|&&ch| !is_anchor(ch)).count()
        };
        let (piece, tail) = rest.split_at(piece_len);
        rest = tail;

        let keys = piece.iter().map(|&ch| key(ch)).collect::<KeyVec>();
        let orderings = permute_run(&keys)
            .iter()
            .map(|ordering| refill(piece, &keys, ordering))
            .collect::<Vec<_>>();
        results = results
            .iter()
            .flat_map(|prefix| {
                orderings.iter().map(move |ordering| {
                    let mut joined = prefix.clone();
                    joined.extend_from_slice(ordering);
                    joined
                })
            })
            .collect();
    }
    results
}

type KeyVec = SmallVec<[u32; 8]>;

/// Lays out `piece` following `ordering`, taking code points of equal key
/// in their original order.
fn refill(piece: &[char], keys: &[u32], ordering: &[u32]) -> CharVec {
    let mut taken = SmallVec::<[bool; 8]>::from_elem(false, piece.len());
    let mut out = CharVec::with_capacity(piece.len());
    for &k in ordering {
        if let Some(i) = (0..piece.len()).find(|&i| !taken[i] && keys[i] == k) {
            taken[i] = true;
            out.push(piece[i]);
        }
    }
    out
}

fn permute_run(run: &[u32]) -> BTreeSet<KeyVec> {
    let mut output = BTreeSet::new();
    if run.len() <= 1 {
        output.insert(run.iter().copied().collect());
        return output;
    }
    let mut tried = KeyVec::new();
    for (i, &k) in run.iter().enumerate() {
        if tried.contains(&k) {
            continue;
        }
        tried.push(k);
        let remainder = run[..i]
            .iter()
            .chain(&run[i + 1..])
            .copied()
            .collect::<KeyVec>();
        for sub in permute_run(&remainder) {
            let mut perm = KeyVec::with_capacity(run.len());
            perm.push(k);
            perm.extend_from_slice(&sub);
            output.insert(perm);
        }
    }
    output
}
