use canonstr::{compose, decompose, permute, CanonicalIterator, Composites, Options};
use std::collections::BTreeSet;

fn drained(it: &mut CanonicalIterator) -> Vec<String> {
    let mut all = Vec::new();
    while let Some(s) = it.next() {
        all.push(s);
    }
    all
}

fn sorted(all: Vec<String>) -> BTreeSet<String> {
    all.into_iter().collect()
}

fn expect_set(source: &str, options: Options, expected: &[&str]) {
    let mut it = CanonicalIterator::with_options(source, options);
    let all = drained(&mut it);
    assert_eq!(
        expected.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        sorted(all),
        "{}",
        source.escape_unicode()
    );
}

fn primary_composites() -> Options {
    Options {
        composites: Composites::Primary,
        ..Options::default()
    }
}

#[test]
fn test_permute_abc() {
    let expected = ["ABC", "ACB", "BAC", "BCA", "CAB", "CBA"]
        .iter()
        .map(|s| s.to_string())
        .collect::<BTreeSet<_>>();
    assert_eq!(expected, permute("ABC", false));
}

#[test]
fn test_caron_pair() {
    expect_set(
        "c\u{030C}z\u{030C}",
        Options::default(),
        &[
            "c\u{030C}z\u{030C}",
            "c\u{030C}\u{017E}",
            "\u{010D}z\u{030C}",
            "\u{010D}\u{017E}",
        ],
    );
}

#[test]
fn test_dot_above_and_cedilla() {
    expect_set(
        "x\u{0307}\u{0327}",
        Options::default(),
        &["x\u{0307}\u{0327}", "x\u{0327}\u{0307}", "\u{1E8B}\u{0327}"],
    );
}

#[test]
fn test_ring_and_dotted_cedilla() {
    let source = "\u{00C5}d\u{0307}\u{0327}";
    expect_set(
        source,
        Options::default(),
        &[
            "A\u{030A}d\u{0307}\u{0327}",
            "A\u{030A}d\u{0327}\u{0307}",
            "A\u{030A}\u{1E0B}\u{0327}",
            "A\u{030A}\u{1E11}\u{0307}",
            "\u{00C5}d\u{0307}\u{0327}",
            "\u{00C5}d\u{0327}\u{0307}",
            "\u{00C5}\u{1E0B}\u{0327}",
            "\u{00C5}\u{1E11}\u{0307}",
            "\u{212B}d\u{0307}\u{0327}",
            "\u{212B}d\u{0327}\u{0307}",
            "\u{212B}\u{1E0B}\u{0327}",
            "\u{212B}\u{1E11}\u{0307}",
        ],
    );
    // the angstrom sign is a composition exclusion
    assert_eq!(
        8,
        CanonicalIterator::with_options(source, primary_composites()).count()
    );
}

#[test]
fn test_excluded_spellings_by_default() {
    for source in [
        "\u{212B}",
        "\u{212B}d\u{0307}\u{0327}",
        "\u{0958}\u{0345}",
        "\u{0F73}\u{0345}",
        "\u{1F71}",
    ] {
        let mut it = CanonicalIterator::new(source);
        let set = sorted(drained(&mut it));
        assert!(set.contains(source), "{}", source.escape_unicode());
        assert!(set.contains(&compose(source)));
    }
}

#[test]
fn test_empty_source() {
    let mut it = CanonicalIterator::new("");
    assert_eq!(1, it.count());
    assert_eq!(Some(String::new()), it.next());
    assert_eq!(None, it.next());
}

#[test]
fn test_properties_hold() {
    for source in [
        "",
        "plain ascii",
        "\u{00C5}d\u{0307}\u{0327}",
        "\u{1F82}\u{0345} \u{1E69}\u{0323}",
        "\u{AC01}\u{0345}\u{AC00}",
        "\u{0344}\u{0F73}\u{0F75}",
        "Ça va\u{0301}\u{0323}?",
    ] {
        for options in [primary_composites(), Options::default()] {
            let mut it = CanonicalIterator::with_options(source, options);
            let count = it.count();
            let all = drained(&mut it);
            assert_eq!(count, all.len(), "{}", source.escape_unicode());
            assert_eq!(decompose(source), all[0]);

            let set = sorted(all);
            assert_eq!(count, set.len());
            assert!(set.contains(&compose(source)));
            let target = decompose(source);
            for s in &set {
                assert_eq!(target, decompose(s), "{}", s.escape_unicode());
            }
            if options.composites == Composites::All {
                assert!(set.contains(source));
            }
        }
    }
}

#[test]
fn test_skip_zeros_is_only_an_optimization() {
    for source in [
        "x\u{0307}\u{0327}",
        "\u{1F82}\u{0345}",
        "\u{AC01}\u{0345}",
        "a\u{0301}\u{0323}\u{0316}",
    ] {
        let fast = Options {
            skip_zeros: true,
            ..Options::default()
        };
        let slow = Options {
            skip_zeros: false,
            ..Options::default()
        };
        assert_eq!(
            sorted(drained(&mut CanonicalIterator::with_options(source, fast))),
            sorted(drained(&mut CanonicalIterator::with_options(source, slow))),
            "{}",
            source.escape_unicode()
        );
    }
}

#[test]
fn test_restart_isolation() {
    let mut it = CanonicalIterator::new("\u{010D}\u{017E}");
    let first = sorted(drained(&mut it));
    assert_eq!(None, it.next());
    it.set_source("x\u{0307}\u{0327}");
    let second = sorted(drained(&mut it));
    assert_eq!(3, second.len());
    assert!(first.is_disjoint(&second));
}

#[test]
fn test_exhaustive_with_ypogegrammeni() {
    let mut it = CanonicalIterator::new("");
    let mut checked = 0;
    for ch in (0..=char::MAX as u32).filter_map(char::from_u32) {
        let source = format!("{}\u{0345}", ch);
        let decomp = decompose(&source);
        let comp = compose(&source);
        if source == decomp && source == comp {
            continue;
        }
        checked += 1;

        it.set_source(&source);
        let (mut got_source, mut got_decomp, mut got_comp) = (false, false, false);
        while let Some(item) = it.next() {
            got_source |= item == source;
            got_decomp |= item == decomp;
            got_comp |= item == comp;
        }
        assert!(
            got_source && got_decomp && got_comp,
            "{}",
            source.escape_unicode()
        );
    }
    assert!(checked > 11172);
}
