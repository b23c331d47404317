use std::cmp::Ordering;
use std::thread;

use jisx4061::{compare, is_sorted, less, sort, stable, Collated};

/// Assert that `less(a, b)` holds exactly when `a` comes before `b` in the
/// list.
fn assert_all_pairs(list: &[&str]) {
    for (i, a) in list.iter().enumerate() {
        for (j, b) in list.iter().enumerate() {
            assert_eq!(less(a, b), i < j, "expected {a} < {b} to be {}", i < j);
        }
    }
}

// JIS X 4061-1996 5.1 例1.
const PRIMARY: &[&str] = &[
    "さと",
    "さど",
    "さとう",
    "さどう",
    "さとうや",
    "サトー",
    "さとおや",
];

const TIERS: &[&str] = &[
    "シャーレ",
    "シャイ",
    "シヤィ",
    "シャレ",
    "ちょこ",
    "ちよこ",
    "チョコレート",
    "てーた",
    "テータ",
    "テェタ",
    "てえた",
    "でーた",
    "データ",
    "デェタ",
    "でえた",
];

const MIXED: &[&str] = &[
    "",
    " ",
    "、",
    "「",
    "＋",
    "※",
    "％",
    "0",
    "10",
    "9",
    "＆",
    "a",
    "A",
    "ā",
    "Ā",
    "â",
    "abc",
    "ABC",
    "b",
    "あ",
    "ア",
    "ー",
    "亜",
    "〓",
];

#[test]
fn primary_tier() {
    assert_all_pairs(PRIMARY);
}

#[test]
fn voicing_symbol_and_script_tiers() {
    assert_all_pairs(TIERS);
}

#[test]
fn classes_and_latin_tiers() {
    assert_all_pairs(MIXED);
}

#[test]
fn sort_scenarios() {
    for list in [PRIMARY, TIERS, MIXED] {
        let mut reversed = list.to_vec();
        reversed.reverse();
        sort(&mut reversed);
        assert_eq!(reversed, list);

        let mut reversed = list.to_vec();
        reversed.reverse();
        stable(&mut reversed);
        assert_eq!(reversed, list);
    }
}

#[test]
fn reflexive_and_antisymmetric() {
    let strings = PRIMARY.iter().chain(TIERS).chain(MIXED);

    for a in strings.clone() {
        assert_eq!(compare(a, a), Ordering::Equal, "{a}");

        for b in strings.clone() {
            assert_eq!(compare(a, b), compare(b, a).reverse(), "{a} <> {b}");
        }
    }
}

#[test]
fn strict_prefixes_sort_first() {
    let strings = PRIMARY.iter().chain(TIERS).chain(MIXED);

    for a in strings.filter(|a| !a.is_empty()) {
        for suffix in ["あ", "ー", "a", "漢", "α", " "] {
            let b = format!("{a}{suffix}");
            assert!(less(a, &b), "{a} < {b}");
            assert!(!less(&b, a), "{b} !< {a}");
        }
    }
}

#[test]
fn equal_only_for_identical_attributes() {
    assert_eq!(compare("ＡＢＣ", "ABC"), Ordering::Equal);
    assert_eq!(compare("α", "β"), Ordering::Equal);
    assert_ne!(compare("あ", "ア"), Ordering::Equal);
    assert_ne!(compare("a", "A"), Ordering::Equal);
}

#[test]
fn total_over_arbitrary_input() {
    let inputs: &[&[u8]] = &[
        b"",
        b"\xff",
        b"\x80\x80",
        b"\xe3\x83",
        b"\xe3\x83\xbc",
        b"\xf0\x9f\x98\x80",
        "ゝーゞヽヾ".as_bytes(),
        "ーーー".as_bytes(),
        "αβγ".as_bytes(),
        b"a\xffb",
    ];

    for a in inputs {
        assert_eq!(compare(a, a), Ordering::Equal);

        for b in inputs {
            assert_eq!(compare(a, b), compare(b, a).reverse());
        }
    }
}

#[test]
fn malformed_byte_is_one_character() {
    // A single invalid byte is an unclassified character, which sorts before
    // everything else but still counts towards length.
    assert_eq!(compare(b"\xff", b""), Ordering::Greater);
    assert_eq!(compare(b"\xff", " "), Ordering::Less);
    assert_eq!(compare(b"\xff\xff", b"\xfe"), Ordering::Greater);
    assert_eq!(compare(b"a\xffb", b"a\xfeb"), Ordering::Equal);
}

#[test]
fn sortedness() {
    assert!(is_sorted::<&str>(&[]));
    assert!(is_sorted(&["あ"]));
    assert!(is_sorted(PRIMARY));
    assert!(is_sorted(&["ABC", "ＡＢＣ", "ABC"]));
    assert!(!is_sorted(&["い", "あ"]));

    let mut list = TIERS.to_vec();
    list.swap(3, 9);
    assert!(!is_sorted(&list));
    sort(&mut list);
    assert!(is_sorted(&list));

    // Sorting is idempotent.
    let before = list.clone();
    sort(&mut list);
    assert_eq!(list, before);
}

#[test]
fn stable_preserves_equal_order() {
    let mut list = vec!["ＡＢＣ", "あ", "ABC", "Ａbc", "abc", "A\u{0042}C"];
    stable(&mut list);
    assert_eq!(list, ["abc", "Ａbc", "ＡＢＣ", "ABC", "ABC", "あ"]);
}

#[test]
fn owned_strings() {
    let mut list = PRIMARY.iter().rev().map(|s| s.to_string()).collect::<Vec<_>>();
    sort(&mut list);
    assert!(is_sorted(&list));
    assert_eq!(list, PRIMARY);
}

#[test]
fn concurrent_callers_agree() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Collated<&str>>();
    assert_send_sync::<Collated<String>>();

    let strings = PRIMARY.iter().chain(TIERS).chain(MIXED).collect::<Vec<_>>();

    let expected = strings
        .iter()
        .map(|a| strings.iter().map(|b| compare(a, b)).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    thread::scope(|s| {
        let threads = (0..8)
            .map(|n| {
                let strings = &strings;

                s.spawn(move || {
                    let mut list = strings.iter().rev().map(|a| **a).collect::<Vec<_>>();
                    list.rotate_left(n);

                    let table = strings
                        .iter()
                        .map(|a| strings.iter().map(|b| compare(a, b)).collect::<Vec<_>>())
                        .collect::<Vec<_>>();

                    stable(&mut list);
                    (table, list)
                })
            })
            .collect::<Vec<_>>();

        for thread in threads {
            let (table, list) = thread.join().unwrap();
            assert_eq!(table, expected);
            assert!(is_sorted(&list));
        }
    });
}
