use core::cmp::Ordering;

use super::{compare, compare_keys, key, less, Tier};
use crate::attribute::{Attribute, Class, LetterCase};

#[test]
fn primary_class() {
    // Space < Number < Alphabet < Kana < Kanji < Geta.
    let ordered = [" ", "1", "a", "あ", "亜", "〓"];

    for window in ordered.windows(2) {
        assert!(less(window[0], window[1]), "{} < {}", window[0], window[1]);
    }
}

#[test]
fn primary_order() {
    assert!(less("あ", "い"));
    assert!(less("ん", "ー"));
    assert!(less("a", "B"));
    assert!(!less("9", "10"));
    assert!(less("亜", "唖"));
}

#[test]
fn prefix_sorts_first() {
    assert_eq!(compare("さと", "さとう"), Ordering::Less);
    assert_eq!(compare("さとう", "さと"), Ordering::Greater);
    assert_eq!(compare("", "あ"), Ordering::Less);
    // A later voicing difference does not override the prefix rule.
    assert_eq!(compare("さど", "さとう"), Ordering::Less);
}

#[test]
fn voicing() {
    assert_eq!(compare("は", "ば"), Ordering::Less);
    assert_eq!(compare("ば", "ぱ"), Ordering::Less);
    // Only the first differing voicing decides.
    assert_eq!(compare("がか", "かが"), Ordering::Greater);
}

#[test]
fn symbol_type() {
    assert_eq!(compare("ゃ", "や"), Ordering::Less);
    assert_eq!(compare("いすゞ", "いすず"), Ordering::Less);
    assert_eq!(compare("こゝ", "ここ"), Ordering::Less);
}

#[test]
fn kana_type() {
    assert_eq!(compare("あ", "ア"), Ordering::Less);
    assert_eq!(compare("カな", "かナ"), Ordering::Greater);
}

#[test]
fn diacritical_mark() {
    assert_eq!(compare("a", "ā"), Ordering::Less);
    assert_eq!(compare("ā", "â"), Ordering::Less);
    assert_eq!(compare("tōkyō", "tôkyo"), Ordering::Less);
}

#[test]
fn letter_case() {
    assert_eq!(compare("a", "A"), Ordering::Less);
    assert_eq!(compare("Tokyo", "tokyo"), Ordering::Greater);
    // Diacritical marks are decided before case.
    assert_eq!(compare("Ā", "ā"), Ordering::Greater);
    assert_eq!(compare("A", "ā"), Ordering::Less);
}

#[test]
fn width_insensitive() {
    assert_eq!(compare("ＡＢＣ", "ABC"), Ordering::Equal);
    assert_eq!(compare("１２３", "123"), Ordering::Equal);
}

#[test]
fn unclassified_sorts_lowest() {
    assert_eq!(compare("α", " "), Ordering::Less);
    assert_eq!(compare("α", "β"), Ordering::Equal);
    assert_eq!(compare(b"\xff", b"\xfe"), Ordering::Equal);
    assert_eq!(compare(b"\xffa", "a"), Ordering::Less);
}

#[test]
fn tier_attributes() {
    let a = Attribute::new(Class::Alphabet, 1);

    let b = Attribute {
        letter_case: LetterCase::Upper,
        ..a
    };

    for tier in Tier::ALL {
        let expected = if tier == Tier::LetterCase {
            Ordering::Less
        } else {
            Ordering::Equal
        };

        assert_eq!(tier.cmp_attributes(&a, &b), expected, "{tier:?}");
    }
}

#[test]
fn keys_agree_with_compare() {
    let strings = [
        "", "あ", "ア", "ああ", "あー", "アー", "すゞ", "すず", "abc", "ABC", "ābc", "漢字", "α",
        "さとう", "サトー",
    ];

    for a in strings {
        for b in strings {
            let expected = compare(a, b);
            assert_eq!(compare_keys(&key(a), &key(b)), expected, "{a} <> {b}");
        }
    }
}
