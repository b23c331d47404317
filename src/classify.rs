//! Resolution of the attribute of a single character in context.


use crate::attribute::{Attribute, Class};
use crate::decode;
use crate::tables::{self, Tables, LONG_VOWEL};

/// Classify the character which starts at `offset` in `text`.
///
/// Returns the resolved attribute together with the number of bytes
/// consumed. The prolonged sound mark and the kana iteration marks are
/// resolved against the character immediately before `offset`.
///
/// A byte which is not part of a well-formed UTF-8 sequence is consumed on
/// its own and classified as unclassified. At the end of the input the
/// default attribute is returned with a length of zero.
///
/// # Examples
///
/// ```
/// use jisx4061::{classify, Class};
///
/// let (a, n) = classify("とー", 0);
/// assert_eq!(a.class, Class::Kana);
/// assert_eq!(n, 3);
///
/// // The prolonged sound mark takes the order of the vowel it extends.
/// let (long, _) = classify("とー", n);
/// let (o, _) = classify("お", 0);
/// assert_eq!(long.order, o.order);
/// ```
pub fn classify<T>(text: &T, offset: usize) -> (Attribute, usize)
where
    T: ?Sized + AsRef<[u8]>,
{
    let text = text.as_ref();

    let Some((c, len)) = text.get(offset..).and_then(decode::decode) else {
        return (Attribute::default(), 0);
    };

    let Some(c) = c else {
        return (Attribute::default(), len);
    };

    let tables = Tables::get();
    let preceding = || decode::decode_last(&text[..offset]).and_then(|(c, _)| c);

    let attribute = match c {
        LONG_VOWEL => long_vowel(tables, preceding()),
        c if tables::is_iteration_mark(c) => iteration_mark(tables, c, preceding()),
        c => lookup(tables, c),
    };

    (attribute, len)
}

/// Resolve a character without looking at its context.
fn lookup(tables: &Tables, c: char) -> Attribute {
    if let Some(attribute) = tables.attribute(c) {
        return attribute;
    }

    if tables::is_ideograph(c) {
        return Attribute::new(Class::Kanji, c as u32);
    }

    Attribute::default()
}

/// The prolonged sound mark sorts as the vowel of the kana it follows.
fn long_vowel(tables: &Tables, preceding: Option<char>) -> Attribute {
    let mut attribute = tables.attribute(LONG_VOWEL).unwrap_or_default();

    let base = preceding
        .and_then(|c| tables.vowel(c))
        .and_then(|v| tables.attribute(v));

    if let Some(base) = base {
        attribute.order = base.order;
    }

    attribute
}

/// An iteration mark sorts as the kana it repeats, but keeps its own voicing,
/// symbol type and script. After anything other than kana it keeps its own
/// attribute.
fn iteration_mark(tables: &Tables, c: char, preceding: Option<char>) -> Attribute {
    let attribute = tables.attribute(c).unwrap_or_default();

    let Some(preceding) = preceding else {
        return attribute;
    };

    // Never chain through another mark.
    if preceding == LONG_VOWEL || tables::is_iteration_mark(preceding) {
        return attribute;
    }

    let Some(repeated) = tables.attribute(preceding) else {
        return attribute;
    };

    if repeated.class != Class::Kana {
        return attribute;
    }

    Attribute {
        class: repeated.class,
        order: repeated.order,
        ..attribute
    }
}
