//! The multi-tier comparison of two strings.

#[cfg(test)]
mod tests;

use core::cmp::Ordering;

use crate::attribute::Attribute;
use crate::classify::classify;

/// A comparison tier in the order in which they are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Character class followed by the order within the class.
    Primary,
    /// Unvoiced, voiced and semivoiced kana.
    Voiced,
    /// Prolonged sound mark, small kana, iteration marks and regular kana.
    SymbolType,
    /// Hiragana before katakana.
    KanaType,
    /// Plain letters, then macron, then circumflex.
    DiacriticalMark,
    /// Lower case before upper case.
    LetterCase,
}

impl Tier {
    /// All tiers in evaluation order.
    pub const ALL: [Tier; 6] = [
        Tier::Primary,
        Tier::Voiced,
        Tier::SymbolType,
        Tier::KanaType,
        Tier::DiacriticalMark,
        Tier::LetterCase,
    ];

    /// Compare two attributes at this tier only.
    pub fn cmp_attributes(self, a: &Attribute, b: &Attribute) -> Ordering {
        match self {
            Tier::Primary => a.class.cmp(&b.class).then(a.order.cmp(&b.order)),
            Tier::Voiced => a.voiced.cmp(&b.voiced),
            Tier::SymbolType => a.symbol_type.cmp(&b.symbol_type),
            Tier::KanaType => a.kana_type.cmp(&b.kana_type),
            Tier::DiacriticalMark => a.diacritical_mark.cmp(&b.diacritical_mark),
            Tier::LetterCase => a.letter_case.cmp(&b.letter_case),
        }
    }
}

/// Compare two strings in JIS X 4061 order.
///
/// Each tier scans both strings from the start and only runs if every
/// earlier tier tied. Once all aligned characters tie at the primary tier,
/// the string which ran out first sorts first.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
///
/// assert_eq!(jisx4061::compare("さと", "さど"), Ordering::Less);
/// assert_eq!(jisx4061::compare("サトー", "さとうや"), Ordering::Greater);
/// assert_eq!(jisx4061::compare("", ""), Ordering::Equal);
/// ```
pub fn compare<A, B>(a: &A, b: &B) -> Ordering
where
    A: ?Sized + AsRef<[u8]>,
    B: ?Sized + AsRef<[u8]>,
{
    let (a, b) = (a.as_ref(), b.as_ref());

    for tier in Tier::ALL {
        let ordering = scan(tier, a, b);

        if ordering.is_ne() {
            tracing::trace!(?tier, ?ordering, "Decided");
            return ordering;
        }
    }

    Ordering::Equal
}

/// Test if `a` sorts strictly before `b`.
#[inline]
pub fn less<A, B>(a: &A, b: &B) -> bool
where
    A: ?Sized + AsRef<[u8]>,
    B: ?Sized + AsRef<[u8]>,
{
    compare(a, b).is_lt()
}

/// Resolve the attribute of every character in `text`.
///
/// Keys compared with [`compare_keys`] order the same way as their strings
/// do with [`compare`], which allows the classification work to be done once
/// per string when sorting.
pub fn key<T>(text: &T) -> Vec<Attribute>
where
    T: ?Sized + AsRef<[u8]>,
{
    let text = text.as_ref();
    let mut key = Vec::with_capacity(text.len());
    let mut offset = 0;

    while offset < text.len() {
        let (attribute, n) = classify(text, offset);
        key.push(attribute);
        offset += n;
    }

    key
}

/// Compare two keys constructed with [`key`].
pub fn compare_keys(a: &[Attribute], b: &[Attribute]) -> Ordering {
    for tier in Tier::ALL {
        for (x, y) in a.iter().zip(b) {
            let ordering = tier.cmp_attributes(x, y);

            if ordering.is_ne() {
                return ordering;
            }
        }

        if tier == Tier::Primary && a.len() != b.len() {
            return a.len().cmp(&b.len());
        }
    }

    Ordering::Equal
}

/// Walk both strings in lockstep, deciding on the first differing pair.
fn scan(tier: Tier, a: &[u8], b: &[u8]) -> Ordering {
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        let (x, n) = classify(a, i);
        i += n;
        let (y, m) = classify(b, j);
        j += m;

        let ordering = tier.cmp_attributes(&x, &y);

        if ordering.is_ne() {
            return ordering;
        }
    }

    if tier != Tier::Primary {
        return Ordering::Equal;
    }

    // Exhausted first sorts first.
    (i < a.len()).cmp(&(j < b.len()))
}
