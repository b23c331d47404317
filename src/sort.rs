//! Sorting slices of strings in collation order.

use core::cmp::Ordering;
use core::fmt;

use crate::compare::compare;

/// Sort `items` in collation order.
///
/// The sort is not stable: items which compare equal, like `"ABC"` and
/// `"ＡＢＣ"`, may be reordered.
///
/// # Examples
///
/// ```
/// let mut list = ["さどう", "さとうや", "サトー", "さと", "さど", "さとう", "さとおや"];
/// jisx4061::sort(&mut list);
/// assert_eq!(list, ["さと", "さど", "さとう", "さどう", "さとうや", "サトー", "さとおや"]);
/// ```
pub fn sort<T>(items: &mut [T])
where
    T: AsRef<[u8]>,
{
    items.sort_unstable_by(|a, b| compare(a, b));
}

/// Sort `items` in collation order, keeping items which compare equal in
/// their original order.
pub fn stable<T>(items: &mut [T])
where
    T: AsRef<[u8]>,
{
    items.sort_by(|a, b| compare(a, b));
}

/// Test if `items` are already in collation order.
pub fn is_sorted<T>(items: &[T]) -> bool
where
    T: AsRef<[u8]>,
{
    items
        .windows(2)
        .all(|window| compare(&window[0], &window[1]).is_le())
}

/// Wrapper which orders its content in collation order.
///
/// This allows strings to be used as keys in ordered collections.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
///
/// use jisx4061::Collated;
///
/// let set = ["テータ", "てーた", "データ"].into_iter().map(Collated).collect::<BTreeSet<_>>();
/// let list = set.iter().map(|c| c.0).collect::<Vec<_>>();
/// assert_eq!(list, ["てーた", "テータ", "データ"]);
/// ```
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct Collated<T>(pub T);

impl<T> Collated<T> {
    /// Unwrap the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> PartialEq for Collated<T>
where
    T: AsRef<[u8]>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        compare(&self.0, &other.0).is_eq()
    }
}

impl<T> Eq for Collated<T> where T: AsRef<[u8]> {}

impl<T> PartialOrd for Collated<T>
where
    T: AsRef<[u8]>,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Collated<T>
where
    T: AsRef<[u8]>,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&self.0, &other.0)
    }
}

impl<T> fmt::Debug for Collated<T>
where
    T: fmt::Debug,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<T> fmt::Display for Collated<T>
where
    T: fmt::Display,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[test]
fn stable_keeps_equal_items_in_order() {
    let mut list = ["ＡＢＣ", "b", "ABC", "a", "ａｂｃ"];
    stable(&mut list);
    assert_eq!(list, ["a", "ａｂｃ", "ＡＢＣ", "ABC", "b"]);
}

#[test]
fn collated_max() {
    let max = ["あ", "〓", "漢", "a"].into_iter().map(Collated).max();
    assert_eq!(max.map(Collated::into_inner), Some("〓"));
}
