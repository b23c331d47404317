//! Japanese string collation following [JIS X 4061].
//!
//! This orders strings the way Japanese dictionaries do, commonly referred to
//! as 辞書順 (dictionary order) or 五十音順 (gojūon order), rather than by
//! code point.
//!
//! The collation method is simple collation (単純照合) using the basic
//! collation rules (基本照合規則). Latin letters are collated including
//! macron and circumflex forms, and kanji use the extended kanji class
//! (拡張漢字クラス) which orders them by code point.
//!
//! Strings are compared over six tiers, each of which only decides ties left
//! by the tiers before it:
//!
//! 1. Character class and order within the class.
//! 2. Voicing (清音, 濁音, 半濁音).
//! 3. Symbol type (長音, 小文字, 繰返し記号, 大文字).
//! 4. Script (平仮名, 片仮名).
//! 5. Diacritical mark (none, macron, circumflex).
//! 6. Letter case (lower, upper).
//!
//! # Examples
//!
//! ```
//! let mut list = ["データ", "てーた", "でえた", "テータ"];
//! jisx4061::sort(&mut list);
//! assert_eq!(list, ["てーた", "テータ", "データ", "でえた"]);
//!
//! assert!(jisx4061::less("さと", "さど"));
//! ```
//!
//! [JIS X 4061]: https://ja.wikipedia.org/wiki/%E6%97%A5%E6%9C%AC%E8%AA%9E%E6%96%87%E5%AD%97%E5%88%97%E7%85%A7%E5%90%88%E9%A0%86%E7%95%AA

mod attribute;
pub use self::attribute::{
    Attribute, Class, DiacriticalMark, KanaType, LetterCase, SymbolType, Voiced,
};

mod classify;
pub use self::classify::classify;

mod compare;
pub use self::compare::{compare, compare_keys, key, less, Tier};

mod decode;

mod sort;
pub use self::sort::{is_sorted, sort, stable, Collated};

mod tables;

/// Look up the attribute of a character in the classification table.
///
/// This ignores context, so the prolonged sound mark and the iteration marks
/// report their own attributes, and ideographs outside of the table return
/// `None`. Use [`classify`] to resolve a character inside of a string.
///
/// # Examples
///
/// ```
/// use jisx4061::{Class, Voiced};
///
/// let ga = jisx4061::attribute('が').unwrap();
/// assert_eq!(ga.class, Class::Kana);
/// assert_eq!(ga.voiced, Voiced::Voiced);
/// assert!(jisx4061::attribute('漢').is_none());
/// ```
pub fn attribute(c: char) -> Option<Attribute> {
    tables::Tables::get().attribute(c)
}
