//! The per-character collation attribute and its component enumerations.
//!
//! Every enumeration is ordered by declaration, so deriving [`Ord`] gives the
//! ranking used by the corresponding comparison tier.

use core::fmt;

use fixed_map::Key;

macro_rules! attribute_enum {
    (
        $(
            $(#[$($meta:meta)*])*
            $vis:vis enum $name:ident {
                $(<$variant:ident $ident:literal $doc:literal>)*
            }
        )*
    ) => {
        $(
            $(#[$($meta)*])*
            #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Key)]
            #[repr(u8)]
            $vis enum $name {
                #[default]
                $(#[doc = $doc] $variant,)*
            }

            impl $name {
                /// Short identifier of the variant.
                pub fn ident(&self) -> &'static str {
                    match self {
                        $($name::$variant => $ident,)*
                    }
                }

                /// Human readable description of the variant.
                pub fn help(&self) -> &'static str {
                    match self {
                        $($name::$variant => $doc,)*
                    }
                }
            }

            impl fmt::Display for $name {
                #[inline]
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.ident())
                }
            }
        )*
    };
}

attribute_enum! {
    /// Character class (文字種).
    pub enum Class {
        <Unclassified "unclassified" "Not part of the collated repertoire">
        <Space "space" "スペース">
        <Descriptor "descriptor" "記述記号">
        <Bracket "bracket" "括弧記号">
        <Science "science" "学術記号">
        <General "general" "一般記号">
        <Unit "unit" "単位記号">
        <Number "number" "アラビア数字">
        <Symbol "symbol" "欧字記号">
        <Alphabet "alphabet" "ラテンアルファベット">
        <Kana "kana" "仮名">
        <Kanji "kanji" "漢字">
        <Geta "geta" "げた記号">
    }

    /// Voicing of a kana (清濁).
    pub enum Voiced {
        <None "none" "Not voicing sensitive">
        <Unvoiced "unvoiced" "清音">
        <Voiced "voiced" "濁音">
        <Semivoiced "semivoiced" "半濁音">
    }

    /// Kana symbol type (記号種別).
    pub enum SymbolType {
        <None "none" "Not a kana">
        <LongVowel "long-vowel" "長音">
        <Lower "lower" "小文字">
        <Repeat "repeat" "繰返し記号">
        <Upper "upper" "大文字">
    }

    /// Script of a kana (仮名種別).
    pub enum KanaType {
        <None "none" "Not script specific">
        <Hiragana "hiragana" "平仮名">
        <Katakana "katakana" "片仮名">
    }

    /// Diacritical mark on a latin letter (ダイアクリティカルマーク).
    pub enum DiacriticalMark {
        <None "none" "ダイアクリティカルマークなし">
        <Macron "macron" "マクロン">
        <CircumflexAccent "circumflex-accent" "サーカムフレックスアクセント">
    }

    /// Case of a latin letter.
    pub enum LetterCase {
        <None "none" "Not a letter">
        <Lower "lower" "小文字">
        <Upper "upper" "大文字">
    }
}

/// The collation attribute of a single character.
///
/// Fields which do not apply to the character's class hold their default
/// value. The default attribute is the one given to unclassified characters
/// and ranks lowest in every tier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Character class.
    pub class: Class,
    /// Rank within the class. Kanji use their code point.
    pub order: u32,
    /// Voicing of kana.
    pub voiced: Voiced,
    /// Symbol type of kana.
    pub symbol_type: SymbolType,
    /// Script of kana.
    pub kana_type: KanaType,
    /// Diacritical mark of latin letters.
    pub diacritical_mark: DiacriticalMark,
    /// Case of latin letters.
    pub letter_case: LetterCase,
}

impl Attribute {
    /// Construct an attribute which only carries a class and order.
    #[inline]
    pub const fn new(class: Class, order: u32) -> Self {
        Self {
            class,
            order,
            voiced: Voiced::None,
            symbol_type: SymbolType::None,
            kana_type: KanaType::None,
            diacritical_mark: DiacriticalMark::None,
            letter_case: LetterCase::None,
        }
    }

    /// Test if this is the attribute of an unclassified character.
    #[inline]
    pub fn is_unclassified(&self) -> bool {
        self.class == Class::Unclassified
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            class,
            order,
            voiced,
            symbol_type,
            kana_type,
            diacritical_mark,
            letter_case,
        } = self;

        write!(
            f,
            "{class}:{order} voiced={voiced} symbol={symbol_type} kana={kana_type} mark={diacritical_mark} case={letter_case}"
        )
    }
}

#[test]
fn ranking_follows_declaration() {
    assert!(Class::Unclassified < Class::Space);
    assert!(Class::Kana < Class::Kanji);
    assert!(Class::Kanji < Class::Geta);
    assert!(Voiced::None < Voiced::Unvoiced);
    assert!(Voiced::Voiced < Voiced::Semivoiced);
    assert!(SymbolType::LongVowel < SymbolType::Lower);
    assert!(SymbolType::Repeat < SymbolType::Upper);
    assert!(KanaType::Hiragana < KanaType::Katakana);
    assert!(DiacriticalMark::Macron < DiacriticalMark::CircumflexAccent);
    assert!(LetterCase::Lower < LetterCase::Upper);

    let classes = [
        Class::Unclassified,
        Class::Space,
        Class::Descriptor,
        Class::Bracket,
        Class::Science,
        Class::General,
        Class::Unit,
        Class::Number,
        Class::Symbol,
        Class::Alphabet,
        Class::Kana,
        Class::Kanji,
        Class::Geta,
    ];

    for window in classes.windows(2) {
        assert!(window[0] < window[1], "{} < {}", window[0], window[1]);
    }
}

#[test]
fn default_is_lowest() {
    let attribute = Attribute::default();
    assert!(attribute.is_unclassified());
    assert_eq!(attribute, Attribute::new(Class::Unclassified, 0));
    assert_eq!(Class::default(), Class::Unclassified);
    assert_eq!(Voiced::default(), Voiced::None);
    assert_eq!(SymbolType::default(), SymbolType::None);
    assert_eq!(KanaType::default(), KanaType::None);
}

#[test]
fn ident_and_help() {
    assert_eq!(Class::Kana.to_string(), "kana");
    assert_eq!(Class::Kana.help(), "仮名");
    assert_eq!(SymbolType::LongVowel.ident(), "long-vowel");
    assert_eq!(Voiced::Semivoiced.help(), "半濁音");
}
