//! Classification data for the JIS X 4061 simple collation repertoire.
//!
//! The rows below are listed in collation order. Every string in a row is one
//! collation position, and all characters in it share the same order. The
//! lookup maps are built from the rows once on first use and never change
//! afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use fixed_map::Map;

use crate::attribute::{
    Attribute, Class, DiacriticalMark, KanaType, LetterCase, SymbolType, Voiced,
};

/// The prolonged sound mark.
pub(crate) const LONG_VOWEL: char = 'ー';

/// Test if the character is one of the four kana iteration marks.
#[inline]
pub(crate) fn is_iteration_mark(c: char) -> bool {
    matches!(c, 'ゝ' | 'ゞ' | 'ヽ' | 'ヾ')
}

/// Test if the character falls in one of the CJK ideograph blocks.
#[inline]
pub(crate) fn is_ideograph(c: char) -> bool {
    matches!(
        c,
        '\u{3400}'..='\u{4dbf}'
            | '\u{4e00}'..='\u{9fff}'
            | '\u{f900}'..='\u{faff}'
            | '\u{20000}'..='\u{3ffff}'
    )
}

/// The immutable classification tables.
pub(crate) struct Tables {
    attributes: HashMap<char, Attribute>,
    vowels: HashMap<char, char>,
}

impl Tables {
    /// Access the process-wide tables, building them on first use.
    pub(crate) fn get() -> &'static Tables {
        static TABLES: OnceLock<Tables> = OnceLock::new();
        TABLES.get_or_init(Tables::build)
    }

    /// Look up the attribute of a character in the classification table.
    #[inline]
    pub(crate) fn attribute(&self, c: char) -> Option<Attribute> {
        self.attributes.get(&c).copied()
    }

    /// Look up the base vowel of a kana.
    #[inline]
    pub(crate) fn vowel(&self, c: char) -> Option<char> {
        self.vowels.get(&c).copied()
    }

    fn build() -> Self {
        let mut builder = Builder::new();

        builder.positions(Class::Space, SPACE);
        builder.positions(Class::Descriptor, DESCRIPTOR);
        builder.positions(Class::Bracket, BRACKET);
        builder.positions(Class::Science, SCIENCE);
        builder.positions(Class::General, GENERAL);
        builder.positions(Class::Unit, UNIT);
        builder.positions(Class::Number, NUMBER);
        builder.positions(Class::Symbol, SYMBOL);
        builder.alphabet();
        builder.kana();
        builder.positions(Class::Geta, GETA);

        let mut vowels = HashMap::new();

        for &(base, kana) in VOWELS {
            for c in kana.chars() {
                vowels.insert(c, base);
            }
        }

        tracing::debug!(
            attributes = builder.attributes.len(),
            vowels = vowels.len(),
            "Built collation tables"
        );

        Self {
            attributes: builder.attributes,
            vowels,
        }
    }
}

struct Builder {
    orders: Map<Class, u32>,
    attributes: HashMap<char, Attribute>,
}

impl Builder {
    fn new() -> Self {
        Self {
            orders: Map::new(),
            attributes: HashMap::new(),
        }
    }

    /// Allocate the next order within the given class. Orders start at one.
    fn next(&mut self, class: Class) -> u32 {
        let order = self.orders.get(class).copied().unwrap_or_default() + 1;
        self.orders.insert(class, order);
        order
    }

    fn insert(&mut self, c: char, attribute: Attribute) {
        if let Some(previous) = self.attributes.insert(c, attribute) {
            tracing::warn!(?c, ?previous, ?attribute, "Duplicate collation entry");
        }
    }

    fn positions(&mut self, class: Class, positions: &[&str]) {
        for position in positions {
            let order = self.next(class);

            for c in position.chars() {
                self.insert(c, Attribute::new(class, order));
            }
        }
    }

    fn alphabet(&mut self) {
        for &(plain, macron, circumflex) in LATIN {
            let order = self.next(Class::Alphabet);

            let forms = [
                (plain, DiacriticalMark::None),
                (macron, DiacriticalMark::Macron),
                (circumflex, DiacriticalMark::CircumflexAccent),
            ];

            for (chars, diacritical_mark) in forms {
                for c in chars.chars() {
                    let letter_case = if c.is_uppercase() {
                        LetterCase::Upper
                    } else {
                        LetterCase::Lower
                    };

                    self.insert(
                        c,
                        Attribute {
                            diacritical_mark,
                            letter_case,
                            ..Attribute::new(Class::Alphabet, order)
                        },
                    );
                }
            }
        }
    }

    fn kana(&mut self) {
        for &(unvoiced, voiced, semivoiced) in KANA {
            let order = self.next(Class::Kana);

            let forms = [
                (unvoiced, Voiced::Unvoiced),
                (voiced, Voiced::Voiced),
                (semivoiced, Voiced::Semivoiced),
            ];

            for (chars, voiced) in forms {
                for c in chars.chars() {
                    let symbol_type = if SMALL.contains(c) {
                        SymbolType::Lower
                    } else {
                        SymbolType::Upper
                    };

                    self.insert(
                        c,
                        Attribute {
                            voiced,
                            symbol_type,
                            kana_type: kana_type(c),
                            ..Attribute::new(Class::Kana, order)
                        },
                    );
                }
            }
        }

        let order = self.next(Class::Kana);

        self.insert(
            LONG_VOWEL,
            Attribute {
                symbol_type: SymbolType::LongVowel,
                ..Attribute::new(Class::Kana, order)
            },
        );

        let order = self.next(Class::Kana);

        for (c, voiced) in [
            ('ゝ', Voiced::Unvoiced),
            ('ゞ', Voiced::Voiced),
            ('ヽ', Voiced::Unvoiced),
            ('ヾ', Voiced::Voiced),
        ] {
            self.insert(
                c,
                Attribute {
                    voiced,
                    symbol_type: SymbolType::Repeat,
                    kana_type: kana_type(c),
                    ..Attribute::new(Class::Kana, order)
                },
            );
        }
    }
}

fn kana_type(c: char) -> KanaType {
    match c {
        '\u{3041}'..='\u{309f}' => KanaType::Hiragana,
        '\u{30a0}'..='\u{30ff}' => KanaType::Katakana,
        _ => KanaType::None,
    }
}

#[rustfmt::skip]
static SPACE: &[&str] = &[" 　"];

#[rustfmt::skip]
static DESCRIPTOR: &[&str] = &[
    "、", "。", "，,", "．.", "・", "：:", "；;", "？?", "！!", "゛", "゜", "´",
    "｀`", "¨", "＾^", "￣", "＿_", "〃", "仝", "々", "〆", "〇", "―", "‐",
    "／/", "＼\\", "～~", "∥", "｜|", "…", "‥",
];

#[rustfmt::skip]
static BRACKET: &[&str] = &[
    "‘", "’'", "“", "”\"", "（(", "）)", "〔", "〕", "［[", "］]", "｛{", "｝}",
    "〈", "〉", "《", "》", "「", "」", "『", "』", "【", "】",
];

#[rustfmt::skip]
static SCIENCE: &[&str] = &[
    "＋+", "－-", "±", "×", "÷", "＝=", "≠", "＜<", "＞>", "≦", "≧", "∞",
    "∴", "∵", "∈", "∋", "⊆", "⊇", "⊂", "⊃", "∪", "∩", "∧", "∨",
    "￢¬", "⇒", "⇔", "∀", "∃", "∠", "⊥", "⌒", "∂", "∇", "≡", "≒",
    "≪", "≫", "√", "∽", "∝", "∫", "∬",
];

#[rustfmt::skip]
static GENERAL: &[&str] = &[
    "＊*", "☆", "★", "○", "●", "◎", "◇", "◆", "□", "■", "△", "▲",
    "▽", "▼", "※", "〒", "→", "←", "↑", "↓", "♂", "♀", "♯", "♭",
    "♪", "†", "‡", "◯",
];

#[rustfmt::skip]
static UNIT: &[&str] = &[
    "°", "′", "″", "℃", "￥¥", "＄$", "￠¢", "￡£", "％%", "‰", "Å",
];

#[rustfmt::skip]
static NUMBER: &[&str] = &[
    "0０", "1１", "2２", "3３", "4４", "5５", "6６", "7７", "8８", "9９",
];

#[rustfmt::skip]
static SYMBOL: &[&str] = &["＆&", "＃#", "＠@", "§", "¶"];

/// Latin letters: plain forms, macron forms and circumflex forms.
#[rustfmt::skip]
static LATIN: &[(&str, &str, &str)] = &[
    ("aAａＡ", "āĀ", "âÂ"), ("bBｂＢ", "", ""), ("cCｃＣ", "", ""), ("dDｄＤ", "", ""),
    ("eEｅＥ", "ēĒ", "êÊ"), ("fFｆＦ", "", ""), ("gGｇＧ", "", ""), ("hHｈＨ", "", ""),
    ("iIｉＩ", "īĪ", "îÎ"), ("jJｊＪ", "", ""), ("kKｋＫ", "", ""), ("lLｌＬ", "", ""),
    ("mMｍＭ", "", ""), ("nNｎＮ", "", ""), ("oOｏＯ", "ōŌ", "ôÔ"), ("pPｐＰ", "", ""),
    ("qQｑＱ", "", ""), ("rRｒＲ", "", ""), ("sSｓＳ", "", ""), ("tTｔＴ", "", ""),
    ("uUｕＵ", "ūŪ", "ûÛ"), ("vVｖＶ", "", ""), ("wWｗＷ", "", ""), ("xXｘＸ", "", ""),
    ("yYｙＹ", "", ""), ("zZｚＺ", "", ""),
];

/// Kana in gojūon order: unvoiced forms, voiced forms and semivoiced forms.
#[rustfmt::skip]
static KANA: &[(&str, &str, &str)] = &[
    /*あ*/ ("あぁアァ", "", ""), ("いぃイィ", "", ""), ("うぅウゥ", "ゔヴ", ""), ("えぇエェ", "", ""), ("おぉオォ", "", ""),
    /*か*/ ("かゕカヵ", "がガ", ""), ("きキ", "ぎギ", ""), ("くク", "ぐグ", ""), ("けゖケヶ", "げゲ", ""), ("こコ", "ごゴ", ""),
    /*さ*/ ("さサ", "ざザ", ""), ("しシ", "じジ", ""), ("すス", "ずズ", ""), ("せセ", "ぜゼ", ""), ("そソ", "ぞゾ", ""),
    /*た*/ ("たタ", "だダ", ""), ("ちチ", "ぢヂ", ""), ("つっツッ", "づヅ", ""), ("てテ", "でデ", ""), ("とト", "どド", ""),
    /*な*/ ("なナ", "", ""), ("にニ", "", ""), ("ぬヌ", "", ""), ("ねネ", "", ""), ("のノ", "", ""),
    /*は*/ ("はハ", "ばバ", "ぱパ"), ("ひヒ", "びビ", "ぴピ"), ("ふフ", "ぶブ", "ぷプ"), ("へヘ", "べベ", "ぺペ"), ("ほホ", "ぼボ", "ぽポ"),
    /*ま*/ ("まマ", "", ""), ("みミ", "", ""), ("むム", "", ""), ("めメ", "", ""), ("もモ", "", ""),
    /*や*/ ("やゃヤャ", "", ""), ("ゆゅユュ", "", ""), ("よょヨョ", "", ""),
    /*ら*/ ("らラ", "", ""), ("りリ", "", ""), ("るル", "", ""), ("れレ", "", ""), ("ろロ", "", ""),
    /*わ*/ ("わゎワヮ", "ヷ", ""), ("ゐヰ", "ヸ", ""), ("ゑヱ", "ヹ", ""), ("をヲ", "ヺ", ""),
    /*ん*/ ("んン", "", ""),
];

/// Small kana.
static SMALL: &str = "ぁぃぅぇぉゕゖっゃゅょゎァィゥェォヵヶッャュョヮ";

#[rustfmt::skip]
static GETA: &[&str] = &["〓"];

/// Kana grouped by the vowel they end in.
#[rustfmt::skip]
static VOWELS: &[(char, &str)] = &[
    ('あ', "あかさたなはまやらわがざだばぱぁゃゎゕアカサタナハマヤラワガザダバパァャヮヵヷ"),
    ('い', "いきしちにひみりゐぎじぢびぴぃイキシチニヒミリヰギジヂビピィヸ"),
    ('う', "うくすつぬふむゆるぐずづぶぷぅゅゔウクスツヌフムユルグズヅブプゥュヴ"),
    ('え', "えけせてねへめれゑげぜでべぺぇゖエケセテネヘメレヱゲゼデベペェヶヹ"),
    ('お', "おこそとのほもよろをごぞどぼぽぉょオコソトノホモヨロヲゴゾドボポォョヺ"),
    ('ん', "んン"),
];
