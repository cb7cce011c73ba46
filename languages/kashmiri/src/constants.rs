//! Static Kashmiri tables
//!
//! Equivalence tables map a canonical form to the variants rewritten into it.
//! Variants cover Arabic/Persian code points that render like the Kashmiri
//! letter, Arabic presentation forms, and decomposed base + mark sequences.

use std::collections::BTreeSet;

use koshur_core::{EquivalenceTable, PatternReplacer};
use once_cell::sync::Lazy;

type StaticTable = &'static [(&'static str, &'static [&'static str])];

pub const CHARACTER_MAPPING: StaticTable = &[
    // Alef with wavy hamza above (ٲ)
    ("\u{0672}", &["\u{0623}", "\u{0627}\u{0654}", "\u{0627}\u{0674}"]),
    // Alef with wavy hamza below (ٳ)
    ("\u{0673}", &["\u{0625}", "\u{0627}\u{0655}"]),
    // Alef with madda (آ)
    ("\u{0622}", &["\u{0627}\u{0653}", "\u{FE81}", "\u{FE82}"]),
    // Alef (ا)
    ("\u{0627}", &["\u{0671}", "\u{FE8D}", "\u{FE8E}"]),
    // Beh (ب)
    ("\u{0628}", &["\u{FE8F}", "\u{FE90}", "\u{FE91}", "\u{FE92}"]),
    // Peh (پ)
    ("\u{067E}", &["\u{FB56}", "\u{FB57}", "\u{FB58}", "\u{FB59}"]),
    // Teh (ت)
    ("\u{062A}", &["\u{FE95}", "\u{FE96}", "\u{FE97}", "\u{FE98}"]),
    // Tteh (ٹ)
    ("\u{0679}", &["\u{FB66}", "\u{FB67}", "\u{FB68}", "\u{FB69}"]),
    // Jeem (ج)
    ("\u{062C}", &["\u{FE9D}", "\u{FE9E}", "\u{FE9F}", "\u{FEA0}"]),
    // Tcheh (چ)
    ("\u{0686}", &["\u{FB7A}", "\u{FB7B}", "\u{FB7C}", "\u{FB7D}"]),
    // Dal (د)
    ("\u{062F}", &["\u{FEA9}", "\u{FEAA}"]),
    // Ddal (ڈ)
    ("\u{0688}", &["\u{FB88}", "\u{FB89}"]),
    // Reh (ر)
    ("\u{0631}", &["\u{FEAD}", "\u{FEAE}"]),
    // Rreh (ڑ)
    ("\u{0691}", &["\u{FB8C}", "\u{FB8D}"]),
    // Jeh (ژ)
    ("\u{0698}", &["\u{FB8A}", "\u{FB8B}"]),
    // Keheh (ک)
    (
        "\u{06A9}",
        &[
            "\u{0643}", "\u{06AA}", "\u{FB8E}", "\u{FB8F}", "\u{FB90}", "\u{FB91}", "\u{FED9}",
            "\u{FEDA}", "\u{FEDB}", "\u{FEDC}",
        ],
    ),
    // Gaf (گ)
    ("\u{06AF}", &["\u{FB92}", "\u{FB93}", "\u{FB94}", "\u{FB95}"]),
    // Lam (ل)
    ("\u{0644}", &["\u{FEDD}", "\u{FEDE}", "\u{FEDF}", "\u{FEE0}"]),
    // Lam-alef ligatures
    ("\u{0644}\u{0627}", &["\u{FEFB}", "\u{FEFC}"]),
    ("\u{0644}\u{0622}", &["\u{FEF5}", "\u{FEF6}"]),
    // Meem (م)
    ("\u{0645}", &["\u{FEE1}", "\u{FEE2}", "\u{FEE3}", "\u{FEE4}"]),
    // Noon (ن)
    ("\u{0646}", &["\u{FEE5}", "\u{FEE6}", "\u{FEE7}", "\u{FEE8}"]),
    // Noon ghunna (ں)
    ("\u{06BA}", &["\u{FB9E}", "\u{FB9F}"]),
    // Waw (و)
    ("\u{0648}", &["\u{FEED}", "\u{FEEE}"]),
    // Waw with hamza above (ؤ)
    ("\u{0624}", &["\u{0648}\u{0654}"]),
    // Oe (ۆ)
    ("\u{06C6}", &["\u{0648}\u{065A}"]),
    // Heh goal (ہ)
    (
        "\u{06C1}",
        &[
            "\u{0647}", "\u{06D5}", "\u{FBA6}", "\u{FBA7}", "\u{FBA8}", "\u{FBA9}", "\u{FEE9}",
            "\u{FEEA}", "\u{FEEB}", "\u{FEEC}",
        ],
    ),
    // Heh doachashmee (ھ)
    ("\u{06BE}", &["\u{FBAA}", "\u{FBAB}", "\u{FBAC}", "\u{FBAD}"]),
    // Teh marbuta goal (ۃ)
    ("\u{06C3}", &["\u{0629}", "\u{FE93}", "\u{FE94}"]),
    // Hamza (ء)
    ("\u{0621}", &["\u{FE80}"]),
    // Farsi yeh (ی)
    (
        "\u{06CC}",
        &[
            "\u{064A}", "\u{0649}", "\u{FBFC}", "\u{FBFD}", "\u{FBFE}", "\u{FBFF}", "\u{FEEF}",
            "\u{FEF0}", "\u{FEF1}", "\u{FEF2}", "\u{FEF3}", "\u{FEF4}",
        ],
    ),
    // Yeh with small v (ێ), often typed as yeh + small v above
    ("\u{06CE}", &["\u{06CC}\u{065A}", "\u{064A}\u{065A}", "\u{0649}\u{065A}"]),
    // Yeh with hamza above (ئ)
    ("\u{0626}", &["\u{06CC}\u{0654}", "\u{064A}\u{0654}"]),
    // Yeh barree (ے)
    ("\u{06D2}", &["\u{FBAE}", "\u{FBAF}"]),
];

pub const PUNCTUATION_MAPPING: StaticTable = &[
    // Arabic comma (،)
    ("\u{060C}", &["\u{FF0C}"]),
    // Arabic semicolon (؛)
    ("\u{061B}", &["\u{FF1B}"]),
    // Arabic question mark (؟)
    ("\u{061F}", &["\u{FF1F}"]),
    ("!", &["\u{FF01}"]),
    (":", &["\u{FF1A}"]),
    ("(", &["\u{FF08}"]),
    (")", &["\u{FF09}"]),
    ("\"", &["\u{201C}", "\u{201D}", "\u{201E}", "\u{201F}"]),
    ("'", &["\u{2018}", "\u{2019}", "\u{201A}", "\u{201B}"]),
    ("-", &["\u{2010}", "\u{2011}", "\u{2012}", "\u{2013}", "\u{2014}"]),
    ("...", &["\u{2026}"]),
];

/// Latin digit → Perso-Arabic forms. The first form of each entry is the one
/// produced when converting toward Perso-Arabic.
pub const LATIN_DIGIT_MAPPING: StaticTable = &[
    ("0", &["\u{06F0}", "\u{0660}"]),
    ("1", &["\u{06F1}", "\u{0661}"]),
    ("2", &["\u{06F2}", "\u{0662}"]),
    ("3", &["\u{06F3}", "\u{0663}"]),
    ("4", &["\u{06F4}", "\u{0664}"]),
    ("5", &["\u{06F5}", "\u{0665}"]),
    ("6", &["\u{06F6}", "\u{0666}"]),
    ("7", &["\u{06F7}", "\u{0667}"]),
    ("8", &["\u{06F8}", "\u{0668}"]),
    ("9", &["\u{06F9}", "\u{0669}"]),
];

/// Characters that get spacing treatment
pub const KASHMIRI_PUNCTUATIONS: &[char] = &[
    '.', ',', '!', '?', ':', ';',
    '\u{060C}', // Arabic comma (،)
    '\u{061B}', // Arabic semicolon (؛)
    '\u{061F}', // Arabic question mark (؟)
    '\u{06D4}', // Arabic full stop (۔)
];

pub const KASHMIRI_DIACRITICS: &[char] = &[
    '\u{0618}', // Small fatha
    '\u{0619}', // Small damma
    '\u{061A}', // Small kasra
    '\u{064B}', // Fathatan
    '\u{064C}', // Dammatan
    '\u{064D}', // Kasratan
    '\u{064E}', // Fatha
    '\u{064F}', // Damma
    '\u{0650}', // Kasra
    '\u{0651}', // Shadda
    '\u{0652}', // Sukun
    '\u{0653}', // Maddah above
    '\u{0654}', // Hamza above
    '\u{0655}', // Hamza below
    '\u{0656}', // Subscript alef
    '\u{0657}', // Inverted damma
    '\u{0658}', // Mark noon ghunna
    '\u{0659}', // Zwarakay
    '\u{065A}', // Vowel sign small v above
    '\u{065B}', // Vowel sign inverted small v above
    '\u{065C}', // Vowel sign dot below
    '\u{065D}', // Reversed damma
    '\u{065E}', // Fatha with two dots
    '\u{065F}', // Wavy hamza below
    '\u{0670}', // Superscript alef
];

/// Canonical Kashmiri letters
pub const KASHMIRI_ALPHABET: &[char] = &[
    'ا', 'آ', 'ٲ', 'ٳ', 'ب', 'پ', 'ت', 'ٹ', 'ث', 'ج', 'چ', 'ح', 'خ', 'د', 'ڈ', 'ذ', 'ر', 'ڑ',
    'ز', 'ژ', 'س', 'ش', 'ص', 'ض', 'ط', 'ظ', 'ع', 'غ', 'ف', 'ق', 'ک', 'گ', 'ل', 'م', 'ن', 'ں',
    'و', 'ۄ', 'ۆ', 'ؤ', 'ہ', 'ھ', 'ۃ', 'ء', 'ی', 'ێ', 'ؠ', 'ۍ', 'ئ', 'ے',
];

/// Every character this normalizer treats specially: letters, diacritics,
/// punctuation and both digit scripts, sorted and deduplicated
pub static ALL_CHARACTERS: Lazy<Vec<char>> = Lazy::new(|| {
    let digits = LATIN_DIGIT_MAPPING
        .iter()
        .flat_map(|(latin, forms)| latin.chars().chain(forms.iter().flat_map(|f| f.chars())));

    KASHMIRI_ALPHABET
        .iter()
        .chain(KASHMIRI_DIACRITICS)
        .chain(KASHMIRI_PUNCTUATIONS)
        .copied()
        .chain(digits)
        .collect::<BTreeSet<char>>()
        .into_iter()
        .collect()
});

pub fn is_recognized(c: char) -> bool {
    ALL_CHARACTERS.binary_search(&c).is_ok()
}

pub fn character_table() -> EquivalenceTable {
    EquivalenceTable::from_static(CHARACTER_MAPPING)
}

pub fn punctuation_table() -> EquivalenceTable {
    EquivalenceTable::from_static(PUNCTUATION_MAPPING)
}

pub fn to_latin_digit_table() -> EquivalenceTable {
    EquivalenceTable::from_static(LATIN_DIGIT_MAPPING)
}

pub fn to_perso_arabic_digit_table() -> EquivalenceTable {
    to_latin_digit_table().invert_primary()
}

/// Every diacritic collapses to the empty string
pub fn diacritic_table() -> EquivalenceTable {
    let mut table = EquivalenceTable::new();
    table.insert("", KASHMIRI_DIACRITICS.iter().map(|c| c.to_string()));
    table
}

/// Compile a replacer for one of the built-in tables.
///
/// Built-in tables are checked by the crate's tests, and escaped literals
/// always form a valid pattern.
pub(crate) fn compile(name: &str, table: &EquivalenceTable) -> PatternReplacer {
    let replacer = PatternReplacer::new(table)
        .unwrap_or_else(|e| panic!("built-in {name} table failed to compile: {e}"));
    tracing::debug!(table = name, variants = replacer.variant_count(), "compiled replacer");
    replacer
}
