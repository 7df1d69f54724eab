//! Apostrophe canonicalization
//!
//! Uzbek Latin writes `o‘`, `g‘` and the tutuq belgisi with an apostrophe, but
//! users type whatever their keyboard offers. Every look-alike is collapsed to
//! [`CANONICAL_APOSTROPHE`] before any table lookup.

/// The one apostrophe codepoint the grapheme tables are keyed on (U+2018).
pub const CANONICAL_APOSTROPHE: char = '\u{2018}';

/// Codepoints accepted as an apostrophe.
pub const APOSTROPHE_VARIANTS: [char; 8] = [
    '\u{0027}', // '
    '\u{0060}', // `
    '\u{00B4}', // ´
    '\u{2018}', // ‘
    '\u{2019}', // ’
    '\u{02BB}', // ʻ
    '\u{02BC}', // ʼ
    '\u{02BD}', // ʽ
];

/// Returns true if `c` is one of the accepted apostrophe variants.
#[inline]
pub fn is_apostrophe(c: char) -> bool {
    APOSTROPHE_VARIANTS.contains(&c)
}

/// Replace every apostrophe variant with the canonical apostrophe.
///
/// Replacement is 1:1, so the output has exactly as many codepoints as the
/// input. Applying it twice is the same as applying it once.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| if is_apostrophe(c) { CANONICAL_APOSTROPHE } else { c })
        .collect()
}
