//! Script classification used to pick a transliteration direction.

use std::ops::RangeInclusive;

/// The Cyrillic block. Contains the Uzbek extras ў қ ғ ҳ in both cases.
pub const CYRILLIC_RANGE: RangeInclusive<char> = '\u{0400}'..='\u{04FF}';

/// A Cyrillic letter: alphabetic and inside [`CYRILLIC_RANGE`].
///
/// Signs and combining marks of the block (҂, titlo, enclosing marks) do not
/// count.
#[inline]
pub fn is_cyrillic(c: char) -> bool {
    CYRILLIC_RANGE.contains(&c) && c.is_alphabetic()
}

/// Returns true if any codepoint of `text` is a Cyrillic letter.
///
/// This is a presence test: one Cyrillic letter in otherwise Latin text is
/// enough to treat the whole string as Cyrillic.
pub fn is_cyrillic_dominant(text: &str) -> bool {
    text.chars().any(is_cyrillic)
}
