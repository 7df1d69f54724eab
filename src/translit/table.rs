//! Grapheme tables for Uzbek Latin ↔ Cyrillic
//!
//! Pure data. Upper- and lower-case forms are listed as separate entries, so
//! `Ш` maps to `Sh` and only the exact window `Sh` maps back to `Ш`.
//! Everything not listed here (digits, punctuation, whitespace, letters of
//! other alphabets) passes through unchanged.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Cyrillic letters written with two Latin codepoints.
pub static CYRILLIC_DIGRAPHS: &[(char, &str)] = &[
    ('ш', "sh"),
    ('ч', "ch"),
    ('ё', "yo"),
    ('ю', "yu"),
    ('я', "ya"),
    ('ц', "ts"),
    ('ў', "o‘"),
    ('ғ', "g‘"),
    ('Ш', "Sh"),
    ('Ч', "Ch"),
    ('Ё', "Yo"),
    ('Ю', "Yu"),
    ('Я', "Ya"),
    ('Ц', "Ts"),
    ('Ў', "O‘"),
    ('Ғ', "G‘"),
];

/// Cyrillic letters written with one Latin codepoint, or deleted (ъ, ь).
pub static CYRILLIC_SINGLES: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ж', "j"),
    ('з', "z"),
    ('и', "i"),
    ('й', "y"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "x"),
    ('ҳ', "h"),
    ('қ', "q"),
    ('э', "e"),
    ('ъ', ""),
    ('ь', ""),
    ('А', "A"),
    ('Б', "B"),
    ('В', "V"),
    ('Г', "G"),
    ('Д', "D"),
    ('Е', "E"),
    ('Ж', "J"),
    ('З', "Z"),
    ('И', "I"),
    ('Й', "Y"),
    ('К', "K"),
    ('Л', "L"),
    ('М', "M"),
    ('Н', "N"),
    ('О', "O"),
    ('П', "P"),
    ('Р', "R"),
    ('С', "S"),
    ('Т', "T"),
    ('У', "U"),
    ('Ф', "F"),
    ('Х', "X"),
    ('Ҳ', "H"),
    ('Қ', "Q"),
    ('Э', "E"),
    ('Ъ', ""),
    ('Ь', ""),
];

/// Two-codepoint Latin windows read as one Cyrillic letter.
///
/// Keys use the canonical apostrophe; input must be normalized first.
pub static LATIN_DIGRAPHS: &[([char; 2], char)] = &[
    (['s', 'h'], 'ш'),
    (['c', 'h'], 'ч'),
    (['y', 'o'], 'ё'),
    (['y', 'u'], 'ю'),
    (['y', 'a'], 'я'),
    (['t', 's'], 'ц'),
    (['o', '‘'], 'ў'),
    (['g', '‘'], 'ғ'),
    (['S', 'h'], 'Ш'),
    (['C', 'h'], 'Ч'),
    (['Y', 'o'], 'Ё'),
    (['Y', 'u'], 'Ю'),
    (['Y', 'a'], 'Я'),
    (['T', 's'], 'Ц'),
    (['O', '‘'], 'Ў'),
    (['G', '‘'], 'Ғ'),
];

pub static LATIN_SINGLES: &[(char, char)] = &[
    ('a', 'а'),
    ('b', 'б'),
    ('v', 'в'),
    ('g', 'г'),
    ('d', 'д'),
    ('e', 'е'),
    ('j', 'ж'),
    ('z', 'з'),
    ('i', 'и'),
    ('y', 'й'),
    ('k', 'к'),
    ('l', 'л'),
    ('m', 'м'),
    ('n', 'н'),
    ('o', 'о'),
    ('p', 'п'),
    ('r', 'р'),
    ('s', 'с'),
    ('t', 'т'),
    ('u', 'у'),
    ('f', 'ф'),
    ('x', 'х'),
    ('h', 'ҳ'),
    ('q', 'қ'),
    ('A', 'А'),
    ('B', 'Б'),
    ('V', 'В'),
    ('G', 'Г'),
    ('D', 'Д'),
    ('E', 'Е'),
    ('J', 'Ж'),
    ('Z', 'З'),
    ('I', 'И'),
    ('Y', 'Й'),
    ('K', 'К'),
    ('L', 'Л'),
    ('M', 'М'),
    ('N', 'Н'),
    ('O', 'О'),
    ('P', 'П'),
    ('R', 'Р'),
    ('S', 'С'),
    ('T', 'Т'),
    ('U', 'У'),
    ('F', 'Ф'),
    ('X', 'Х'),
    ('H', 'Ҳ'),
    ('Q', 'Қ'),
];

static CYRILLIC_DIGRAPH_MAP: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| CYRILLIC_DIGRAPHS.iter().copied().collect());

static CYRILLIC_SINGLE_MAP: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| CYRILLIC_SINGLES.iter().copied().collect());

static LATIN_DIGRAPH_MAP: LazyLock<HashMap<[char; 2], char>> =
    LazyLock::new(|| LATIN_DIGRAPHS.iter().copied().collect());

static LATIN_SINGLE_MAP: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| LATIN_SINGLES.iter().copied().collect());

/// Latin digraph for a Cyrillic letter, if it has one.
#[inline]
pub fn cyrillic_digraph(c: char) -> Option<&'static str> {
    CYRILLIC_DIGRAPH_MAP.get(&c).copied()
}

/// Single-letter (or empty) Latin form of a Cyrillic letter.
#[inline]
pub fn cyrillic_single(c: char) -> Option<&'static str> {
    CYRILLIC_SINGLE_MAP.get(&c).copied()
}

/// Cyrillic letter for an exact-case two-codepoint Latin window.
#[inline]
pub fn latin_digraph(first: char, second: char) -> Option<char> {
    LATIN_DIGRAPH_MAP.get(&[first, second]).copied()
}

#[inline]
pub fn latin_single(c: char) -> Option<char> {
    LATIN_SINGLE_MAP.get(&c).copied()
}
