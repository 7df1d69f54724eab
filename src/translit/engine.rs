//! Table-driven transliteration in both directions.
//!
//! Both functions are total: any input, including empty or mixed-script text,
//! produces output. Unmapped codepoints are copied through.

use crate::translit::apostrophe;
use crate::translit::table;

/// Transliterate Cyrillic Uzbek into Latin Uzbek.
///
/// Each codepoint is looked up in the digraph table, then in the single-letter
/// table, and copied unchanged when neither has it. Hard and soft signs are
/// deleted, so the output may be shorter than the input.
pub fn cyrillic_to_latin(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match table::cyrillic_digraph(c).or_else(|| table::cyrillic_single(c)) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}

/// Transliterate Latin Uzbek into Cyrillic Uzbek.
///
/// Apostrophes are normalized first. The scan is greedy: a two-codepoint
/// window matching a digraph always wins over two single letters. Digraph
/// keys are matched with exact case; a window like `sH` falls through to
/// single-letter handling of `s` alone.
pub fn latin_to_cyrillic(text: &str) -> String {
    let chars: Vec<char> = apostrophe::normalize(text).chars().collect();
    let mut out = String::with_capacity(text.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        if let Some(&next) = chars.get(i + 1) {
            if let Some(cyr) = table::latin_digraph(chars[i], next) {
                out.push(cyr);
                i += 2;
                continue;
            }
        }

        let c = chars[i];
        out.push(table::latin_single(c).unwrap_or(c));
        i += 1;
    }

    out
}
