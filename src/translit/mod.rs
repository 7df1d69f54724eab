//! Uzbek Latin ↔ Cyrillic transliteration
//!
//! # Overview
//!
//! 1. **Grapheme tables** - static digraph and single-letter mappings, case-exact
//! 2. **Apostrophe normalizer** - collapses `'`, `` ` ``, `’`, `ʻ` and friends to `‘`
//! 3. **Script classifier** - any Cyrillic codepoint marks the text as Cyrillic
//! 4. **Engine** - greedy longest-match transducer in both directions
//!
//! # Example
//!
//! ```
//! use tarjimon::translit::transliterate;
//!
//! assert_eq!(transliterate("o'zbek"), "ўзбек");
//! assert_eq!(transliterate("ўзбек"), "o‘zbek");
//! ```
pub mod apostrophe;
pub mod engine;
pub mod script;
pub mod table;

pub use apostrophe::{CANONICAL_APOSTROPHE, normalize};
pub use engine::{cyrillic_to_latin, latin_to_cyrillic};
pub use script::is_cyrillic_dominant;

/// Direction chosen for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    CyrillicToLatin,
    LatinToCyrillic,
}

impl Direction {
    pub fn detect(text: &str) -> Self {
        if is_cyrillic_dominant(text) {
            Direction::CyrillicToLatin
        } else {
            Direction::LatinToCyrillic
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Direction::CyrillicToLatin => cyrillic_to_latin(text),
            Direction::LatinToCyrillic => latin_to_cyrillic(text),
        }
    }
}

/// Transliterate into the other script, detecting the direction from `text`.
///
/// Never fails: unmapped characters are passed through.
pub fn transliterate(text: &str) -> String {
    Direction::detect(text).apply(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_detection() {
        assert_eq!(Direction::detect("salom"), Direction::LatinToCyrillic);
        assert_eq!(Direction::detect("салом"), Direction::CyrillicToLatin);
        assert_eq!(Direction::detect(""), Direction::LatinToCyrillic);
    }

    #[test]
    fn test_transliterate_latin_input() {
        assert_eq!(transliterate("salom"), "салом");
        assert_eq!(transliterate("o‘zbek"), "ўзбек");
    }

    #[test]
    fn test_transliterate_cyrillic_input() {
        assert_eq!(transliterate("Тошкент шаҳри"), "Toshkent shahri");
    }

    #[test]
    fn test_mixed_script_goes_cyrillic_to_latin() {
        // One Cyrillic letter is enough; the Latin part passes through.
        assert_eq!(transliterate("privetЯ"), "privetYa");
    }

    #[test]
    fn test_transliterate_empty() {
        assert_eq!(transliterate(""), "");
    }
}
