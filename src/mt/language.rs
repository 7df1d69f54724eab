//! Language tags and hops
//!
//! The supported set is closed: Uzbek, Russian and English. Tags are parsed
//! case-insensitively after trimming surrounding whitespace.

use crate::mt::error::{MtError, MtResult};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Uz,
    Ru,
    En,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Uz, Language::Ru, Language::En];

    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Language::Uz => "uz",
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    /// Normalize and parse a user-supplied tag
    ///
    /// ```
    /// use tarjimon::Language;
    ///
    /// assert_eq!(Language::parse(" UZ ").unwrap(), Language::Uz);
    /// assert!(Language::parse("de").is_err());
    /// ```
    pub fn parse(tag: &str) -> MtResult<Self> {
        match tag.trim().to_lowercase().as_str() {
            "uz" => Ok(Language::Uz),
            "ru" => Ok(Language::Ru),
            "en" => Ok(Language::En),
            _ => Err(MtError::InvalidLanguage(tag.to_string())),
        }
    }
}

impl FromStr for Language {
    type Err = MtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One single-backend leg of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hop {
    pub source: Language,
    pub target: Language,
}

impl Hop {
    pub const fn new(source: Language, target: Language) -> Self {
        Self { source, target }
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}
