//! Languages offered on the upload form.
//!
//! Content generation treats the language as an opaque string; this table only
//! drives the form's select options and the `/api/categories` listing.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    Ja,
    Ko,
    Zh,
    Hi,
    Ar,
}

impl Language {
    pub const ALL: &'static [Language] = &[
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Ja,
        Language::Ko,
        Language::Zh,
        Language::Hi,
        Language::Ar,
    ];

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Ja => "ja",
            Language::Ko => "ko",
            Language::Zh => "zh",
            Language::Hi => "hi",
            Language::Ar => "ar",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Fr => "French",
            Language::De => "German",
            Language::Ja => "Japanese",
            Language::Ko => "Korean",
            Language::Zh => "Chinese",
            Language::Hi => "Hindi",
            Language::Ar => "Arabic",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| LanguageParseError(s.to_string()))
    }
}

#[derive(Debug, Error)]
#[error("Unknown language: {0}")]
pub struct LanguageParseError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!("ja".parse::<Language>().unwrap(), Language::Ja);
        assert_eq!("ar".parse::<Language>().unwrap(), Language::Ar);
        assert!("pt".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_table() {
        assert_eq!(Language::ALL.len(), 9);
        assert_eq!(Language::Zh.display_name(), "Chinese");
        assert_eq!(Language::default().code(), "en");
    }
}
