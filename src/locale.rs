//! Locale type: the language variant a content request asks for.
//!
//! Unlike a registry-backed language type, a `Locale` accepts any code.
//! Whether a variant exists is decided by the content store at resolution
//! time, and anything it cannot find silently falls back to the baseline.

use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::sync::OnceLock;

/// Code of the mandatory baseline locale.
pub const BASELINE_CODE: &str = "en";

/// A requested content locale (e.g. "en", "ru").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub struct Locale {
    code: String,
}

/// Matches codes that are safe to splice into a filename as-is.
fn segment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Locale pattern should compile"))
}

impl Locale {
    /// The baseline locale ("en").
    pub fn baseline() -> Self {
        Self {
            code: BASELINE_CODE.to_string(),
        }
    }

    /// Create a locale from a code string.
    ///
    /// No validation against known languages is performed. An empty code
    /// means "no preference" and yields the baseline.
    pub fn from_code(code: &str) -> Self {
        if code.is_empty() {
            return Self::baseline();
        }
        Self {
            code: code.to_string(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_baseline(&self) -> bool {
        self.code == BASELINE_CODE
    }

    /// Whether the code is a single filename segment (ASCII alphanumerics,
    /// `-` and `_`). Codes that are not never reach the filesystem.
    pub fn is_path_safe(&self) -> bool {
        segment_pattern().is_match(&self.code)
    }

    /// Insert this locale's code before the extension of `base_filename`.
    ///
    /// `faq.json` becomes `faq.ru.json`; a name without an extension gets the
    /// code appended (`LICENSE` becomes `LICENSE.ru`).
    pub fn qualify_filename(&self, base_filename: &str) -> String {
        match base_filename.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => format!("{}.{}.{}", stem, self.code, ext),
            _ => format!("{}.{}", base_filename, self.code),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::baseline()
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Construction Tests ====================

    #[test]
    fn test_baseline_is_english() {
        let locale = Locale::baseline();
        assert_eq!(locale.code(), "en");
        assert!(locale.is_baseline());
    }

    #[test]
    fn test_default_is_baseline() {
        assert_eq!(Locale::default(), Locale::baseline());
    }

    #[test]
    fn test_from_code_accepts_unknown_codes() {
        let locale = Locale::from_code("xx");
        assert_eq!(locale.code(), "xx");
        assert!(!locale.is_baseline());
    }

    #[test]
    fn test_from_code_empty_is_baseline() {
        assert!(Locale::from_code("").is_baseline());
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(!Locale::from_code("EN").is_baseline());
    }

    #[test]
    fn test_deserialize_from_string() {
        let locale: Locale = serde_json::from_str(r#""ru""#).expect("Should deserialize");
        assert_eq!(locale.code(), "ru");

        let empty: Locale = serde_json::from_str(r#""""#).expect("Should deserialize");
        assert!(empty.is_baseline());
    }

    #[test]
    fn test_display() {
        assert_eq!(Locale::from_code("ru").to_string(), "ru");
    }

    // ==================== Filename Qualification Tests ====================

    #[test]
    fn test_qualify_json_filename() {
        let ru = Locale::from_code("ru");
        assert_eq!(ru.qualify_filename("faq.json"), "faq.ru.json");
    }

    #[test]
    fn test_qualify_markdown_filename() {
        let ru = Locale::from_code("ru");
        assert_eq!(ru.qualify_filename("about.md"), "about.ru.md");
    }

    #[test]
    fn test_qualify_uses_last_extension() {
        let es = Locale::from_code("es");
        assert_eq!(es.qualify_filename("archive.tar.gz"), "archive.tar.es.gz");
    }

    #[test]
    fn test_qualify_without_extension() {
        let ru = Locale::from_code("ru");
        assert_eq!(ru.qualify_filename("LICENSE"), "LICENSE.ru");
        assert_eq!(ru.qualify_filename(".hidden"), ".hidden.ru");
    }

    // ==================== Path Safety Tests ====================

    #[test]
    fn test_ordinary_codes_are_path_safe() {
        for code in ["en", "ru", "pt-BR", "zh_Hans"] {
            assert!(Locale::from_code(code).is_path_safe(), "{} should be safe", code);
        }
    }

    #[test]
    fn test_traversal_codes_are_not_path_safe() {
        for code in ["../etc", "a/b", "..", "ru.json", "a b", "ру"] {
            assert!(!Locale::from_code(code).is_path_safe(), "{} should be unsafe", code);
        }
    }
}
