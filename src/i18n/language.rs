//! Language type: validated language representation.
//!
//! A `Language` can only be built from a code that is present and enabled in
//! the registry, so string lookups on it never miss a table.

use crate::i18n::strings::{ARABIC_STRINGS, ENGLISH_STRINGS};
use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings};
use anyhow::{bail, Result};

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "ar")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const ARABIC: Language = Language { code: "ar" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical language (the one every string table is written from).
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for a Language built via `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    pub fn is_rtl(&self) -> bool {
        self.config().rtl
    }

    /// Get the localized string table for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        match self.code {
            "ar" => &ARABIC_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }

    /// Translate a page key, returning the key itself when it is unknown.
    ///
    /// ```ignore
    /// assert_eq!(Language::ENGLISH.t("sendMessage"), "Send Message");
    /// ```
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        match self.strings().lookup(key) {
            Some(value) => value,
            None => key,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_canonical());
        assert!(!english.is_rtl());
    }

    #[test]
    fn test_arabic_constant() {
        let arabic = Language::ARABIC;
        assert_eq!(arabic.code(), "ar");
        assert_eq!(arabic.name(), "Arabic");
        assert!(!arabic.is_canonical());
        assert!(arabic.is_rtl());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_arabic() {
        let language = Language::from_code("ar").expect("Should succeed");
        assert_eq!(language, Language::ARABIC);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_default_is_canonical() {
        assert_eq!(Language::default(), Language::ENGLISH);
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_t_resolves_known_key() {
        assert_eq!(Language::ENGLISH.t("sendMessage"), "Send Message");
        assert_eq!(
            Language::ARABIC.t("messageSent"),
            ARABIC_STRINGS.message_sent
        );
    }

    #[test]
    fn test_t_falls_back_to_key() {
        assert_eq!(Language::ENGLISH.t("noSuchKey"), "noSuchKey");
        assert_eq!(Language::ARABIC.t("noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_strings_follow_language() {
        assert_eq!(
            Language::ENGLISH.strings().sending_message,
            ENGLISH_STRINGS.sending_message
        );
        assert_eq!(
            Language::ARABIC.strings().sending_message,
            ARABIC_STRINGS.sending_message
        );
    }
}
