use serde::Serialize;

/// One supported language: UI labels plus the code the speech provider expects.
#[derive(Debug, Serialize)]
pub struct Language {
    #[serde(skip_serializing)]
    pub code: &'static str,
    pub name: &'static str,
    pub native: &'static str,
    pub tts_lang: &'static str,
}

static FALLBACK: Language = Language {
    code: "en",
    name: "English",
    native: "English",
    tts_lang: "en",
};

static LANGUAGES: &[Language] = &[
    Language { code: "hi", name: "Hindi", native: "हिन्दी", tts_lang: "hi" },
    Language { code: "bn", name: "Bengali", native: "বাংলা", tts_lang: "bn" },
    Language { code: "te", name: "Telugu", native: "తెలుగు", tts_lang: "te" },
    Language { code: "mr", name: "Marathi", native: "मराठी", tts_lang: "mr" },
    Language { code: "ta", name: "Tamil", native: "தமிழ்", tts_lang: "ta" },
    Language { code: "ur", name: "Urdu", native: "اردو", tts_lang: "ur" },
    Language { code: "gu", name: "Gujarati", native: "ગુજરાતી", tts_lang: "gu" },
    Language { code: "kn", name: "Kannada", native: "ಕನ್ನಡ", tts_lang: "kn" },
    Language { code: "ml", name: "Malayalam", native: "മലയാളം", tts_lang: "ml" },
    Language { code: "pa", name: "Punjabi", native: "ਪੰਜਾਬੀ", tts_lang: "pa" },
    Language { code: "or", name: "Odia", native: "ଓଡ଼ିଆ", tts_lang: "or" },
    Language { code: "as", name: "Assamese", native: "অসমীয়া", tts_lang: "as" },
    Language { code: "en", name: "English", native: "English", tts_lang: "en" },
];

/// Lookup over the supported-language catalog. Built once in `main` and
/// shared through application state.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    entries: &'static [Language],
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self { entries: LANGUAGES }
    }

    pub fn get(&self, code: &str) -> Option<&'static Language> {
        self.entries.iter().find(|l| l.code == code)
    }

    /// Unknown codes resolve to English, the catalog's safe default.
    pub fn get_or_default(&self, code: &str) -> &'static Language {
        self.get(code).unwrap_or(&FALLBACK)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'static, Language> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_thirteen_languages() {
        assert_eq!(LanguageRegistry::new().count(), 13);
    }

    #[test]
    fn every_language_has_a_speech_code() {
        for language in LanguageRegistry::new().iter() {
            assert!(
                !language.tts_lang.is_empty(),
                "{} lacks a speech code",
                language.code
            );
        }
    }

    #[test]
    fn looks_up_languages_by_code() {
        let registry = LanguageRegistry::new();
        let hindi = registry.get("hi").unwrap();
        assert_eq!(hindi.name, "Hindi");
        assert_eq!(hindi.native, "हिन्दी");
        assert_eq!(hindi.tts_lang, "hi");
    }

    #[test]
    fn unknown_codes_fall_back_to_english() {
        let registry = LanguageRegistry::new();
        assert!(registry.get("zz").is_none());
        assert_eq!(registry.get_or_default("zz").code, "en");
    }

    #[test]
    fn serializes_without_the_code_field() {
        let hindi = LanguageRegistry::new().get("hi").unwrap();
        let json = serde_json::to_value(hindi).unwrap();
        assert!(json.get("code").is_none());
        assert_eq!(json["name"], "Hindi");
    }
}
