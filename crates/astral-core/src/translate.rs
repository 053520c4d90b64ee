//! Translation gate.
//!
//! Insights and fallback templates are produced in the base language; this
//! gate decides whether a translation pass is needed and degrades to the
//! untranslated text whenever the capability cannot deliver one.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::capability::Translator;

/// Language generation and templates are natively produced in.
pub const BASE_LANGUAGE: &str = "English";

/// Whether a requested language needs no translation pass.
pub fn is_base_language(language: &str) -> bool {
    language.eq_ignore_ascii_case(BASE_LANGUAGE)
}

/// Map a target-language name to the code the translation capability
/// understands. Unrecognized names fall back to `"en"`.
pub fn language_code(language: &str) -> &'static str {
    match language.to_ascii_lowercase().as_str() {
        "hindi" => "hi",
        "spanish" => "es",
        "french" => "fr",
        "german" => "de",
        "tamil" => "ta",
        "telugu" => "te",
        _ => "en",
    }
}

/// Pass-through-on-failure translation step.
pub struct TranslationGate {
    translator: Option<Arc<dyn Translator>>,
}

impl TranslationGate {
    pub fn new(translator: Option<Arc<dyn Translator>>) -> Self {
        Self { translator }
    }

    /// Translate `text` into `language`, or return it unchanged when the
    /// base language is requested, the capability is absent, or it fails.
    pub async fn apply(&self, text: String, language: &str) -> String {
        if is_base_language(language) {
            return text;
        }
        let Some(translator) = &self.translator else {
            debug!(language, "translator not configured; returning untranslated text");
            return text;
        };
        match translator.translate(&text, language_code(language)).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!(language, error = %e, "translation failed; returning untranslated text");
                text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::capability::TranslateError;

    struct UppercaseTranslator;

    #[async_trait]
    impl Translator for UppercaseTranslator {
        async fn translate(&self, text: &str, _target_code: &str) -> Result<String, TranslateError> {
            Ok(text.to_uppercase())
        }
    }

    struct FailingTranslator;

    #[async_trait]
    impl Translator for FailingTranslator {
        async fn translate(&self, _text: &str, _target_code: &str) -> Result<String, TranslateError> {
            Err(TranslateError::Http("connection reset".to_string()))
        }
    }

    #[tokio::test]
    async fn test_base_language_is_identity_without_capability_call() {
        let gate = TranslationGate::new(Some(Arc::new(UppercaseTranslator)));
        for language in ["English", "english", "ENGLISH"] {
            let out = gate.apply("stars align".to_string(), language).await;
            assert_eq!(out, "stars align");
        }
    }

    #[tokio::test]
    async fn test_missing_or_failing_capability_passes_through() {
        let gate = TranslationGate::new(None);
        assert_eq!(gate.apply("text".to_string(), "Hindi").await, "text");

        let gate = TranslationGate::new(Some(Arc::new(FailingTranslator)));
        assert_eq!(gate.apply("text".to_string(), "Hindi").await, "text");
    }

    #[tokio::test]
    async fn test_non_base_language_delegates() {
        let gate = TranslationGate::new(Some(Arc::new(UppercaseTranslator)));
        assert_eq!(gate.apply("text".to_string(), "Hindi").await, "TEXT");
    }

    #[test]
    fn test_language_code_mapping() {
        assert_eq!(language_code("Hindi"), "hi");
        assert_eq!(language_code("hindi"), "hi");
        assert_eq!(language_code("Tamil"), "ta");
        assert_eq!(language_code("Klingon"), "en");
    }
}
