//! Buffered insight composition.
//!
//! Builds the persona prompt, invokes the generative capability when one is
//! configured, and falls back to a fixed template pool when it is absent,
//! fails, or returns nothing. The result always passes the translation gate.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, warn};

use crate::capability::TextGenerator;
use crate::profile::BirthProfile;
use crate::translate::TranslationGate;
use crate::vedic::VedicAttributes;
use crate::zodiac::ZodiacSign;

/// Template index picker.
///
/// Production uses [`UniformSelector`]; tests inject [`FixedSelector`] to
/// pin the fallback choice.
pub trait TemplateSelector: Send + Sync {
    /// Pick an index in `0..pool_size`.
    fn pick(&self, pool_size: usize) -> usize;
}

/// Uniform random template selection.
pub struct UniformSelector;

impl TemplateSelector for UniformSelector {
    fn pick(&self, pool_size: usize) -> usize {
        rand::thread_rng().gen_range(0..pool_size)
    }
}

/// Always picks the same index (clamped to the pool).
pub struct FixedSelector(pub usize);

impl TemplateSelector for FixedSelector {
    fn pick(&self, pool_size: usize) -> usize {
        self.0.min(pool_size.saturating_sub(1))
    }
}

/// Build the persona prompt shared by the buffered and streaming paths.
///
/// The vedic-moon clause is included only when the attributes resolved.
pub fn persona_prompt(
    profile: &BirthProfile,
    zodiac: ZodiacSign,
    vedic: &VedicAttributes,
) -> String {
    let vedic_clause = match vedic {
        VedicAttributes::Resolved { rasi, .. } => format!(" Vedic Moon: {}.", rasi),
        VedicAttributes::Unknown => String::new(),
    };
    format!(
        "You are a mystical astrologer. Give a short, 2-sentence daily horoscope for {}, a {}.{} \
         Focus specifically on {} advice.",
        profile.name, zodiac, vedic_clause, profile.category
    )
}

/// The fixed fallback pool, interpolated for one request.
pub fn fallback_templates(profile: &BirthProfile, zodiac: ZodiacSign) -> Vec<String> {
    vec![
        format!(
            "Your {} energy favors {} today, {}.",
            zodiac, profile.category, profile.name
        ),
        format!(
            "{}, focus on {} as the stars align for {}.",
            profile.name, profile.category, zodiac
        ),
    ]
}

/// Buffered insight producer.
pub struct InsightComposer {
    generator: Option<Arc<dyn TextGenerator>>,
    gate: TranslationGate,
    selector: Arc<dyn TemplateSelector>,
}

impl InsightComposer {
    pub fn new(
        generator: Option<Arc<dyn TextGenerator>>,
        gate: TranslationGate,
        selector: Arc<dyn TemplateSelector>,
    ) -> Self {
        Self {
            generator,
            gate,
            selector,
        }
    }

    /// Produce a complete insight text in the profile's language.
    ///
    /// Generation errors and empty outputs fall through to the template
    /// pool; this method never fails.
    pub async fn compose(
        &self,
        profile: &BirthProfile,
        zodiac: ZodiacSign,
        vedic: &VedicAttributes,
    ) -> String {
        let mut text = String::new();
        if let Some(generator) = &self.generator {
            let prompt = persona_prompt(profile, zodiac, vedic);
            match generator.complete(&prompt).await {
                Ok(output) if !output.trim().is_empty() => text = output,
                Ok(_) => debug!("generator returned empty output; using template pool"),
                Err(e) => warn!(error = %e, "generation failed; using template pool"),
            }
        }
        if text.is_empty() {
            let mut pool = fallback_templates(profile, zodiac);
            let index = self.selector.pick(pool.len());
            text = pool.swap_remove(index);
        }
        self.gate.apply(text, &profile.language).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::capability::{GenerateError, TokenStream};

    struct StaticGenerator(String);

    #[async_trait]
    impl TextGenerator for StaticGenerator {
        async fn complete(&self, _prompt: &str) -> Result<String, GenerateError> {
            Ok(self.0.clone())
        }

        async fn stream_complete(&self, _prompt: &str) -> Result<TokenStream, GenerateError> {
            Err(GenerateError::Response("streaming not stubbed".to_string()))
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn complete(&self, _prompt: &str) -> Result<String, GenerateError> {
            Err(GenerateError::Http("model offline".to_string()))
        }

        async fn stream_complete(&self, _prompt: &str) -> Result<TokenStream, GenerateError> {
            Err(GenerateError::Http("model offline".to_string()))
        }
    }

    fn profile() -> BirthProfile {
        BirthProfile::new(
            "Maya",
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            "10:30",
            "Jaipur",
        )
        .with_category("Career")
    }

    fn composer_with(generator: Option<Arc<dyn TextGenerator>>, index: usize) -> InsightComposer {
        InsightComposer::new(
            generator,
            TranslationGate::new(None),
            Arc::new(FixedSelector(index)),
        )
    }

    #[test]
    fn test_prompt_includes_vedic_clause_only_when_resolved() {
        let profile = profile();
        let resolved = VedicAttributes::from_sidereal_longitude(100.0);
        let prompt = persona_prompt(&profile, ZodiacSign::Gemini, &resolved);
        assert!(prompt.contains("Vedic Moon: Karka (Cancer)."));
        assert!(prompt.contains("Maya, a Gemini"));
        assert!(prompt.contains("Career advice"));

        let prompt = persona_prompt(&profile, ZodiacSign::Gemini, &VedicAttributes::Unknown);
        assert!(!prompt.contains("Vedic Moon"));
    }

    #[tokio::test]
    async fn test_generator_output_passes_through_for_base_language() {
        let composer = composer_with(
            Some(Arc::new(StaticGenerator("The stars smile on you.".to_string()))),
            0,
        );
        let text = composer
            .compose(&profile(), ZodiacSign::Gemini, &VedicAttributes::Unknown)
            .await;
        assert_eq!(text, "The stars smile on you.");
    }

    #[tokio::test]
    async fn test_failing_generator_falls_back_to_template_pool() {
        let profile = profile();
        let pool = fallback_templates(&profile, ZodiacSign::Gemini);
        for index in 0..pool.len() {
            let composer = composer_with(Some(Arc::new(FailingGenerator)), index);
            let text = composer
                .compose(&profile, ZodiacSign::Gemini, &VedicAttributes::Unknown)
                .await;
            assert_eq!(text, pool[index]);
        }
    }

    #[tokio::test]
    async fn test_empty_generator_output_counts_as_no_result() {
        let composer = composer_with(Some(Arc::new(StaticGenerator("  ".to_string()))), 1);
        let profile = profile();
        let text = composer
            .compose(&profile, ZodiacSign::Gemini, &VedicAttributes::Unknown)
            .await;
        assert!(fallback_templates(&profile, ZodiacSign::Gemini).contains(&text));
    }

    #[tokio::test]
    async fn test_no_generator_uses_template_pool() {
        let composer = composer_with(None, 0);
        let profile = profile();
        let text = composer
            .compose(&profile, ZodiacSign::Gemini, &VedicAttributes::Unknown)
            .await;
        assert_eq!(text, fallback_templates(&profile, ZodiacSign::Gemini)[0]);
    }

    #[test]
    fn test_uniform_selector_stays_in_bounds() {
        let selector = UniformSelector;
        for _ in 0..100 {
            assert!(selector.pick(2) < 2);
        }
    }
}
