//! Top-level facade consumed by transport layers.

use std::sync::Arc;

use chrono::Datelike;
use serde::Serialize;

use crate::capability::{Geocoder, MoonEphemeris, TextGenerator, Translator};
use crate::composer::{InsightComposer, TemplateSelector, UniformSelector};
use crate::orchestrator::{InsightStream, StreamingOrchestrator};
use crate::profile::BirthProfile;
use crate::translate::TranslationGate;
use crate::vedic::{VedicAttributeResolver, VedicAttributes};
use crate::zodiac::ZodiacSign;

/// Buffered insight response.
#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub zodiac: ZodiacSign,
    pub rasi: String,
    pub nakshatra: String,
    pub insight: String,
    pub language: String,
}

/// Request-facing surface of the pipeline.
///
/// Holds no mutable state; concurrent requests share it behind an `Arc`
/// without locking.
pub struct InsightService {
    resolver: VedicAttributeResolver,
    composer: Arc<InsightComposer>,
    orchestrator: StreamingOrchestrator,
}

impl InsightService {
    pub fn builder() -> InsightServiceBuilder {
        InsightServiceBuilder::default()
    }

    /// Compute the request-local astrological attributes.
    pub async fn compute_attributes(
        &self,
        profile: &BirthProfile,
    ) -> (ZodiacSign, VedicAttributes) {
        let zodiac =
            ZodiacSign::from_day_month(profile.birth_date.day(), profile.birth_date.month());
        let vedic = self
            .resolver
            .resolve(profile.birth_date, &profile.birth_time, &profile.birth_place)
            .await;
        (zodiac, vedic)
    }

    /// Produce a complete buffered insight.
    pub async fn compose_insight(&self, profile: &BirthProfile) -> Insight {
        let (zodiac, vedic) = self.compute_attributes(profile).await;
        let text = self.composer.compose(profile, zodiac, &vedic).await;
        Insight {
            zodiac,
            rasi: vedic.rasi_name().to_string(),
            nakshatra: vedic.nakshatra_name().to_string(),
            insight: text,
            language: profile.language.clone(),
        }
    }

    /// Produce the chunk sequence for a live request.
    pub async fn stream_insight(&self, profile: &BirthProfile) -> InsightStream {
        let (zodiac, vedic) = self.compute_attributes(profile).await;
        self.orchestrator.stream(profile.clone(), zodiac, vedic)
    }
}

/// Assembles an [`InsightService`] from whichever capabilities exist.
#[derive(Default)]
pub struct InsightServiceBuilder {
    generator: Option<Arc<dyn TextGenerator>>,
    translator: Option<Arc<dyn Translator>>,
    geocoder: Option<Arc<dyn Geocoder>>,
    ephemeris: Option<Arc<dyn MoonEphemeris>>,
    selector: Option<Arc<dyn TemplateSelector>>,
}

impl InsightServiceBuilder {
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn with_geocoder(mut self, geocoder: Arc<dyn Geocoder>) -> Self {
        self.geocoder = Some(geocoder);
        self
    }

    pub fn with_ephemeris(mut self, ephemeris: Arc<dyn MoonEphemeris>) -> Self {
        self.ephemeris = Some(ephemeris);
        self
    }

    pub fn with_selector(mut self, selector: Arc<dyn TemplateSelector>) -> Self {
        self.selector = Some(selector);
        self
    }

    pub fn build(self) -> InsightService {
        let selector = self
            .selector
            .unwrap_or_else(|| Arc::new(UniformSelector) as Arc<dyn TemplateSelector>);
        let gate = TranslationGate::new(self.translator);
        let composer = Arc::new(InsightComposer::new(self.generator.clone(), gate, selector));
        InsightService {
            resolver: VedicAttributeResolver::new(self.geocoder, self.ephemeris),
            orchestrator: StreamingOrchestrator::new(self.generator, Arc::clone(&composer)),
            composer,
        }
    }
}
