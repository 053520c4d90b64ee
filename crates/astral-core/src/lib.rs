//! # Astral Core
//!
//! Core pipeline for producing short personalized astrological insights.
//!
//! This crate contains:
//! - Domain types: birth profile, zodiac sign, vedic attributes
//! - Capability contracts for the optional external services
//!   (generative text, translation, geocoding, ephemeris)
//! - The generation pipeline: vedic resolution, buffered composition
//!   with deterministic fallback, the translation gate, and the
//!   streaming-vs-buffered delivery policy
//!
//! This crate does NOT care about:
//! - How requests arrive (HTTP routing and validation live upstream)
//! - How capability clients talk to their services (see `astral-providers`)
//! - Where configuration comes from (see `astral-config`)

pub mod capability;
pub mod composer;
pub mod orchestrator;
pub mod profile;
pub mod service;
pub mod translate;
pub mod vedic;
pub mod zodiac;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::capability::{
        EphemerisError, GenerateError, GeocodeError, Geocoder, MoonEphemeris, TextGenerator,
        TokenStream, TranslateError, Translator,
    };
    pub use crate::composer::{FixedSelector, InsightComposer, TemplateSelector, UniformSelector};
    pub use crate::orchestrator::{InsightStream, StreamingOrchestrator};
    pub use crate::profile::{BirthProfile, ProfileError};
    pub use crate::service::{Insight, InsightService, InsightServiceBuilder};
    pub use crate::translate::{TranslationGate, BASE_LANGUAGE};
    pub use crate::vedic::{Nakshatra, Rasi, VedicAttributeResolver, VedicAttributes};
    pub use crate::zodiac::ZodiacSign;
}

// Re-export key types at crate root
pub use capability::{Geocoder, MoonEphemeris, TextGenerator, TokenStream, Translator};
pub use orchestrator::{InsightStream, StreamingOrchestrator};
pub use profile::{BirthProfile, ProfileError};
pub use service::{Insight, InsightService, InsightServiceBuilder};
pub use vedic::{Nakshatra, Rasi, VedicAttributeResolver, VedicAttributes};
pub use zodiac::ZodiacSign;
