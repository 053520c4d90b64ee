//! # Astral Providers
//!
//! Concrete clients for the optional capabilities of the insight pipeline:
//! - [`OllamaClient`]: generative text against an Ollama server, buffered
//!   and token-streaming
//! - [`LibreTranslateClient`]: HTTP translation with auto-detected source
//! - [`NominatimGeocoder`]: free-text place resolution
//! - [`AnalyticMoonEphemeris`]: local sidereal moon longitude (Lahiri)
//!
//! Every client is constructed from its own config struct and injected into
//! `astral-core` as an `Arc<dyn Trait>`; leaving one out is how a deployment
//! runs without that capability.

mod ephemeris;
mod nominatim;
mod ollama;
mod translate;

pub use ephemeris::AnalyticMoonEphemeris;
pub use nominatim::{NominatimConfig, NominatimGeocoder};
pub use ollama::{OllamaClient, OllamaConfig};
pub use translate::{LibreTranslateClient, LibreTranslateConfig};
