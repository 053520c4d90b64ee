//! Capability contracts for the optional external services.
//!
//! Each capability may be absent at runtime. Absence is decided once, at
//! construction time, by injecting `Some(Arc<dyn Trait>)` or `None` into the
//! component that consumes it; the pipeline never probes for capabilities
//! mid-request.

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use thiserror::Error;

/// Incremental output of a streaming generation session.
///
/// Dropping the stream before exhaustion releases the session.
pub type TokenStream = BoxStream<'static, Result<String, GenerateError>>;

/// Generative-text errors
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("http error: {0}")]
    Http(String),
    #[error("response error: {0}")]
    Response(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Generative-text capability.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Complete a prompt and return the full output text.
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError>;

    /// Open a token stream for a prompt.
    ///
    /// An `Err` here means the session could not be opened; errors after the
    /// first token arrive as items of the returned stream.
    async fn stream_complete(&self, prompt: &str) -> Result<TokenStream, GenerateError>;
}

/// Translation errors
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("http error: {0}")]
    Http(String),
    #[error("response error: {0}")]
    Response(String),
}

/// Translation capability.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into the language identified by `target_code`,
    /// auto-detecting the source language.
    async fn translate(&self, text: &str, target_code: &str) -> Result<String, TranslateError>;
}

/// Geocoding errors
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("http error: {0}")]
    Http(String),
    #[error("response error: {0}")]
    Response(String),
}

/// Geocoding capability.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a free-text place name to (latitude, longitude).
    /// `Ok(None)` means the place was not found.
    async fn geocode(&self, place: &str) -> Result<Option<(f64, f64)>, GeocodeError>;
}

/// Ephemeris errors
#[derive(Debug, Error)]
pub enum EphemerisError {
    #[error("calculation error: {0}")]
    Calculation(String),
}

/// Astronomical capability for the sidereal Moon position.
#[async_trait]
pub trait MoonEphemeris: Send + Sync {
    /// Sidereal ecliptic longitude of the Moon in the Lahiri reference
    /// frame, in degrees within `[0, 360)`.
    async fn sidereal_moon_longitude(&self, julian_day: f64) -> Result<f64, EphemerisError>;
}
