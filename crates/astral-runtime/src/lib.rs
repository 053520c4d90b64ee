//! Bootstrap helpers for assembling an insight service from configuration.
//!
//! Capability availability is decided here, once: each enabled config
//! section builds the matching provider client, everything else stays absent
//! and the core degrades per its contracts.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use thiserror::Error;
use tracing::info;

use astral_config::{load_config, AstralConfig, ConfigError, ObservabilityConfig};
use astral_core::capability::{GenerateError, GeocodeError, TranslateError};
use astral_core::service::InsightService;
use astral_providers::{
    AnalyticMoonEphemeris, LibreTranslateClient, LibreTranslateConfig, NominatimConfig,
    NominatimGeocoder, OllamaClient, OllamaConfig,
};

/// Bootstrap errors.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("generator build error: {0}")]
    Generator(#[from] GenerateError),
    #[error("translator build error: {0}")]
    Translator(#[from] TranslateError),
    #[error("geocoder build error: {0}")]
    Geocoder(#[from] GeocodeError),
}

/// Assembled application bundle.
pub struct InsightApp {
    pub service: InsightService,
    pub config: AstralConfig,
}

static TRACING_INIT: OnceLock<()> = OnceLock::new();

impl InsightApp {
    /// Build an app from a YAML config file.
    pub fn from_config_path(path: impl AsRef<Path>) -> Result<Self, BootstrapError> {
        let config = load_config(path.as_ref())?;
        Self::from_config(config)
    }

    /// Build an app from an already-loaded config.
    pub fn from_config(config: AstralConfig) -> Result<Self, BootstrapError> {
        init_tracing_if_needed(&config.observability);

        let mut builder = InsightService::builder();

        if let Some(generator) = &config.generator {
            let client = OllamaClient::new(OllamaConfig {
                endpoint: generator.endpoint.clone(),
                model: generator.model.clone(),
                timeout_secs: generator.timeout_secs,
            })?;
            builder = builder.with_generator(Arc::new(client));
        }

        if let Some(translator) = &config.translator {
            let client = LibreTranslateClient::new(LibreTranslateConfig {
                endpoint: translator.endpoint.clone(),
                api_key: translator.api_key.clone(),
                timeout_secs: translator.timeout_secs,
            })?;
            builder = builder.with_translator(Arc::new(client));
        }

        if let Some(vedic) = &config.vedic {
            let geocoder = NominatimGeocoder::new(NominatimConfig {
                endpoint: vedic.geocoder_endpoint.clone(),
                user_agent: vedic.user_agent.clone(),
                timeout_secs: vedic.timeout_secs,
            })?;
            builder = builder
                .with_geocoder(Arc::new(geocoder))
                .with_ephemeris(Arc::new(AnalyticMoonEphemeris::new()));
        }

        info!(
            generator = config.generator.is_some(),
            translator = config.translator.is_some(),
            vedic = config.vedic.is_some(),
            "insight service assembled"
        );

        Ok(Self {
            service: builder.build(),
            config,
        })
    }
}

fn init_tracing_if_needed(observability: &ObservabilityConfig) {
    TRACING_INIT.get_or_init(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .or_else(|_| tracing_subscriber::EnvFilter::try_new(&observability.log_level))
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
        tracing::info!(log_level = %observability.log_level, "tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_config_builds_degraded_app() {
        let app = InsightApp::from_config(AstralConfig::default()).unwrap();
        assert!(app.config.generator.is_none());
        assert!(app.config.translator.is_none());
        assert!(app.config.vedic.is_none());
    }

    #[test]
    fn test_full_config_builds_all_providers() {
        let yaml = r#"
generator:
  model: llama3
translator:
  endpoint: "http://127.0.0.1:5000"
vedic:
  user_agent: "astral-test/0.1"
"#;
        let config: AstralConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(InsightApp::from_config(config).is_ok());
    }
}
