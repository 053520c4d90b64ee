//! Configuration model for the astral insight pipeline.
//!
//! Every capability section is optional: a missing section means the
//! capability is absent and the pipeline runs in the matching degraded mode.
//! Feature detection therefore happens once, when the config is loaded, and
//! never again per request.

mod loader;

pub use loader::{load_config, ConfigError};

use serde::Deserialize;

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AstralConfig {
    /// Generative-text capability (Ollama). Absent = no generation.
    #[serde(default)]
    pub generator: Option<GeneratorConfig>,
    /// Translation capability. Absent = untranslated output.
    #[serde(default)]
    pub translator: Option<TranslatorConfig>,
    /// Geocoding + ephemeris pair. Absent = vedic attributes stay Unknown.
    #[serde(default)]
    pub vedic: Option<VedicConfig>,
    /// Logging settings.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Generative-text settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_generator_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_generator_model")]
    pub model: String,
    #[serde(default = "default_generator_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_generator_endpoint() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_generator_model() -> String {
    "llama3".to_string()
}

fn default_generator_timeout_secs() -> u64 {
    120
}

/// Translation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_translator_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_translator_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_translator_endpoint() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_translator_timeout_secs() -> u64 {
    15
}

/// Geocoding settings for the vedic capability pair; the ephemeris itself is
/// computed locally and needs no configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct VedicConfig {
    #[serde(default = "default_geocoder_endpoint")]
    pub geocoder_endpoint: String,
    #[serde(default = "default_geocoder_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_geocoder_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_geocoder_endpoint() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_geocoder_user_agent() -> String {
    "astral-insight/0.1".to_string()
}

fn default_geocoder_timeout_secs() -> u64 {
    10
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_disables_all_capabilities() {
        let config: AstralConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.generator.is_none());
        assert!(config.translator.is_none());
        assert!(config.vedic.is_none());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_sections_fill_defaults() {
        let yaml = r#"
generator: {}
translator:
  endpoint: "https://translate.example.org"
vedic: {}
observability:
  log_level: debug
"#;
        let config: AstralConfig = serde_yaml::from_str(yaml).unwrap();
        let generator = config.generator.unwrap();
        assert_eq!(generator.endpoint, "http://127.0.0.1:11434");
        assert_eq!(generator.model, "llama3");
        let translator = config.translator.unwrap();
        assert_eq!(translator.endpoint, "https://translate.example.org");
        assert_eq!(translator.timeout_secs, 15);
        let vedic = config.vedic.unwrap();
        assert_eq!(vedic.geocoder_endpoint, "https://nominatim.openstreetmap.org");
        assert_eq!(config.observability.log_level, "debug");
    }
}
