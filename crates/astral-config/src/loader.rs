//! Configuration loading and validation.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::AstralConfig;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Load and validate configuration from a YAML file.
pub fn load_config(path: &Path) -> Result<AstralConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AstralConfig = serde_yaml::from_str(&content)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &AstralConfig) -> Result<(), ConfigError> {
    if let Some(generator) = &config.generator {
        if generator.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "generator.endpoint must not be empty".to_string(),
            ));
        }
        if generator.model.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "generator.model must not be empty".to_string(),
            ));
        }
    }

    if let Some(translator) = &config.translator {
        if translator.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "translator.endpoint must not be empty".to_string(),
            ));
        }
    }

    if let Some(vedic) = &config.vedic {
        if vedic.geocoder_endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "vedic.geocoder_endpoint must not be empty".to_string(),
            ));
        }
        if vedic.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "vedic.user_agent must not be empty".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_default_config() {
        assert!(validate_config(&AstralConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_generator_model() {
        let yaml = r#"
generator:
  model: ""
"#;
        let config: AstralConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_user_agent() {
        let yaml = r#"
vedic:
  user_agent: "  "
"#;
        let config: AstralConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::Invalid(_))
        ));
    }
}
