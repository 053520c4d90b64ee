//! Request-local birth profile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language insights are produced in when the request does not ask otherwise.
pub const DEFAULT_LANGUAGE: &str = "English";
/// Advice category used when the request does not name one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Profile validation errors.
///
/// These are caller contract violations and the only failures this pipeline
/// surfaces outward; everything downstream degrades instead of erroring.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid birth date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Immutable per-request input: who the insight is for.
///
/// `birth_time` is kept as the raw wall-clock string; lenient parsing with a
/// noon fallback happens during vedic resolution, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthProfile {
    pub name: String,
    pub birth_date: NaiveDate,
    pub birth_time: String,
    pub birth_place: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl BirthProfile {
    /// Create a profile with the default language and category.
    pub fn new(
        name: impl Into<String>,
        birth_date: NaiveDate,
        birth_time: impl Into<String>,
        birth_place: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birth_date,
            birth_time: birth_time.into(),
            birth_place: birth_place.into(),
            language: default_language(),
            category: default_category(),
        }
    }

    /// Create a profile from a `YYYY-MM-DD` date string.
    pub fn parse(
        name: impl Into<String>,
        birth_date: &str,
        birth_time: impl Into<String>,
        birth_place: impl Into<String>,
    ) -> Result<Self, ProfileError> {
        let date = NaiveDate::parse_from_str(birth_date, "%Y-%m-%d")
            .map_err(|_| ProfileError::InvalidDate(birth_date.to_string()))?;
        Ok(Self::new(name, date, birth_time, birth_place))
    }

    /// Set the target language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the advice category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}
