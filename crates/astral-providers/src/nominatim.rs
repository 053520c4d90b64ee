//! Nominatim geocoding client.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use astral_core::capability::{GeocodeError, Geocoder};

/// Geocoder configuration.
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// Server base URL.
    pub endpoint: String,
    /// User-Agent header; public Nominatim rejects requests without one.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "astral-insight/0.1".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Free-text place resolver against a Nominatim server.
pub struct NominatimGeocoder {
    client: reqwest::Client,
    config: NominatimConfig,
}

impl NominatimGeocoder {
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodeError::Http(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.endpoint.trim_end_matches('/'))
    }
}

/// One search hit; Nominatim encodes coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

fn parse_hit(hit: &SearchHit) -> Result<(f64, f64), GeocodeError> {
    let lat = hit
        .lat
        .parse::<f64>()
        .map_err(|_| GeocodeError::Response(format!("bad latitude '{}'", hit.lat)))?;
    let lon = hit
        .lon
        .parse::<f64>()
        .map_err(|_| GeocodeError::Response(format!("bad longitude '{}'", hit.lon)))?;
    Ok((lat, lon))
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, place: &str) -> Result<Option<(f64, f64)>, GeocodeError> {
        let response = self
            .client
            .get(self.search_url())
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| GeocodeError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Response(format!("HTTP {}: {}", status, text)));
        }

        let hits: Vec<SearchHit> = response
            .json()
            .await
            .map_err(|e| GeocodeError::Response(e.to_string()))?;
        let Some(hit) = hits.first() else {
            debug!(place, "no geocoding result");
            return Ok(None);
        };
        parse_hit(hit).map(Some)
    }
}
