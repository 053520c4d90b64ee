//! Vedic attribute resolution.
//!
//! Coordinates the geocoding and ephemeris capabilities to derive the moon
//! sign and lunar mansion of a birth moment. Every failure path collapses to
//! [`VedicAttributes::Unknown`]; nothing in this module errors outward.

mod signs;

pub use signs::{Nakshatra, Rasi, VedicAttributes, NAKSHATRA_SPAN_DEG};

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use tracing::{debug, warn};

use crate::capability::{Geocoder, MoonEphemeris};

/// Fractional hour substituted when the birth time cannot be parsed.
pub const DEFAULT_BIRTH_HOUR: f64 = 12.0;

/// Resolves (Rasi, Nakshatra) for a birth moment, or Unknown.
pub struct VedicAttributeResolver {
    geocoder: Option<Arc<dyn Geocoder>>,
    ephemeris: Option<Arc<dyn MoonEphemeris>>,
}

impl VedicAttributeResolver {
    pub fn new(
        geocoder: Option<Arc<dyn Geocoder>>,
        ephemeris: Option<Arc<dyn MoonEphemeris>>,
    ) -> Self {
        Self {
            geocoder,
            ephemeris,
        }
    }

    /// Whether the vedic capability pair is configured at all.
    pub fn is_available(&self) -> bool {
        self.geocoder.is_some() && self.ephemeris.is_some()
    }

    /// Resolve the vedic attributes for a birth moment. Never fails: any
    /// capability error degrades to [`VedicAttributes::Unknown`].
    pub async fn resolve(
        &self,
        birth_date: NaiveDate,
        birth_time: &str,
        birth_place: &str,
    ) -> VedicAttributes {
        let (Some(geocoder), Some(ephemeris)) = (&self.geocoder, &self.ephemeris) else {
            debug!("vedic capabilities not configured; attributes stay unknown");
            return VedicAttributes::Unknown;
        };

        let (lat, lon) = match geocoder.geocode(birth_place).await {
            Ok(Some(coords)) => coords,
            Ok(None) => {
                debug!(place = birth_place, "geocoder found no match; continuing with (0, 0)");
                (0.0, 0.0)
            }
            Err(e) => {
                warn!(place = birth_place, error = %e, "geocoding failed; continuing with (0, 0)");
                (0.0, 0.0)
            }
        };
        // The ephemeris call below is geocentric; the resolved coordinates
        // only reach the logs.
        debug!(lat, lon, place = birth_place, "birth place resolved");

        let hour = parse_birth_time(birth_time).unwrap_or(DEFAULT_BIRTH_HOUR);
        let jd = julian_day(birth_date, hour);
        match ephemeris.sidereal_moon_longitude(jd).await {
            Ok(longitude) => {
                debug!(julian_day = jd, longitude, "sidereal moon longitude computed");
                VedicAttributes::from_sidereal_longitude(longitude)
            }
            Err(e) => {
                warn!(julian_day = jd, error = %e, "ephemeris lookup failed; attributes stay unknown");
                VedicAttributes::Unknown
            }
        }
    }
}

/// Parse a `HH:MM` or `HH:MM:SS` wall-clock string into a fractional hour.
///
/// Seconds are accepted but do not contribute to the fraction; minute
/// resolution is all the downstream tables can distinguish.
pub fn parse_birth_time(raw: &str) -> Option<f64> {
    let time = NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()?;
    Some(f64::from(time.hour()) + f64::from(time.minute()) / 60.0)
}

/// Convert a calendar date plus fractional hour (UT) to a Julian day number.
pub fn julian_day(date: NaiveDate, hour: f64) -> f64 {
    let mut year = f64::from(date.year());
    let mut month = f64::from(date.month());
    let day = f64::from(date.day()) + hour / 24.0;
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }
    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day + b - 1524.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::capability::{EphemerisError, GeocodeError};

    struct FixedEphemeris(f64);

    #[async_trait]
    impl MoonEphemeris for FixedEphemeris {
        async fn sidereal_moon_longitude(&self, _julian_day: f64) -> Result<f64, EphemerisError> {
            Ok(self.0)
        }
    }

    struct FailingEphemeris;

    #[async_trait]
    impl MoonEphemeris for FailingEphemeris {
        async fn sidereal_moon_longitude(&self, _julian_day: f64) -> Result<f64, EphemerisError> {
            Err(EphemerisError::Calculation("no ephemeris data".to_string()))
        }
    }

    struct StubGeocoder {
        result: Option<(f64, f64)>,
    }

    impl StubGeocoder {
        fn found(lat: f64, lon: f64) -> Self {
            Self {
                result: Some((lat, lon)),
            }
        }

        fn missing() -> Self {
            Self { result: None }
        }
    }

    #[async_trait]
    impl Geocoder for StubGeocoder {
        async fn geocode(&self, _place: &str) -> Result<Option<(f64, f64)>, GeocodeError> {
            Ok(self.result)
        }
    }

    struct FailingGeocoder;

    #[async_trait]
    impl Geocoder for FailingGeocoder {
        async fn geocode(&self, _place: &str) -> Result<Option<(f64, f64)>, GeocodeError> {
            Err(GeocodeError::Http("connection refused".to_string()))
        }
    }

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
    }

    #[tokio::test]
    async fn test_unconfigured_capabilities_resolve_unknown() {
        let resolver = VedicAttributeResolver::new(None, None);
        assert!(!resolver.is_available());
        let attrs = resolver.resolve(birth_date(), "10:30", "Delhi").await;
        assert_eq!(attrs, VedicAttributes::Unknown);

        // One half of the pair missing behaves the same.
        let resolver =
            VedicAttributeResolver::new(Some(Arc::new(StubGeocoder::found(28.6, 77.2))), None);
        let attrs = resolver.resolve(birth_date(), "10:30", "Delhi").await;
        assert_eq!(attrs, VedicAttributes::Unknown);
    }

    #[tokio::test]
    async fn test_fixed_longitudes_map_to_tables() {
        for (longitude, rasi, nakshatra) in [
            (0.0, Rasi::Mesha, Nakshatra::Ashwini),
            (180.0, Rasi::Tula, Nakshatra::Chitra),
            (359.9, Rasi::Meena, Nakshatra::Revati),
        ] {
            let resolver = VedicAttributeResolver::new(
                Some(Arc::new(StubGeocoder::found(12.97, 77.59))),
                Some(Arc::new(FixedEphemeris(longitude))),
            );
            let attrs = resolver.resolve(birth_date(), "10:30", "Bengaluru").await;
            assert_eq!(attrs, VedicAttributes::Resolved { rasi, nakshatra });
        }
    }

    #[tokio::test]
    async fn test_geocode_failure_does_not_poison_resolution() {
        let resolver = VedicAttributeResolver::new(
            Some(Arc::new(FailingGeocoder)),
            Some(Arc::new(FixedEphemeris(45.0))),
        );
        let attrs = resolver.resolve(birth_date(), "10:30", "Atlantis").await;
        assert!(attrs.is_resolved());

        let resolver = VedicAttributeResolver::new(
            Some(Arc::new(StubGeocoder::missing())),
            Some(Arc::new(FixedEphemeris(45.0))),
        );
        let attrs = resolver.resolve(birth_date(), "10:30", "Atlantis").await;
        assert!(attrs.is_resolved());
    }

    #[tokio::test]
    async fn test_ephemeris_failure_resolves_unknown() {
        let resolver = VedicAttributeResolver::new(
            Some(Arc::new(StubGeocoder::found(12.97, 77.59))),
            Some(Arc::new(FailingEphemeris)),
        );
        let attrs = resolver.resolve(birth_date(), "10:30", "Bengaluru").await;
        assert_eq!(attrs, VedicAttributes::Unknown);
    }

    #[test]
    fn test_parse_birth_time_formats() {
        assert_eq!(parse_birth_time("07:45"), Some(7.75));
        assert_eq!(parse_birth_time("07:45:30"), Some(7.75));
        assert_eq!(parse_birth_time("00:00"), Some(0.0));
        assert_eq!(parse_birth_time("23:59"), Some(23.0 + 59.0 / 60.0));
        assert_eq!(parse_birth_time("around dawn"), None);
        assert_eq!(parse_birth_time(""), None);
    }

    #[test]
    fn test_julian_day_epochs() {
        // J2000.0: 2000-01-01 12:00 UT.
        let jd = julian_day(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), 12.0);
        assert!((jd - 2_451_545.0).abs() < 1e-9);
        // Midnight the same day is half a day earlier.
        let jd = julian_day(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), 0.0);
        assert!((jd - 2_451_544.5).abs() < 1e-9);
        // A pre-March date exercises the month rollback branch.
        let jd = julian_day(NaiveDate::from_ymd_opt(1987, 1, 27).unwrap(), 0.0);
        assert!((jd - 2_446_822.5).abs() < 1e-9);
    }
}
