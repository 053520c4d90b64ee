//! Analytic sidereal moon ephemeris.
//!
//! Truncated Meeus lunar-longitude series with a linear Lahiri ayanamsa
//! model. Accurate to a small fraction of a degree over nearby centuries,
//! which is far inside the 13 degree 20 minute nakshatra bins this pipeline
//! feeds; deployments wanting observatory-grade positions can inject a
//! different `MoonEphemeris` implementation.

use async_trait::async_trait;

use astral_core::capability::{EphemerisError, MoonEphemeris};

/// Julian day of the J2000.0 epoch.
const J2000: f64 = 2_451_545.0;
/// Days per Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;
/// Lahiri ayanamsa at J2000.0, degrees.
const LAHIRI_AT_J2000: f64 = 23.853;
/// General precession rate, degrees per Julian year.
const PRECESSION_DEG_PER_YEAR: f64 = 50.2888 / 3600.0;

/// Principal periodic terms of the lunar longitude as
/// (D, M, M', F) argument multipliers and sine coefficients in 1e-6 degrees.
const LONGITUDE_TERMS: [(i8, i8, i8, i8, f64); 14] = [
    (0, 0, 1, 0, 6_288_774.0),
    (2, 0, -1, 0, 1_274_027.0),
    (2, 0, 0, 0, 658_314.0),
    (0, 0, 2, 0, 213_618.0),
    (0, 1, 0, 0, -185_116.0),
    (0, 0, 0, 2, -114_332.0),
    (2, 0, -2, 0, 58_793.0),
    (2, -1, -1, 0, 57_066.0),
    (2, 0, 1, 0, 53_322.0),
    (2, -1, 0, 0, 45_758.0),
    (0, 1, -1, 0, -40_923.0),
    (1, 0, 0, 0, -34_720.0),
    (0, 1, 1, 0, -30_383.0),
    (2, 0, 0, -2, 15_327.0),
];

/// Local, dependency-free moon ephemeris.
#[derive(Debug, Default)]
pub struct AnalyticMoonEphemeris;

impl AnalyticMoonEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Tropical ecliptic longitude of the Moon, degrees in [0, 360).
    fn tropical_moon_longitude(julian_day: f64) -> f64 {
        let t = (julian_day - J2000) / DAYS_PER_CENTURY;

        // Mean elements, degrees.
        let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t;
        let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t;
        let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t;
        let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t;
        let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t;

        // Terms involving the solar anomaly shrink with Earth's orbital
        // eccentricity.
        let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

        let mut sum = 0.0;
        for (cd, cm, cmp, cf, coefficient) in LONGITUDE_TERMS {
            let argument =
                f64::from(cd) * d + f64::from(cm) * m + f64::from(cmp) * mp + f64::from(cf) * f;
            let scale = match cm.abs() {
                1 => e,
                2 => e * e,
                _ => 1.0,
            };
            sum += coefficient * scale * argument.to_radians().sin();
        }

        (lp + sum / 1_000_000.0).rem_euclid(360.0)
    }

    /// Lahiri ayanamsa, degrees.
    fn ayanamsa(julian_day: f64) -> f64 {
        LAHIRI_AT_J2000 + PRECESSION_DEG_PER_YEAR * (julian_day - J2000) / 365.25
    }
}

#[async_trait]
impl MoonEphemeris for AnalyticMoonEphemeris {
    async fn sidereal_moon_longitude(&self, julian_day: f64) -> Result<f64, EphemerisError> {
        if !julian_day.is_finite() {
            return Err(EphemerisError::Calculation(format!(
                "non-finite julian day: {}",
                julian_day
            )));
        }
        let tropical = Self::tropical_moon_longitude(julian_day);
        Ok((tropical - Self::ayanamsa(julian_day)).rem_euclid(360.0))
    }
}
