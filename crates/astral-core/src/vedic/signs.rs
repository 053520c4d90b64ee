//! Sidereal division tables: Rasi (12 x 30 degrees) and Nakshatra
//! (27 x 13 degrees 20 minutes).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Vedic moon sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rasi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrishchika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

impl Rasi {
    /// Zodiacal order, 30 degrees per entry starting at 0.
    pub const ALL: [Rasi; 12] = [
        Rasi::Mesha,
        Rasi::Vrishabha,
        Rasi::Mithuna,
        Rasi::Karka,
        Rasi::Simha,
        Rasi::Kanya,
        Rasi::Tula,
        Rasi::Vrishchika,
        Rasi::Dhanu,
        Rasi::Makara,
        Rasi::Kumbha,
        Rasi::Meena,
    ];

    /// Map a sidereal ecliptic longitude (degrees) to its Rasi.
    pub fn from_sidereal_longitude(degrees: f64) -> Self {
        let index = ((degrees / 30.0).floor() as isize).rem_euclid(12) as usize;
        Self::ALL[index]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mesha => "Mesha (Aries)",
            Self::Vrishabha => "Vrishabha (Taurus)",
            Self::Mithuna => "Mithuna (Gemini)",
            Self::Karka => "Karka (Cancer)",
            Self::Simha => "Simha (Leo)",
            Self::Kanya => "Kanya (Virgo)",
            Self::Tula => "Tula (Libra)",
            Self::Vrishchika => "Vrishchika (Scorpio)",
            Self::Dhanu => "Dhanu (Sagittarius)",
            Self::Makara => "Makara (Capricorn)",
            Self::Kumbha => "Kumbha (Aquarius)",
            Self::Meena => "Meena (Pisces)",
        }
    }
}

impl fmt::Display for Rasi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lunar mansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// Width of one nakshatra in degrees (13 degrees 20 minutes).
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

impl Nakshatra {
    /// Zodiacal order starting at sidereal 0 degrees.
    pub const ALL: [Nakshatra; 27] = [
        Nakshatra::Ashwini,
        Nakshatra::Bharani,
        Nakshatra::Krittika,
        Nakshatra::Rohini,
        Nakshatra::Mrigashira,
        Nakshatra::Ardra,
        Nakshatra::Punarvasu,
        Nakshatra::Pushya,
        Nakshatra::Ashlesha,
        Nakshatra::Magha,
        Nakshatra::PurvaPhalguni,
        Nakshatra::UttaraPhalguni,
        Nakshatra::Hasta,
        Nakshatra::Chitra,
        Nakshatra::Swati,
        Nakshatra::Vishakha,
        Nakshatra::Anuradha,
        Nakshatra::Jyeshtha,
        Nakshatra::Mula,
        Nakshatra::PurvaAshadha,
        Nakshatra::UttaraAshadha,
        Nakshatra::Shravana,
        Nakshatra::Dhanishta,
        Nakshatra::Shatabhisha,
        Nakshatra::PurvaBhadrapada,
        Nakshatra::UttaraBhadrapada,
        Nakshatra::Revati,
    ];

    /// Map a sidereal ecliptic longitude (degrees) to its Nakshatra.
    pub fn from_sidereal_longitude(degrees: f64) -> Self {
        let index = ((degrees / NAKSHATRA_SPAN_DEG).floor() as isize).rem_euclid(27) as usize;
        Self::ALL[index]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved vedic attributes of a birth moment.
///
/// Both divisions derive from the same moon longitude, so either both are
/// known or neither is; a partial pair is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VedicAttributes {
    Resolved { rasi: Rasi, nakshatra: Nakshatra },
    Unknown,
}

impl VedicAttributes {
    pub fn from_sidereal_longitude(degrees: f64) -> Self {
        Self::Resolved {
            rasi: Rasi::from_sidereal_longitude(degrees),
            nakshatra: Nakshatra::from_sidereal_longitude(degrees),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    /// Display name of the rasi, `"Unknown"` for the sentinel.
    pub fn rasi_name(&self) -> &'static str {
        match self {
            Self::Resolved { rasi, .. } => rasi.name(),
            Self::Unknown => "Unknown",
        }
    }

    /// Display name of the nakshatra, `"Unknown"` for the sentinel.
    pub fn nakshatra_name(&self) -> &'static str {
        match self {
            Self::Resolved { nakshatra, .. } => nakshatra.name(),
            Self::Unknown => "Unknown",
        }
    }
}
