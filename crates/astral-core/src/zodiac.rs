//! Tropical zodiac derivation from the birth day and month.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The twelve tropical signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// Derive the sign from a calendar day and month.
    ///
    /// Pure and total over day 1..=31, month 1..=12. Each interval is closed
    /// on both ends; Capricorn is the else branch covering the two ranges
    /// that wrap the year boundary (Dec 22-31 and Jan 1-19). Out-of-range
    /// input is a caller contract violation checked at profile construction.
    pub fn from_day_month(day: u32, month: u32) -> Self {
        if (month == 1 && day >= 20) || (month == 2 && day <= 18) {
            Self::Aquarius
        } else if (month == 2 && day >= 19) || (month == 3 && day <= 20) {
            Self::Pisces
        } else if (month == 3 && day >= 21) || (month == 4 && day <= 19) {
            Self::Aries
        } else if (month == 4 && day >= 20) || (month == 5 && day <= 20) {
            Self::Taurus
        } else if (month == 5 && day >= 21) || (month == 6 && day <= 20) {
            Self::Gemini
        } else if (month == 6 && day >= 21) || (month == 7 && day <= 22) {
            Self::Cancer
        } else if (month == 7 && day >= 23) || (month == 8 && day <= 22) {
            Self::Leo
        } else if (month == 8 && day >= 23) || (month == 9 && day <= 22) {
            Self::Virgo
        } else if (month == 9 && day >= 23) || (month == 10 && day <= 22) {
            Self::Libra
        } else if (month == 10 && day >= 23) || (month == 11 && day <= 21) {
            Self::Scorpio
        } else if (month == 11 && day >= 22) || (month == 12 && day <= 21) {
            Self::Sagittarius
        } else {
            Self::Capricorn
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
