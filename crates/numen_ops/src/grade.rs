//! Recommendation grades shared by the address and phone adapters.

use serde::Serialize;

/// Four-band grade for a 0-100 compatibility score: 90 / 70 / 50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Low,
    Moderate,
    Good,
    Excellent,
}

impl Grade {
    pub const fn from_score(score: u32) -> Self {
        if score >= 90 {
            Self::Excellent
        } else if score >= 70 {
            Self::Good
        } else if score >= 50 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    /// Advice text for an address with this grade.
    pub const fn address_text(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent compatibility! This address is very suitable for you.",
            Self::Good => "Good compatibility. This address can bring positive energy.",
            Self::Moderate => "Moderate compatibility. Acceptable address, but not ideal.",
            Self::Low => "Low compatibility. May bring challenges or unsuitable energy.",
        }
    }

    /// Advice text for a phone number with this grade. Phones do not
    /// distinguish moderate from low.
    pub const fn phone_text(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent number! Very compatible with your personal energy.",
            Self::Good => "Good number. Can bring positive energy in communication.",
            Self::Moderate | Self::Low => {
                "Acceptable number, but not ideal. Consider alternatives."
            }
        }
    }
}
