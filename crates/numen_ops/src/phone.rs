//! Phone-number numerology.
//!
//! Only ASCII digits count. A number with no digits is rejected with
//! [`OpsError::EmptyPhoneNumber`] before anything is computed.

use numen_base::{ScorerConfig, reduce, score};
use serde::Serialize;

use crate::error::OpsError;
use crate::grade::Grade;
use crate::meanings::{
    COMMUNICATION_STYLES, PHONE_IMPACTS, communication_traits, phone_note, slot,
};

/// Offset added to a landline vibration before grading stability.
pub const STABILITY_OFFSET: u32 = 4;

fn phone_digits(phone: &str) -> Result<String, OpsError> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(OpsError::EmptyPhoneNumber);
    }
    Ok(digits)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneAnalysis {
    /// The digits that were summed.
    pub digits: String,
    /// Digit sum reduced with master preservation.
    pub value: u32,
    pub main_vibration: u32,
    pub communication_style: &'static str,
    pub impact: &'static str,
    pub note: &'static str,
}

pub fn analyze_phone(phone: &str) -> Result<PhoneAnalysis, OpsError> {
    let digits = phone_digits(phone)?;
    let sum: u32 = digits.chars().filter_map(|c| c.to_digit(10)).sum();
    let value = reduce(sum, true);
    let i = slot(value);
    Ok(PhoneAnalysis {
        digits,
        value,
        main_vibration: value,
        communication_style: COMMUNICATION_STYLES[i],
        impact: PHONE_IMPACTS[i],
        note: phone_note(value),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    Low,
    Moderate,
    High,
}

impl Stability {
    /// Band a 1-9 stability score: 7 and above high, 4 and above moderate.
    pub const fn from_score(score: u32) -> Self {
        if score >= 7 {
            Self::High
        } else if score >= 4 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub const fn text(self) -> &'static str {
        match self {
            Self::High => "Very high stability. Ideal for business and long-term activities.",
            Self::Moderate => "Moderate stability. Good for general use.",
            Self::Low => "Low stability. May require more attention.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessSuitability {
    Fair,
    Good,
    Excellent,
}

impl BusinessSuitability {
    pub const fn from_value(value: u32) -> Self {
        match reduce(value, false) {
            1 | 4 | 8 => Self::Excellent,
            2 | 6 => Self::Good,
            _ => Self::Fair,
        }
    }

    pub const fn text(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent for business. Favors professional success.",
            Self::Good => "Good for relationship and service-based businesses.",
            Self::Fair => "Acceptable for business, but not ideal.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandlineAnalysis {
    #[serde(flatten)]
    pub phone: PhoneAnalysis,
    /// `reduce(value + 4)` without master preservation.
    pub stability_score: u32,
    pub stability: Stability,
    pub business_suitability: BusinessSuitability,
}

pub fn analyze_landline(phone: &str) -> Result<LandlineAnalysis, OpsError> {
    let phone = analyze_phone(phone)?;
    let stability_score = reduce(phone.value + STABILITY_OFFSET, false);
    Ok(LandlineAnalysis {
        stability_score,
        stability: Stability::from_score(stability_score),
        business_suitability: BusinessSuitability::from_value(phone.value),
        phone,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneRecommendation {
    pub phone: String,
    pub analysis: PhoneAnalysis,
    pub compatibility: u32,
    pub grade: Grade,
    pub recommendation: &'static str,
}

/// Score one number against a Life Path.
pub fn phone_compatibility(
    phone: &str,
    life_path: u32,
    config: &ScorerConfig,
) -> Result<PhoneRecommendation, OpsError> {
    let analysis = analyze_phone(phone)?;
    let compatibility = score(life_path, analysis.value, config);
    let grade = Grade::from_score(compatibility);
    Ok(PhoneRecommendation {
        phone: phone.to_string(),
        analysis,
        compatibility,
        grade,
        recommendation: grade.phone_text(),
    })
}

/// Rank candidates against a Life Path, best first; ties keep input order.
///
/// Fails on the first candidate without digits.
pub fn rank_phones<S: AsRef<str>>(
    life_path: u32,
    options: &[S],
    config: &ScorerConfig,
) -> Result<Vec<PhoneRecommendation>, OpsError> {
    let mut ranked = options
        .iter()
        .map(|option| phone_compatibility(option.as_ref(), life_path, config))
        .collect::<Result<Vec<_>, _>>()?;
    ranked.sort_by(|a, b| b.compatibility.cmp(&a.compatibility));
    Ok(ranked)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunicationImpact {
    pub analysis: PhoneAnalysis,
    pub compatibility: u32,
    pub strengths: Vec<&'static str>,
    pub challenges: Vec<&'static str>,
    pub overall: &'static str,
}

fn overall_impact(compatibility: u32) -> &'static str {
    if compatibility >= 80 {
        "Very positive impact on your communication. Recommended number."
    } else if compatibility >= 60 {
        "Positive impact on communication. Suitable number."
    } else {
        "Neutral or negative impact. Consider alternatives."
    }
}

/// How a number shapes the owner's communication.
pub fn communication_impact(
    phone: &str,
    life_path: u32,
    config: &ScorerConfig,
) -> Result<CommunicationImpact, OpsError> {
    let analysis = analyze_phone(phone)?;
    let compatibility = score(life_path, analysis.value, config);
    let (strengths, challenges) = communication_traits(analysis.value);
    Ok(CommunicationImpact {
        analysis,
        compatibility,
        strengths: strengths.to_vec(),
        challenges: challenges.to_vec(),
        overall: overall_impact(compatibility),
    })
}
