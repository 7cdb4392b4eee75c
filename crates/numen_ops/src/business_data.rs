//! Business-name qualities keyed by Destiny number.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VibrationalEnergy {
    Moderate,
    Strong,
}

impl VibrationalEnergy {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Moderate => "moderate",
            Self::Strong => "strong",
        }
    }
}

#[derive(Debug)]
pub struct BusinessQualities {
    pub number: u32,
    pub energy: VibrationalEnergy,
    pub suitable_for: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

use VibrationalEnergy::{Moderate, Strong};

pub(crate) static BUSINESS_QUALITIES: [BusinessQualities; 12] = [
    BusinessQualities {
        number: 1,
        energy: Strong,
        suitable_for: &["Startups", "Consulting", "Technology", "Innovation"],
        challenges: &["May seem too aggressive", "Partnership difficulties"],
        recommendations: &["Ideal for market leaders", "Perfect for independent businesses"],
    },
    BusinessQualities {
        number: 2,
        energy: Moderate,
        suitable_for: &["Partnerships", "Diplomatic services", "Mediation", "Counseling"],
        challenges: &["May be perceived as weak", "Slow decisions"],
        recommendations: &["Excellent for collaborations", "Good for B2B services"],
    },
    BusinessQualities {
        number: 3,
        energy: Strong,
        suitable_for: &["Creative industries", "Marketing", "Entertainment", "Design"],
        challenges: &["Risk of superficiality", "Lack of focus"],
        recommendations: &["Perfect for creative branding", "Excellent for social media"],
    },
    BusinessQualities {
        number: 4,
        energy: Moderate,
        suitable_for: &["Construction", "Finance", "Real Estate", "Manufacturing"],
        challenges: &["May seem rigid", "Limited innovation"],
        recommendations: &["Ideal for traditional businesses", "Good for stable services"],
    },
    BusinessQualities {
        number: 5,
        energy: Strong,
        suitable_for: &["Tourism", "Transportation", "Media", "Dynamic retail"],
        challenges: &["Perceived instability", "Frequent changes"],
        recommendations: &["Excellent for adaptive businesses", "Perfect for changing markets"],
    },
    BusinessQualities {
        number: 6,
        energy: Moderate,
        suitable_for: &["Healthcare", "Education", "Family services", "Interior design"],
        challenges: &["May be too protective", "Excessive focus on others"],
        recommendations: &["Ideal for care services", "Perfect for communities"],
    },
    BusinessQualities {
        number: 7,
        energy: Moderate,
        suitable_for: &["Research", "Spirituality", "Advanced technology", "Consulting"],
        challenges: &["May seem distant", "Limited communication"],
        recommendations: &["Excellent for specialized niches", "Good for experts"],
    },
    BusinessQualities {
        number: 8,
        energy: Strong,
        suitable_for: &["Big finance", "Corporations", "Investments", "Luxury real estate"],
        challenges: &["May seem materialistic", "High pressure"],
        recommendations: &["Ideal for ambitious businesses", "Perfect for expansion"],
    },
    BusinessQualities {
        number: 9,
        energy: Strong,
        suitable_for: &["NGOs", "Arts", "Global services", "Education"],
        challenges: &["May be too idealistic", "Secondary profit"],
        recommendations: &["Excellent for social missions", "Good for global impact"],
    },
    BusinessQualities {
        number: 11,
        energy: Strong,
        suitable_for: &["Spiritual media", "Coaching", "Visionary art", "Innovation"],
        challenges: &["Sensitivity to criticism", "High expectations"],
        recommendations: &["Perfect for inspirational leaders", "Ideal for visionary brands"],
    },
    BusinessQualities {
        number: 22,
        energy: Strong,
        suitable_for: &[
            "Major construction",
            "Infrastructure",
            "Global corporations",
            "Ambitious projects",
        ],
        challenges: &["Enormous pressure", "Unrealistic expectations"],
        recommendations: &["Ideal for transformative projects", "Perfect for business empires"],
    },
    BusinessQualities {
        number: 33,
        energy: Strong,
        suitable_for: &[
            "Humanitarian organizations",
            "Spiritual education",
            "Healing",
            "Community services",
        ],
        challenges: &["Excessive sacrifice", "Immense responsibility"],
        recommendations: &["Perfect for global healing missions", "Ideal for spiritual leaders"],
    },
];

/// Qualities for a Destiny number; anything without an entry uses 9's.
pub fn business_qualities(number: u32) -> &'static BusinessQualities {
    BUSINESS_QUALITIES
        .iter()
        .find(|q| q.number == number)
        .unwrap_or(&BUSINESS_QUALITIES[8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_is_reachable() {
        for q in &BUSINESS_QUALITIES {
            assert_eq!(business_qualities(q.number).number, q.number);
            assert_eq!(q.suitable_for.len(), 4);
            assert_eq!(q.challenges.len(), 2);
            assert_eq!(q.recommendations.len(), 2);
        }
    }

    #[test]
    fn unknown_falls_back_to_nine() {
        assert_eq!(business_qualities(0).number, 9);
        assert_eq!(business_qualities(44).number, 9);
    }
}
