//! Types for lucky-date search.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Why a date earned points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReasonTag {
    /// Date number equals the Life Path (+30).
    LifePathMatch,
    /// Date number is compatible with the Life Path (+20).
    LifePathCompatible,
    /// Date number equals the Destiny (+25).
    DestinyMatch,
    /// Date number is compatible with the Destiny (+15).
    DestinyCompatible,
    /// Date number equals the Personal Year (+20).
    PersonalYearMatch,
    /// Reduced day of month equals the Life Path or Destiny (+15).
    DayMatch,
    /// Master-number date (+25).
    MasterNumber,
    /// Day of month equals month number (+10).
    MirrorDate,
    /// Three or more identical consecutive digits in `YYYYMMDD` (+10).
    RepeatingDigits,
}

impl ReasonTag {
    pub const fn name(self) -> &'static str {
        match self {
            Self::LifePathMatch => "lifePathMatch",
            Self::LifePathCompatible => "lifePathCompatible",
            Self::DestinyMatch => "destinyMatch",
            Self::DestinyCompatible => "destinyCompatible",
            Self::PersonalYearMatch => "personalYearMatch",
            Self::DayMatch => "dayMatch",
            Self::MasterNumber => "masterNumber",
            Self::MirrorDate => "mirrorDate",
            Self::RepeatingDigits => "repeatingDigits",
        }
    }

    /// Points this reason contributes.
    pub const fn points(self) -> u32 {
        match self {
            Self::LifePathMatch => 30,
            Self::LifePathCompatible => 20,
            Self::DestinyMatch => 25,
            Self::DestinyCompatible => 15,
            Self::PersonalYearMatch => 20,
            Self::DayMatch => 15,
            Self::MasterNumber => 25,
            Self::MirrorDate => 10,
            Self::RepeatingDigits => 10,
        }
    }
}

/// Highest score any single date can reach.
pub const MAX_LUCKY_SCORE: u32 = 30 + 25 + 20 + 15 + 25 + 10 + 10;

/// A scored day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckyDate {
    pub date: NaiveDate,
    pub score: u32,
    /// Reasons in rule order.
    pub reasons: Vec<ReasonTag>,
    /// Day of month reduced without masters.
    pub day_number: u32,
    /// `day + month + year` reduced without masters.
    pub universal_number: u32,
}

impl LuckyDate {
    pub fn has_reason(&self, reason: ReasonTag) -> bool {
        self.reasons.contains(&reason)
    }
}

/// Identity numbers computed once per search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PersonalNumbers {
    pub life_path: u32,
    pub destiny: u32,
    /// Personal Year of the range's start year.
    pub personal_year: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckySearchResult {
    /// Qualifying dates, best first; ties in date order.
    pub dates: Vec<LuckyDate>,
    /// The first `best_count` entries of `dates`.
    pub best: Vec<LuckyDate>,
    pub personal_numbers: PersonalNumbers,
}

/// Configuration for [`search_lucky_dates`](crate::search_lucky_dates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuckyConfig {
    /// Minimum score for a date to qualify (default 30).
    pub min_score: u32,
    /// Number of top dates copied into `best` (default 5).
    pub best_count: usize,
}

impl Default for LuckyConfig {
    fn default() -> Self {
        Self {
            min_score: 30,
            best_count: 5,
        }
    }
}

impl LuckyConfig {
    pub fn with_min_score(min_score: u32) -> Self {
        Self {
            min_score,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.best_count == 0 {
            return Err("best_count must be > 0");
        }
        Ok(())
    }
}

/// Occasion presets; each fixes a minimum score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Business,
    Romance,
    Travel,
    Health,
    General,
}

pub const ALL_PURPOSES: [Purpose; 5] = [
    Purpose::Business,
    Purpose::Romance,
    Purpose::Travel,
    Purpose::Health,
    Purpose::General,
];

impl Purpose {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Romance => "romance",
            Self::Travel => "travel",
            Self::Health => "health",
            Self::General => "general",
        }
    }

    pub const fn min_score(self) -> u32 {
        match self {
            Self::Business => 40,
            Self::Romance => 35,
            Self::Travel => 30,
            Self::Health => 35,
            Self::General => 25,
        }
    }
}

impl FromStr for Purpose {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PURPOSES
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SearchError::UnknownPurpose(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = LuckyConfig::default();
        assert_eq!(c.min_score, 30);
        assert_eq!(c.best_count, 5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_zero_best_count() {
        let c = LuckyConfig {
            best_count: 0,
            ..LuckyConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn purpose_parsing() {
        assert_eq!("Business".parse::<Purpose>(), Ok(Purpose::Business));
        assert_eq!(" travel ".parse::<Purpose>(), Ok(Purpose::Travel));
        assert!(matches!(
            "party".parse::<Purpose>(),
            Err(SearchError::UnknownPurpose(_))
        ));
    }

    #[test]
    fn max_score_is_sum_of_exclusive_maxima() {
        assert_eq!(MAX_LUCKY_SCORE, 135);
    }

    #[test]
    fn reason_names_match_serde() {
        for tag in [
            ReasonTag::LifePathMatch,
            ReasonTag::PersonalYearMatch,
            ReasonTag::RepeatingDigits,
        ] {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.name()));
        }
    }
}
