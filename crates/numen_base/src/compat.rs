//! Parametrised digit-distance compatibility scorer.
//!
//! One scoring function serves every adapter; only the [`ScorerConfig`]
//! differs between address, phone and plate analysis.

use serde::{Deserialize, Serialize};

use crate::error::NumerologyError;
use crate::reduce::reduce;

/// Pairs shared by every built-in configuration.
const CLASSIC_PAIRS: [[u32; 2]; 4] = [[1, 9], [2, 8], [3, 7], [4, 6]];

/// Distance penalty, complementary bonus and pair table for [`score`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Points subtracted per unit of digit distance.
    pub penalty_per_step: u32,
    /// Points added when the pair is complementary.
    pub complementary_bonus: u32,
    /// Unordered complementary pairs.
    pub complementary_pairs: Vec<[u32; 2]>,
}

impl ScorerConfig {
    /// Penalty 20, bonus 10, pairs 1-9 2-8 3-7 4-6 5-5.
    pub fn address() -> Self {
        let mut pairs = CLASSIC_PAIRS.to_vec();
        pairs.push([5, 5]);
        Self {
            penalty_per_step: 20,
            complementary_bonus: 10,
            complementary_pairs: pairs,
        }
    }

    /// Penalty 15, bonus 15, pairs 1-9 2-8 3-7 4-6.
    pub fn phone() -> Self {
        Self {
            penalty_per_step: 15,
            complementary_bonus: 15,
            complementary_pairs: CLASSIC_PAIRS.to_vec(),
        }
    }

    /// Penalty 12, bonus 12, pairs 1-9 2-8 3-7 4-6.
    pub fn plate() -> Self {
        Self {
            penalty_per_step: 12,
            complementary_bonus: 12,
            complementary_pairs: CLASSIC_PAIRS.to_vec(),
        }
    }

    /// Whether `(a, b)` appears in the pair table, in either order.
    pub fn is_complementary(&self, a: u32, b: u32) -> bool {
        self.complementary_pairs
            .iter()
            .any(|&[x, y]| (x == a && y == b) || (x == b && y == a))
    }

    /// Reject pairs outside 1..=9 and penalties above 100.
    pub fn validate(&self) -> Result<(), NumerologyError> {
        if self.penalty_per_step > 100 {
            return Err(NumerologyError::InvalidPenalty(self.penalty_per_step));
        }
        for &[a, b] in &self.complementary_pairs {
            if !(1..=9).contains(&a) || !(1..=9).contains(&b) {
                return Err(NumerologyError::InvalidScorerPair(a, b));
            }
        }
        Ok(())
    }
}

/// Score two numbers 0-100.
///
/// Both inputs are reduced without master preservation. Equal digits score
/// 100; otherwise `100 - |a - b| * penalty`, plus the bonus for a
/// complementary pair, clamped to `0..=100`.
pub fn score(a: u32, b: u32, config: &ScorerConfig) -> u32 {
    let a = reduce(a, false);
    let b = reduce(b, false);
    if a == b {
        return 100;
    }
    let diff = i64::from(a.abs_diff(b));
    let mut s = 100 - diff * i64::from(config.penalty_per_step);
    if config.is_complementary(a, b) {
        s += i64::from(config.complementary_bonus);
    }
    s.clamp(0, 100) as u32
}

/// Four-band qualitative level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityLevel {
    Challenging,
    Moderate,
    Good,
    Excellent,
}

impl CompatibilityLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Challenging => "challenging",
            Self::Moderate => "moderate",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    /// Band a score with explicit lower bounds for each level.
    pub const fn from_thresholds(score: u32, excellent: u32, good: u32, moderate: u32) -> Self {
        if score >= excellent {
            Self::Excellent
        } else if score >= good {
            Self::Good
        } else if score >= moderate {
            Self::Moderate
        } else {
            Self::Challenging
        }
    }

    /// Person-to-person bands: 85 / 70 / 55.
    pub const fn from_score(score: u32) -> Self {
        Self::from_thresholds(score, 85, 70, 55)
    }
}
