//! Person-to-person compatibility from a fixed affinity matrix.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::compat::CompatibilityLevel;
use crate::identity::{destiny, life_path, soul_urge};
use crate::reduce::reduce;

/// Row/column keys of [`COMPATIBILITY_MATRIX`].
pub const MATRIX_KEYS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33];

/// Affinity between two identity numbers, in [`MATRIX_KEYS`] order.
#[rustfmt::skip]
pub const COMPATIBILITY_MATRIX: [[u8; 12]; 12] = [
    //1   2   3   4   5   6   7   8   9  11  22  33
    [70, 60, 90, 55, 85, 65, 75, 80, 85, 80, 75, 70], // 1
    [60, 85, 75, 90, 50, 95, 70, 80, 75, 95, 85, 90], // 2
    [90, 75, 80, 45, 95, 90, 60, 55, 95, 85, 60, 95], // 3
    [55, 90, 45, 75, 40, 85, 80, 95, 50, 70, 95, 75], // 4
    [85, 50, 95, 40, 70, 55, 90, 60, 80, 75, 55, 70], // 5
    [65, 95, 90, 85, 55, 85, 50, 75, 95, 90, 85, 98], // 6
    [75, 70, 60, 80, 90, 50, 90, 65, 70, 95, 80, 85], // 7
    [80, 80, 55, 95, 60, 75, 65, 75, 60, 70, 95, 70], // 8
    [85, 75, 95, 50, 80, 95, 70, 60, 80, 90, 75, 98], // 9
    [80, 95, 85, 70, 75, 90, 95, 70, 90, 90, 95, 98], // 11
    [75, 85, 60, 95, 55, 85, 80, 95, 75, 95, 85, 95], // 22
    [70, 90, 95, 75, 70, 98, 85, 70, 98, 98, 95, 95], // 33
];

/// Score used when either number has no matrix row.
pub const DEFAULT_MATRIX_SCORE: u32 = 50;

fn key_index(n: u32) -> Option<usize> {
    let key = reduce(n, true);
    MATRIX_KEYS.iter().position(|&k| k == key)
}

/// Matrix affinity for two numbers. Masters keep their own row; other
/// values are reduced first.
pub fn matrix_score(a: u32, b: u32) -> u32 {
    match (key_index(a), key_index(b)) {
        (Some(i), Some(j)) => u32::from(COMPATIBILITY_MATRIX[i][j]),
        _ => DEFAULT_MATRIX_SCORE,
    }
}

/// Relationship lens, each with its own Life Path / Destiny / Soul Urge
/// weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    #[default]
    General,
    Romantic,
    Friendship,
    Professional,
    Family,
}

pub const ALL_RELATIONSHIP_KINDS: [RelationshipKind; 5] = [
    RelationshipKind::General,
    RelationshipKind::Romantic,
    RelationshipKind::Friendship,
    RelationshipKind::Professional,
    RelationshipKind::Family,
];

impl RelationshipKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Romantic => "romantic",
            Self::Friendship => "friendship",
            Self::Professional => "professional",
            Self::Family => "family",
        }
    }

    /// Percent weights for (Life Path, Destiny, Soul Urge); always sum to 100.
    pub const fn weights(self) -> [u32; 3] {
        match self {
            Self::General => [50, 30, 20],
            Self::Romantic => [40, 20, 40],
            Self::Friendship => [35, 35, 30],
            Self::Professional => [50, 40, 10],
            Self::Family => [45, 20, 35],
        }
    }
}

/// One compared number for both people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberMatch {
    pub first: u32,
    pub second: u32,
    pub score: u32,
}

impl NumberMatch {
    fn new(first: u32, second: u32) -> Self {
        Self {
            first,
            second,
            score: matrix_score(first, second),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairCompatibility {
    pub kind: RelationshipKind,
    pub life_path: NumberMatch,
    pub destiny: NumberMatch,
    pub soul_urge: NumberMatch,
    /// Weighted score, rounded half up.
    pub overall: u32,
    pub level: CompatibilityLevel,
}

/// Weighted mean of three scores with percent weights, rounded half up.
pub const fn weighted_score(scores: [u32; 3], weights: [u32; 3]) -> u32 {
    let sum = scores[0] * weights[0] + scores[1] * weights[1] + scores[2] * weights[2];
    (sum + 50) / 100
}

/// Compare two people under a relationship lens.
pub fn pair_compatibility(
    first_name: &str,
    first_birth: NaiveDate,
    second_name: &str,
    second_birth: NaiveDate,
    kind: RelationshipKind,
) -> PairCompatibility {
    let life_path = NumberMatch::new(life_path(first_birth), life_path(second_birth));
    let destiny = NumberMatch::new(destiny(first_name), destiny(second_name));
    let soul_urge = NumberMatch::new(soul_urge(first_name), soul_urge(second_name));
    let overall = weighted_score(
        [life_path.score, destiny.score, soul_urge.score],
        kind.weights(),
    );
    PairCompatibility {
        kind,
        life_path,
        destiny,
        soul_urge,
        overall,
        level: CompatibilityLevel::from_score(overall),
    }
}
