//! Lo Shu grid: 3×3 digit-frequency square built from a birth date.
//!
//! Digits of day, month and year are concatenated (no zero padding), zeros
//! are dropped, and each remaining digit is tallied into its fixed cell of
//! the traditional square:
//!
//! ```text
//!   4 | 9 | 2
//!   3 | 5 | 7
//!   8 | 1 | 6
//! ```
//!
//! Planes (rows and columns) are classified by how many of their digits are
//! present and how often; arrows fire when a fixed triple is fully present
//! or, for three of them, fully absent.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::loshu_data::{
    ACTIVITY_MEANING, DETERMINATION_MEANING, DISAPPOINTMENT_MEANING, EMOTIONAL_BALANCE_MEANING,
    FRUSTRATION_MEANING, HESITATION_MEANING, LO_SHU_POSITIONS, PLANE_MEANINGS, PLANNER_MEANING,
    SPIRITUALITY_MEANING, SUCCESS_MEANING, remedy,
};

/// The six grid lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    /// Top row 4-9-2.
    Mental,
    /// Middle row 3-5-7.
    Emotional,
    /// Bottom row 8-1-6.
    Practical,
    /// Left column 4-3-8.
    Thought,
    /// Middle column 9-5-1.
    Will,
    /// Right column 2-7-6.
    Action,
}

/// All planes, rows first.
pub const ALL_PLANES: [Plane; 6] = [
    Plane::Mental,
    Plane::Emotional,
    Plane::Practical,
    Plane::Thought,
    Plane::Will,
    Plane::Action,
];

impl Plane {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mental => "mental",
            Self::Emotional => "emotional",
            Self::Practical => "practical",
            Self::Thought => "thought",
            Self::Will => "will",
            Self::Action => "action",
        }
    }

    /// Index into [`ALL_PLANES`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The three digits on this line.
    pub const fn digits(self) -> [u32; 3] {
        match self {
            Self::Mental => [4, 9, 2],
            Self::Emotional => [3, 5, 7],
            Self::Practical => [8, 1, 6],
            Self::Thought => [4, 3, 8],
            Self::Will => [9, 5, 1],
            Self::Action => [2, 7, 6],
        }
    }
}

/// Classified strength of a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaneStrength {
    Empty,
    Weak,
    Balanced,
    Strong,
    Dominant,
}

impl PlaneStrength {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Weak => "weak",
            Self::Balanced => "balanced",
            Self::Strong => "strong",
            Self::Dominant => "dominant",
        }
    }

    /// Classify from the summed count and the number of present digits.
    ///
    /// Checks run in order, so a single digit repeated two or three times
    /// is `Balanced`, not `Weak`.
    pub const fn classify(total: u32, present: u32) -> Self {
        if present == 0 {
            Self::Empty
        } else if present == 1 && total == 1 {
            Self::Weak
        } else if present == 2 || total <= 3 {
            Self::Balanced
        } else if total <= 5 {
            Self::Strong
        } else {
            Self::Dominant
        }
    }
}

/// Named arrow patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrowKind {
    Determination,
    Hesitation,
    Spirituality,
    Frustration,
    Planner,
    Success,
    Disappointment,
    Activity,
    EmotionalBalance,
}

impl ArrowKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Determination => "determination",
            Self::Hesitation => "hesitation",
            Self::Spirituality => "spirituality",
            Self::Frustration => "frustration",
            Self::Planner => "planner",
            Self::Success => "success",
            Self::Disappointment => "disappointment",
            Self::Activity => "activity",
            Self::EmotionalBalance => "emotional-balance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowDirection {
    Positive,
    Negative,
}

/// Static description of one arrow triple.
struct ArrowRule {
    digits: [u32; 3],
    positive: (ArrowKind, &'static str),
    negative: Option<(ArrowKind, &'static str)>,
}

const ARROW_RULES: [ArrowRule; 6] = [
    ArrowRule {
        digits: [1, 5, 9],
        positive: (ArrowKind::Determination, DETERMINATION_MEANING),
        negative: Some((ArrowKind::Hesitation, HESITATION_MEANING)),
    },
    ArrowRule {
        digits: [3, 5, 7],
        positive: (ArrowKind::Spirituality, SPIRITUALITY_MEANING),
        negative: Some((ArrowKind::Frustration, FRUSTRATION_MEANING)),
    },
    ArrowRule {
        digits: [1, 2, 3],
        positive: (ArrowKind::Planner, PLANNER_MEANING),
        negative: None,
    },
    ArrowRule {
        digits: [4, 5, 6],
        positive: (ArrowKind::Success, SUCCESS_MEANING),
        negative: Some((ArrowKind::Disappointment, DISAPPOINTMENT_MEANING)),
    },
    ArrowRule {
        digits: [7, 8, 9],
        positive: (ArrowKind::Activity, ACTIVITY_MEANING),
        negative: None,
    },
    ArrowRule {
        digits: [2, 5, 8],
        positive: (ArrowKind::EmotionalBalance, EMOTIONAL_BALANCE_MEANING),
        negative: None,
    },
];

/// Five-element buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Metal,
    Water,
    Wood,
}

/// Elements in tie-break order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
    Element::Wood,
];

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
            Self::Wood => "wood",
        }
    }

    /// Digits feeding this bucket. Digit 1 belongs to both fire and water.
    pub const fn digits(self) -> &'static [u32] {
        match self {
            Self::Fire => &[1, 9],
            Self::Earth => &[2, 5, 8],
            Self::Metal => &[6, 7],
            Self::Water => &[1, 6],
            Self::Wood => &[3, 4],
        }
    }
}

/// Classified plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaneReading {
    pub plane: Plane,
    pub digits: [u32; 3],
    /// Summed count over the three digits.
    pub total: u32,
    /// How many of the three digits occur at least once.
    pub present: u32,
    pub strength: PlaneStrength,
    pub meaning: &'static str,
}

/// An active arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arrow {
    pub kind: ArrowKind,
    pub direction: ArrowDirection,
    pub digits: [u32; 3],
    pub meaning: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RepeatedDigit {
    pub digit: u32,
    pub count: u32,
}

/// Strength, weakness and remedy text assembled from planes, arrows and
/// missing digits.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LoShuAnalysis {
    pub strengths: Vec<&'static str>,
    pub weaknesses: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
}

/// Full Lo Shu result for one birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoShuGrid {
    /// Occurrences per digit (index 0 = digit 1).
    pub counts: [u32; 9],
    /// Counts placed in the traditional layout.
    pub grid: [[u32; 3]; 3],
    pub present: Vec<u32>,
    pub missing: Vec<u32>,
    pub repeated: Vec<RepeatedDigit>,
    pub planes: Vec<PlaneReading>,
    pub arrows: Vec<Arrow>,
    pub dominant_element: Element,
    pub analysis: LoShuAnalysis,
}

impl LoShuGrid {
    /// Count for digit 1-9; 0 otherwise.
    pub fn count(&self, digit: u32) -> u32 {
        count_of(&self.counts, digit)
    }

    /// Plane reading by plane.
    pub fn plane(&self, plane: Plane) -> &PlaneReading {
        &self.planes[plane.index()]
    }

    /// Whether an arrow of this kind is active.
    pub fn has_arrow(&self, kind: ArrowKind) -> bool {
        self.arrows.iter().any(|a| a.kind == kind)
    }
}

fn count_of(counts: &[u32; 9], digit: u32) -> u32 {
    match digit {
        1..=9 => counts[(digit - 1) as usize],
        _ => 0,
    }
}

fn push_digits(mut n: u32, out: &mut Vec<u32>) {
    let start = out.len();
    loop {
        out.push(n % 10);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    out[start..].reverse();
}

/// Non-zero digits of day, month and year, in that order.
pub fn birth_date_digits(birth: NaiveDate) -> Vec<u32> {
    let mut digits = Vec::with_capacity(8);
    push_digits(birth.day(), &mut digits);
    push_digits(birth.month(), &mut digits);
    push_digits(birth.year().unsigned_abs(), &mut digits);
    digits.retain(|&d| d > 0);
    digits
}

/// Classify all six planes.
pub fn planes(counts: &[u32; 9]) -> Vec<PlaneReading> {
    ALL_PLANES
        .iter()
        .map(|&plane| {
            let digits = plane.digits();
            let total = digits.iter().map(|&d| count_of(counts, d)).sum();
            let present = digits.iter().filter(|&&d| count_of(counts, d) > 0).count() as u32;
            let strength = PlaneStrength::classify(total, present);
            PlaneReading {
                plane,
                digits,
                total,
                present,
                strength,
                meaning: PLANE_MEANINGS[plane.index()][strength as usize],
            }
        })
        .collect()
}

/// Active arrows. Partial presence triggers neither direction.
pub fn arrows(counts: &[u32; 9]) -> Vec<Arrow> {
    let mut out = Vec::new();
    for rule in &ARROW_RULES {
        let all_present = rule.digits.iter().all(|&d| count_of(counts, d) > 0);
        let all_absent = rule.digits.iter().all(|&d| count_of(counts, d) == 0);
        if all_present {
            let (kind, meaning) = rule.positive;
            out.push(Arrow {
                kind,
                direction: ArrowDirection::Positive,
                digits: rule.digits,
                meaning,
            });
        } else if all_absent {
            if let Some((kind, meaning)) = rule.negative {
                out.push(Arrow {
                    kind,
                    direction: ArrowDirection::Negative,
                    digits: rule.digits,
                    meaning,
                });
            }
        }
    }
    out
}

/// Element bucket with the highest count. Ties keep the earlier element in
/// [`ALL_ELEMENTS`]; all-zero falls back to earth.
pub fn dominant_element(counts: &[u32; 9]) -> Element {
    let mut best = Element::Earth;
    let mut best_count = 0;
    for element in ALL_ELEMENTS {
        let n: u32 = element.digits().iter().map(|&d| count_of(counts, d)).sum();
        if n > best_count {
            best_count = n;
            best = element;
        }
    }
    best
}

fn analyse(planes: &[PlaneReading], arrows: &[Arrow], missing: &[u32]) -> LoShuAnalysis {
    let mut analysis = LoShuAnalysis::default();
    for p in planes {
        match p.strength {
            PlaneStrength::Strong | PlaneStrength::Dominant => analysis.strengths.push(p.meaning),
            PlaneStrength::Empty | PlaneStrength::Weak => analysis.weaknesses.push(p.meaning),
            PlaneStrength::Balanced => {}
        }
    }
    for a in arrows {
        match a.direction {
            ArrowDirection::Positive => analysis.strengths.push(a.meaning),
            ArrowDirection::Negative => analysis.weaknesses.push(a.meaning),
        }
    }
    analysis.recommendations = missing
        .iter()
        .filter_map(|&d| remedy(d))
        .map(|r| r.description)
        .collect();
    analysis
}

/// Build the full grid for a birth date.
pub fn lo_shu_grid(birth: NaiveDate) -> LoShuGrid {
    let mut counts = [0u32; 9];
    let mut grid = [[0u32; 3]; 3];
    for d in birth_date_digits(birth) {
        let i = (d - 1) as usize;
        counts[i] += 1;
        let (row, col) = LO_SHU_POSITIONS[i];
        grid[row][col] += 1;
    }

    let mut present = Vec::new();
    let mut missing = Vec::new();
    let mut repeated = Vec::new();
    for digit in 1..=9 {
        let count = counts[(digit - 1) as usize];
        if count == 0 {
            missing.push(digit);
            continue;
        }
        present.push(digit);
        if count > 1 {
            repeated.push(RepeatedDigit { digit, count });
        }
    }

    let planes = planes(&counts);
    let arrows = arrows(&counts);
    let dominant_element = dominant_element(&counts);
    let analysis = analyse(&planes, &arrows, &missing);

    LoShuGrid {
        counts,
        grid,
        present,
        missing,
        repeated,
        planes,
        arrows,
        dominant_element,
        analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn counts_from(digits: &[u32]) -> [u32; 9] {
        let mut c = [0; 9];
        for &d in digits {
            c[(d - 1) as usize] += 1;
        }
        c
    }

    #[test]
    fn digits_drop_zeros_and_keep_order() {
        // "15" + "5" + "1990"
        assert_eq!(birth_date_digits(date(1990, 5, 15)), vec![1, 5, 5, 1, 9, 9]);
        // "1" + "10" + "2000"
        assert_eq!(birth_date_digits(date(2000, 10, 1)), vec![1, 1, 2]);
    }

    #[test]
    fn plane_strength_order_of_checks() {
        assert_eq!(PlaneStrength::classify(0, 0), PlaneStrength::Empty);
        assert_eq!(PlaneStrength::classify(1, 1), PlaneStrength::Weak);
        // one digit repeated is balanced, not weak
        assert_eq!(PlaneStrength::classify(2, 1), PlaneStrength::Balanced);
        assert_eq!(PlaneStrength::classify(3, 1), PlaneStrength::Balanced);
        // two present is balanced regardless of total
        assert_eq!(PlaneStrength::classify(7, 2), PlaneStrength::Balanced);
        assert_eq!(PlaneStrength::classify(3, 3), PlaneStrength::Balanced);
        assert_eq!(PlaneStrength::classify(4, 1), PlaneStrength::Strong);
        assert_eq!(PlaneStrength::classify(5, 3), PlaneStrength::Strong);
        assert_eq!(PlaneStrength::classify(6, 3), PlaneStrength::Dominant);
    }

    #[test]
    fn grid_for_1990_05_15() {
        let g = lo_shu_grid(date(1990, 5, 15));
        assert_eq!(g.count(1), 2);
        assert_eq!(g.count(5), 2);
        assert_eq!(g.count(9), 2);
        assert_eq!(g.present, vec![1, 5, 9]);
        assert_eq!(g.missing, vec![2, 3, 4, 6, 7, 8]);
        assert_eq!(g.repeated.len(), 3);
        // 1 sits bottom-middle, 9 top-middle
        assert_eq!(g.grid[2][1], 2);
        assert_eq!(g.grid[0][1], 2);
        assert_eq!(g.grid[1][1], 2);
        assert_eq!(g.plane(Plane::Will).strength, PlaneStrength::Dominant);
        assert_eq!(g.plane(Plane::Thought).strength, PlaneStrength::Empty);
        assert_eq!(g.plane(Plane::Mental).strength, PlaneStrength::Balanced);
        assert!(g.has_arrow(ArrowKind::Determination));
        assert!(!g.has_arrow(ArrowKind::Frustration));
        assert_eq!(g.analysis.recommendations.len(), 6);
    }

    #[test]
    fn negative_arrow_needs_all_absent() {
        // 3 present, 5 and 7 absent: neither spirituality nor frustration
        let c = counts_from(&[3, 1, 2]);
        let a = arrows(&c);
        assert!(!a.iter().any(|x| x.kind == ArrowKind::Spirituality));
        assert!(!a.iter().any(|x| x.kind == ArrowKind::Frustration));
        assert!(a.iter().any(|x| x.kind == ArrowKind::Planner));

        let c = counts_from(&[1, 2, 8]);
        let kinds: Vec<_> = arrows(&c).iter().map(|x| x.kind).collect();
        assert!(kinds.contains(&ArrowKind::Frustration));
        assert!(kinds.contains(&ArrowKind::Disappointment));
        assert!(!kinds.contains(&ArrowKind::Hesitation));
    }

    #[test]
    fn planner_has_no_negative() {
        let c = counts_from(&[5, 5, 6]);
        assert!(
            arrows(&c)
                .iter()
                .all(|a| a.digits != [1, 2, 3] && a.digits != [7, 8, 9])
        );
    }

    #[test]
    fn dominant_element_tie_breaks() {
        assert_eq!(dominant_element(&[0; 9]), Element::Earth);
        // digit 1 counts toward fire first
        assert_eq!(dominant_element(&counts_from(&[1])), Element::Fire);
        // earth 2 vs fire 1
        assert_eq!(dominant_element(&counts_from(&[2, 5, 1])), Element::Earth);
        // water (1, 6) = 3 beats fire (1) = 1
        assert_eq!(dominant_element(&counts_from(&[1, 6, 6])), Element::Water);
        // metal and water tie at 1; metal comes first
        assert_eq!(dominant_element(&counts_from(&[6])), Element::Metal);
    }

    #[test]
    fn analysis_partitions_planes() {
        let g = lo_shu_grid(date(1990, 5, 15));
        for p in &g.planes {
            let in_strengths = g.analysis.strengths.contains(&p.meaning);
            let in_weaknesses = g.analysis.weaknesses.contains(&p.meaning);
            match p.strength {
                PlaneStrength::Balanced => assert!(!in_strengths && !in_weaknesses),
                PlaneStrength::Strong | PlaneStrength::Dominant => assert!(in_strengths),
                PlaneStrength::Empty | PlaneStrength::Weak => assert!(in_weaknesses),
            }
        }
    }
}
