//! Name-change comparison, name suggestions and business-name analysis.

use numen_base::{ScorerConfig, destiny, is_master, personality, score, soul_urge};
use serde::Serialize;

use crate::business_data::{VibrationalEnergy, business_qualities};

/// Bonus a master number carries when weighing a change.
const MASTER_WEIGHT: i32 = 2;

/// Letters tried as single-letter additions, in order.
const SUGGESTION_LETTERS: [char; 8] = ['a', 'e', 'i', 'o', 'n', 's', 'h', 'y'];

/// Endings that are never doubled.
const SOFT_ENDINGS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

pub const MAX_SUGGESTIONS: usize = 5;

/// The three name-derived numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NameNumbers {
    pub destiny: u32,
    pub soul_urge: u32,
    pub personality: u32,
}

impl NameNumbers {
    pub fn compute(full_name: &str) -> Self {
        Self {
            destiny: destiny(full_name),
            soul_urge: soul_urge(full_name),
            personality: personality(full_name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberChange {
    pub changed: bool,
    pub improvement: i32,
}

impl NumberChange {
    fn between(before: u32, after: u32) -> Self {
        Self {
            changed: before != after,
            improvement: weight(after) - weight(before),
        }
    }
}

fn weight(n: u32) -> i32 {
    n as i32 + if is_master(n) { MASTER_WEIGHT } else { 0 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NameChanges {
    pub destiny: NumberChange,
    pub soul_urge: NumberChange,
    pub personality: NumberChange,
}

impl NameChanges {
    fn all(&self) -> [NumberChange; 3] {
        [self.destiny, self.soul_urge, self.personality]
    }

    pub fn count(&self) -> usize {
        self.all().iter().filter(|c| c.changed).count()
    }

    pub fn total_improvement(&self) -> i32 {
        self.all().iter().map(|c| c.improvement).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameImpact {
    Neutral,
    Positive,
    Negative,
    Mixed,
}

impl NameImpact {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Mixed => "mixed",
        }
    }

    fn classify(changes_count: usize, total_improvement: i32) -> Self {
        if changes_count == 0 {
            Self::Neutral
        } else if total_improvement > 0 {
            Self::Positive
        } else if total_improvement < 0 {
            Self::Negative
        } else {
            Self::Mixed
        }
    }

    fn summary(self, changes_count: usize) -> String {
        match self {
            Self::Neutral => {
                "The new name maintains the same numerological numbers. Energy remains unchanged."
                    .to_string()
            }
            Self::Positive => format!(
                "The change brings {changes_count} positive modifications. \
                 New energy favors growth and evolution."
            ),
            Self::Negative => format!(
                "The change brings {changes_count} modifications. \
                 Some energies may need adjustments."
            ),
            Self::Mixed => format!(
                "The change brings {changes_count} mixed modifications. \
                 Analyze each aspect carefully."
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameChangeComparison {
    pub before: NameNumbers,
    pub after: NameNumbers,
    pub changes: NameChanges,
    pub changes_count: usize,
    pub total_improvement: i32,
    pub impact: NameImpact,
    pub summary: String,
    /// Scorer compatibility between the old and new Destiny.
    pub destiny_compatibility: u32,
}

/// Compare the numbers of an original name against a proposed one.
pub fn compare_name_change(
    original: &str,
    proposed: &str,
    config: &ScorerConfig,
) -> NameChangeComparison {
    let before = NameNumbers::compute(original);
    let after = NameNumbers::compute(proposed);
    let changes = NameChanges {
        destiny: NumberChange::between(before.destiny, after.destiny),
        soul_urge: NumberChange::between(before.soul_urge, after.soul_urge),
        personality: NumberChange::between(before.personality, after.personality),
    };
    let changes_count = changes.count();
    let total_improvement = changes.total_improvement();
    let impact = NameImpact::classify(changes_count, total_improvement);
    NameChangeComparison {
        before,
        after,
        changes,
        changes_count,
        total_improvement,
        impact,
        summary: impact.summary(changes_count),
        destiny_compatibility: score(before.destiny, after.destiny, config),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameSuggestion {
    pub name: String,
    pub destiny: u32,
    pub improvement: u32,
    pub reason: &'static str,
}

/// Spelling variants whose Destiny hits one of `targets` or a master number.
///
/// Single letters from a fixed list are appended first; then, unless the
/// name ends in a vowel or `y`, its last letter is doubled. Duplicates
/// (case-insensitive) keep their first occurrence. At most
/// [`MAX_SUGGESTIONS`] are returned, highest improvement first.
pub fn name_suggestions(name: &str, targets: &[u32]) -> Vec<NameSuggestion> {
    let original = destiny(name);
    let mut suggestions = Vec::new();

    for letter in SUGGESTION_LETTERS {
        let candidate = format!("{name}{letter}");
        let d = destiny(&candidate);
        if is_master(d) {
            suggestions.push(NameSuggestion {
                name: candidate,
                destiny: d,
                improvement: 3,
                reason: "Master Number - intensified spiritual energy",
            });
        } else if targets.contains(&d) {
            suggestions.push(NameSuggestion {
                name: candidate,
                destiny: d,
                improvement: 1,
                reason: "Match with desired target number",
            });
        }
    }

    if let Some(last) = name.chars().last().map(|c| c.to_ascii_lowercase()) {
        if last.is_ascii_alphabetic() && !SOFT_ENDINGS.contains(&last) {
            let candidate = format!("{name}{last}");
            let d = destiny(&candidate);
            if targets.contains(&d) || d != original {
                suggestions.push(NameSuggestion {
                    name: candidate,
                    destiny: d,
                    improvement: 1,
                    reason: "More balanced energy",
                });
            }
        }
    }

    let mut unique: Vec<NameSuggestion> = Vec::with_capacity(suggestions.len());
    for s in suggestions {
        if !unique.iter().any(|u| u.name.eq_ignore_ascii_case(&s.name)) {
            unique.push(s);
        }
    }
    unique.sort_by(|a, b| b.improvement.cmp(&a.improvement));
    unique.truncate(MAX_SUGGESTIONS);
    unique
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessNameAnalysis {
    pub name: String,
    pub destiny: u32,
    pub energy: VibrationalEnergy,
    pub suitable_for: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

/// Destiny-based profile of a company or brand name.
pub fn analyze_business_name(name: &str) -> BusinessNameAnalysis {
    let d = destiny(name);
    let q = business_qualities(d);
    BusinessNameAnalysis {
        name: name.to_string(),
        destiny: d,
        energy: q.energy,
        suitable_for: q.suitable_for,
        challenges: q.challenges,
        recommendations: q.recommendations,
    }
}
