//! Karmic debts and karmic lessons.
//!
//! A debt is recorded whenever one of five pre-reduction sums lands on 13,
//! 14, 16 or 19. Lessons are the digits 1-9 that no letter of the name maps
//! to.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::letters::{letter_value, name_sums};
use crate::reduce::{is_karmic_debt, reduce, year_digit_sum};

/// Where a karmic debt was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DebtSource {
    LifePath,
    Birthday,
    Destiny,
    SoulUrge,
    Personality,
}

impl DebtSource {
    pub const fn name(self) -> &'static str {
        match self {
            Self::LifePath => "life path",
            Self::Birthday => "birthday",
            Self::Destiny => "destiny",
            Self::SoulUrge => "soul urge",
            Self::Personality => "personality",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KarmicDebt {
    /// 13, 14, 16 or 19.
    pub number: u32,
    pub source: DebtSource,
}

/// Title and healing focus for one karmic-debt number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DebtMeaning {
    pub number: u32,
    pub title: &'static str,
    pub lesson: &'static str,
    pub healing: &'static str,
}

pub static DEBT_MEANINGS: [DebtMeaning; 4] = [
    DebtMeaning {
        number: 13,
        title: "Karmic Debt 13/4",
        lesson: "The lesson is to learn the value of consistent work and perseverance, without looking for shortcuts.",
        healing: "Focus on completing projects, develop discipline, and celebrate gradual progress.",
    },
    DebtMeaning {
        number: 14,
        title: "Karmic Debt 14/5",
        lesson: "The lesson is to learn moderation and to use freedom with responsibility and wisdom.",
        healing: "Practice self-discipline, avoid excess, and find adventure in stability.",
    },
    DebtMeaning {
        number: 16,
        title: "Karmic Debt 16/7",
        lesson: "The lesson is humility and rebuilding the self on authentic spiritual foundations.",
        healing: "Accept transformations as growth opportunities, practice humility, and develop your inner life.",
    },
    DebtMeaning {
        number: 19,
        title: "Karmic Debt 19/1",
        lesson: "The lesson is to learn to stand on your own while remaining connected to and in service of others.",
        healing: "Develop healthy independence, practice generosity, and acknowledge others' contributions.",
    },
];

/// Title and description for each karmic lesson (index 0 = digit 1).
pub const LESSON_MEANINGS: [(&str, &str); 9] = [
    (
        "Lesson of Independence",
        "Number 1 is missing from your name - you need to learn to be independent and assert your individuality.",
    ),
    (
        "Lesson of Cooperation",
        "Number 2 is missing - you need to learn to cooperate, be patient, and be sensitive to others' needs.",
    ),
    (
        "Lesson of Expression",
        "Number 3 is missing - you need to learn to express yourself creatively and communicate effectively.",
    ),
    (
        "Lesson of Discipline",
        "Number 4 is missing - you need to learn discipline, organization, and the value of consistent work.",
    ),
    (
        "Lesson of Freedom",
        "Number 5 is missing - you need to learn to embrace change and use freedom constructively.",
    ),
    (
        "Lesson of Responsibility",
        "Number 6 is missing - you need to learn responsibility, care for others, and harmony in relationships.",
    ),
    (
        "Lesson of Wisdom",
        "Number 7 is missing - you need to learn introspection, analysis, and to seek deeper truths.",
    ),
    (
        "Lesson of Power",
        "Number 8 is missing - you need to learn to manage power, money, and material success.",
    ),
    (
        "Lesson of Compassion",
        "Number 9 is missing - you need to learn universal compassion, generosity, and releasing the past.",
    ),
];

/// Meaning for a karmic-debt number.
pub fn debt_meaning(number: u32) -> Option<&'static DebtMeaning> {
    DEBT_MEANINGS.iter().find(|m| m.number == number)
}

/// Unreduced Life Path sum: components reduced without preservation, total
/// left as is.
pub fn life_path_presum(birth: NaiveDate) -> u32 {
    reduce(birth.day(), false)
        + reduce(birth.month(), false)
        + reduce(year_digit_sum(birth.year()), false)
}

/// Karmic debts in detection order: life path, birthday, destiny, soul
/// urge, personality.
pub fn karmic_debts(birth: NaiveDate, full_name: &str) -> Vec<KarmicDebt> {
    let sums = name_sums(full_name);
    let checks = [
        (life_path_presum(birth), DebtSource::LifePath),
        (birth.day(), DebtSource::Birthday),
        (sums.total, DebtSource::Destiny),
        (sums.vowels, DebtSource::SoulUrge),
        (sums.consonants, DebtSource::Personality),
    ];
    checks
        .into_iter()
        .filter(|&(n, _)| is_karmic_debt(n))
        .map(|(number, source)| KarmicDebt { number, source })
        .collect()
}

/// Digits 1-9 absent from the name's letter values, ascending.
pub fn karmic_lessons(full_name: &str) -> Vec<u32> {
    let mut seen = [false; 9];
    for c in full_name.chars() {
        if let Some(v) = letter_value(c) {
            seen[(v - 1) as usize] = true;
        }
    }
    (1..=9).filter(|&d| !seen[(d - 1) as usize]).collect()
}

/// Debts, lessons and the derived path number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KarmicPath {
    pub debts: Vec<KarmicDebt>,
    pub lessons: Vec<u32>,
    pub primary_debt: Option<u32>,
    pub primary_lesson: Option<u32>,
    pub healing_steps: Vec<String>,
    /// reduce(primary debt + primary lesson); 0 when both are absent.
    pub path_number: u32,
}

pub fn karmic_path(birth: NaiveDate, full_name: &str) -> KarmicPath {
    let debts = karmic_debts(birth, full_name);
    let lessons = karmic_lessons(full_name);
    let primary_debt = debts.first().map(|d| d.number);
    let primary_lesson = lessons.first().copied();

    let mut healing_steps = Vec::new();
    if let Some(m) = primary_debt.and_then(debt_meaning) {
        healing_steps.push(format!("Focus: {}", m.healing));
    }
    if let Some(d) = primary_lesson {
        healing_steps.push(format!("Learn: {}", LESSON_MEANINGS[(d - 1) as usize].1));
    }

    let sum = primary_debt.unwrap_or(0) + primary_lesson.unwrap_or(0);
    KarmicPath {
        debts,
        lessons,
        primary_debt,
        primary_lesson,
        healing_steps,
        path_number: reduce(sum, false),
    }
}
