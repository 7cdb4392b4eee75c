//! Letter-to-digit alphabets and name letter sums.
//!
//! Input text is uppercased and everything outside `A..=Z` is discarded
//! before lookup, so `"John-Smith"`, `"john smith"` and `"JOHN SMITH"` all
//! map to the same letter sequence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Pythagorean values for `A..=Z`: three cyclic blocks of 9, 9 and 8.
const PYTHAGOREAN: [u8; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // A-I
    1, 2, 3, 4, 5, 6, 7, 8, 9, // J-R
    1, 2, 3, 4, 5, 6, 7, 8, // S-Z
];

/// Chaldean values for `A..=Z`. No letter carries 9.
const CHALDEAN: [u8; 26] = [
    1, 2, 3, 4, 5, 8, 3, 5, 1, // A-I
    1, 2, 3, 4, 5, 7, 8, 1, 2, // J-R
    3, 4, 6, 6, 6, 5, 1, 7, // S-Z
];

/// Letters counted as vowels for Soul Urge / Personality splits.
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Letter-to-digit alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterSystem {
    /// A=1 .. I=9, J=1 .. R=9, S=1 .. Z=8.
    #[default]
    Pythagorean,
    /// Babylonian alphabet with values 1-8.
    Chaldean,
}

impl LetterSystem {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pythagorean => "Pythagorean",
            Self::Chaldean => "Chaldean",
        }
    }

    const fn table(self) -> &'static [u8; 26] {
        match self {
            Self::Pythagorean => &PYTHAGOREAN,
            Self::Chaldean => &CHALDEAN,
        }
    }

    /// Value of a single letter, case-insensitive. `None` for non-letters.
    pub fn value(self, c: char) -> Option<u32> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(u32::from(self.table()[(upper as u8 - b'A') as usize]))
        } else {
            None
        }
    }
}

/// Pythagorean value of a single letter.
pub fn letter_value(c: char) -> Option<u32> {
    LetterSystem::Pythagorean.value(c)
}

/// Whether an (uppercase) letter is one of A, E, I, O, U.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_uppercase())
}

/// Uppercased `A..=Z` letters of `text`, in order.
pub fn clean_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_uppercase)
}

/// Unreduced letter sums of a name, split by vowel class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NameSums {
    /// Sum over every letter.
    pub total: u32,
    /// Sum over A, E, I, O, U.
    pub vowels: u32,
    /// Sum over all other letters.
    pub consonants: u32,
}

/// Compute raw letter sums under a letter system.
pub fn name_sums_with(name: &str, system: LetterSystem) -> NameSums {
    let mut sums = NameSums::default();
    for c in clean_letters(name) {
        let v = system.value(c).unwrap_or(0);
        sums.total += v;
        if is_vowel(c) {
            sums.vowels += v;
        } else {
            sums.consonants += v;
        }
    }
    sums
}

/// Compute raw Pythagorean letter sums.
pub fn name_sums(name: &str) -> NameSums {
    name_sums_with(name, LetterSystem::Pythagorean)
}

/// Letter and digit frequency statistics for a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterDistribution {
    /// Occurrences of each letter.
    pub letter_counts: BTreeMap<char, u32>,
    /// Occurrences of each digit value 1-9 (index 0 = digit 1).
    pub number_counts: [u32; 9],
    /// Number of vowel letters.
    pub vowels: u32,
    /// Number of consonant letters.
    pub consonants: u32,
    /// Most frequent digit (first in 1..9 order on ties), 0 if the name is empty.
    pub most_frequent: u32,
    /// Least frequent present digit (first in 1..9 order on ties), 0 if empty.
    pub least_frequent: u32,
    /// Digits 1-9 that no letter maps to.
    pub missing: Vec<u32>,
}

/// Tally letters and their Pythagorean digit values.
pub fn letter_distribution(name: &str) -> LetterDistribution {
    let mut letter_counts = BTreeMap::new();
    let mut number_counts = [0u32; 9];
    let mut vowels = 0;
    let mut consonants = 0;

    for c in clean_letters(name) {
        *letter_counts.entry(c).or_insert(0) += 1;
        if let Some(v) = letter_value(c) {
            number_counts[(v - 1) as usize] += 1;
            if is_vowel(c) {
                vowels += 1;
            } else {
                consonants += 1;
            }
        }
    }

    let mut most_frequent = 0;
    let mut most_count = 0;
    let mut least_frequent = 0;
    let mut least_count = u32::MAX;
    for (i, &count) in number_counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let digit = i as u32 + 1;
        if count > most_count {
            most_count = count;
            most_frequent = digit;
        }
        if count < least_count {
            least_count = count;
            least_frequent = digit;
        }
    }

    let missing = (1..=9)
        .filter(|&d| number_counts[(d - 1) as usize] == 0)
        .collect();

    LetterDistribution {
        letter_counts,
        number_counts,
        vowels,
        consonants,
        most_frequent,
        least_frequent,
        missing,
    }
}
