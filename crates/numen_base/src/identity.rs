//! Core identity numbers derived from a full name and a birth date.
//!
//! Life Path, Maturity and the three name numbers preserve master values at
//! every step; Balance never does.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::letters::{LetterSystem, clean_letters, name_sums, name_sums_with};
use crate::reduce::{reduce, year_digit_sum};

/// Life Path: reduced day + reduced month + reduced year digit sum, each
/// component and the total reduced with master preservation.
pub fn life_path(birth: NaiveDate) -> u32 {
    let day = reduce(birth.day(), true);
    let month = reduce(birth.month(), true);
    let year = reduce(year_digit_sum(birth.year()), true);
    reduce(day + month + year, true)
}

/// Destiny (Expression): every letter of the name.
pub fn destiny(full_name: &str) -> u32 {
    reduce(name_sums(full_name).total, true)
}

/// Soul Urge (Heart's Desire): vowels only.
pub fn soul_urge(full_name: &str) -> u32 {
    reduce(name_sums(full_name).vowels, true)
}

/// Personality: consonants only.
pub fn personality(full_name: &str) -> u32 {
    reduce(name_sums(full_name).consonants, true)
}

/// Destiny-style number under an arbitrary letter system.
pub fn name_number_with(full_name: &str, system: LetterSystem) -> u32 {
    reduce(name_sums_with(full_name, system).total, true)
}

/// Unreduced Chaldean letter sum, used for compound-number lookups.
pub fn compound_number(full_name: &str) -> u32 {
    name_sums_with(full_name, LetterSystem::Chaldean).total
}

/// Maturity: Life Path + Destiny, master-preserving.
pub fn maturity(birth: NaiveDate, full_name: &str) -> u32 {
    reduce(life_path(birth) + destiny(full_name), true)
}

/// Balance: |Soul Urge - Personality| reduced without master preservation.
pub fn balance(full_name: &str) -> u32 {
    reduce(soul_urge(full_name).abs_diff(personality(full_name)), false)
}

/// Top three digit values by letter frequency.
///
/// Ties are broken by ascending digit. Fewer than three values are returned
/// when the name has fewer distinct digits.
pub fn hidden_passions(full_name: &str) -> Vec<u32> {
    let mut counts = [0u32; 9];
    for c in clean_letters(full_name) {
        if let Some(v) = LetterSystem::Pythagorean.value(c) {
            counts[(v - 1) as usize] += 1;
        }
    }

    let mut ranked: Vec<(u32, u32)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n > 0)
        .map(|(i, &n)| (i as u32 + 1, n))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.into_iter().take(3).map(|(digit, _)| digit).collect()
}

/// The six identity numbers for one (name, birth date) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IdentityProfile {
    pub life_path: u32,
    pub destiny: u32,
    pub soul_urge: u32,
    pub personality: u32,
    pub maturity: u32,
    pub balance: u32,
}

impl IdentityProfile {
    /// Compute the full profile.
    pub fn compute(full_name: &str, birth: NaiveDate) -> Self {
        let sums = name_sums(full_name);
        let life_path = life_path(birth);
        let destiny = reduce(sums.total, true);
        let soul_urge = reduce(sums.vowels, true);
        let personality = reduce(sums.consonants, true);
        Self {
            life_path,
            destiny,
            soul_urge,
            personality,
            maturity: reduce(life_path + destiny, true),
            balance: reduce(soul_urge.abs_diff(personality), false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn life_path_examples() {
        assert_eq!(life_path(date(1990, 5, 15)), 3);
        assert_eq!(life_path(date(1985, 12, 25)), 6);
        assert_eq!(life_path(date(1950, 3, 20)), 11);
    }

    #[test]
    fn life_path_keeps_master_component() {
        // day 29 -> 11 is kept as a component: 11 + 1 + reduce(2+0+0+0) = 14 -> 5
        assert_eq!(life_path(date(2000, 1, 29)), 5);
        // day 11, month 11, 2000 -> 11 + 11 + 2 = 24 -> 6
        assert_eq!(life_path(date(2000, 11, 11)), 6);
    }

    #[test]
    fn destiny_examples() {
        assert_eq!(destiny("John"), 2);
        assert_eq!(destiny("JOHN"), destiny("john"));
        assert_eq!(destiny("John-Smith"), destiny("John Smith"));
        assert_eq!(destiny("John Smith"), 8);
    }

    #[test]
    fn soul_urge_preserves_master() {
        // A1 + I9 + A1 = 11
        assert_eq!(soul_urge("Maria"), 11);
    }

    #[test]
    fn empty_name_degenerates_to_zero() {
        assert_eq!(destiny(""), 0);
        assert_eq!(soul_urge("--"), 0);
        assert_eq!(personality("42"), 0);
        assert_eq!(balance(""), 0);
        assert!(hidden_passions("").is_empty());
    }

    #[test]
    fn maturity_and_balance() {
        let birth = date(1990, 5, 15);
        // LP 3 + Destiny 8 = 11
        assert_eq!(maturity(birth, "John Smith"), 11);
        // Soul 15 -> 6, Personality 29 -> 11; |6 - 11| = 5
        assert_eq!(balance("John Smith"), 5);
    }

    #[test]
    fn hidden_passions_ranking() {
        // John Smith digits: 1,6,8,5,1,4,9,2,8 -> 1 x2, 8 x2, then 2
        assert_eq!(hidden_passions("John Smith"), vec![1, 8, 2]);
        // Single distinct value
        assert_eq!(hidden_passions("Aaa"), vec![1]);
    }

    #[test]
    fn profile_matches_individual_functions() {
        let birth = date(1990, 5, 15);
        let p = IdentityProfile::compute("John Smith", birth);
        assert_eq!(p.life_path, life_path(birth));
        assert_eq!(p.destiny, destiny("John Smith"));
        assert_eq!(p.soul_urge, soul_urge("John Smith"));
        assert_eq!(p.personality, personality("John Smith"));
        assert_eq!(p.maturity, maturity(birth, "John Smith"));
        assert_eq!(p.balance, balance("John Smith"));
        assert_eq!(p, IdentityProfile::compute("John Smith", birth));
    }

    #[test]
    fn chaldean_name_number() {
        // J1 O7 H5 N5 = 18 -> 9
        assert_eq!(compound_number("John"), 18);
        assert_eq!(name_number_with("John", LetterSystem::Chaldean), 9);
        assert_eq!(
            name_number_with("John", LetterSystem::Pythagorean),
            destiny("John")
        );
    }
}
