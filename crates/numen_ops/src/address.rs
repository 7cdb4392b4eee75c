//! Address numerology.
//!
//! Letters contribute their Pythagorean value and digits their face value;
//! everything outside `A..=Z` / `0..=9` is ignored.

use numen_base::{ScorerConfig, letter_value, reduce, score};
use serde::Serialize;

use crate::grade::Grade;
use crate::meanings::{ADDRESS_AFFINITY, address_meaning, business_address_meaning, slot};

/// Vibration added to an office address sum.
pub const BUSINESS_OFFSET: u32 = 8;

/// Unreduced sum of letter and digit values.
pub fn address_sum(address: &str) -> u32 {
    address
        .chars()
        .filter_map(|c| c.to_digit(10).or_else(|| letter_value(c)))
        .sum()
}

/// Maximal runs of ASCII digits, in order.
fn digit_runs(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
}

/// A digit run reduced without master preservation.
fn reduce_run(run: &str) -> u32 {
    reduce(run.chars().filter_map(|c| c.to_digit(10)).sum(), false)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressAnalysis {
    /// Total sum reduced with master preservation.
    pub address_number: u32,
    /// First number in the address, reduced; 0 when absent.
    pub street_number: u32,
    /// Second number in the address, reduced; 0 when absent.
    pub building_number: u32,
    pub overall_vibration: u32,
    pub meaning: &'static str,
    pub compatible_with: &'static str,
}

pub fn analyze_address(address: &str) -> AddressAnalysis {
    let address_number = reduce(address_sum(address), true);
    let mut runs = digit_runs(address).map(reduce_run);
    let street_number = runs.next().unwrap_or(0);
    let building_number = runs.next().unwrap_or(0);
    AddressAnalysis {
        address_number,
        street_number,
        building_number,
        overall_vibration: address_number,
        meaning: address_meaning(address_number),
        compatible_with: ADDRESS_AFFINITY[slot(address_number)],
    }
}

/// Residential analysis plus a business vibration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfficeAddressAnalysis {
    #[serde(flatten)]
    pub address: AddressAnalysis,
    /// (sum + 8) reduced with master preservation.
    pub business_vibration: u32,
    pub business_meaning: &'static str,
}

pub fn analyze_office_address(address: &str) -> OfficeAddressAnalysis {
    let business_vibration = reduce(address_sum(address) + BUSINESS_OFFSET, true);
    OfficeAddressAnalysis {
        address: analyze_address(address),
        business_vibration,
        business_meaning: business_address_meaning(business_vibration),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressComparison {
    pub first: AddressAnalysis,
    pub second: AddressAnalysis,
    pub compatibility: u32,
    pub grade: Grade,
    pub recommendation: &'static str,
}

/// Score two addresses against each other.
pub fn compare_addresses(first: &str, second: &str, config: &ScorerConfig) -> AddressComparison {
    let first = analyze_address(first);
    let second = analyze_address(second);
    let compatibility = score(first.address_number, second.address_number, config);
    let grade = Grade::from_score(compatibility);
    AddressComparison {
        first,
        second,
        compatibility,
        grade,
        recommendation: grade.address_text(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRecommendation {
    pub address: String,
    pub analysis: AddressAnalysis,
    pub compatibility: u32,
    pub grade: Grade,
    pub recommendation: &'static str,
}

/// Score each candidate against a Life Path; best first, ties keep input
/// order.
pub fn rank_addresses<S: AsRef<str>>(
    life_path: u32,
    options: &[S],
    config: &ScorerConfig,
) -> Vec<AddressRecommendation> {
    let mut ranked: Vec<AddressRecommendation> = options
        .iter()
        .map(|option| {
            let address = option.as_ref();
            let analysis = analyze_address(address);
            let compatibility = score(life_path, analysis.address_number, config);
            let grade = Grade::from_score(compatibility);
            AddressRecommendation {
                address: address.to_string(),
                analysis,
                compatibility,
                grade,
                recommendation: grade.address_text(),
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.compatibility.cmp(&a.compatibility));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_mixes_digits_and_letters() {
        // 1+2+3 + M4 A1 I9 N5 = 25
        assert_eq!(address_sum("123 Main"), 25);
        assert_eq!(address_sum("123 main!"), 25);
        assert_eq!(address_sum(""), 0);
    }

    #[test]
    fn street_and_building_numbers() {
        let a = analyze_address("123 Main St, Apt 45");
        // 123 -> 6, 45 -> 9
        assert_eq!(a.street_number, 6);
        assert_eq!(a.building_number, 9);
        let b = analyze_address("Main Street");
        assert_eq!(b.street_number, 0);
        assert_eq!(b.building_number, 0);
    }

    #[test]
    fn address_number_preserves_masters() {
        // 2+9 = 11
        let a = analyze_address("29");
        assert_eq!(a.address_number, 11);
        assert_eq!(a.overall_vibration, 11);
        assert!(a.meaning.starts_with("Master address"));
        // compatibility text keyed by the reduced value 2
        assert_eq!(a.compatible_with, ADDRESS_AFFINITY[1]);
    }

    #[test]
    fn office_adds_business_offset() {
        // 25 + 8 = 33
        let o = analyze_office_address("123 Main");
        assert_eq!(o.address.address_number, 7);
        assert_eq!(o.business_vibration, 33);
    }

    #[test]
    fn compare_same_number_is_excellent() {
        let c = compare_addresses("7", "16", &ScorerConfig::address());
        assert_eq!(c.compatibility, 100);
        assert_eq!(c.grade, Grade::Excellent);
    }

    #[test]
    fn ranking_is_stable() {
        let cfg = ScorerConfig::address();
        // life path 3: "3" = 100, "4" and "2" = 80 (in input order), "9" = 0
        let ranked = rank_addresses(3, &["9", "4", "3", "2"], &cfg);
        let order: Vec<&str> = ranked.iter().map(|r| r.address.as_str()).collect();
        assert_eq!(order, vec!["3", "4", "2", "9"]);
        assert_eq!(ranked[0].compatibility, 100);
        assert_eq!(ranked[3].compatibility, 0);
    }
}
