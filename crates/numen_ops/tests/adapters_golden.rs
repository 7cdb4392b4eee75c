//! Golden-value tests for the domain adapters.
//!
//! Values were worked by hand from the Pythagorean table and the scorer
//! configurations.

use chrono::NaiveDate;
use numen_base::CompatibilityLevel;
use numen_ops::{
    BusinessSuitability, Grade, NameImpact, OpsError, ScorerConfig, Stability, analyze_address,
    analyze_landline, analyze_office_address, analyze_phone, analyze_plate, compare_addresses,
    compare_name_change, rank_addresses, rank_phones, vehicle_compatibility,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

#[test]
fn address_full_breakdown() {
    // 2+2+1 = 5; B2 + Baker 19 + Street 24 = 45; 50 -> 5
    let a = analyze_address("221B Baker Street");
    assert_eq!(a.address_number, 5);
    assert_eq!(a.street_number, 5);
    assert_eq!(a.building_number, 0);
    assert!(a.meaning.starts_with("Dynamic and versatile address"));
}

#[test]
fn office_business_vibration() {
    // 50 + 8 = 58 -> 13 -> 4
    let o = analyze_office_address("221B Baker Street");
    assert_eq!(o.business_vibration, 4);
    assert!(o.business_meaning.starts_with("Leadership"));
    // 0 + 8 = 8
    let o = analyze_office_address("---");
    assert_eq!(o.address.address_number, 0);
    assert_eq!(o.business_vibration, 8);
    assert!(o.business_meaning.starts_with("Material success"));
}

#[test]
fn office_serialises_flat() {
    let o = analyze_office_address("221B Baker Street");
    let v = serde_json::to_value(&o).unwrap();
    assert_eq!(v["address_number"], 5);
    assert_eq!(v["business_vibration"], 4);
    assert!(v.get("address").is_none());
}

#[test]
fn address_comparison_complementary_pair() {
    // 1 and 9: 100 - 160 + 10 clamps to 0
    let c = compare_addresses("1", "9", &ScorerConfig::address());
    assert_eq!(c.compatibility, 0);
    assert_eq!(c.grade, Grade::Low);
    // 4 and 6: 100 - 40 + 10
    let c = compare_addresses("4", "6", &ScorerConfig::address());
    assert_eq!(c.compatibility, 70);
    assert_eq!(c.grade, Grade::Good);
}

#[test]
fn address_ranking_with_custom_config() {
    let cfg = ScorerConfig {
        penalty_per_step: 5,
        complementary_bonus: 0,
        complementary_pairs: Vec::new(),
    };
    let ranked = rank_addresses(1, &["9", "1", "5"], &cfg);
    let scores: Vec<u32> = ranked.iter().map(|r| r.compatibility).collect();
    assert_eq!(scores, vec![100, 80, 60]);
}

// ---------------------------------------------------------------------------
// Phone
// ---------------------------------------------------------------------------

#[test]
fn phone_and_landline() {
    // 0+7+1+2+3+4+5+6+7+8 = 43 -> 7
    let p = analyze_phone("0712 345 678").unwrap();
    assert_eq!(p.value, 7);
    let l = analyze_landline("0712 345 678").unwrap();
    // 7 + 4 = 11 -> 2
    assert_eq!(l.stability_score, 2);
    assert_eq!(l.stability, Stability::Low);
    assert_eq!(l.business_suitability, BusinessSuitability::Fair);
}

#[test]
fn phone_validation() {
    assert_eq!(analyze_phone("call me"), Err(OpsError::EmptyPhoneNumber));
    assert_eq!(
        rank_phones(3, &["no digits"], &ScorerConfig::phone()),
        Err(OpsError::EmptyPhoneNumber)
    );
    let empty: [&str; 0] = [];
    assert_eq!(
        rank_phones(3, &empty, &ScorerConfig::phone()),
        Ok(Vec::new())
    );
}

// ---------------------------------------------------------------------------
// Plate
// ---------------------------------------------------------------------------

#[test]
fn plate_and_vehicle() {
    // B2 1 2 3 X6 Y7 Z8 = 29 -> 11
    let p = analyze_plate("b 123 xyz").unwrap();
    assert_eq!(p.plate, "B123XYZ");
    assert_eq!(p.plate_number, 29);
    assert_eq!(p.vibration, 11);

    // 1990-05-15: 5 + 6 + 1 = 12 -> 3; plate 11 reduces to 2 for scoring
    let v = vehicle_compatibility("b 123 xyz", date(1990, 5, 15), &ScorerConfig::plate()).unwrap();
    assert_eq!(v.owner_life_path, 3);
    assert_eq!(v.compatibility, 88);
    assert_eq!(v.level, CompatibilityLevel::Excellent);
}

#[test]
fn plate_validation() {
    assert_eq!(analyze_plate("--"), Err(OpsError::EmptyLicensePlate));
}

// ---------------------------------------------------------------------------
// Name change
// ---------------------------------------------------------------------------

#[test]
fn gaining_letters_can_be_positive() {
    // Bob: 1 / 6 / 4. Bobs: 11 / 6 / 5.
    let c = compare_name_change("Bob", "Bobs", &ScorerConfig::address());
    assert_eq!(c.changes.destiny.improvement, 12);
    assert_eq!(c.changes.personality.improvement, 1);
    assert_eq!(c.impact, NameImpact::Positive);
    assert_eq!(
        c.summary,
        "The change brings 2 positive modifications. New energy favors growth and evolution."
    );
}
