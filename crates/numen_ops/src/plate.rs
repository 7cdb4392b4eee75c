//! Licence-plate numerology.

use chrono::NaiveDate;
use numen_base::{CompatibilityLevel, ScorerConfig, letter_value, life_path, reduce, score};
use serde::Serialize;

use crate::error::OpsError;
use crate::meanings::{PLATE_ENERGIES, PLATE_TRAITS, plate_note, slot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlateAnalysis {
    /// Uppercased `[A-Z0-9]` characters of the plate.
    pub plate: String,
    /// Raw sum of letter and digit values.
    pub plate_number: u32,
    /// `plate_number` reduced with master preservation.
    pub vibration: u32,
    pub energy: &'static str,
    pub characteristics: [&'static str; 3],
    pub note: &'static str,
}

pub fn analyze_plate(plate: &str) -> Result<PlateAnalysis, OpsError> {
    let cleaned: String = plate
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_alphanumeric)
        .collect();
    if cleaned.is_empty() {
        return Err(OpsError::EmptyLicensePlate);
    }
    let plate_number = cleaned
        .chars()
        .filter_map(|c| c.to_digit(10).or_else(|| letter_value(c)))
        .sum();
    let vibration = reduce(plate_number, true);
    let i = slot(vibration);
    Ok(PlateAnalysis {
        plate: cleaned,
        plate_number,
        vibration,
        energy: PLATE_ENERGIES[i],
        characteristics: PLATE_TRAITS[i],
        note: plate_note(vibration),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleCompatibility {
    pub analysis: PlateAnalysis,
    pub owner_life_path: u32,
    pub compatibility: u32,
    pub level: CompatibilityLevel,
    pub recommendation: &'static str,
}

fn vehicle_recommendation(level: CompatibilityLevel) -> &'static str {
    match level {
        CompatibilityLevel::Excellent => {
            "Excellent car for you! Perfect compatibility with your personal energy."
        }
        CompatibilityLevel::Good => "Good car for you. Solid compatibility with your energy.",
        CompatibilityLevel::Moderate => {
            "Acceptable car, but not ideal. Consider alternatives if possible."
        }
        CompatibilityLevel::Challenging => {
            "Low compatibility. This car is not recommended for you."
        }
    }
}

/// Plate against the owner's Life Path. Bands: 85 / 70 / 50.
pub fn vehicle_compatibility(
    plate: &str,
    owner_birth: NaiveDate,
    config: &ScorerConfig,
) -> Result<VehicleCompatibility, OpsError> {
    let analysis = analyze_plate(plate)?;
    let owner_life_path = life_path(owner_birth);
    let compatibility = score(owner_life_path, analysis.vibration, config);
    let level = CompatibilityLevel::from_thresholds(compatibility, 85, 70, 50);
    Ok(VehicleCompatibility {
        analysis,
        owner_life_path,
        compatibility,
        level,
        recommendation: vehicle_recommendation(level),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn plate_is_cleaned_and_summed() {
        let p = analyze_plate("ab-12 c").unwrap();
        assert_eq!(p.plate, "AB12C");
        // A1 B2 1 2 C3
        assert_eq!(p.plate_number, 9);
        assert_eq!(p.vibration, 9);
        assert_eq!(p.characteristics, PLATE_TRAITS[8]);
    }

    #[test]
    fn master_vibration_is_kept() {
        // 2+9 = 11
        let p = analyze_plate("29").unwrap();
        assert_eq!(p.vibration, 11);
        assert_eq!(p.energy, PLATE_ENERGIES[1]);
    }

    #[test]
    fn empty_plate_is_rejected() {
        assert_eq!(analyze_plate(" - "), Err(OpsError::EmptyLicensePlate));
        assert_eq!(
            vehicle_compatibility("", date(2000, 1, 1), &ScorerConfig::plate()),
            Err(OpsError::EmptyLicensePlate)
        );
    }

    #[test]
    fn compatibility_bands() {
        // 2000-01-01: 1 + 1 + 2 = 4
        let birth = date(2000, 1, 1);
        let cfg = ScorerConfig::plate();
        let v = vehicle_compatibility("4", birth, &cfg).unwrap();
        assert_eq!(v.owner_life_path, 4);
        assert_eq!(v.compatibility, 100);
        assert_eq!(v.level, CompatibilityLevel::Excellent);
        // 4-6: 100 - 24 + 12 = 88
        let v = vehicle_compatibility("6", birth, &cfg).unwrap();
        assert_eq!(v.compatibility, 88);
        assert_eq!(v.level, CompatibilityLevel::Excellent);
        // 4-7: 100 - 36 = 64
        let v = vehicle_compatibility("7", birth, &cfg).unwrap();
        assert_eq!(v.level, CompatibilityLevel::Moderate);
        // 4-9: 100 - 60 = 40
        let v = vehicle_compatibility("9", birth, &cfg).unwrap();
        assert_eq!(v.level, CompatibilityLevel::Challenging);
        assert!(v.recommendation.starts_with("Low compatibility"));
    }
}
