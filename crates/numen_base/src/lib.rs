//! Pure numerology primitives: letter values, digit reduction and the
//! analyses composed from them.
//!
//! This crate provides:
//! - Pythagorean and Chaldean letter alphabets
//! - Digit reduction with and without master-number preservation
//! - Core identity numbers (Life Path, Destiny, Soul Urge, ...)
//! - Personal and universal cycles
//! - Lo Shu grid analysis
//! - The parametrised compatibility scorer and the person-to-person matrix
//! - Karmic debts/lessons, pinnacles and challenges
//!
//! Every function is deterministic and free of I/O; none reads the clock.

pub mod compat;
pub mod cycles;
pub mod error;
pub mod identity;
pub mod karmic;
pub mod letters;
pub mod loshu;
pub mod loshu_data;
pub mod pair;
pub mod pinnacle;
pub mod reduce;

pub use compat::{CompatibilityLevel, ScorerConfig, score};
pub use cycles::{
    CycleSnapshot, personal_day, personal_month, personal_year, personal_year_sequence,
    universal_day, universal_month, universal_year,
};
pub use error::NumerologyError;
pub use identity::{
    IdentityProfile, balance, compound_number, destiny, hidden_passions, life_path, maturity,
    name_number_with, personality, soul_urge,
};
pub use karmic::{
    DebtSource, KarmicDebt, KarmicPath, karmic_debts, karmic_lessons, karmic_path,
};
pub use letters::{
    LetterDistribution, LetterSystem, NameSums, clean_letters, is_vowel, letter_distribution,
    letter_value, name_sums, name_sums_with,
};
pub use loshu::{
    Arrow, ArrowDirection, ArrowKind, Element, LoShuAnalysis, LoShuGrid, Plane, PlaneReading,
    PlaneStrength, lo_shu_grid,
};
pub use loshu_data::{Remedy, remedy};
pub use pair::{
    PairCompatibility, RelationshipKind, matrix_score, pair_compatibility, weighted_score,
};
pub use pinnacle::{
    Challenge, Pinnacle, challenge_at_age, challenges, pinnacle_at_age, pinnacles,
};
pub use reduce::{MASTER_NUMBERS, digit_sum, is_karmic_debt, is_master, reduce};
