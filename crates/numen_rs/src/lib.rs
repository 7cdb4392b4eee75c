//! Convenience wrapper for the numen numerology engine.
//!
//! Bundles a name and birth date into a [`Person`], parses ISO dates, and
//! assembles the per-module results into one serialisable [`Reading`].
//! Adapter and search helpers take a [`NumenConfig`] so scorer and
//! lucky-date overrides flow through without extra plumbing.
//!
//! # Quick start
//!
//! ```rust
//! use numen_rs::*;
//!
//! let person = Person::parse("John Smith", "1990-05-15").unwrap();
//! let on = parse_date("2024-03-01").unwrap();
//! let r = reading(&person, on);
//! assert_eq!(r.profile.life_path, 3);
//! assert_eq!(r.profile.destiny, 8);
//! ```

pub mod convenience;
pub mod date;
pub mod error;

// Primary re-exports; callers should only need `use numen_rs::*`
pub use convenience::{
    NameNumber, Person, Reading, lucky_dates, next_lucky, pair, rank_addresses_for,
    rank_phones_for, reading, reading_with, vehicle_for,
};
pub use date::parse_date;
pub use error::NumenError;

pub use numen_config::{ConfigError, NumenConfig};

// Base types so callers don't need to depend on numen_base directly.
pub use numen_base::{
    Challenge, CompatibilityLevel, CycleSnapshot, DebtSource, IdentityProfile, KarmicDebt,
    KarmicPath, LetterSystem, LoShuGrid, NumerologyError, PairCompatibility, Pinnacle,
    RelationshipKind, ScorerConfig, destiny, life_path, personality, reduce, score, soul_urge,
};

pub use numen_ops::{
    AddressAnalysis, Grade, LandlineAnalysis, NameChangeComparison, OfficeAddressAnalysis,
    OpsError, PhoneAnalysis, PlateAnalysis, VehicleCompatibility, analyze_address,
    analyze_landline, analyze_office_address, analyze_phone, analyze_plate, compare_name_change,
};

pub use numen_search::{
    LuckyConfig, LuckyDate, LuckySearchResult, Purpose, ReasonTag, SearchError,
    lucky_dates_for_purpose,
};
