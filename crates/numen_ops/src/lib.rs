//! Domain adapters built on `numen_base`.
//!
//! Each adapter maps a non-name string (address, phone number, licence
//! plate) or a pair of names through the letter table and reducer, then
//! grades it with the shared compatibility scorer. Scorer parameters are
//! always passed in; the built-in defaults are [`ScorerConfig::address`],
//! [`ScorerConfig::phone`] and [`ScorerConfig::plate`].

pub mod address;
pub mod business_data;
pub mod error;
pub mod grade;
mod meanings;
pub mod name_change;
pub mod phone;
pub mod plate;

pub use address::{
    AddressAnalysis, AddressComparison, AddressRecommendation, OfficeAddressAnalysis,
    address_sum, analyze_address, analyze_office_address, compare_addresses, rank_addresses,
};
pub use business_data::{BusinessQualities, VibrationalEnergy, business_qualities};
pub use error::OpsError;
pub use grade::Grade;
pub use name_change::{
    BusinessNameAnalysis, NameChangeComparison, NameChanges, NameImpact, NameNumbers,
    NameSuggestion, NumberChange, analyze_business_name, compare_name_change, name_suggestions,
};
pub use numen_base::ScorerConfig;
pub use phone::{
    BusinessSuitability, CommunicationImpact, LandlineAnalysis, PhoneAnalysis,
    PhoneRecommendation, Stability, analyze_landline, analyze_phone, communication_impact,
    phone_compatibility, rank_phones,
};
pub use plate::{PlateAnalysis, VehicleCompatibility, analyze_plate, vehicle_compatibility};
