use chrono::NaiveDate;
use numen_base::pinnacle::age_in_year;
use numen_base::{
    Challenge, CycleSnapshot, IdentityProfile, KarmicPath, LetterSystem, LoShuGrid,
    PairCompatibility, Pinnacle, RelationshipKind, challenge_at_age, challenges,
    compound_number, hidden_passions, karmic_path, life_path, lo_shu_grid, name_number_with,
    pair_compatibility, pinnacle_at_age, pinnacles,
};
use numen_config::NumenConfig;
use numen_ops::{
    AddressRecommendation, PhoneRecommendation, VehicleCompatibility, rank_addresses,
    rank_phones, vehicle_compatibility,
};
use numen_search::{LuckyDate, LuckySearchResult, next_lucky_date, search_lucky_dates};
use serde::Serialize;

use crate::date::parse_date;
use crate::error::NumenError;

/// A named person with a birth date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Person {
    pub full_name: String,
    pub birth_date: NaiveDate,
}

impl Person {
    pub fn new(full_name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            full_name: full_name.into(),
            birth_date,
        }
    }

    /// Build from a name and a `YYYY-MM-DD` string.
    pub fn parse(full_name: impl Into<String>, birth_date: &str) -> Result<Self, NumenError> {
        Ok(Self::new(full_name, parse_date(birth_date)?))
    }

    pub fn life_path(&self) -> u32 {
        life_path(self.birth_date)
    }
}

/// A Destiny-style number under a chosen alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NameNumber {
    pub system: LetterSystem,
    pub value: u32,
}

/// Everything known about one person on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub person: Person,
    pub on: NaiveDate,
    pub profile: IdentityProfile,
    pub name_number: NameNumber,
    /// Unreduced Chaldean sum.
    pub compound_number: u32,
    pub hidden_passions: Vec<u32>,
    pub cycles: CycleSnapshot,
    pub lo_shu: LoShuGrid,
    pub karmic: KarmicPath,
    pub pinnacles: [Pinnacle; 4],
    pub challenges: [Challenge; 4],
    /// Age by calendar year on `on`.
    pub age: u32,
    pub current_pinnacle: Pinnacle,
    pub current_challenge: Challenge,
}

/// Assemble a full reading with the Pythagorean alphabet.
pub fn reading(person: &Person, on: NaiveDate) -> Reading {
    reading_with(person, on, LetterSystem::Pythagorean)
}

/// Assemble a full reading; `system` selects the alphabet for
/// [`Reading::name_number`].
pub fn reading_with(person: &Person, on: NaiveDate, system: LetterSystem) -> Reading {
    let birth = person.birth_date;
    let name = person.full_name.as_str();
    let age = age_in_year(birth, on);
    tracing::debug!(name, %birth, %on, age, "assembling reading");
    Reading {
        person: person.clone(),
        on,
        profile: IdentityProfile::compute(name, birth),
        name_number: NameNumber {
            system,
            value: name_number_with(name, system),
        },
        compound_number: compound_number(name),
        hidden_passions: hidden_passions(name),
        cycles: CycleSnapshot::compute(birth, on),
        lo_shu: lo_shu_grid(birth),
        karmic: karmic_path(birth, name),
        pinnacles: pinnacles(birth),
        challenges: challenges(birth),
        age,
        current_pinnacle: pinnacle_at_age(birth, age),
        current_challenge: challenge_at_age(birth, age),
    }
}

/// Lucky dates in `[start, end]` with the configured thresholds.
pub fn lucky_dates(
    person: &Person,
    start: NaiveDate,
    end: NaiveDate,
    config: &NumenConfig,
) -> Result<LuckySearchResult, NumenError> {
    Ok(search_lucky_dates(
        person.birth_date,
        &person.full_name,
        start,
        end,
        &config.lucky_config(),
    )?)
}

/// Earliest lucky date from `from` within the configured horizon.
pub fn next_lucky(person: &Person, from: NaiveDate, config: &NumenConfig) -> Option<LuckyDate> {
    next_lucky_date(
        person.birth_date,
        &person.full_name,
        from,
        config.search_days(),
    )
}

pub fn rank_addresses_for<S: AsRef<str>>(
    person: &Person,
    options: &[S],
    config: &NumenConfig,
) -> Vec<AddressRecommendation> {
    rank_addresses(person.life_path(), options, &config.address_scorer())
}

pub fn rank_phones_for<S: AsRef<str>>(
    person: &Person,
    options: &[S],
    config: &NumenConfig,
) -> Result<Vec<PhoneRecommendation>, NumenError> {
    Ok(rank_phones(
        person.life_path(),
        options,
        &config.phone_scorer(),
    )?)
}

pub fn vehicle_for(
    person: &Person,
    plate: &str,
    config: &NumenConfig,
) -> Result<VehicleCompatibility, NumenError> {
    Ok(vehicle_compatibility(
        plate,
        person.birth_date,
        &config.plate_scorer(),
    )?)
}

/// Person-to-person compatibility.
pub fn pair(first: &Person, second: &Person, kind: RelationshipKind) -> PairCompatibility {
    pair_compatibility(
        &first.full_name,
        first.birth_date,
        &second.full_name,
        second.birth_date,
        kind,
    )
}
