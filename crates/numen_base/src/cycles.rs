//! Personal and universal time cycles.
//!
//! Every cycle number reduces without master preservation, including the
//! birth-date components of the Personal Year. This differs from
//! [`life_path`](crate::identity::life_path), which preserves masters at
//! every step.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::reduce::{reduce, year_digit_sum};

/// Personal Year for a calendar year.
pub fn personal_year(birth: NaiveDate, year: i32) -> u32 {
    let day = reduce(birth.day(), false);
    let month = reduce(birth.month(), false);
    let y = reduce(year_digit_sum(year), false);
    reduce(day + month + y, false)
}

/// Personal Month for a calendar year and month (1-12).
pub fn personal_month(birth: NaiveDate, year: i32, month: u32) -> u32 {
    reduce(personal_year(birth, year) + reduce(month, false), false)
}

/// Personal Day for a target date.
pub fn personal_day(birth: NaiveDate, date: NaiveDate) -> u32 {
    let pm = personal_month(birth, date.year(), date.month());
    reduce(pm + reduce(date.day(), false), false)
}

/// Universal Year: digit sum of the year, reduced.
pub fn universal_year(year: i32) -> u32 {
    reduce(year_digit_sum(year), false)
}

/// Universal Month: Universal Year + month, reduced.
pub fn universal_month(year: i32, month: u32) -> u32 {
    reduce(universal_year(year) + month, false)
}

/// Universal Day: Universal Month + day of month, reduced.
pub fn universal_day(date: NaiveDate) -> u32 {
    reduce(
        universal_month(date.year(), date.month()) + date.day(),
        false,
    )
}

/// All six cycle numbers for one target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CycleSnapshot {
    pub date: NaiveDate,
    pub personal_year: u32,
    pub personal_month: u32,
    pub personal_day: u32,
    pub universal_year: u32,
    pub universal_month: u32,
    pub universal_day: u32,
}

impl CycleSnapshot {
    /// Compute every cycle number for `date` relative to `birth`.
    pub fn compute(birth: NaiveDate, date: NaiveDate) -> Self {
        let personal_year = personal_year(birth, date.year());
        let personal_month = reduce(personal_year + reduce(date.month(), false), false);
        let personal_day = reduce(personal_month + reduce(date.day(), false), false);
        let universal_year = universal_year(date.year());
        let universal_month = reduce(universal_year + date.month(), false);
        let universal_day = reduce(universal_month + date.day(), false);
        Self {
            date,
            personal_year,
            personal_month,
            personal_day,
            universal_year,
            universal_month,
            universal_day,
        }
    }
}

/// Personal Year numbers for a run of consecutive years starting at `from_year`.
///
/// The run stops early at the last representable year.
pub fn personal_year_sequence(birth: NaiveDate, from_year: i32, count: u32) -> Vec<(i32, u32)> {
    (0..count)
        .map_while(|i| i32::try_from(i).ok()?.checked_add(from_year))
        .map(|year| (year, personal_year(birth, year)))
        .collect()
}
