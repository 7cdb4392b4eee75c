//! Pinnacles and challenges: four life periods derived from the birth date.
//!
//! The first period ends at age `36 - LP`, where LP is the Life Path reduced
//! without master preservation. The next two periods last nine years each;
//! the fourth runs to 99.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::reduce::{reduce, year_digit_sum};

/// Final age of the fourth period.
pub const LAST_AGE: u32 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pinnacle {
    /// 1-4.
    pub period: u32,
    pub number: u32,
    pub start_age: u32,
    pub end_age: u32,
}

impl Pinnacle {
    const fn new(period: u32, number: u32, start_age: u32, end_age: u32) -> Self {
        Self {
            period,
            number,
            start_age,
            end_age,
        }
    }

    pub const fn contains_age(&self, age: u32) -> bool {
        age >= self.start_age && age <= self.end_age
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Challenge {
    /// 1-4, aligned with the pinnacle periods.
    pub period: u32,
    pub number: u32,
}

impl Challenge {
    const fn new(period: u32, number: u32) -> Self {
        Self { period, number }
    }
}

/// Reduced (day, month, year) components.
fn components(birth: NaiveDate) -> (u32, u32, u32) {
    (
        reduce(birth.day(), false),
        reduce(birth.month(), false),
        reduce(year_digit_sum(birth.year()), false),
    )
}

/// Last age of the first pinnacle.
pub fn first_period_end(birth: NaiveDate) -> u32 {
    let (d, m, y) = components(birth);
    36 - reduce(d + m + y, false)
}

/// The four pinnacles, in period order.
pub fn pinnacles(birth: NaiveDate) -> [Pinnacle; 4] {
    let (d, m, y) = components(birth);
    let end = first_period_end(birth);
    let p1 = reduce(m + d, true);
    let p2 = reduce(d + y, true);
    let p3 = reduce(p1 + p2, true);
    let p4 = reduce(m + y, true);
    [
        Pinnacle::new(1, p1, 0, end),
        Pinnacle::new(2, p2, end + 1, end + 9),
        Pinnacle::new(3, p3, end + 10, end + 18),
        Pinnacle::new(4, p4, end + 19, LAST_AGE),
    ]
}

/// The four challenges, in period order.
pub fn challenges(birth: NaiveDate) -> [Challenge; 4] {
    let (d, m, y) = components(birth);
    let c1 = m.abs_diff(d);
    let c2 = d.abs_diff(y);
    let c3 = c1.abs_diff(c2);
    let c4 = m.abs_diff(y);
    [
        Challenge::new(1, c1),
        Challenge::new(2, c2),
        Challenge::new(3, c3),
        Challenge::new(4, c4),
    ]
}

fn period_index(birth: NaiveDate, age: u32) -> usize {
    pinnacles(birth)
        .iter()
        .position(|p| p.contains_age(age))
        .unwrap_or(3)
}

/// Pinnacle in force at `age`; ages past 99 fall in the fourth.
pub fn pinnacle_at_age(birth: NaiveDate, age: u32) -> Pinnacle {
    pinnacles(birth)[period_index(birth, age)]
}

/// Challenge aligned with the pinnacle period containing `age`.
pub fn challenge_at_age(birth: NaiveDate, age: u32) -> Challenge {
    challenges(birth)[period_index(birth, age)]
}

/// Age by calendar year difference, clamped at 0.
pub fn age_in_year(birth: NaiveDate, on: NaiveDate) -> u32 {
    u32::try_from(on.year() - birth.year()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn pinnacles_for_1990_05_15() {
        // d 6, m 5, y 1; LP 12 -> 3; first period ends at 33
        let birth = date(1990, 5, 15);
        let p = pinnacles(birth);
        assert_eq!(p[0], Pinnacle::new(1, 11, 0, 33));
        assert_eq!(p[1], Pinnacle::new(2, 7, 34, 42));
        // 11 + 7 = 18 -> 9
        assert_eq!(p[2], Pinnacle::new(3, 9, 43, 51));
        assert_eq!(p[3], Pinnacle::new(4, 6, 52, 99));
    }

    #[test]
    fn challenges_for_1990_05_15() {
        let c = challenges(date(1990, 5, 15));
        let numbers: Vec<u32> = c.iter().map(|c| c.number).collect();
        // |5-6| = 1, |6-1| = 5, |1-5| = 4, |5-1| = 4
        assert_eq!(numbers, vec![1, 5, 4, 4]);
    }

    #[test]
    fn periods_are_contiguous() {
        for birth in [date(1985, 12, 25), date(1950, 3, 20), date(2001, 9, 9)] {
            let p = pinnacles(birth);
            for w in p.windows(2) {
                assert_eq!(w[1].start_age, w[0].end_age + 1);
            }
            assert!((27..=35).contains(&p[0].end_age));
        }
    }

    #[test]
    fn lookup_by_age() {
        let birth = date(1990, 5, 15);
        assert_eq!(pinnacle_at_age(birth, 0).period, 1);
        assert_eq!(pinnacle_at_age(birth, 33).period, 1);
        assert_eq!(pinnacle_at_age(birth, 34).period, 2);
        assert_eq!(pinnacle_at_age(birth, 51).period, 3);
        assert_eq!(pinnacle_at_age(birth, 120).period, 4);
        assert_eq!(challenge_at_age(birth, 40).number, 5);
    }

    #[test]
    fn age_from_years() {
        let birth = date(1990, 5, 15);
        assert_eq!(age_in_year(birth, date(2024, 1, 1)), 34);
        assert_eq!(age_in_year(birth, date(1980, 1, 1)), 0);
    }
}
