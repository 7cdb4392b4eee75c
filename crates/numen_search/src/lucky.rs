//! Lucky-date search engine.
//!
//! Each day in an inclusive range is scored independently against three
//! identity numbers (Life Path, Destiny, Personal Year of the start year)
//! using a fixed additive rule set. Days at or above a minimum score are
//! kept and ranked by score, descending; equal scores keep date order.
//!
//! Scoring never reads the clock. "From today" searches take today as a
//! parameter.

use chrono::{Datelike, Days, NaiveDate};
use numen_base::{destiny, life_path, personal_year, reduce};

use crate::error::SearchError;
use crate::lucky_types::{
    LuckyConfig, LuckyDate, LuckySearchResult, PersonalNumbers, Purpose, ReasonTag,
};

/// Minimum score for [`next_lucky_date`].
pub const NEXT_LUCKY_MIN_SCORE: u32 = 40;

/// Default horizon for [`next_lucky_date`], in days.
pub const DEFAULT_SEARCH_DAYS: u64 = 30;

// ---------------------------------------------------------------------------
// Rule helpers
// ---------------------------------------------------------------------------

/// Numbers a date number may match for the "compatible" rules.
///
/// Masters have their own lists; any other value uses the list of its
/// reduced digit. 0 has no compatible numbers.
pub fn compatible_numbers(n: u32) -> &'static [u32] {
    match n {
        11 => &[2, 4, 6, 8, 11, 22],
        22 => &[4, 6, 8, 11, 22, 33],
        33 => &[3, 6, 9, 22, 33],
        _ => match reduce(n, false) {
            1 => &[1, 2, 3, 5, 9],
            2 => &[1, 2, 6, 8, 9],
            3 => &[1, 3, 5, 6, 9],
            4 => &[4, 6, 7, 8],
            5 => &[1, 3, 5, 6, 9],
            6 => &[2, 3, 4, 5, 6, 9],
            7 => &[4, 7],
            8 => &[2, 4, 8],
            9 => &[1, 2, 3, 5, 6, 9],
            _ => &[],
        },
    }
}

/// Plain `day + month + year`, signed for proleptic years.
fn date_sum(date: NaiveDate) -> i64 {
    i64::from(date.day()) + i64::from(date.month()) + i64::from(date.year())
}

/// `day + month + year` reduced without master preservation.
pub fn date_number(date: NaiveDate) -> u32 {
    let sum = date_sum(date).unsigned_abs();
    reduce(u32::try_from(sum).unwrap_or(u32::MAX), false)
}

/// The master value a date carries: the plain sum when it is 11, 22 or 33,
/// else a day of month of 11 or 22.
pub fn master_date_value(date: NaiveDate) -> Option<u32> {
    match date_sum(date) {
        s @ (11 | 22 | 33) => Some(s as u32),
        _ => match date.day() {
            d @ (11 | 22) => Some(d),
            _ => None,
        },
    }
}

/// Whether the `YYYYMMDD` form holds three or more identical consecutive
/// digits.
pub fn has_repeating_digits(date: NaiveDate) -> bool {
    let text = date.format("%Y%m%d").to_string();
    let bytes: Vec<u8> = text.bytes().filter(u8::is_ascii_digit).collect();
    bytes.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

impl PersonalNumbers {
    /// Life Path and Destiny of the person, Personal Year of `year`.
    pub fn compute(birth: NaiveDate, full_name: &str, year: i32) -> Self {
        Self {
            life_path: life_path(birth),
            destiny: destiny(full_name),
            personal_year: personal_year(birth, year),
        }
    }
}

/// Score one day.
pub fn score_date(date: NaiveDate, numbers: &PersonalNumbers) -> LuckyDate {
    let universal_number = date_number(date);
    let day_number = reduce(date.day(), false);
    let mut reasons = Vec::new();

    if universal_number == numbers.life_path {
        reasons.push(ReasonTag::LifePathMatch);
    } else if compatible_numbers(numbers.life_path).contains(&universal_number) {
        reasons.push(ReasonTag::LifePathCompatible);
    }

    if universal_number == numbers.destiny {
        reasons.push(ReasonTag::DestinyMatch);
    } else if compatible_numbers(numbers.destiny).contains(&universal_number) {
        reasons.push(ReasonTag::DestinyCompatible);
    }

    if universal_number == numbers.personal_year {
        reasons.push(ReasonTag::PersonalYearMatch);
    }
    if day_number == numbers.life_path || day_number == numbers.destiny {
        reasons.push(ReasonTag::DayMatch);
    }
    if master_date_value(date).is_some() {
        reasons.push(ReasonTag::MasterNumber);
    }
    if date.day() == date.month() {
        reasons.push(ReasonTag::MirrorDate);
    }
    if has_repeating_digits(date) {
        reasons.push(ReasonTag::RepeatingDigits);
    }

    LuckyDate {
        date,
        score: reasons.iter().map(|r| r.points()).sum(),
        reasons,
        day_number,
        universal_number,
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

fn scan(
    start: NaiveDate,
    end: NaiveDate,
    numbers: &PersonalNumbers,
    min_score: u32,
) -> Vec<LuckyDate> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|d| score_date(d, numbers))
        .filter(|c| c.score >= min_score)
        .collect()
}

/// Score every day in `[start, end]` and rank the qualifying ones.
///
/// An inverted range yields an empty result.
pub fn search_lucky_dates(
    birth: NaiveDate,
    full_name: &str,
    start: NaiveDate,
    end: NaiveDate,
    config: &LuckyConfig,
) -> Result<LuckySearchResult, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let personal_numbers = PersonalNumbers::compute(birth, full_name, start.year());
    let mut dates = scan(start, end, &personal_numbers, config.min_score);
    dates.sort_by(|a, b| b.score.cmp(&a.score));
    let best = dates.iter().take(config.best_count).cloned().collect();

    tracing::debug!(
        %start,
        %end,
        min_score = config.min_score,
        qualifying = dates.len(),
        "lucky search finished"
    );
    Ok(LuckySearchResult {
        dates,
        best,
        personal_numbers,
    })
}

/// First and last day of a calendar month.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), SearchError> {
    let invalid = || SearchError::InvalidMonth { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last = next.and_then(|d| d.pred_opt()).ok_or_else(invalid)?;
    Ok((first, last))
}

/// Search one calendar month with the purpose's minimum score.
pub fn lucky_dates_for_purpose(
    birth: NaiveDate,
    full_name: &str,
    purpose: Purpose,
    year: i32,
    month: u32,
) -> Result<LuckySearchResult, SearchError> {
    let (start, end) = month_bounds(year, month)?;
    search_lucky_dates(
        birth,
        full_name,
        start,
        end,
        &LuckyConfig::with_min_score(purpose.min_score()),
    )
}

/// Earliest day in `[from, from + days]` scoring at least
/// [`NEXT_LUCKY_MIN_SCORE`].
pub fn next_lucky_date(
    birth: NaiveDate,
    full_name: &str,
    from: NaiveDate,
    days: u64,
) -> Option<LuckyDate> {
    let end = from
        .checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX);
    let numbers = PersonalNumbers::compute(birth, full_name, from.year());
    from.iter_days()
        .take_while(|d| *d <= end)
        .map(|d| score_date(d, &numbers))
        .find(|c| c.score >= NEXT_LUCKY_MIN_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn compatible_table_falls_back_to_reduced_digit() {
        assert_eq!(compatible_numbers(7), &[4, 7]);
        assert_eq!(compatible_numbers(16), &[4, 7]);
        assert_eq!(compatible_numbers(11), &[2, 4, 6, 8, 11, 22]);
        assert!(compatible_numbers(0).is_empty());
    }

    #[test]
    fn date_number_is_plain_sum_reduced() {
        // 15 + 3 + 2024 = 2042 -> 8
        assert_eq!(date_number(date(2024, 3, 15)), 8);
    }

    #[test]
    fn master_dates() {
        assert_eq!(master_date_value(date(2024, 1, 11)), Some(11));
        assert_eq!(master_date_value(date(2024, 1, 22)), Some(22));
        assert_eq!(master_date_value(date(2024, 1, 10)), None);
        // the plain sum only reaches 33 in year 0 or earlier
        assert_eq!(master_date_value(date(0, 3, 30)), Some(33));
    }

    #[test]
    fn repeating_digits() {
        assert!(has_repeating_digits(date(2000, 1, 1)));
        assert!(has_repeating_digits(date(2022, 2, 22)));
        assert!(!has_repeating_digits(date(2024, 3, 15)));
        // 20241110: 1-1-1
        assert!(has_repeating_digits(date(2024, 11, 10)));
    }

    #[test]
    fn scoring_rules() {
        let numbers = PersonalNumbers {
            life_path: 8,
            destiny: 3,
            personal_year: 1,
        };
        // 2024-03-15: date number 8, day number 6
        let c = score_date(date(2024, 3, 15), &numbers);
        assert_eq!(c.universal_number, 8);
        assert_eq!(c.day_number, 6);
        assert_eq!(c.reasons, vec![ReasonTag::LifePathMatch]);
        assert_eq!(c.score, 30);

        // 2024-03-03: date number 5 (not compatible with 8; compatible with 3),
        // day 3 matches Destiny, mirror date
        let c = score_date(date(2024, 3, 3), &numbers);
        assert_eq!(
            c.reasons,
            vec![ReasonTag::DestinyCompatible, ReasonTag::DayMatch, ReasonTag::MirrorDate]
        );
        assert_eq!(c.score, 40);
    }

    #[test]
    fn inverted_range_is_empty() {
        let birth = date(1990, 5, 15);
        let r = search_lucky_dates(
            birth,
            "John Smith",
            date(2024, 3, 10),
            date(2024, 3, 1),
            &LuckyConfig::default(),
        )
        .unwrap();
        assert!(r.dates.is_empty());
        assert!(r.best.is_empty());
    }

    #[test]
    fn zero_best_count_is_rejected() {
        let cfg = LuckyConfig {
            min_score: 0,
            best_count: 0,
        };
        let err = search_lucky_dates(
            date(1990, 5, 15),
            "x",
            date(2024, 1, 1),
            date(2024, 1, 2),
            &cfg,
        );
        assert!(matches!(err, Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn month_bounds_handle_year_end_and_leap() {
        assert_eq!(
            month_bounds(2024, 2).unwrap(),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
        assert_eq!(
            month_bounds(2023, 12).unwrap(),
            (date(2023, 12, 1), date(2023, 12, 31))
        );
        assert_eq!(
            month_bounds(2024, 13),
            Err(SearchError::InvalidMonth {
                year: 2024,
                month: 13
            })
        );
    }
}
