//! Lucky-date search.
//!
//! Scans calendar ranges and ranks days against a person's identity
//! numbers. See [`lucky`] for the rule set.

pub mod error;
pub mod lucky;
pub mod lucky_types;

pub use error::SearchError;
pub use lucky::{
    DEFAULT_SEARCH_DAYS, NEXT_LUCKY_MIN_SCORE, compatible_numbers, date_number,
    has_repeating_digits, lucky_dates_for_purpose, master_date_value, month_bounds,
    next_lucky_date, score_date, search_lucky_dates,
};
pub use lucky_types::{
    ALL_PURPOSES, LuckyConfig, LuckyDate, LuckySearchResult, MAX_LUCKY_SCORE, PersonalNumbers,
    Purpose, ReasonTag,
};
