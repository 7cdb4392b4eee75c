//! Error types for lucky-date search.

use thiserror::Error;

/// Errors from search configuration.
///
/// Empty and inverted ranges are not errors; they produce an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error("invalid search configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("invalid calendar month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("unknown purpose '{0}' (expected business, romance, travel, health or general)")]
    UnknownPurpose(String),
}
