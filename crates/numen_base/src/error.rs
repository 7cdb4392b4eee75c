//! Error types for the numerology base crate.

use thiserror::Error;

/// Errors from base numerology calculations.
///
/// The arithmetic itself never fails; only caller-supplied configuration is
/// validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NumerologyError {
    /// A complementary pair names a value outside 1..=9.
    #[error("invalid complementary pair ({0}, {1}): digits must be 1-9")]
    InvalidScorerPair(u32, u32),
    /// Penalty per step exceeds the score range.
    #[error("penalty per step {0} exceeds 100")]
    InvalidPenalty(u32),
}
