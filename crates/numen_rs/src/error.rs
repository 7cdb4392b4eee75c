//! Unified error type for the convenience wrapper.

use numen_base::NumerologyError;
use numen_config::ConfigError;
use numen_ops::OpsError;
use numen_search::SearchError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NumenError {
    /// Date string not in `YYYY-MM-DD` form or not a real calendar day.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error(transparent)]
    Numerology(#[from] NumerologyError),
    #[error(transparent)]
    Ops(#[from] OpsError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
