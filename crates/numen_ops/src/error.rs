//! Error types for the adapter crate.

use thiserror::Error;

/// Validation failures for adapter inputs.
///
/// Both variants fire before any computation, on input that is empty after
/// cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OpsError {
    #[error("phone number must contain at least one digit")]
    EmptyPhoneNumber,
    #[error("license plate must contain at least one alphanumeric character")]
    EmptyLicensePlate,
}
