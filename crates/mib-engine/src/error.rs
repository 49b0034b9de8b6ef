//! Error types for the mib-engine crate

use thiserror::Error;

/// Result type alias for query operations
pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors raised by the fallible query operations.
///
/// `resolve` deliberately never raises; unresolvable input is echoed back
/// unchanged by contract.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The identifier is not well-formed dotted-decimal
    #[error("invalid OID format: {0:?}")]
    InvalidOidFormat(String),

    /// Neither the numeric nor the symbolic index resolves the identifier
    #[error("OID not found: {0:?}")]
    NotFound(String),
}
