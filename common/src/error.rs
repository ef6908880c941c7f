use thiserror::Error;

/// Failures a neighbor-table lookup can surface to the caller.
///
/// Malformed rows in the table itself are never an error; they are dropped
/// during parsing.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Lookup input was not six two-digit hex groups separated by `:` or `-`.
    #[error("invalid hardware address: {0:?}")]
    InvalidHardwareAddress(String),

    /// Lookup input was not a valid IPv4/IPv6 literal.
    #[error("invalid network address: {0:?}")]
    InvalidNetworkAddress(String),

    /// The OS neighbor-table command could not run or exited abnormally.
    #[error("neighbor table command {command:?} failed: {source}")]
    CommandFailed {
        command: String,
        source: anyhow::Error,
    },
}
