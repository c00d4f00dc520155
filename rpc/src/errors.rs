/// Error types for the NZBGet JSON-RPC client.
use thiserror::Error;

/// Failure of a single NZBGet remote call.
///
/// A rejected queue edit is not an error: `editqueue` reports it as a
/// `false` result, which the client surfaces as `Ok(false)`.
#[derive(Debug, Error)]
pub enum NzbgetError {
    /// Network-level failure, including non-success HTTP statuses.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not valid JSON, or a result had an unexpected shape.
    #[error("invalid JSON in RPC response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Response parsed, but carried no "result" field.
    #[error("RPC response has no \"result\" field")]
    MissingResult,
}

/// Result type alias for NZBGet client operations.
pub type NzbgetResult<T> = Result<T, NzbgetError>;
