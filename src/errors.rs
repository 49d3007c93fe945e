//! Error types for the API client.

/// Errors that can occur when building or executing API queries.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A filter setter was called a second time on the same builder.
    #[error("{0} can only be set once")]
    DuplicateFilter(&'static str),
    /// A non-positive number of results was requested.
    #[error("number of results must be greater than 0")]
    InvalidNumberOfResults,
    /// A network-level failure reaching the upstream host, including
    /// non-success HTTP statuses.
    #[error("failed to reach the NWOpen API: {0}")]
    Transport(String),
    /// The response body is not valid JSON or does not match the schema.
    #[error("failed to decode the NWOpen API response: {0}")]
    Decode(String),
}
