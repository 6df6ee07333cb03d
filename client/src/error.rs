use thiserror::Error;

/// Convenience alias for results produced by the client layer.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the client layer.
///
/// Recoverable local faults (a malformed stored profile, a store file that
/// cannot be read) are logged and substituted at the call site rather than
/// reported through this type; every variant here is terminal for the one
/// operation that produced it. No retries are performed anywhere.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The transport itself failed before a response was produced.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a failure status.
    #[error("request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// The upload endpoint rejected the file.
    #[error("upload failed: {0}")]
    Upload(String),

    /// A payload could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
