use client::ClientError;
use std::fmt::Display;

/// Application-wide error types for the PulseBoard console shell.
///
/// Recoverable local faults never reach this enum: a malformed stored
/// profile, an unknown theme key or a missing store file are logged and
/// substituted with a safe default at the call site, because theming and
/// session display must never block a page render. What remains here are
/// genuine failures of a single operation: configuration that cannot be
/// loaded, a transport call that failed, application state that cannot be
/// established.
#[derive(Debug)]
pub enum AppError {
    /// Failure raised by the client layer (transport, upload, envelopes).
    Client(ClientError),

    /// Configuration loading and validation errors.
    Config(String),

    /// Application state management issues, including double
    /// initialization of global singletons.
    State(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Client(e) => write!(f, "Client error: {e}"),
            AppError::Config(msg) => write!(f, "Configuration error: {msg}"),
            AppError::State(msg) => write!(f, "State error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ClientError> for AppError {
    fn from(error: ClientError) -> Self {
        AppError::Client(error)
    }
}

pub type AppResult<T> = Result<T, AppError>;
