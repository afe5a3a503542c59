use thiserror::Error;

/// Errors raised by the resource layer.
///
/// The prompt composer itself has no failure paths; these only surface when a
/// caller asks for a resource that is not registered or when encoding fails.
#[derive(Debug, Error)]
pub enum DinnerError {
    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    #[error("failed to encode resource: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DinnerError>;
