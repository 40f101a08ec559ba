use thiserror::Error;

/// Errors surfaced by board operations.
///
/// The payload of the domain variants is a machine-readable reason string
/// (`not_member`, `list_not_found`, `bad_role`, ...) that handlers pass
/// through verbatim to clients.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Permission denied: {0}")]
    Permission(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invariant violation: {0}")]
    Invariant(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BoardError {
    /// The machine-readable failure reason sent back to clients.
    ///
    /// Unexpected datastore/serialization errors are not mapped to a domain
    /// reason; they surface as `internal_error` and fail the request.
    pub fn reason(&self) -> &str {
        match self {
            Self::Validation(r) | Self::Permission(r) | Self::NotFound(r) | Self::Invariant(r) => r,
            Self::Io(_) | Self::Serialization(_) | Self::Internal(_) => "internal_error",
        }
    }

    pub fn not_member() -> Self {
        Self::Permission("not_member".to_string())
    }
}
