use thiserror::Error;

#[derive(Error, Debug)]
pub enum NomogramError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Computation error: {message}")]
    Computation { message: String },

    #[error("Internal invariant violated: {message}")]
    InternalInvariant { message: String },
}

impl NomogramError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        NomogramError::InvalidInput { message: message.into() }
    }

    pub fn computation(message: impl Into<String>) -> Self {
        NomogramError::Computation { message: message.into() }
    }

    pub fn internal_invariant(message: impl Into<String>) -> Self {
        NomogramError::InternalInvariant { message: message.into() }
    }

    /// True when the error is attributable to caller-supplied values rather
    /// than the engine's own tables or logic.
    pub fn is_caller_fault(&self) -> bool {
        matches!(self, NomogramError::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, NomogramError>;
