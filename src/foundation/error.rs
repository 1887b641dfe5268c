/// Crate-wide result alias.
pub type HooklabResult<T> = Result<T, HooklabError>;

/// Crate-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum HooklabError {
    /// A model-level invariant was violated by caller input.
    #[error("validation error: {0}")]
    Validation(String),

    /// The external generation/critique collaborator failed for one request.
    #[error("generation error: {0}")]
    Generation(String),

    /// Export preparation failed (manifest or overlay placement).
    #[error("export error: {0}")]
    Export(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, preserved with its source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HooklabError {
    /// Build a [`HooklabError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HooklabError::Generation`].
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Build a [`HooklabError::Export`].
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`HooklabError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
