/// Convenience result type used across tableshot.
pub type TableshotResult<T> = Result<T, TableshotError>;

/// Top-level error taxonomy used by table APIs.
#[derive(thiserror::Error, Debug)]
pub enum TableshotError {
    /// Out-of-bounds options, unknown enum names, or a malformed grid shape.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Errors when serializing or deserializing table documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while building or rasterizing the drawn surface.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TableshotError {
    /// Build a [`TableshotError::InvalidConfiguration`] value.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build a [`TableshotError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`TableshotError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Whether this error came from validating options or grid shape.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
