/// Convenience result type used across the report engine.
pub type ReportResult<T> = Result<T, ReportError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Navigation never produces one of these: unknown slugs fall back to the landing view.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// Invalid caller-provided data (geometry, options, identifiers).
    #[error("validation error: {0}")]
    Validation(String),

    /// Phase or snap-point definitions that violate timeline ordering rules.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Locale content that could not be loaded or does not hold together.
    #[error("content error: {0}")]
    Content(String),

    /// Persisted preference store failures.
    #[error("preference error: {0}")]
    Preference(String),

    /// Link-preview fetch or parse failures.
    #[error("preview error: {0}")]
    Preview(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReportError {
    /// Build a [`ReportError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReportError::Timeline`] value.
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`ReportError::Content`] value.
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Build a [`ReportError::Preference`] value.
    pub fn preference(msg: impl Into<String>) -> Self {
        Self::Preference(msg.into())
    }

    /// Build a [`ReportError::Preview`] value.
    pub fn preview(msg: impl Into<String>) -> Self {
        Self::Preview(msg.into())
    }

    /// Build a [`ReportError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
