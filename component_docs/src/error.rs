//! Error types produced while rendering component documentation.

use figment::Error as FigmentError;
use thiserror::Error;

/// Errors that can occur while building example views or assembling a
/// component document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocsError {
    /// The example value could not be encoded into an [`crate::ExampleNode`].
    #[error("failed to encode example config: {source}")]
    Encoding {
        /// Underlying encoder failure.
        #[source]
        source: serde_yaml::Error,
    },

    /// A filtered example view could not be serialized to YAML.
    #[error("failed to serialize example config: {source}")]
    Serialization {
        /// Underlying serializer failure.
        #[source]
        source: serde_yaml::Error,
    },

    /// Component metadata violates a formatting precondition.
    #[error("{component} is invalid: {message}")]
    Validation {
        /// Component the metadata belongs to, formatted as `<type> component '<name>'`.
        component: String,
        /// Human-readable explanation of the violation.
        message: String,
    },

    /// Render configuration could not be gathered from its providers.
    #[error("failed to load render configuration: {0}")]
    Config(#[from] Box<FigmentError>),
}

impl DocsError {
    /// Builds a [`DocsError::Validation`] for the named component.
    #[must_use]
    pub fn validation(
        component_type: impl std::fmt::Display,
        name: &str,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            component: format!("{component_type} component '{name}'"),
            message: message.into(),
        }
    }
}

impl From<FigmentError> for DocsError {
    fn from(err: FigmentError) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Result alias used throughout the crate.
pub type DocsResult<T> = Result<T, DocsError>;
