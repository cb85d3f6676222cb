//! Error types for OData query option parsing and CSDL rendering.

use thiserror::Error;

/// Errors raised while parsing system query options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryOptionError {
    /// The option is a valid OData system option the service does not
    /// evaluate, or an unknown `$`-prefixed option.
    #[error("query option '{option}' is not supported")]
    UnsupportedOption {
        /// Option name including the `$` prefix.
        option: String,
    },

    /// The option value could not be parsed.
    #[error("query option '{option}' has invalid value '{value}'")]
    InvalidValue {
        /// Option name including the `$` prefix.
        option: String,
        /// Raw value supplied by the client.
        value: String,
    },

    /// The option appeared more than once.
    #[error("query option '{option}' was supplied more than once")]
    DuplicateOption {
        /// Option name including the `$` prefix.
        option: String,
    },
}

impl QueryOptionError {
    /// Name of the offending option.
    #[must_use]
    pub fn option(&self) -> &str {
        match self {
            Self::UnsupportedOption { option }
            | Self::InvalidValue { option, .. }
            | Self::DuplicateOption { option } => option,
        }
    }
}

/// Errors raised while rendering the CSDL metadata document.
#[derive(Debug, Error)]
pub enum CsdlError {
    /// The XML writer rejected an event.
    #[error("failed to write CSDL document: {0}")]
    Write(#[from] quick_xml::Error),

    /// The rendered bytes were not valid UTF-8.
    #[error("CSDL document is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
