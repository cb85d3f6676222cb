//! Error types for the sample-data crate.

use thiserror::Error;

/// Errors raised while parsing or validating a seed catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// The catalogue JSON is malformed or missing required fields.
    #[error("invalid catalogue JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The catalogue version is not supported.
    #[error("unsupported catalogue version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Version found in the document.
        actual: u32,
    },

    /// The catalogue lists no books.
    #[error("catalogue contains no books")]
    EmptyBooks,

    /// A required text field is blank.
    #[error("book at index {index} has a blank {field}")]
    BlankField {
        /// Position of the offending book in the `books` array.
        index: usize,
        /// Name of the blank field.
        field: &'static str,
    },
}
