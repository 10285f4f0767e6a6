use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::DocumentType;

/// Errors returned by operations that can fail for reasons other than
/// "this document number is not valid".
///
/// Invalid document numbers are never errors: validators return `false`,
/// the classifier returns [`DocumentType::Unknown`], and the parser records
/// a [`ParseFailure`] in its result.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// The generator was asked for a type it cannot produce.
    #[error("unsupported document type: {0}")]
    UnsupportedType(DocumentType),

    /// A generation option is out of range or inconsistent.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// A legacy type code or name did not map to any document type.
    #[error("unknown document type alias '{0}'")]
    UnknownTypeAlias(String),
}

/// Why [`parse`](super::parse) could not produce a valid identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseFailure {
    /// Nothing left after whitespace was stripped.
    #[error("empty input")]
    Empty,

    /// The number does not satisfy the rules of any recognized document type.
    #[error("format invalid")]
    FormatInvalid,
}
