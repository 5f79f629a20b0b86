//! Error types for conversion operations

use std::fmt;

/// Errors that can occur while converting content to SSML
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The HTML normalizer could not read the input
    HtmlNormalization(String),
    /// A date pattern contained an unknown or malformed specifier
    DateFormat(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::HtmlNormalization(msg) => {
                write!(f, "HTML normalization error: {msg}")
            }
            ConvertError::DateFormat(pattern) => {
                write!(f, "Invalid date format: {pattern}")
            }
        }
    }
}

impl std::error::Error for ConvertError {}
