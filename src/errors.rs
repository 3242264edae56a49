/*!
 * Error types for the zotpub application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to the Zotero web API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiStatus {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error building the request URL
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

/// Errors that can occur while rendering citation lines
#[derive(Error, Debug)]
pub enum RenderError {
    /// A record that passed the proceedings filter lacks a field the
    /// template needs. Lines already written stay in the output file.
    #[error("record {key} is missing field '{field}'")]
    MissingField {
        /// Item key of the offending record
        key: String,
        /// Name of the missing field
        field: &'static str
    },

    /// Error writing the output document
    #[error("Failed to write output: {0}")]
    Io(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the Zotero API
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Error from citation rendering
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
