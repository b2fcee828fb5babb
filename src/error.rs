//! Errors for the cidnav client
//!
//! Enumeration for all conditions the client can surface. None of them is
//! fatal: a failed read renders an unavailable placeholder, a failed mutation
//! is observed through the post-mutation refresh, and a malformed route falls
//! back to the root path.
//!

use derive_more::{Display, Error};
use std::io;

pub mod string_error;

pub use crate::error::string_error::StringError;

#[derive(Debug, Display, Error)]
pub enum CidnavError {
    /// A metadata or raw-content read did not produce a usable response
    /// (transport error, non-success status, or malformed body).
    FetchFailed(StringError),

    /// A write, mkdir, or delete was rejected or never reached the store.
    MutationFailed(StringError),

    /// A route that does not decode to a legal absolute path.
    DecodeFailed(StringError),

    // External Library Errors
    IO(io::Error),
    HTTP(reqwest::Error),
    JSON(serde_json::Error),
    URL(url::ParseError),
    Encoding(std::str::Utf8Error),

    // Fallback
    Basic(StringError),
}

impl CidnavError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        CidnavError::Basic(StringError::from(s.as_ref()))
    }

    pub fn fetch_failed(s: impl AsRef<str>) -> Self {
        CidnavError::FetchFailed(StringError::from(s.as_ref()))
    }

    pub fn mutation_failed(s: impl AsRef<str>) -> Self {
        CidnavError::MutationFailed(StringError::from(s.as_ref()))
    }

    pub fn decode_failed(s: impl AsRef<str>) -> Self {
        CidnavError::DecodeFailed(StringError::from(s.as_ref()))
    }
}

impl From<io::Error> for CidnavError {
    fn from(error: io::Error) -> Self {
        CidnavError::IO(error)
    }
}

impl From<String> for CidnavError {
    fn from(error: String) -> Self {
        CidnavError::Basic(StringError::from(error))
    }
}

impl From<reqwest::Error> for CidnavError {
    fn from(error: reqwest::Error) -> Self {
        CidnavError::HTTP(error)
    }
}

impl From<serde_json::Error> for CidnavError {
    fn from(error: serde_json::Error) -> Self {
        CidnavError::JSON(error)
    }
}

impl From<url::ParseError> for CidnavError {
    fn from(error: url::ParseError) -> Self {
        CidnavError::URL(error)
    }
}

impl From<std::str::Utf8Error> for CidnavError {
    fn from(error: std::str::Utf8Error) -> Self {
        CidnavError::Encoding(error)
    }
}
