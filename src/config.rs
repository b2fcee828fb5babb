//! Client configuration
//!
//! Exactly two fixed base URLs, injected into every component that builds a
//! request or a link. Nothing in this crate reads configuration from the
//! environment or from disk.
//!

use serde::{Deserialize, Serialize};

use crate::error::CidnavError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base URL of the store's data API.
    pub data_api_base: String,
    /// Canonical origin of this client, used when constructing cross-links.
    pub client_origin: String,
}

impl StoreConfig {
    pub fn new(
        data_api_base: impl AsRef<str>,
        client_origin: impl AsRef<str>,
    ) -> Result<StoreConfig, CidnavError> {
        Ok(StoreConfig {
            data_api_base: parse_base(data_api_base.as_ref())?,
            client_origin: parse_base(client_origin.as_ref())?,
        })
    }
}

// Bases are stored without a trailing separator so that URL construction is
// a plain join everywhere.
fn parse_base(base: &str) -> Result<String, CidnavError> {
    url::Url::parse(base)?;
    Ok(base.trim_end_matches('/').to_string())
}
