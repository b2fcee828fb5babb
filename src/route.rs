//! Route encoding for store paths
//!
//! A [`RouteId`] is the opaque form of an absolute path that is safe to embed
//! as a single URL path segment, used both as the browser route and as the
//! request-path component of every store call. Links and mutation URLs go
//! through the identical pipeline, so both sides agree on the identity of a
//! node.
//!
//! The pipeline is percent-escape, then URL-safe unpadded base64. The
//! URL-safe alphabet matters: standard base64 leaks `/`, `+` and `=` into
//! path segments.
//!

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{PATH_SEPARATOR, ROOT_PATH};
use crate::error::CidnavError;

/// Opaque route identifier. The empty route is the root sentinel: a browser
/// address with no explicit route means `/`.
#[derive(Deserialize, Serialize, Debug, Clone, Eq, Hash, PartialEq)]
pub struct RouteId(String);

impl RouteId {
    pub fn root() -> RouteId {
        RouteId(String::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The browser address path minus its leading separator is itself a
    /// route; an empty remainder is the root.
    pub fn from_location_path(location: &str) -> RouteId {
        let route = location.strip_prefix(PATH_SEPARATOR).unwrap_or(location);
        RouteId(route.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Encode an absolute path into its route.
pub fn encode(path: &str) -> RouteId {
    let escaped = urlencoding::encode(path);
    RouteId(URL_SAFE_NO_PAD.encode(escaped.as_bytes()))
}

/// Decode a route back into the absolute path it names. Anything that does
/// not round back to a legal absolute path is a [`CidnavError::DecodeFailed`];
/// the consuming side falls back to treating the route as root.
pub fn decode(route: &RouteId) -> Result<String, CidnavError> {
    if route.is_root() {
        return Ok(ROOT_PATH.to_string());
    }

    let bytes = URL_SAFE_NO_PAD.decode(route.as_str()).map_err(|err| {
        CidnavError::decode_failed(format!("route {route} is not valid base64: {err}"))
    })?;
    let escaped = std::str::from_utf8(&bytes).map_err(|err| {
        CidnavError::decode_failed(format!("route {route} is not valid utf-8: {err}"))
    })?;
    let path = urlencoding::decode(escaped).map_err(|err| {
        CidnavError::decode_failed(format!("route {route} is not valid percent-encoding: {err}"))
    })?;

    if !path.starts_with(PATH_SEPARATOR) {
        return Err(CidnavError::decode_failed(format!(
            "route {route} does not name an absolute path: {path}"
        )));
    }

    Ok(path.into_owned())
}
