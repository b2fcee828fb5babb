//! # API Client - HTTP plumbing shared by every store request
//!

use reqwest::{Client, IntoUrl};
use std::time;

use crate::constants;
use crate::error::CidnavError;

pub mod dir;
pub mod entries;
pub mod file;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const USER_AGENT: &str = "cidnav";

// TODO: reuse one client across requests so we get connection keep-alive
pub fn new_for_url<U: IntoUrl>(url: U) -> Result<Client, CidnavError> {
    let _ = url.into_url()?;
    match Client::builder()
        .user_agent(format!("{USER_AGENT}/{VERSION}"))
        .timeout(time::Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => Ok(client),
        Err(reqwest_err) => Err(CidnavError::HTTP(reqwest_err)),
    }
}

/// Checks that the response is a success and reads its body.
pub async fn read_success_body(
    url: &str,
    res: reqwest::Response,
) -> Result<String, CidnavError> {
    let status = res.status();
    let body = res.text().await?;

    log::debug!("url: {url}\nstatus: {status}\nbody: {body}");

    if !status.is_success() {
        return Err(CidnavError::basic_str(format!(
            "Err status [{status}] from url {url}\n'{body}'"
        )));
    }

    Ok(body)
}
