use crate::api::client;
use crate::api::endpoint;
use crate::config::StoreConfig;
use crate::error::CidnavError;
use crate::model::Stat;
use crate::route;

/// Fetch the metadata snapshot for a path. A pure read: the store is never
/// mutated, no retry or backoff is attempted, and each navigation issues
/// exactly one of these.
pub async fn fetch_stat(
    config: &StoreConfig,
    path: impl AsRef<str>,
) -> Result<Stat, CidnavError> {
    let path = path.as_ref();
    let encoded = route::encode(path);
    let url = endpoint::dir_url(config, &encoded);
    log::debug!("fetch_stat {path} -> {url}");

    let client = client::new_for_url(&url)?;
    let res = client.get(&url).send().await.map_err(|err| {
        CidnavError::fetch_failed(format!("stat request for {path} failed: {err}"))
    })?;
    let body = client::read_success_body(&url, res).await.map_err(|err| {
        CidnavError::fetch_failed(format!("stat read for {path} failed: {err}"))
    })?;
    let response: Result<Stat, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(stat) => Ok(stat),
        Err(err) => Err(CidnavError::fetch_failed(format!(
            "api::client::dir::fetch_stat error parsing response from {url}\n\nErr {err:?} \n\n{body}"
        ))),
    }
}

/// Create a directory node at `path`. Whether an already-existing directory
/// is an error is the store's contract, not checked here.
pub async fn mkdir(config: &StoreConfig, path: impl AsRef<str>) -> Result<(), CidnavError> {
    let path = path.as_ref();
    let encoded = route::encode(path);
    let url = endpoint::mkdir_url(config, &encoded);
    log::debug!("mkdir {path} -> {url}");

    let client = client::new_for_url(&url)?;
    let res = client.post(&url).send().await.map_err(|err| {
        CidnavError::mutation_failed(format!("mkdir request for {path} failed: {err}"))
    })?;
    client::read_success_body(&url, res).await.map_err(|err| {
        CidnavError::mutation_failed(format!("mkdir {path} rejected: {err}"))
    })?;
    Ok(())
}
