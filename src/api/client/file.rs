use bytes::Bytes;
use futures::future::join_all;

use crate::api::client;
use crate::api::endpoint;
use crate::config::StoreConfig;
use crate::error::CidnavError;
use crate::route;

/// Upload one file's bytes to `path`. Intermediate directories are the
/// store's business; the path is created implicitly.
pub async fn write_file(
    config: &StoreConfig,
    path: impl AsRef<str>,
    content: impl Into<Bytes>,
) -> Result<(), CidnavError> {
    let path = path.as_ref();
    let encoded = route::encode(path);
    let url = endpoint::write_url(config, &encoded);
    log::debug!("write_file {path} -> {url}");

    let client = client::new_for_url(&url)?;
    let res = client
        .post(&url)
        .body(content.into())
        .send()
        .await
        .map_err(|err| {
            CidnavError::mutation_failed(format!("write request for {path} failed: {err}"))
        })?;
    client::read_success_body(&url, res).await.map_err(|err| {
        CidnavError::mutation_failed(format!("write to {path} rejected: {err}"))
    })?;
    Ok(())
}

/// Issue one write per target, all in flight at once. There is no atomicity
/// across the batch and no rollback; the returned outcomes report each
/// target separately, and the call returns only after every request has
/// settled so the caller can safely re-fetch.
pub async fn write_files(
    config: &StoreConfig,
    targets: Vec<(String, Bytes)>,
) -> Vec<(String, Result<(), CidnavError>)> {
    let requests = targets.into_iter().map(|(path, content)| async move {
        let result = write_file(config, &path, content).await;
        if let Err(err) = &result {
            log::warn!("write_files: {err}");
        }
        (path, result)
    });
    join_all(requests).await
}

/// Fetch a blob's raw bytes by content id.
pub async fn fetch_raw(config: &StoreConfig, cid: &str) -> Result<Vec<u8>, CidnavError> {
    let url = endpoint::raw_url(config, cid);
    log::debug!("fetch_raw {cid} -> {url}");

    let client = client::new_for_url(&url)?;
    let res = client.get(&url).send().await.map_err(|err| {
        CidnavError::fetch_failed(format!("raw request for {cid} failed: {err}"))
    })?;
    let status = res.status();
    if !status.is_success() {
        return Err(CidnavError::fetch_failed(format!(
            "Err status [{status}] fetching raw content for {cid} from {url}"
        )));
    }
    let bytes = res.bytes().await.map_err(|err| {
        CidnavError::fetch_failed(format!("raw read for {cid} failed: {err}"))
    })?;
    Ok(bytes.to_vec())
}
