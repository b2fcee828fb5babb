use crate::api::client;
use crate::api::endpoint;
use crate::config::StoreConfig;
use crate::error::CidnavError;
use crate::route;

/// Remove the node at `path`; for a directory the store removes the whole
/// subtree. Irreversible from this side, so callers must obtain explicit
/// confirmation before issuing it.
pub async fn delete_entry(
    config: &StoreConfig,
    path: impl AsRef<str>,
) -> Result<(), CidnavError> {
    let path = path.as_ref();
    let encoded = route::encode(path);
    let url = endpoint::delete_url(config, &encoded);
    log::debug!("delete_entry {path} -> {url}");

    let client = client::new_for_url(&url)?;
    let res = client.delete(&url).send().await.map_err(|err| {
        CidnavError::mutation_failed(format!("delete request for {path} failed: {err}"))
    })?;
    client::read_success_body(&url, res).await.map_err(|err| {
        CidnavError::mutation_failed(format!("delete of {path} rejected: {err}"))
    })?;
    Ok(())
}
