//! URL construction for the store API, the public share gateway, and the
//! client's own route surface.

use crate::config::StoreConfig;
use crate::constants::PUBLIC_GATEWAY_ROOT;
use crate::route::RouteId;

pub fn dir_url(config: &StoreConfig, route: &RouteId) -> String {
    format!("{}/dir/{}", config.data_api_base, route)
}

pub fn write_url(config: &StoreConfig, route: &RouteId) -> String {
    format!("{}/write/{}", config.data_api_base, route)
}

pub fn mkdir_url(config: &StoreConfig, route: &RouteId) -> String {
    format!("{}/mkdir/{}", config.data_api_base, route)
}

pub fn delete_url(config: &StoreConfig, route: &RouteId) -> String {
    format!("{}/{}", config.data_api_base, route)
}

pub fn raw_url(config: &StoreConfig, cid: &str) -> String {
    format!("{}/raw/{}", config.data_api_base, cid)
}

/// Raw-content link carrying the display filename, so the receiving browser
/// has a save-as hint.
pub fn download_url(config: &StoreConfig, cid: &str, filename: &str) -> String {
    format!(
        "{}?filename={}",
        raw_url(config, cid),
        urlencoding::encode(filename)
    )
}

/// Share link on the public gateway, keyed by content rather than location.
pub fn share_url(cid: &str, filename: &str) -> String {
    format!(
        "{PUBLIC_GATEWAY_ROOT}/{cid}?filename={}",
        urlencoding::encode(filename)
    )
}

/// Link into this client's own route surface.
pub fn route_url(config: &StoreConfig, route: &RouteId) -> String {
    format!("{}/{}", config.client_origin, route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::error::CidnavError;
    use crate::route;

    fn config() -> Result<StoreConfig, CidnavError> {
        StoreConfig::new("http://localhost:7131", "http://localhost:3001")
    }

    #[test]
    fn test_store_urls_embed_the_route() -> Result<(), CidnavError> {
        let config = config()?;
        let encoded = route::encode("/docs");
        assert_eq!(
            dir_url(&config, &encoded),
            format!("http://localhost:7131/dir/{encoded}")
        );
        assert_eq!(
            write_url(&config, &encoded),
            format!("http://localhost:7131/write/{encoded}")
        );
        assert_eq!(
            mkdir_url(&config, &encoded),
            format!("http://localhost:7131/mkdir/{encoded}")
        );
        assert_eq!(
            delete_url(&config, &encoded),
            format!("http://localhost:7131/{encoded}")
        );
        Ok(())
    }

    #[test]
    fn test_egress_links_carry_filename_hint() -> Result<(), CidnavError> {
        let config = config()?;
        let cid = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";
        assert_eq!(
            download_url(&config, cid, "my cat.jpg"),
            format!("http://localhost:7131/raw/{cid}?filename=my%20cat.jpg")
        );
        assert_eq!(
            share_url(cid, "my cat.jpg"),
            format!("https://ipfs.io/ipfs/{cid}?filename=my%20cat.jpg")
        );
        Ok(())
    }

    #[test]
    fn test_route_url_points_at_client_origin() -> Result<(), CidnavError> {
        let config = config()?;
        let encoded = route::encode("/docs");
        assert_eq!(
            route_url(&config, &encoded),
            format!("http://localhost:3001/{encoded}")
        );
        Ok(())
    }
}
