//! Preferred-origin discovery
//!
//! The upstream plugin source declares the currently working origin
//! address. Fetching it may fail, or the declaration may be missing;
//! both mean "no preferred candidate", never a fatal error.

use crate::services::api::ApiClient;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};
use url::Url;

lazy_static! {
    /// Address declaration inside the discovery document, e.g.
    /// `override var mainUrl = "https://..."`.
    static ref MAIN_URL_DECL: Regex = Regex::new(r#"mainUrl\s*=\s*"([^"]+)""#).unwrap();
}

/// Extract the declared origin address from a discovery document body.
pub fn extract_address(document: &str) -> Option<String> {
    let captured = MAIN_URL_DECL.captures(document)?.get(1)?.as_str();
    if Url::parse(captured).is_err() {
        debug!("discovered address is not a valid URL: {}", captured);
        return None;
    }
    Some(captured.trim_end_matches('/').to_string())
}

/// Fetch the discovery document and extract the preferred origin
/// address, if any.
pub async fn discover_preferred(api: &ApiClient, discovery_url: &str) -> Option<String> {
    match api.fetch_text(discovery_url).await {
        Ok(body) => {
            let address = extract_address(&body);
            match &address {
                Some(addr) => info!("discovered preferred origin: {}", addr),
                None => debug!("discovery document has no address declaration"),
            }
            address
        }
        Err(e) => {
            debug!("discovery fetch failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_address_from_declaration() {
        let doc = r#"
            class Prov : MainAPI() {
                override var mainUrl = "https://m.prectv49.sbs"
                override var name = "Prov"
            }
        "#;
        assert_eq!(
            extract_address(doc),
            Some("https://m.prectv49.sbs".to_string())
        );
    }

    #[test]
    fn test_extract_address_trims_trailing_slash() {
        let doc = r#"mainUrl = "https://m.prectv49.sbs/""#;
        assert_eq!(
            extract_address(doc),
            Some("https://m.prectv49.sbs".to_string())
        );
    }

    #[test]
    fn test_missing_declaration_yields_none() {
        assert_eq!(extract_address("no declaration here"), None);
    }

    #[test]
    fn test_invalid_url_yields_none() {
        let doc = r#"mainUrl = "not a url""#;
        assert_eq!(extract_address(doc), None);
    }
}
