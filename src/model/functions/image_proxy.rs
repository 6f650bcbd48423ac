use crate::model::types::*;
use axum::body::Bytes;
use http::StatusCode;

#[derive(Debug, Clone)]
pub struct ProxiedImage {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// Checks that `original` is an absolute http(s) url on an allowed image host.
pub fn validate_image_url(original: &str, config: &Config) -> Result<url::Url, Error> {
    if original.is_empty() {
        return Err(Error::InvalidRequest("missing url parameter".to_string()));
    }
    let url = url::Url::parse(original)
        .map_err(|e| Error::InvalidRequest(format!("{} is not a valid url: {}", original, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidRequest(format!(
            "unsupported scheme {}",
            url.scheme()
        )));
    }
    match url.host_str() {
        Some(host) if config.is_image_host_allowed(host) => Ok(url),
        Some(host) => Err(Error::Forbidden(format!("{} is not an allowed image host", host))),
        None => Err(Error::InvalidRequest(format!("{} has no host", original))),
    }
}

/// Fetches the image behind `original`. An upstream error status is returned as is so the
/// browser sees the failure and the card moves down its fallback chain.
pub async fn fetch_image(
    client: &reqwest::Client,
    config: &Config,
    original: &str,
) -> Result<ProxiedImage, Error> {
    let url = validate_image_url(original, config)?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::ImageProxy(format!("could not fetch {}: {}", original, e)))?;

    let status = response.status();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response
        .bytes()
        .await
        .map_err(|e| Error::ImageProxy(format!("could not read {}: {}", original, e)))?;

    if !status.is_success() {
        tracing::debug!(%status, original, "upstream image failed");
    }

    Ok(ProxiedImage {
        status,
        content_type,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_store_assets() {
        let config = Config::default();
        let url = validate_image_url(
            "https://shared.akamai.steamstatic.com/store_item_assets/steam/apps/570/header.jpg",
            &config,
        )
        .expect("steam cdn is allowed");
        assert_eq!(url.path(), "/store_item_assets/steam/apps/570/header.jpg");
    }

    #[test]
    fn rejects_missing_and_malformed_urls() {
        let config = Config::default();
        assert!(matches!(validate_image_url("", &config), Err(Error::InvalidRequest(_))));
        assert!(matches!(validate_image_url("not a url", &config), Err(Error::InvalidRequest(_))));
        assert!(matches!(
            validate_image_url("file:///etc/passwd", &config),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn rejects_hosts_outside_the_allow_list() {
        let config = Config::default();
        assert!(matches!(
            validate_image_url("http://127.0.0.1:8080/header.jpg", &config),
            Err(Error::Forbidden(_))
        ));
    }
}
