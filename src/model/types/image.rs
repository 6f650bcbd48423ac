//! Background art for a result card.
//!
//! Card images go through the same-origin image proxy. When the proxied asset fails to load
//! the card steps down a fixed chain of smaller store assets, and renders without art once
//! the chain is exhausted.

pub const IMAGE_PROXY_PATH: &str = "/api/image-proxy";

/// Ordered `(pattern, replacement)` pairs, tried top to bottom.
pub const FALLBACK_CHAIN: [(&str, &str); 3] = [
    ("header.jpg", "capsule_616x353.jpg"),
    ("capsule_616x353.jpg", "capsule_231x87.jpg"),
    ("capsule_231x87.jpg", "capsule_184x69.jpg"),
];

/// Wraps a remote asset url so it is fetched through the image proxy.
pub fn proxy_url(original: &str) -> String {
    format!("{}?url={}", IMAGE_PROXY_PATH, urlencoding::encode(original))
}

/// The remote asset url carried in the `url` query parameter of a proxy url.
/// Returns an empty string when there is no query or no `url` parameter.
pub fn original_url(proxy: &str) -> String {
    let Some((_, query)) = proxy.split_once('?') else {
        return String::new();
    };
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

/// The proxy url of the next smaller asset, or `None` when `current` is at the end of the chain.
pub fn next_fallback_url(current: &str) -> Option<String> {
    let original = original_url(current);
    FALLBACK_CHAIN
        .iter()
        .find(|(pattern, _)| original.contains(*pattern))
        .map(|(pattern, replacement)| proxy_url(&original.replacen(*pattern, replacement, 1)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageState {
    /// waiting for the browser to report load or error for this url
    Loading(String),
    Displayed(String),
    NoImage,
}

impl ImageState {
    pub fn new(initial: Option<&str>) -> Self {
        match initial {
            Some(url) if !url.is_empty() => ImageState::Loading(url.to_owned()),
            _ => ImageState::NoImage,
        }
    }

    pub fn on_error(self) -> Self {
        match self {
            ImageState::Loading(url) => match next_fallback_url(&url) {
                Some(next) => ImageState::Loading(next),
                None => ImageState::NoImage,
            },
            other => other,
        }
    }

    pub fn on_load(self) -> Self {
        match self {
            ImageState::Loading(url) => ImageState::Displayed(url),
            other => other,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ImageState::Loading(url) | ImageState::Displayed(url) => Some(url),
            ImageState::NoImage => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ImageState::NoImage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "/api/image-proxy?url=https://x/apps/1/header.jpg";

    #[test]
    fn header_steps_down_to_the_616_capsule() {
        let next = next_fallback_url(HEADER).expect("header.jpg has a fallback");
        assert!(next.starts_with("/api/image-proxy?url="));
        assert_eq!(original_url(&next), "https://x/apps/1/capsule_616x353.jpg");
    }

    #[test]
    fn follows_the_whole_chain_in_order() {
        let mut current = proxy_url("https://cdn.example/steam/apps/570/header.jpg");
        let mut seen = Vec::new();
        while let Some(next) = next_fallback_url(&current) {
            seen.push(original_url(&next));
            current = next;
        }
        assert_eq!(
            seen,
            vec![
                "https://cdn.example/steam/apps/570/capsule_616x353.jpg",
                "https://cdn.example/steam/apps/570/capsule_231x87.jpg",
                "https://cdn.example/steam/apps/570/capsule_184x69.jpg",
            ]
        );
    }

    #[test]
    fn smallest_capsule_is_terminal() {
        let url = "/api/image-proxy?url=https://x/apps/1/capsule_184x69.jpg";
        assert_eq!(next_fallback_url(url), None);
        assert_eq!(ImageState::Loading(url.to_owned()).on_error(), ImageState::NoImage);
    }

    #[test]
    fn unknown_or_malformed_urls_have_no_fallback() {
        assert_eq!(next_fallback_url("/api/image-proxy?url=https://x/cover.png"), None);
        assert_eq!(next_fallback_url("/api/image-proxy"), None);
        assert_eq!(next_fallback_url("/api/image-proxy?other=header.jpg"), None);
        assert_eq!(next_fallback_url(""), None);
    }

    #[test]
    fn pattern_outside_the_url_parameter_is_ignored() {
        assert_eq!(original_url("/header.jpg?url="), "");
        assert_eq!(next_fallback_url("/header.jpg?size=header.jpg"), None);
    }

    #[test]
    fn only_the_first_occurrence_is_replaced() {
        let url = proxy_url("https://x/header.jpg/apps/1/header.jpg");
        let next = next_fallback_url(&url).expect("has a fallback");
        assert_eq!(original_url(&next), "https://x/capsule_616x353.jpg/apps/1/header.jpg");
    }

    #[test]
    fn proxy_url_round_trips_encoded_characters() {
        let original = "https://x/apps/1/header.jpg?t=1&v=2 b";
        let wrapped = proxy_url(original);
        assert!(!wrapped.contains('&'));
        assert_eq!(original_url(&wrapped), original);
    }

    #[test]
    fn starts_terminal_without_an_image() {
        assert_eq!(ImageState::new(None), ImageState::NoImage);
        assert_eq!(ImageState::new(Some("")), ImageState::NoImage);
        assert_eq!(ImageState::new(Some(HEADER)), ImageState::Loading(HEADER.to_owned()));
    }

    #[test]
    fn terminal_state_is_idempotent() {
        let state = ImageState::NoImage.on_error().on_error();
        assert_eq!(state, ImageState::NoImage);
        assert_eq!(state.clone().on_load(), ImageState::NoImage);
        assert!(state.is_terminal());
        assert_eq!(state.url(), None);
    }

    #[test]
    fn a_loaded_image_stays_displayed() {
        let state = ImageState::new(Some(HEADER)).on_load();
        assert_eq!(state, ImageState::Displayed(HEADER.to_owned()));
        assert_eq!(state.clone().on_error(), state);
        assert_eq!(state.url(), Some(HEADER));
    }

    #[test]
    fn retry_keeps_a_renderable_url() {
        let state = ImageState::new(Some(HEADER)).on_error();
        let url = state.url().expect("retrying still renders an image");
        assert_eq!(original_url(url), "https://x/apps/1/capsule_616x353.jpg");
    }
}
