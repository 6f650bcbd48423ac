use leptos::prelude::*;
use serde_json::{json, Value};

pub const APP_NAME: &str = "Is it on aitronz Database?";
pub const APP_DESCRIPTION: &str =
    "Fast and reliable game search engine with advanced filtering capabilities";

/// schema.org description of the site for search engines
pub fn structured_data(site_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebApplication",
        "name": APP_NAME,
        "applicationCategory": "GameSearchEngine",
        "operatingSystem": "Any",
        "description": APP_DESCRIPTION,
        "url": site_url,
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD"
        }
    })
}

#[component]
pub fn StructuredData(#[prop(into)] site_url: String) -> impl IntoView {
    let json_ld = structured_data(&site_url).to_string();
    view! { <script type="application/ld+json" inner_html=json_ld></script> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_a_free_web_application() {
        let data = structured_data("https://games.example");
        assert_eq!(data["@type"], "WebApplication");
        assert_eq!(data["applicationCategory"], "GameSearchEngine");
        assert_eq!(data["url"], "https://games.example");
        assert_eq!(data["offers"]["price"], "0");
    }
}
