use serde::{Deserialize, Deserializer, Serialize};
use std::hash::{DefaultHasher, Hash, Hasher};

/// One game in a search result set, with every source that offers it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchResult {
    /// unique within one result set, used as the key when rendering the list
    pub name: String,
    /// a proxy url, see [`crate::model::proxy_url`]
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_genres")]
    pub genres: Vec<String>,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl SearchResult {
    /// Key of the rendered card. Differs whenever anything shown on the card does,
    /// so a new search never leaves a stale card behind under the same name.
    pub fn card_key(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub source_name: String,
    #[serde(default)]
    pub upload_date: String,
    ///none if the source did not list any links
    #[serde(default)]
    pub download_urls: Option<Vec<DownloadLink>>,
}

impl Source {
    pub fn download_count(&self) -> usize {
        self.download_urls.as_ref().map_or(0, Vec::len)
    }

    pub fn download_links(&self) -> &[DownloadLink] {
        self.download_urls.as_deref().unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DownloadLink {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub upload_date: String,
    #[serde(default)]
    pub file_size: String,
}

/// Renders an upload date as `Jan 5, 2024`. Dates that are not RFC 3339 or `YYYY-MM-DD`
/// are shown as they came.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = chrono::DateTime::parse_from_rfc3339(raw)
        .map(|date| date.date_naive())
        .or_else(|_| chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Anything that is not a list (null, a bare string, a number, an object) becomes an
/// empty list instead of failing the whole result. Inside a list, strings and numbers
/// are kept as text and other items are skipped.
fn lenient_genres<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Genres {
        List(Vec<Value>),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Genres::deserialize(deserializer)? {
        Genres::List(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(genre) => Some(genre),
                Value::Number(number) => Some(number.to_string()),
                _ => None,
            })
            .collect(),
        Genres::Other(_) => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> SearchResult {
        serde_json::from_value(value).expect("search result should always parse")
    }

    #[test]
    fn non_array_genres_become_empty() {
        for genres in [json!("not-an-array"), json!(null), json!(42), json!({"a": 1})] {
            let game = parse(json!({ "name": "Game A", "genres": genres, "sources": [] }));
            assert!(game.genres.is_empty(), "genres {genres} should be dropped");
        }
    }

    #[test]
    fn lists_with_odd_items_keep_what_can_be_shown() {
        let game = parse(json!({ "name": "Game A", "genres": [1, 2] }));
        assert_eq!(game.genres, vec!["1", "2"]);

        let game = parse(json!({ "name": "Game A", "genres": ["RPG", null, 3, {"x": 1}, true] }));
        assert_eq!(game.genres, vec!["RPG", "3"]);
    }

    #[test]
    fn card_key_follows_the_whole_result() {
        let both = parse(json!({
            "name": "Hades II",
            "sources": [
                { "sourceName": "FitGirl", "downloadUrls": [{ "name": "a", "url": "https://x/a" }] },
                { "sourceName": "DODI", "downloadUrls": [{ "name": "b", "url": "https://x/b" }] }
            ]
        }));
        let mut narrowed = both.clone();
        narrowed.sources.truncate(1);

        assert_eq!(both.card_key(), both.clone().card_key());
        assert_ne!(both.card_key(), narrowed.card_key());

        let mut tagged = both.clone();
        tagged.genres.push("Roguelike".to_string());
        assert_ne!(both.card_key(), tagged.card_key());
    }

    #[test]
    fn missing_genres_become_empty() {
        let game = parse(json!({ "name": "Game A", "sources": [] }));
        assert!(game.genres.is_empty());
        assert_eq!(game.image, None);
    }

    #[test]
    fn genres_keep_their_order() {
        let game = parse(json!({ "name": "Game A", "genres": ["RPG", "Action", "Indie"] }));
        assert_eq!(game.genres, vec!["RPG", "Action", "Indie"]);
    }

    #[test]
    fn absent_download_urls_count_as_zero() {
        let game = parse(json!({
            "name": "Game A",
            "sources": [{ "sourceName": "FitGirl", "uploadDate": "2024-01-01" }]
        }));
        let source = &game.sources[0];
        assert_eq!(source.download_urls, None);
        assert_eq!(source.download_count(), 0);
        assert!(source.download_links().is_empty());
    }

    #[test]
    fn formats_upload_dates() {
        assert_eq!(format_date("2024-01-05T10:00:00.000Z"), "Jan 5, 2024");
        assert_eq!(format_date("2023-11-20"), "Nov 20, 2023");
        assert_eq!(format_date("last week"), "last week");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn reads_camel_case_links() {
        let game = parse(json!({
            "name": "Game A",
            "sources": [{
                "sourceName": "DODI",
                "uploadDate": "2024-03-02T10:00:00Z",
                "downloadUrls": [
                    { "name": "Game A v1.2", "url": "magnet:?xt=urn:btih:abc", "uploadDate": "2024-03-02T10:00:00Z", "fileSize": "12.4 GB" }
                ]
            }]
        }));
        let link = &game.sources[0].download_links()[0];
        assert_eq!(link.url, "magnet:?xt=urn:btih:abc");
        assert_eq!(link.file_size, "12.4 GB");
        assert_eq!(game.sources[0].download_count(), 1);
    }
}
