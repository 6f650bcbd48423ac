use crate::model::types::*;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const MAX_RESULTS: usize = 30;

/// The document a source publishes with everything it offers.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFeed {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub downloads: Vec<FeedDownload>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedDownload {
    pub title: String,
    #[serde(default)]
    pub uris: Vec<String>,
    #[serde(default)]
    pub upload_date: String,
    #[serde(default)]
    pub file_size: String,
}

/// The game a download belongs to: its title without release details such as
/// `(…)`, `[…]`, ` - edition` or a ` v1.2` version suffix.
pub fn game_name(title: &str) -> String {
    let version = title
        .match_indices(" v")
        .find(|(i, _)| {
            title[i + 2..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_digit())
        })
        .map(|(i, _)| i);

    let cut = ["(", "[", " - ", " – "]
        .iter()
        .filter_map(|marker| title.find(marker))
        .chain(version)
        .min()
        .unwrap_or(title.len());

    let name = title[..cut].trim().trim_end_matches([',', ':', '-']).trim();
    if name.is_empty() {
        title.trim().to_string()
    } else {
        name.to_string()
    }
}

fn query_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect_vec()
}

fn matches_terms(title: &str, terms: &[String]) -> bool {
    let title = title.to_lowercase();
    terms.iter().all(|term| title.contains(term.as_str()))
}

fn link_label(title: &str, uri: &str, multiple: bool) -> String {
    if !multiple {
        return title.to_string();
    }
    let host = url::Url::parse(uri)
        .ok()
        .and_then(|uri| uri.host_str().map(str::to_string))
        .unwrap_or_else(|| uri.split(':').next().unwrap_or_default().to_string());
    format!("{} ({})", title, host)
}

/// Groups every download matching `query` into one result per game.
///
/// `feeds` pairs a source name with its feed. Results keep the order in which games are
/// first found, and at most `limit` games are returned.
pub fn search_feeds<'a>(
    feeds: impl IntoIterator<Item = (&'a str, &'a SourceFeed)>,
    query: &str,
    limit: usize,
) -> Vec<SearchResult> {
    let terms = query_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();

    for (source_name, feed) in feeds {
        for download in feed.downloads.iter().filter(|d| matches_terms(&d.title, &terms)) {
            let name = game_name(&download.title);
            let index = match by_name.get(&name.to_lowercase()) {
                Some(index) => *index,
                None if results.len() < limit => {
                    by_name.insert(name.to_lowercase(), results.len());
                    results.push(SearchResult {
                        name,
                        image: None,
                        genres: Vec::new(),
                        sources: Vec::new(),
                    });
                    results.len() - 1
                }
                None => continue,
            };

            let game = &mut results[index];
            let position = match game.sources.iter().position(|s| s.source_name == source_name) {
                Some(position) => position,
                None => {
                    game.sources.push(Source {
                        source_name: source_name.to_string(),
                        upload_date: String::new(),
                        download_urls: None,
                    });
                    game.sources.len() - 1
                }
            };
            let source = &mut game.sources[position];

            if download.upload_date > source.upload_date {
                source.upload_date = download.upload_date.clone();
            }

            let multiple = download.uris.len() > 1;
            let links = download.uris.iter().map(|uri| DownloadLink {
                name: link_label(&download.title, uri, multiple),
                url: uri.clone(),
                upload_date: download.upload_date.clone(),
                file_size: download.file_size.clone(),
            });
            source.download_urls.get_or_insert_with(Vec::new).extend(links);
        }
    }

    results
}
