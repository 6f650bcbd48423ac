use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonSource {
    pub name: &'static str,
    /// where the source publishes its download feed
    pub url: &'static str,
}

pub const JSON_SOURCES: &[JsonSource] = &[
    JsonSource {
        name: "FitGirl",
        url: "https://hydralinks.cloud/sources/fitgirl.json",
    },
    JsonSource {
        name: "DODI",
        url: "https://hydralinks.cloud/sources/dodi.json",
    },
    JsonSource {
        name: "KaOsKrew",
        url: "https://hydralinks.cloud/sources/kaoskrew.json",
    },
    JsonSource {
        name: "OnlineFix",
        url: "https://hydralinks.cloud/sources/onlinefix.json",
    },
    JsonSource {
        name: "Xatab",
        url: "https://hydralinks.cloud/sources/xatab.json",
    },
    JsonSource {
        name: "TinyRepacks",
        url: "https://hydralinks.cloud/sources/tinyrepacks.json",
    },
];

pub fn source_url(source_name: &str) -> Option<&'static str> {
    JSON_SOURCES
        .iter()
        .find(|source| source.name == source_name)
        .map(|source| source.url)
}

/// The registry entries to search. An empty selection means every source.
pub fn selected_sources(selected: &[String]) -> Vec<JsonSource> {
    JSON_SOURCES
        .iter()
        .filter(|source| selected.is_empty() || selected.iter().any(|s| s == source.name))
        .copied()
        .collect()
}
