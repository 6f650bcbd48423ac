use crate::model::types::*;
use axum::extract::FromRef;
use std::sync::Arc;

/// A source from the registry together with the feed it served at startup.
#[derive(Clone, Debug)]
pub struct LoadedSource {
    pub source: JsonSource,
    pub feed: SourceFeed,
}

#[derive(FromRef, Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub reqwest_client: reqwest::Client,
    pub sources: Arc<Vec<LoadedSource>>,
    pub leptos_options: leptos::config::LeptosOptions,
}

impl AppState {
    pub async fn new(leptos_options: leptos::config::LeptosOptions) -> Result<Self, Error> {
        let config = Config::from_env();
        tracing::info!(site_url = %config.site_url, steam_lookup = config.steam_lookup, "configuration loaded");

        let reqwest_client = reqwest::Client::builder()
            .user_agent(concat!("game_search/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(20))
            .build()
            .map_err(|e| Error::SourceFeed(format!("could not build http client: {}", e)))?;

        tracing::info!("loading {} source feeds...", JSON_SOURCES.len());
        let sources = crate::model::functions::load_sources(&reqwest_client, JSON_SOURCES).await;
        tracing::info!(
            downloads = sources.iter().map(|s| s.feed.downloads.len()).sum::<usize>(),
            "source feeds loaded"
        );

        Ok(Self {
            config,
            reqwest_client,
            sources: Arc::new(sources),
            leptos_options,
        })
    }

    /// The loaded feeds for `selected` source names, in registry order.
    pub fn feeds_for(&self, selected: &[String]) -> Vec<(&str, &SourceFeed)> {
        let selected = selected_sources(selected);
        self.sources
            .iter()
            .filter(|loaded| selected.contains(&loaded.source))
            .map(|loaded| (loaded.source.name, &loaded.feed))
            .collect()
    }
}
