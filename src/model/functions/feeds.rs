use crate::model::types::*;
use futures::future::join_all;

async fn load_feed(client: &reqwest::Client, source: &JsonSource) -> Result<SourceFeed, Error> {
    client
        .get(source.url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| Error::SourceFeed(format!("could not fetch {}: {}", source.name, e)))?
        .json::<SourceFeed>()
        .await
        .map_err(|e| Error::SourceFeed(format!("{} served an invalid feed: {}", source.name, e)))
}

/// Fetches every feed concurrently. A source whose feed can't be loaded is kept with an
/// empty feed so it still shows up in the filter.
pub async fn load_sources(client: &reqwest::Client, sources: &[JsonSource]) -> Vec<LoadedSource> {
    let feeds = join_all(sources.iter().map(|source| load_feed(client, source))).await;

    sources
        .iter()
        .zip(feeds)
        .map(|(source, feed)| {
            let feed = match feed {
                Ok(feed) => {
                    tracing::info!(source = source.name, downloads = feed.downloads.len(), "feed loaded");
                    feed
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    SourceFeed {
                        name: source.name.to_string(),
                        ..Default::default()
                    }
                }
            };
            LoadedSource {
                source: *source,
                feed,
            }
        })
        .collect()
}
