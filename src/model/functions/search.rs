use crate::model::functions::steam;
use crate::model::types::*;
use futures::future::join_all;

pub async fn search_games(
    query: &str,
    selected_sources: &[String],
    app_state: &AppState,
) -> Vec<SearchResult> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let results = search_feeds(app_state.feeds_for(selected_sources), query, MAX_RESULTS);
    tracing::debug!(query, results = results.len(), "searched source feeds");

    if !app_state.config.steam_lookup {
        return results;
    }

    let client = &app_state.reqwest_client;
    join_all(results.into_iter().map(|game| steam::enrich(client, game))).await
}
