use crate::model::types::*;
use serde::Deserialize;
use std::collections::HashMap;

const STORE_SEARCH_URL: &str = "https://store.steampowered.com/api/storesearch/";
const APP_DETAILS_URL: &str = "https://store.steampowered.com/api/appdetails";
const ASSET_BASE_URL: &str = "https://shared.akamai.steamstatic.com/store_item_assets/steam/apps";

#[derive(Deserialize, Debug, Clone)]
struct StoreSearch {
    #[serde(default)]
    items: Vec<StoreItem>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoreItem {
    pub id: u64,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
struct AppDetails {
    #[serde(default)]
    success: bool,
    data: Option<AppData>,
}

#[derive(Deserialize, Debug, Clone)]
struct AppData {
    #[serde(default)]
    genres: Vec<Genre>,
}

#[derive(Deserialize, Debug, Clone)]
struct Genre {
    description: String,
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// The store entry for `name`: an exact match ignoring case and punctuation, else the
/// store's first suggestion.
pub fn pick_app<'a>(items: &'a [StoreItem], name: &str) -> Option<&'a StoreItem> {
    let wanted = normalize(name);
    items
        .iter()
        .find(|item| normalize(&item.name) == wanted)
        .or_else(|| items.first())
}

/// Proxy url of the header art for a store app, the first link of the fallback chain.
pub fn header_image_url(app_id: u64) -> String {
    proxy_url(&format!("{}/{}/header.jpg", ASSET_BASE_URL, app_id))
}

async fn find_app(client: &reqwest::Client, name: &str) -> Result<Option<StoreItem>, Error> {
    let search: StoreSearch = client
        .get(STORE_SEARCH_URL)
        .query(&[("term", name), ("l", "english"), ("cc", "US")])
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| Error::Steam(format!("store search for {} failed: {}", name, e)))?
        .json()
        .await
        .map_err(|e| Error::Steam(format!("store search for {} returned bad json: {}", name, e)))?;

    Ok(pick_app(&search.items, name).cloned())
}

async fn app_genres(client: &reqwest::Client, app_id: u64) -> Result<Vec<String>, Error> {
    let details: HashMap<String, AppDetails> = client
        .get(APP_DETAILS_URL)
        .query(&[("appids", app_id.to_string()), ("filters", "genres".to_string())])
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| Error::Steam(format!("app details for {} failed: {}", app_id, e)))?
        .json()
        .await
        .map_err(|e| Error::Steam(format!("app details for {} returned bad json: {}", app_id, e)))?;

    Ok(details
        .into_values()
        .filter(|details| details.success)
        .filter_map(|details| details.data)
        .flat_map(|data| data.genres)
        .map(|genre| genre.description)
        .collect())
}

/// Fills in art and genres from the store. A game the store does not know, or any
/// failure talking to it, leaves the result as it was.
pub async fn enrich(client: &reqwest::Client, mut game: SearchResult) -> SearchResult {
    let app = match find_app(client, &game.name).await {
        Ok(Some(app)) => app,
        Ok(None) => return game,
        Err(e) => {
            tracing::warn!("{}", e);
            return game;
        }
    };

    game.image = Some(header_image_url(app.id));
    match app_genres(client, app.id).await {
        Ok(genres) => game.genres = genres,
        Err(e) => tracing::warn!("{}", e),
    }
    game
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, name: &str) -> StoreItem {
        StoreItem {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn prefers_an_exact_name_match() {
        let items = vec![item(1, "Hades II: Soundtrack"), item(2, "Hades II"), item(3, "Hades")];
        assert_eq!(pick_app(&items, "hades ii").map(|i| i.id), Some(2));
        assert_eq!(pick_app(&items, "HADES").map(|i| i.id), Some(3));
    }

    #[test]
    fn falls_back_to_the_first_suggestion() {
        let items = vec![item(7, "Portal 2"), item(8, "Portal")];
        assert_eq!(pick_app(&items, "Portal Two").map(|i| i.id), Some(7));
        assert_eq!(pick_app(&[], "Portal"), None);
    }

    #[test]
    fn header_image_starts_the_fallback_chain() {
        let url = header_image_url(570);
        assert_eq!(
            original_url(&url),
            "https://shared.akamai.steamstatic.com/store_item_assets/steam/apps/570/header.jpg"
        );
        assert!(next_fallback_url(&url).is_some());
    }
}
