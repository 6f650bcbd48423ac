use crate::components::*;
use crate::model::SearchResult;
use gloo::storage::{errors::StorageError, LocalStorage, Storage};
use leptos::{
    either::EitherOf4,
    logging::{error, log},
    prelude::*,
    server_fn::codec::Json,
};
use leptos_router::{
    hooks::{use_navigate, use_query_map},
    NavigateOptions,
};

const SELECTED_SOURCES_KEY: &str = "selectedSources";

#[server(input = Json)]
pub async fn search_games(
    query: String,
    selected_sources: Vec<String>,
) -> Result<Vec<SearchResult>, ServerFnError> {
    use crate::model::{self, AppState};
    let app_state = expect_context::<AppState>();
    Ok(model::search_games(&query, &selected_sources, &app_state).await)
}

/// Where the search bar sends a submitted query.
pub fn search_path(query: &str) -> String {
    format!("/search?q={}", urlencoding::encode(query.trim()))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let t = use_translator();
    let navigate = use_navigate();
    let query_map = use_query_map();
    let query = Memo::new(move |_| query_map.with(|params| params.get("q").unwrap_or_default()));

    let (selected_sources, set_selected_sources) = signal(Vec::<String>::new());
    let (sources_loaded, set_sources_loaded) = signal(false);

    Effect::new(move |_| {
        let sources: Result<Vec<String>, StorageError> = LocalStorage::get(SELECTED_SOURCES_KEY);
        match sources {
            Ok(sources) => set_selected_sources.set(sources),
            Err(StorageError::KeyNotFound(_)) => {}
            Err(e) => log!("Error getting selected sources from local storage: {}", e),
        }
        set_sources_loaded.set(true);
    });

    let on_sources_change = Callback::new(move |sources: Vec<String>| {
        if let Err(err) = LocalStorage::set(SELECTED_SOURCES_KEY, &sources) {
            log!("Error saving selected sources to local storage: {}", err);
        }
        set_selected_sources.set(sources);
    });

    let search: Action<(String, Vec<String>), Result<Vec<SearchResult>, ServerFnError>> =
        Action::new_unsync(|(query, sources): &(String, Vec<String>)| {
            let query = query.clone();
            let sources = sources.clone();
            async move { search_games(query, sources).await }
        });

    Effect::new(move |_| {
        let query = query.get();
        let sources = selected_sources.get();
        if sources_loaded.get() && !query.trim().is_empty() {
            search.dispatch((query, sources));
        }
    });

    let on_search = move |query: String| {
        navigate(&search_path(&query), NavigateOptions::default());
    };

    let games = Memo::new(move |_| {
        search
            .value()
            .with(|value| match value {
                Some(Ok(games)) => games.clone(),
                _ => Vec::new(),
            })
    });
    let searching = search.pending();

    view! {
        <div id="home-page">
            <div class="top-bar">
                <LanguageSwitcher />
            </div>

            <div class="home-content">
                <h1>{move || t.t("title")}</h1>
                <p class="subtitle">{move || t.t("subtitle")}</p>

                <div class="search-row">
                    <div class="search-container">
                        <SearchBar initial=query on_search searching />
                    </div>
                    <SourceFilter selected_sources on_change=on_sources_change />
                </div>

                <Features />

                <div class="search-status">
                    {move || {
                        if searching.get() {
                            return EitherOf4::A(view! { <p>{move || t.t("search.searching")}</p> });
                        }
                        search
                            .value()
                            .with(|value| match value {
                                Some(Err(e)) => {
                                    error!("search failed: {}", e);
                                    EitherOf4::B(
                                        view! { <p class="search-error">{move || t.t("search.error")}</p> },
                                    )
                                }
                                Some(Ok(games)) if games.is_empty() => {
                                    EitherOf4::C(view! { <p>{move || t.t("search.noResults")}</p> })
                                }
                                _ => EitherOf4::D(()),
                            })
                    }}
                </div>

                <div class="results">
                    <For
                        each=move || games.get()
                        key=SearchResult::card_key
                        children=move |game| view! { <GameResult game /> }
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    let t = use_translator();
    view! { <p class="not-found">{move || t.t("notFound")}</p> }
}
