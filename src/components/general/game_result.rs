use crate::components::{save_to_clipboard, use_translator, UrlSelectionPopup};
use crate::model::{source_url, ImageState, PopupState, SearchResult, AUTO_CLOSE_DELAY_MS};
use icondata::{LuDownload, LuExternalLink, LuGlobe};
use leptos::{
    logging::{log, warn},
    prelude::*,
    task::spawn_local,
};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

pub fn source_count_key(count: usize) -> &'static str {
    if count == 1 {
        "gameResult.source"
    } else {
        "gameResult.sources"
    }
}

#[component]
pub fn GameResult(game: SearchResult) -> impl IntoView {
    let t = use_translator();
    let SearchResult {
        name,
        image,
        genres,
        sources,
    } = game;

    let (image_state, set_image_state) = signal(ImageState::new(image.as_deref()));
    // only changes when the url does, so a successful load does not re-create the <img>
    let image_url = Memo::new(move |_| image_state.with(|state| state.url().map(str::to_string)));

    let on_image_error = {
        let name = name.clone();
        move |_| {
            set_image_state.update(|state| {
                *state = std::mem::replace(state, ImageState::NoImage).on_error();
                if state.is_terminal() {
                    warn!("All image formats failed for: {}", name);
                } else if let Some(next) = state.url() {
                    log!("Trying next image format: {}", next);
                }
            })
        }
    };
    let on_image_load = move |_| {
        set_image_state.update(|state| *state = std::mem::replace(state, ImageState::NoImage).on_load())
    };

    let (popup, set_popup) = signal(PopupState::default());

    let UseTimeoutFnReturn {
        start: start_auto_close,
        stop: stop_auto_close,
        ..
    } = use_timeout_fn(
        move |_: ()| set_popup.update(PopupState::on_timeout),
        f64::from(AUTO_CLOSE_DELAY_MS),
    );

    let on_select = Callback::new(move |url: String| {
        let mut copied = None;
        set_popup.update(|popup| copied = popup.select(&url));
        if let Some(url) = copied {
            spawn_local(async move { save_to_clipboard(&url).await });
            start_auto_close(());
        }
    });
    let on_close = {
        let stop_auto_close = stop_auto_close.clone();
        Callback::new(move |_: ()| {
            stop_auto_close();
            set_popup.update(PopupState::close);
        })
    };
    let is_open = Signal::derive(move || popup.with(PopupState::is_open));
    let options = Signal::derive(move || popup.with(|popup| popup.options().to_vec()));
    let copied = Signal::derive(move || popup.with(|popup| popup.copied().map(str::to_string)));

    let source_count = sources.len();
    let alt = name.clone();

    view! {
        <div class="game-result">
            {move || {
                image_url
                    .get()
                    .map(|url| {
                        view! {
                            <div class="game-result-art">
                                <img
                                    src=url
                                    alt=alt.clone()
                                    on:error=on_image_error.clone()
                                    on:load=on_image_load
                                />
                                <div class="game-result-shade"></div>
                            </div>
                        }
                    })
            }}

            <div class="game-result-content">
                <h2 class="game-result-header">
                    <div class="game-result-title">
                        <span class="game-name">{name}</span>
                        {(!genres.is_empty())
                            .then(|| {
                                view! {
                                    <div class="genres">
                                        {genres
                                            .into_iter()
                                            .map(|genre| view! { <span class="genre">{genre}</span> })
                                            .collect_view()}
                                    </div>
                                }
                            })}
                    </div>
                    <span class="source-count">
                        {move || format!("{} {}", source_count, t.t(source_count_key(source_count)))}
                    </span>
                </h2>

                <div class="source-list">
                    {sources
                        .into_iter()
                        .map(|source| {
                            let count = source.download_count();
                            let visit = source_url(&source.source_name);
                            let source_name = source.source_name.clone();
                            let stop_auto_close = stop_auto_close.clone();
                            view! {
                                <div class="source-row">
                                    <div class="source-info">
                                        <span class="source-name">{source_name}</span>
                                        <div class="download-count">
                                            <svg viewBox=LuDownload.view_box inner_html=LuDownload.data></svg>
                                            <span>{count}</span>
                                        </div>
                                    </div>
                                    {visit
                                        .map(|url| {
                                            view! {
                                                <a
                                                    class="visit-source"
                                                    href=url
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    title=move || t.t("gameResult.visit")
                                                >
                                                    <svg viewBox=LuGlobe.view_box inner_html=LuGlobe.data></svg>
                                                </a>
                                            }
                                        })}
                                    <button
                                        class="select-button"
                                        on:click=move |_| {
                                            stop_auto_close();
                                            set_popup.update(|popup| popup.open(source.clone()));
                                        }
                                    >
                                        <svg viewBox=LuExternalLink.view_box inner_html=LuExternalLink.data></svg>
                                        <span>{move || t.t("gameResult.select")}</span>
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>

        <UrlSelectionPopup is_open options copied on_close on_select />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralizes_the_source_count() {
        assert_eq!(source_count_key(1), "gameResult.source");
        assert_eq!(source_count_key(0), "gameResult.sources");
        assert_eq!(source_count_key(3), "gameResult.sources");
    }
}
