use crate::components::use_translator;
use icondata::LuSearch;
use leptos::{ev::SubmitEvent, prelude::*};

#[component]
pub fn SearchBar<F>(
    /// text the input starts with, e.g. the query of the current url
    #[prop(into)]
    initial: Signal<String>,
    on_search: F,
    #[prop(into)] searching: Signal<bool>,
) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    let t = use_translator();
    let (query, set_query) = signal(String::new());

    Effect::new(move |_| set_query.set(initial.get()));

    view! {
        <form
            class="search-bar"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                let query = query.get_untracked();
                if !query.trim().is_empty() {
                    on_search(query);
                }
            }
        >
            <input
                type="search"
                class="text-input"
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
                placeholder=move || t.t("search.placeholder")
                aria-label=move || t.t("search.button")
            />
            <button type="submit" class="button" class:loading=searching disabled=searching>
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox=LuSearch.view_box
                    inner_html=LuSearch.data
                ></svg>
            </button>
        </form>
    }
}
