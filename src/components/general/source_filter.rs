use crate::components::use_translator;
use crate::model::JSON_SOURCES;
use icondata::LuFilter;
use leptos::prelude::*;

/// Toggles `name` in a source selection.
pub fn toggle_source(mut selected: Vec<String>, name: &str) -> Vec<String> {
    match selected.iter().position(|s| s == name) {
        Some(index) => {
            selected.remove(index);
        }
        None => selected.push(name.to_string()),
    }
    selected
}

#[component]
pub fn SourceFilter(
    /// empty means every source is searched
    #[prop(into)]
    selected_sources: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    let t = use_translator();
    let (open, set_open) = signal(false);

    let toggle = move |name: &'static str| {
        on_change.run(toggle_source(selected_sources.get_untracked(), name));
    };

    view! {
        <div class="source-filter">
            <button class="button" on:click=move |_| set_open.update(|open| *open = !*open)>
                <svg viewBox=LuFilter.view_box inner_html=LuFilter.data></svg>
                <span>{move || t.t("sourceFilter.title")}</span>
                {move || {
                    let count = selected_sources.with(Vec::len);
                    (count > 0).then(|| view! { <span class="badge">{count}</span> })
                }}
            </button>
            <Show when=move || open.get()>
                <div class="source-filter-menu">
                    <button
                        class="source-option"
                        class:active=move || selected_sources.with(Vec::is_empty)
                        on:click=move |_| on_change.run(Vec::new())
                    >
                        {move || t.t("sourceFilter.all")}
                    </button>
                    {JSON_SOURCES
                        .iter()
                        .map(|source| {
                            let name = source.name;
                            view! {
                                <label class="source-option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            selected_sources.with(|s| s.iter().any(|n| n == name))
                                        }
                                        on:change=move |_| toggle(name)
                                    />
                                    {name}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
