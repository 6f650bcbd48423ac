use crate::components::{use_translator, Modal};
use crate::model::{format_date, DownloadLink};
use icondata::LuCopy;
use leptos::{logging::log, prelude::*};

pub async fn save_to_clipboard(text: &str) {
    log!("copying to clipboard: {}", text);
    let window = match web_sys::window() {
        Some(window) => window,
        None => {
            log!("failed to copy, window not available");
            return;
        }
    };
    let clip = window.navigator().clipboard();

    let promise = clip.write_text(text);
    if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
        log!("failed to copy to clipboard");
    }
}

/// Lists the download links of one source. Picking one hands its url to `on_select`;
/// `copied` is the url to mark as copied.
#[component]
pub fn UrlSelectionPopup(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] options: Signal<Vec<DownloadLink>>,
    #[prop(into)] copied: Signal<Option<String>>,
    on_close: Callback<()>,
    on_select: Callback<String>,
) -> impl IntoView {
    let t = use_translator();

    view! {
        <Modal visible=is_open on_close>
            <div class="url-popup">
                <h3>{move || t.t("urlPopup.title")}</h3>
                {move || {
                    options
                        .with(Vec::is_empty)
                        .then(|| view! { <p class="url-popup-empty">{move || t.t("urlPopup.empty")}</p> })
                }}
                <ul class="url-options">
                    <For
                        each=move || options.get().into_iter().enumerate()
                        key=|(index, link)| (*index, link.url.clone())
                        children=move |(_, link)| {
                            let is_copied = {
                                let url = link.url.clone();
                                move || copied.with(|copied| copied.as_deref() == Some(url.as_str()))
                            };
                            let url = link.url.clone();
                            view! {
                                <li>
                                    <button
                                        class="url-option"
                                        class:copied=is_copied
                                        title=link.url.clone()
                                        on:click=move |_| on_select.run(url.clone())
                                    >
                                        <span class="url-name">{link.name.clone()}</span>
                                        <span class="url-meta">
                                            {link.file_size.clone()}
                                            " · "
                                            {format_date(&link.upload_date)}
                                        </span>
                                        <svg viewBox=LuCopy.view_box inner_html=LuCopy.data></svg>
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
                {move || {
                    copied
                        .with(Option::is_some)
                        .then(|| view! { <p class="copied-message">{move || t.t("urlPopup.copied")}</p> })
                }}
                <button class="button" on:click=move |_| on_close.run(())>
                    {move || t.t("urlPopup.close")}
                </button>
            </div>
        </Modal>
    }
}
