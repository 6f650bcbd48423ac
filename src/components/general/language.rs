use crate::model::{translate, Language};
use gloo::storage::{errors::StorageError, LocalStorage, Storage};
use icondata::LuGlobe;
use leptos::{logging::log, prelude::*};

const LANGUAGE_KEY: &str = "language";

/// Reactive `t(key)` lookup, shared through context by every component of the page.
#[derive(Clone, Copy, Debug)]
pub struct Translator {
    language: RwSignal<Language>,
}

impl Translator {
    /// Translated label for `key` in the current language, tracked.
    pub fn t(&self, key: &str) -> String {
        let language = self.language.get();
        translate(language, key).to_string()
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&self, language: Language) {
        if let Err(err) = LocalStorage::set(LANGUAGE_KEY, language.code()) {
            log!("Error saving language to local storage: {}", err);
        }
        self.language.set(language);
    }
}

/// Creates the translator and restores the stored language once running in the browser.
pub fn provide_translator() -> Translator {
    let translator = Translator {
        language: RwSignal::new(Language::default()),
    };

    Effect::new(move |_| {
        let code: Result<String, StorageError> = LocalStorage::get(LANGUAGE_KEY);
        match code {
            Ok(code) => match Language::from_code(&code) {
                Some(language) => translator.language.set(language),
                None => log!("Ignoring unknown stored language: {}", code),
            },
            Err(StorageError::KeyNotFound(_)) => {}
            Err(e) => log!("Error getting language from local storage: {}", e),
        }
    });

    provide_context(translator);
    translator
}

pub fn use_translator() -> Translator {
    expect_context::<Translator>()
}

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let translator = use_translator();

    view! {
        <div class="language-switcher">
            <svg class="icon" viewBox=LuGlobe.view_box inner_html=LuGlobe.data></svg>
            {Language::ALL
                .into_iter()
                .map(|language| {
                    view! {
                        <button
                            class="language-option"
                            class:active=move || translator.language() == language
                            on:click=move |_| translator.set_language(language)
                        >
                            {language.native_name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
