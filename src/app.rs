use crate::components::{provide_translator, StructuredData, APP_DESCRIPTION, APP_NAME};
use crate::model::Config;
use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::custom_attribute;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    *,
};

use crate::pages;

pub fn shell(options: LeptosOptions, config: Config) -> impl IntoView {
    let site_url = config.site_url;
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />

                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="stylesheet" href="/pkg/game_search.css" />
                <link rel="canonical" href=site_url.clone() />

                <meta name="description" content=APP_DESCRIPTION />
                <meta {..custom_attribute("property", "og:title")} content=APP_NAME />
                <meta {..custom_attribute("property", "og:description")} content=APP_DESCRIPTION />
                <meta {..custom_attribute("property", "og:url")} content=site_url.clone() />
                <StructuredData site_url=site_url.clone() />

                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let t = provide_translator();

    view! {
        <Title text=move || t.t("title") />
        <Router>
            <main>
                <Routes fallback=|| view! { <pages::NotFound /> }>
                    <Route path=path!("/") view=pages::HomePage />
                    <Route path=path!("/search") view=pages::HomePage />
                </Routes>
            </main>
        </Router>
    }
}
