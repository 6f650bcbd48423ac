pub mod fileserv;
pub use fileserv::*;

mod image_proxy;
mod seo;

use crate::app::shell;
use crate::model::AppState;
use axum::{routing::get, Router};
use leptos::prelude::*;
use leptos_axum::{AxumRouteListing, LeptosRoutes};

pub fn new(leptos_routes: Vec<AxumRouteListing>, app_state: AppState) -> Router {
    Router::new()
        .route(crate::model::IMAGE_PROXY_PATH, get(image_proxy::image_proxy))
        .route("/sitemap.xml", get(seo::sitemap))
        .route("/robots.txt", get(seo::robots))
        .leptos_routes_with_context(
            &app_state,
            leptos_routes,
            {
                let state = app_state.clone();
                move || provide_context(state.clone())
            },
            {
                let state = app_state.clone();
                move || shell(state.leptos_options.clone(), state.config.clone())
            },
        )
        .fallback(file_and_error_handler)
        .with_state(app_state)
}
