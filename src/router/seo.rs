use crate::model::{self, Config};
use axum::{extract::State, http::header, response::IntoResponse};

pub async fn sitemap(State(config): State<Config>) -> impl IntoResponse {
    let today = chrono::Utc::now().date_naive();
    (
        [(header::CONTENT_TYPE, "application/xml")],
        model::sitemap_xml(&config.site_url, today),
    )
}

pub async fn robots(State(config): State<Config>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        model::robots_txt(&config.site_url),
    )
}
