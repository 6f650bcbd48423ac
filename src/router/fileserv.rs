use axum::{
    body::Body,
    extract::State,
    response::IntoResponse,
    http::{Request, Response, StatusCode, Uri},
};
use axum::response::Response as AxumResponse;
use leptos::prelude::provide_context;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use crate::model::AppState;
use crate::app::shell;

pub async fn file_and_error_handler(uri: Uri, State(state): State<AppState>, req: Request<Body>) -> AxumResponse {
    let root = state.leptos_options.site_root.clone();
    match get_static_file(uri.clone(), &root).await {
        Ok(res) if res.status() == StatusCode::OK => res.into_response(),
        Ok(_) => render_app(state, req).await,
        Err((status, message)) => {
            tracing::error!(%uri, "{}", message);
            (status, message).into_response()
        }
    }
}

async fn render_app(state: AppState, req: Request<Body>) -> AxumResponse {
    let handler = leptos_axum::render_app_to_stream_with_context(
        {
            let state = state.clone();
            move || provide_context(state.clone())
        },
        move || shell(state.leptos_options.clone(), state.config.clone()),
    );
    handler(req).await.into_response()
}

async fn get_static_file(
    uri: Uri,
    root: &str,
) -> Result<Response<Body>, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri.clone())
        .body(Body::empty())
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("bad static file request: {}", e)))?;
    // This path is relative to the cargo root
    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {}", err),
        )),
    }
}
