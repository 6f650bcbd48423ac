use crate::model::{self, AppState, Error};
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct ImageProxyParams {
    url: Option<String>,
}

pub async fn image_proxy(
    State(state): State<AppState>,
    Query(params): Query<ImageProxyParams>,
) -> Result<Response, Error> {
    let original = params.url.unwrap_or_default();
    let image = model::fetch_image(&state.reqwest_client, &state.config, &original)
        .await
        .inspect_err(|e| tracing::warn!("image proxy: {}", e))?;

    let status = image.status;
    let mut response = (status, image.body).into_response();
    if let Some(content_type) = image
        .content_type
        .and_then(|content_type| HeaderValue::from_str(&content_type).ok())
    {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    if status.is_success() {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=604800, immutable"),
        );
    }
    Ok(response)
}
