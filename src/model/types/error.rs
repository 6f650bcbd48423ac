use http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("Error loading source feed: {0}")]
    SourceFeed(String),
    #[error("Error from steam: {0}")]
    Steam(String),
    #[error("Error proxying image: {0}")]
    ImageProxy(String),
    #[error("Your request is incorrect: {0}")]
    InvalidRequest(String),
    #[error("This action is not allowed: {0}")]
    Forbidden(String),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match *self {
            Error::SourceFeed(_) => StatusCode::BAD_GATEWAY,
            Error::Steam(_) => StatusCode::BAD_GATEWAY,
            Error::ImageProxy(_) => StatusCode::BAD_GATEWAY,
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl From<Error> for String {
    fn from(val: Error) -> Self {
        match val {
            Error::SourceFeed(s) => s,
            Error::Steam(s) => s,
            Error::ImageProxy(s) => s,
            Error::InvalidRequest(s) => s,
            Error::Forbidden(s) => s,
        }
    }
}

#[cfg(feature = "ssr")]
impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let code = self.status_code();
        let message: String = self.into();
        (code, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_to_http_status() {
        assert_eq!(Error::InvalidRequest("no url".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::Forbidden("host".into()).status_code(), StatusCode::FORBIDDEN);
        assert_eq!(Error::ImageProxy("timeout".into()).status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(Error::SourceFeed("FitGirl".into()).status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(Error::Steam("down".into()).status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn converts_to_its_message() {
        let message: String = Error::Forbidden("evil.example is not allowed".into()).into();
        assert_eq!(message, "evil.example is not allowed");
        assert_eq!(
            Error::Steam("down".into()).to_string(),
            "Error from steam: down"
        );
    }
}
