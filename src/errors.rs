use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failure of one backend lookup.
///
/// Every variant surfaces to the user as the same generic alert; the
/// variants only differ in what gets logged.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("lookup returned HTTP {status}")]
    Status { status: u16 },

    #[error("lookup transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("lookup response is not a candidate list: {0}")]
    Decode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            name,
            reason: reason.into(),
        }
    }
}

/// Error returned by the page handlers.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        Self::bad_request(format!("invalid scan form: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}
