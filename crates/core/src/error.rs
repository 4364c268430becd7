use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Unified error type for request handling.
///
/// The only fallible step in the request path is JSON encoding of the
/// response body; IP resolution always degrades to a fallback string.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The raw error text is the body, in the service's plain-text style.
        (
            self.status_code(),
            [("content-type", "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_map_to_500_with_the_error_text() {
        let err = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let text = err.to_string();
        let app_err = AppError::from(err);
        assert_eq!(app_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(app_err.to_string(), text);
    }
}
