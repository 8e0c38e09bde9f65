use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::HubError;

/// Error body for catalog endpoints: `{"error": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<HubError> for ApiError {
    fn from(err: HubError) -> Self {
        match err {
            HubError::BadRequest(msg) => Self::BadRequest(msg),
            HubError::SkillNotFound { name, .. } => Self::NotFound(name),
            other => Self::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_hub_errors_to_status() {
        assert_eq!(
            ApiError::from(HubError::BadRequest("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(HubError::SkillNotFound {
                name: "x".into(),
                similar: Vec::new(),
            })
            .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(HubError::Serialization("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
