use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use crate::clients::UpstreamError;
use crate::constants::ERROR_BODY;
use crate::services::LocationError;

/// Every variant renders the same 500 response. The detail only goes to
/// the log, once, when the response is built.
#[derive(Debug)]
pub enum ApiError {
    Location(LocationError),

    Upstream(UpstreamError),

    InvalidQuery(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Location(err) => write!(f, "Location error: {}", err),
            ApiError::Upstream(err) => write!(f, "Upstream error: {}", err),
            ApiError::InvalidQuery(msg) => write!(f, "Invalid query: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Location(LocationError::Store(msg)) => {
                tracing::error!("Location store error: {}", msg);
            }
            ApiError::Location(LocationError::Upstream(err)) | ApiError::Upstream(err) => {
                tracing::error!(service = err.service(), "{} API error: {}", err.service(), err);
            }
            ApiError::InvalidQuery(msg) => tracing::error!("Invalid query: {}", msg),
            ApiError::InternalError(msg) => tracing::error!("Internal error: {}", msg),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, ERROR_BODY).into_response()
    }
}

impl From<LocationError> for ApiError {
    fn from(err: LocationError) -> Self {
        ApiError::Location(err)
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        ApiError::Upstream(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl ApiError {
    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::InternalError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_every_error_is_a_plain_500() {
        let errors = [
            ApiError::Location(LocationError::Store("database is locked".to_string())),
            ApiError::Upstream(UpstreamError::NoResults { service: "Geocoding" }),
            ApiError::InvalidQuery("missing field `data`".to_string()),
            ApiError::internal("boom"),
        ];

        for err in errors {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let body = response.into_body().collect().await.unwrap().to_bytes();
            assert_eq!(&body[..], ERROR_BODY.as_bytes());
        }
    }
}
