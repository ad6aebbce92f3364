//! API error type and the request-boundary extractors that produce it.
//!
//! Malformed input is rejected by [`AppJson`], [`AppQuery`] and [`AppPath`]
//! before a handler runs and is reported as 422 with per-location detail.
//! Handlers only ever raise [`ApiError::NotFound`] or internal failures.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::data::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request validation failed")]
    Validation(Vec<ValidationIssue>),

    #[error("{0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn validation(location: &str, kind: &'static str, msg: String) -> Self {
        Self::Validation(vec![ValidationIssue {
            loc: vec![location.to_string()],
            msg,
            kind,
        }])
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<T: Serialize> {
    detail: T,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(issues) => {
                tracing::debug!(?issues, "rejected request");
                (status, Json(ErrorBody { detail: issues })).into_response()
            }
            Self::NotFound(message) => (status, Json(ErrorBody { detail: message })).into_response(),
            Self::Internal(cause) => {
                tracing::error!(%cause, "request failed");
                (
                    status,
                    Json(ErrorBody {
                        detail: "Internal Server Error",
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DogNotFound { .. } => Self::NotFound(err.to_string()),
            StoreError::Poisoned { .. } => Self::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "value_error",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body_invalid",
        };
        Self::validation("body", kind, rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation("query", "value_error", rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => {
                Self::validation("path", "value_error", err.body_text())
            }
            other => Self::Internal(other.body_text()),
        }
    }
}

/// JSON body extractor whose rejection is an [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct AppQuery<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_status_codes() {
        let not_found = ApiError::from(StoreError::DogNotFound { pk: 3 });
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "Dog not found");

        let poisoned = ApiError::from(StoreError::Poisoned { store: "dog registry" });
        assert_eq!(poisoned.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_issue_serializes_type_field() {
        let issue = ValidationIssue {
            loc: vec!["body".to_string()],
            msg: "bad".to_string(),
            kind: "value_error",
        };
        let value = serde_json::to_value(issue).unwrap();
        assert_eq!(value["type"], "value_error");
        assert_eq!(value["loc"][0], "body");
    }
}
