use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::db::StoreError;

#[derive(Debug)]
pub enum ApiError {
    NotFound { resource: &'static str, id: i64 },
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound { resource, id } => json_error(
                StatusCode::NOT_FOUND,
                "not_found",
                format!("{resource} {id} not found"),
            ),
            ApiError::Store(err) => {
                tracing::error!(error = %err, "store operation failed");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", err.to_string())
            }
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let response = ApiError::NotFound {
            resource: "user",
            id: 42,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "user 42 not found");
    }

    #[tokio::test]
    async fn test_store_error_is_internal() {
        let err = StoreError::Io {
            path: "db/mock-data.json".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "store_error");
    }

    #[tokio::test]
    async fn test_exhausted_ids_are_internal() {
        let err = StoreError::IdExhausted { collection: "users" };
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "store_error");
        assert_eq!(body["message"], "no id left to assign in users");
    }

    #[test]
    fn test_encode_error_is_not_reported_as_malformed() {
        let source = serde_json::from_str::<i64>("x").unwrap_err();
        let err = StoreError::Encode {
            path: "db/mock-data.json".into(),
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("failed to encode store document for db/mock-data.json"));
        assert!(!message.contains("malformed"));
    }
}
