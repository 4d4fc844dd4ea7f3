use lambda_http::{http::StatusCode, Body, Error, Response};

use crate::response::json_response;

/// Failures a handler turns into a structured JSON response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("DynamoDB {operation} error: {message}")]
    Store {
        operation: &'static str,
        message: String,
    },
    #[error("S3 presign error: {0}")]
    Presign(String),
}

impl ApiError {
    pub fn store(operation: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Store {
            operation,
            message: err.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store { .. } | Self::Presign(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// `{"error": "<message>"}` with the status for this variant.
    pub fn into_response(self) -> Result<Response<Body>, Error> {
        json_response(
            self.status(),
            &serde_json::json!({ "error": self.to_string() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_client_and_gateway_statuses() {
        assert_eq!(ApiError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::store("get_item", "timeout").status(), StatusCode::BAD_GATEWAY);
        assert_eq!(ApiError::Presign("x".into()).status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn error_body_carries_the_message() {
        let resp = ApiError::store("put_item", "throttled").into_response().unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": "DynamoDB put_item error: throttled" })
        );
    }
}
