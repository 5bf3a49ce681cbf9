//! ObjectId path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use mongodb::bson::oid::ObjectId;

/// Extractor for a 24-hex-digit ObjectId path parameter.
///
/// Anything else is rejected with `400 INVALID_ID` before the handler runs.
///
/// ```ignore
/// async fn get_company(ObjectIdPath(id): ObjectIdPath) -> String {
///     id.to_hex()
/// }
///
/// let app = Router::new().route("/companies/{id}", get(get_company));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectIdPath(pub ObjectId);

impl<S> FromRequestParts<S> for ObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        ObjectId::parse_str(&raw)
            .map(ObjectIdPath)
            .map_err(|_| AppError::InvalidId(raw).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route(
            "/records/{id}",
            get(|ObjectIdPath(id): ObjectIdPath| async move { id.to_hex() }),
        )
    }

    async fn call(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_object_id() {
        let (status, body) = call("/records/665f1c2e9b1d4a3f2c8e7a10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "665f1c2e9b1d4a3f2c8e7a10");
    }

    #[tokio::test]
    async fn test_malformed_ids_are_rejected() {
        for uri in ["/records/abc", "/records/665f1c2e9b1d4a3f2c8e7a1", "/records/zzzzzzzzzzzzzzzzzzzzzzzz"] {
            let (status, body) = call(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            let json: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(json["ok"], false);
            assert_eq!(json["msg"], "Invalid ID");
            assert_eq!(json["error"], "INVALID_ID");
        }
    }
}
