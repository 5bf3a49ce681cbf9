//! JSON body extractor that tolerates missing or unreadable bodies.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::input::InputError;

/// JSON object body that falls back to `T::default()` when the body is
/// missing, has the wrong content type, is not valid JSON, or is not an
/// object.
///
/// Payload types keep every field optional, so an unreadable body surfaces
/// later as a "missing required fields" validation error. A readable object
/// with a field of the wrong shape is rejected with a validation error naming
/// that field; it never degrades into an empty payload.
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Json::<Value>::from_request(req, state).await {
            Ok(Json(Value::Object(fields))) => Value::Object(fields),
            Ok(Json(_)) => {
                tracing::debug!("JSON body is not an object, using empty payload");
                return Ok(LenientJson(T::default()));
            }
            Err(rejection) => {
                tracing::debug!(%rejection, "Unreadable JSON body, using empty payload");
                return Ok(LenientJson(T::default()));
            }
        };

        match T::deserialize(&body) {
            Ok(value) => Ok(LenientJson(value)),
            Err(err) => {
                tracing::debug!(error = %err, "JSON body has fields of the wrong shape");
                let fields = invalid_fields::<T>(&body);
                Err(AppError::Validation(
                    InputError::InvalidFields(fields).to_string(),
                ))
            }
        }
    }
}

/// Sorted keys whose value alone fails to deserialize into `T`.
fn invalid_fields<T: DeserializeOwned>(body: &Value) -> Vec<String> {
    let mut invalid: Vec<String> = body
        .as_object()
        .into_iter()
        .flatten()
        .filter(|(key, value)| {
            let single = Value::Object(Map::from_iter([((*key).clone(), (*value).clone())]));
            T::deserialize(&single).is_err()
        })
        .map(|(key, _)| key.clone())
        .collect();
    invalid.sort();
    invalid
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, http::header, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Default, Deserialize)]
    struct Payload {
        name: Option<String>,
        count: Option<u32>,
    }

    async fn echo(LenientJson(payload): LenientJson<Payload>) -> String {
        format!(
            "{}/{}",
            payload.name.unwrap_or_else(|| "<none>".to_string()),
            payload.count.map_or_else(|| "<none>".to_string(), |c| c.to_string())
        )
    }

    async fn send(content_type: Option<&str>, body: &'static str) -> (StatusCode, String) {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let response = Router::new()
            .route("/", post(echo))
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_body_is_parsed() {
        let (status, body) = send(Some("application/json"), r#"{"name":"acme","count":2}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "acme/2");
    }

    #[tokio::test]
    async fn test_unknown_keys_are_ignored() {
        let (_, body) = send(Some("application/json"), r#"{"name":"acme","extra":[1]}"#).await;
        assert_eq!(body, "acme/<none>");
    }

    #[tokio::test]
    async fn test_unreadable_bodies_fall_back_to_default() {
        for (content_type, raw) in [
            (Some("application/json"), "{not json"),
            (Some("application/json"), ""),
            (Some("application/json"), "[1,2]"),
            (None, r#"{"name":"acme"}"#),
        ] {
            let (status, body) = send(content_type, raw).await;
            assert_eq!(status, StatusCode::OK, "{raw}");
            assert_eq!(body, "<none>/<none>", "{raw}");
        }
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_rejected_by_name() {
        let (status, body) =
            send(Some("application/json"), r#"{"name":"acme","count":"many"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert_eq!(json["msg"], "Invalid value for fields: count");
    }

    #[tokio::test]
    async fn test_every_bad_field_is_named() {
        let (status, body) = send(Some("application/json"), r#"{"name":[1],"count":-1}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["msg"], "Invalid value for fields: count, name");
    }
}
