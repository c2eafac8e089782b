//! Request extractors that reject into the API error envelope.

use crate::error::ApiError;
use async_trait::async_trait;
use axum::extract::{rejection::JsonRejection, FromRequest, Request};

/// JSON request body. Malformed JSON, missing or wrong-typed fields, and
/// unknown enum values all reject as `InvalidInput` (400), not axum's
/// default 422.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))?;
        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::NewStudent;
    use axum::http::{header, StatusCode};
    use axum::response::IntoResponse;

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn missing_required_fields_reject_as_400() {
        let err = JsonBody::<NewStudent>::from_request(json_request("{}"), &())
            .await
            .expect_err("empty object must be rejected");
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_role_value_rejects_as_400() {
        let body = r#"{"name":"Ana Souza","email":"ana@example.com",
                       "cpf":"12345678901","phone":"11999990000","role":"COACH"}"#;
        let err = JsonBody::<NewStudent>::from_request(json_request(body), &())
            .await
            .expect_err("unknown role must be rejected");
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_rejects_as_400() {
        let err = JsonBody::<NewStudent>::from_request(json_request("{not json"), &())
            .await
            .expect_err("malformed body must be rejected");
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
