use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::WebError;

/// Rejects requests without a known `Authorization: Bearer <key>` header
pub async fn require_auth(
    State(api_keys): State<ApiKeys>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    match token {
        Some(key) if api_keys.is_valid(key) => Ok(next.run(req).await),
        Some(_) => {
            tracing::warn!("Invalid API key attempt");
            Err(WebError::Unauthorized)
        }
        None => Err(WebError::Unauthorized),
    }
}

#[derive(Clone)]
pub struct ApiKeys {
    keys: Arc<HashSet<String>>,
}

impl ApiKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self {
            keys: Arc::new(keys),
        }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http, http::StatusCode, middleware, routing::post};
    use tower::ServiceExt;

    fn app(keys: &str) -> Router {
        Router::new()
            .route("/", post(|| async { "ok" }))
            .route_layer(middleware::from_fn_with_state(
                ApiKeys::from_comma_separated(keys),
                require_auth,
            ))
    }

    fn request(authorization: Option<&str>) -> Request {
        let mut builder = http::Request::builder().method("POST").uri("/");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_keys_are_trimmed_and_blank_ones_dropped() {
        let keys = ApiKeys::from_comma_separated(" alpha , ,beta,");
        assert!(keys.is_valid("alpha"));
        assert!(keys.is_valid("beta"));
        assert!(!keys.is_valid(""));
        assert!(!ApiKeys::from_comma_separated("").is_valid(""));
        assert!(ApiKeys::from_comma_separated(" , ").is_empty());
    }

    #[tokio::test]
    async fn test_valid_key_passes() {
        let response = app("alpha,beta")
            .oneshot(request(Some("Bearer beta")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_or_wrong_key_is_rejected() {
        let response = app("alpha").oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app("alpha")
            .oneshot(request(Some("Bearer gamma")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app("alpha").oneshot(request(Some("alpha"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
