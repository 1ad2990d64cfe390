use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::cors::CorsConfig;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Body of the 403 sent to browsers whose origin is not allow-listed.
pub const CORS_REJECTED: &str = "Error de CORS";

/// Rejects requests whose `Origin` header is not in the allow-list.
///
/// Requests without an `Origin` header (curl, server-to-server) pass.
/// Install it outside the [`CorsLayer`] so preflights are rejected too.
pub async fn origin_guard(
    State(cors): State<Arc<CorsConfig>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        let allowed = origin.to_str().is_ok_and(|o| cors.is_allowed(o));
        if !allowed {
            tracing::warn!(?origin, "Rejected request from origin outside the allow-list");
            return AppError::Forbidden(CORS_REJECTED.to_string()).into_response();
        }
    }

    next.run(request).await
}

/// CORS headers for allow-listed origins.
///
/// # Errors
/// Returns an error if an origin is not a valid header value.
pub fn create_cors_layer(config: &CorsConfig) -> io::Result<CorsLayer> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid FRONTEND_URL value: {e}"),
            )
        })?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        let cors = CorsConfig::new(["http://localhost:5173"]);
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(create_cors_layer(&cors).unwrap())
            .layer(middleware::from_fn_with_state(Arc::new(cors), origin_guard))
    }

    fn request(origin: Option<&str>) -> Request {
        let mut builder = Request::get("/");
        if let Some(origin) = origin {
            builder = builder.header(header::ORIGIN, origin);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_request_without_origin_passes() {
        let response = app().oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_allowed_origin_gets_cors_headers() {
        let response = app()
            .oneshot(request(Some("http://localhost:5173")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn test_unknown_origin_is_forbidden() {
        let response = app()
            .oneshot(request(Some("https://evil.example.com")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], CORS_REJECTED);
    }

    #[test]
    fn test_create_cors_layer_rejects_invalid_origin() {
        let cors = CorsConfig::new(["http://bad\norigin"]);
        assert!(create_cors_layer(&cors).is_err());
    }
}
