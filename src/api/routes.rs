//! API Routes
//!
//! Configures the Axum router and the CORS/error envelope around it.

use std::any::Any;

use axum::{
    extract::Request,
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::error;

use super::handlers::{action_handler, health_handler, stats_handler, AppState};
use crate::error::ProxyError;

/// Request headers browsers may send cross-origin.
pub const ALLOWED_HEADERS: [&str; 4] = ["authorization", "x-client-info", "apikey", "content-type"];

/// `ALLOWED_HEADERS` as a single header value.
const ALLOWED_HEADERS_VALUE: &str = "authorization, x-client-info, apikey, content-type";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /?action=search|details|featured|tags` - Proxied recipe actions
/// - `GET /health` - Health check endpoint
/// - `GET /stats` - Cache statistics
/// - `OPTIONS *` - Empty 200 preflight answer
///
/// # Middleware
/// - CORS: any origin, fixed header allow-list, on every response
/// - Panics: rendered as a 500 error envelope
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(action_handler))
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler))
        .with_state(state);

    with_envelope(routes)
}

/// Wraps `routes` in the preflight short-circuit, panic recovery, CORS
/// headers and request tracing.
fn with_envelope(routes: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(ALLOWED_HEADERS.map(HeaderName::from_static));

    routes
        .layer(middleware::from_fn(preflight))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS_VALUE),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Short-circuits `OPTIONS` before any route logic runs, so no preflight
/// ever reaches the credential check or action dispatch.
async fn preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(request).await
}

/// Renders a handler panic as a 500 carrying the panic message.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied());

    let message = match detail {
        Some(detail) => {
            error!("Handler panicked: {}", detail);
            detail.to_string()
        }
        None => {
            error!("Handler panicked with a non-string payload");
            "Internal server error".to_string()
        }
    };

    ProxyError::Internal(message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn create_test_app(api_key: Option<&str>) -> Router {
        let config = Config {
            api_key: api_key.map(str::to_string),
            upstream_base_url: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        };
        create_router(AppState::from_config(&config).unwrap())
    }

    fn assert_cors(response: &Response) {
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            ALLOWED_HEADERS_VALUE
        );
    }

    #[tokio::test]
    async fn test_bare_options_returns_ok() {
        let app = create_test_app(None);

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/?action=search")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_browser_preflight_returns_ok() {
        let app = create_test_app(None);

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/?action=details&id=1")
                    .header("origin", "https://recipes.example")
                    .header("access-control-request-method", "GET")
                    .header("access-control-request-headers", "authorization")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
    }

    #[tokio::test]
    async fn test_error_responses_carry_cors() {
        let app = create_test_app(Some("test-key"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/?action=bogus")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_cors(&response);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app(None);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
    }

    #[test]
    fn test_allowed_headers_value_matches_list() {
        assert_eq!(ALLOWED_HEADERS.join(", "), ALLOWED_HEADERS_VALUE);
    }

    async fn panicking_handler() -> &'static str {
        panic!("upstream payload had no sections")
    }

    #[tokio::test]
    async fn test_panic_rendered_as_error_envelope() {
        let app = with_envelope(Router::new().route("/", get(panicking_handler)));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_cors(&response);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "upstream payload had no sections" })
        );
    }

    #[tokio::test]
    async fn test_panic_with_opaque_payload() {
        let response = handle_panic(Box::new(42_u32));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Internal server error");
    }
}
