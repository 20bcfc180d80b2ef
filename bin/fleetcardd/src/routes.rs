//! Route registration and the CORS layer.
//!
//! Module routes merge at the root so cards keep their embeddable
//! top-level paths. Every response, including errors and the OPTIONS
//! preflight, carries the open CORS headers.

use axum::Router;
use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tracing::info;

use fleetcard_core::now_rfc3339;

/// Build the complete router with all routes.
pub fn build_router(module_routes: Vec<(&str, Router)>) -> Router {
    let mut app = Router::new()
        .route("/", get(index))
        .route("/health", get(health));

    for (name, router) in module_routes {
        info!(module = name, "mounting module routes");
        app = app.merge(router);
    }

    app.fallback(not_found)
        .layer(middleware::from_fn(cors))
}

fn apply_cors(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
}

/// Preflight requests short-circuit to 204; everything else gets the
/// CORS headers appended on the way out.
async fn cors(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        apply_cors(resp.headers_mut());
        return resp;
    }
    let mut resp = next.run(req).await;
    apply_cors(resp.headers_mut());
    resp
}

/// Usage descriptor for callers poking the root URL.
async fn index() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "设备列表和AI总结SVG生成器",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/devices-svg": {
                "method": "GET",
                "description": "生成设备列表SVG",
                "parameters": {
                    "api": "必需 - 设备数据API地址",
                    "theme": "可选 - 主题模式 (light/dark，默认为light)",
                },
                "example": "/devices-svg?api=https://api.example.com/api/devices&theme=dark",
            },
            "/ai-summary-svg": {
                "method": "GET",
                "description": "生成使用总结SVG",
                "parameters": {
                    "api": "必需 - API基础地址",
                    "deviceId": "必需 - 设备ID",
                    "theme": "可选 - 主题模式 (light/dark，默认为light)",
                },
                "example": "/ai-summary-svg?api=https://api.example.com&deviceId=device123&theme=dark",
            },
            "/health": {
                "method": "GET",
                "description": "健康检查",
            },
        },
    }))
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "healthy",
        "timestamp": now_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use tower::ServiceExt;

    async fn send(app: &Router, method: Method, uri: &str) -> Response {
        let req = axum::http::Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.clone().oneshot(req).await.unwrap()
    }

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let app = build_router(vec![]);
        let resp = send(&app, Method::GET, "/health").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let v = body_json(resp).await;
        assert_eq!(v["status"], "healthy");
        assert!(v["timestamp"].as_str().is_some());
        assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn root_describes_both_card_endpoints() {
        let app = build_router(vec![]);
        let resp = send(&app, Method::GET, "/").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let v = body_json(resp).await;
        assert!(v["endpoints"]["/devices-svg"].is_object());
        assert!(v["endpoints"]["/ai-summary-svg"].is_object());
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let app = build_router(vec![]);
        let resp = send(&app, Method::GET, "/nope").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Not Found");
    }

    #[tokio::test]
    async fn cors_headers_on_every_response() {
        let app = build_router(vec![]);

        let resp = send(&app, Method::GET, "/health").await;
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");

        let resp = send(&app, Method::GET, "/nope").await;
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn options_preflight_short_circuits() {
        let app = build_router(vec![]);
        let resp = send(&app, Method::OPTIONS, "/devices-svg").await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(resp.headers()["access-control-allow-methods"], "GET, OPTIONS");
        assert_eq!(resp.headers()["access-control-allow-headers"], "Content-Type");
    }
}
