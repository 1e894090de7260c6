use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    routing::get,
    serve, Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use super::{products, users};
use crate::application::product_service::ProductService;
use crate::application::user_service::UserService;
use shop_types::ports::product_repository::ProductRepository;
use shop_types::ports::user_repository::UserRepository;

/// Hardening headers added to every response unless a handler already set them.
/// Mirrors helmet's default set.
const SECURITY_HEADERS: [(&str, &str); 12] = [
    (
        "content-security-policy",
        "default-src 'self';base-uri 'self';font-src 'self' https: data:;\
         form-action 'self';frame-ancestors 'self';img-src 'self' data:;\
         object-src 'none';script-src 'self';script-src-attr 'none';\
         style-src 'self' https: 'unsafe-inline';upgrade-insecure-requests",
    ),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("referrer-policy", "no-referrer"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("x-permitted-cross-domain-policies", "none"),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("origin-agent-cluster", "?1"),
    ("x-xss-protection", "0"),
    (
        "strict-transport-security",
        "max-age=15552000; includeSubDomains",
    ),
];

#[derive(Clone)]
pub struct HttpServerConfig {
    pub port: u16,
}

/// Mounts the user and product routers on one listener.
pub struct HttpServer<U, P>
where
    U: UserRepository,
    P: ProductRepository,
{
    pub users: Arc<UserService<U>>,
    pub products: Arc<ProductService<P>>,
    pub config: HttpServerConfig,
}

impl<U, P> HttpServer<U, P>
where
    U: UserRepository,
    P: ProductRepository,
{
    pub async fn new(
        users: UserService<U>,
        products: ProductService<P>,
        config: HttpServerConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            users: Arc::new(users),
            products: Arc::new(products),
            config,
        })
    }

    pub fn router(&self) -> Router {
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http_request",
                    %request_id,
                    method = %request.method(),
                    uri
                )
            })
            .on_request(
                |request: &axum::extract::Request<_>, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        method = %request.method(),
                        uri = %request.uri(),
                        "request"
                    );
                },
            )
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        status = %response.status(),
                        latency_ms = %latency.as_millis(),
                        "response"
                    );
                },
            );

        let mut app = Router::new()
            .route("/health", get(health))
            .merge(users::router(self.users.clone()))
            .merge(products::router(self.products.clone()));

        for (name, value) in SECURITY_HEADERS {
            app = app.layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            ));
        }

        app.layer(CorsLayer::permissive()).layer(trace_layer)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = self.router();
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server is listening on port {}", self.config.port);
        serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
