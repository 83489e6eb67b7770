//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request errors come from the `auth` crate.

use auth::{AuthConfig, GoTrueIdentityProvider, auth_router};
use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use serde::Serialize;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Serialize)]
struct Health {
    name: &'static str,
    version: &'static str,
    status: &'static str,
}

/// GET /health
async fn health() -> Json<Health> {
    Json(Health {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
    })
}

fn cors_layer(frontend_origins: &str) -> CorsLayer {
    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}

fn app(auth_config: &AuthConfig, provider: GoTrueIdentityProvider, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest(&auth_config.route_prefix, auth_router(provider, auth_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Identity provider
    let auth_config = AuthConfig::from_env()?;
    let provider = GoTrueIdentityProvider::new(&auth_config)?;

    tracing::info!(
        provider = %auth_config.provider_url,
        app_keys = auth_config.app_keys.len(),
        timeout_secs = auth_config.provider_timeout.as_secs(),
        "Identity provider configured"
    );

    // CORS configuration
    let frontend_origins =
        env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string());
    let cors = cors_layer(&frontend_origins);

    // Build router
    let app = app(&auth_config, provider, cors);

    // Start server
    let addr: SocketAddr = env::var("ECOROOT_LISTEN_ADDR")
        .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
