//! Backend API Server
//!
//! Serves the `items` table over HTTP and signals cache invalidation to Redis.
//! PostgreSQL connections are opened per request; Redis is optional and a
//! missing server only disables the cache endpoints.

mod config;
mod error;
mod handlers;
mod services;
mod storage;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::services::ItemCatalog;
use crate::storage::{CacheSignal, PgItemStore, RedisCache};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ItemCatalog>,
    pub cache: Arc<dyn CacheSignal>,
}

#[tokio::main]
async fn main() {
    // Log panics before the process dies
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Backend API Server v{}", env!("CARGO_PKG_VERSION"));
    info!("PID: {}", std::process::id());

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Config loaded: {:?}", config);

    let store = Arc::new(PgItemStore::new(config.pg_options()));

    info!("Connecting to Redis...");
    let cache: Arc<dyn CacheSignal> = Arc::new(RedisCache::connect(&config.redis_url()).await);
    if !cache.is_enabled() {
        info!("Running without cache; /api/cache/test will answer 503");
    }

    let state = AppState {
        catalog: Arc::new(ItemCatalog::new(store, cache.clone())),
        cache,
    };

    let app = build_router(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api_routes())
        .fallback(handlers::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(handlers::status))
        .route(
            "/items",
            get(handlers::items::list).post(handlers::items::create),
        )
        .route("/cache/test", get(handlers::cache::smoke_test))
}
