//! Community-Center Content Service
//!
//! REST backend serving fallback-safe website content from a SQLite-backed
//! document store, with an authenticated admin surface for seeding, clearing,
//! and overwriting content documents.

mod api;
mod auth;
mod config;
mod content;
mod defaults;
mod errors;
mod models;
mod seed;
mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use content::ContentResolver;
use models::CategoryId;
use seed::Seeder;
use store::{DocumentStore, SqliteStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub resolver: Arc<ContentResolver>,
    pub seeder: Arc<Seeder>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting community-center content service");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if PSK is not configured
    if config.admin_psk.is_none() {
        tracing::warn!("No admin PSK configured (CMS_API_PSK). Admin surface is open!");
    }

    // Initialize the document store
    let pool = store::init_database(&config.db_path).await?;
    let store: Arc<dyn DocumentStore> = Arc::new(SqliteStore::new(pool));

    let resolver = Arc::new(ContentResolver::new(store.clone()));
    let seeder = Arc::new(Seeder::new(store.clone()));

    // Optionally seed an empty store at startup
    if config.seed_on_start && !resolver.exists_any(&CategoryId::ALL).await {
        tracing::info!("Store is empty, seeding default content");
        seeder
            .seed_all(|completed, total, label| {
                tracing::info!(completed, total, label, "seed progress");
            })
            .await?;
    }

    // Create application state
    let state = AppState {
        store,
        resolver,
        seeder,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.admin_psk.clone();

    // Public content routes, no auth
    let content_routes = Router::new()
        .route("/programs/flattened", get(api::get_programs_flattened))
        .route("/about/sections", get(api::get_about_sections))
        .route("/community/view", get(api::get_community_view))
        .route("/{category}", get(api::get_content));

    // Admin routes behind the PSK layer
    let admin_routes = Router::new()
        .route("/status", get(api::admin_status))
        .route("/seed", post(api::seed_all))
        .route("/seed/{category}", post(api::seed_category))
        .route("/content/{category}", put(api::put_content))
        .route("/content/{category}", delete(api::clear_category))
        .route("/content", delete(api::clear_all))
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api/content", content_routes)
        .nest("/api/admin", admin_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
