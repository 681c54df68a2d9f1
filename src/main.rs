mod auth;
mod config;
mod dto;
mod error;
mod handlers;
mod models;
mod repository;
mod service;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::{AppState, Config};
use handlers::{ApiDoc, auth as auth_handlers, content, pages};
use repository::{ContentStore, memory::MemoryStore, postgres::PostgresStore};
use service::ContentService;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Fetch env variables
    let config = Arc::new(Config::from_env());

    // Store selection: durable when a database is configured, transient otherwise
    let store: Arc<dyn ContentStore> = match config.database_dsn.as_deref() {
        Some(dsn) => {
            let mut store = PostgresStore::new(dsn).await.unwrap_or_else(|e| {
                tracing::error!("Failed to establish database connection: {e}");
                panic!("failed to establish database connection: {e}");
            });

            store.migrate().await.unwrap_or_else(|e| {
                tracing::error!("Failed to migrate database: {e}");
                panic!("failed to migrate database: {e}");
            });

            tracing::info!("Using the Postgres content store");
            Arc::new(store)
        }
        None => {
            tracing::info!("DATABASE_URL not set, content is kept in memory until restart");
            Arc::new(MemoryStore::new())
        }
    };

    // Service creation
    let service = Arc::new(ContentService::new(store));

    let app = build_router(AppState { service, config });

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();

    // Starting router
    tracing::info!("Started listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("failed to start server");
}

fn build_router(state: AppState) -> Router {
    // The gate covers the admin page only; the login page stays public and
    // the API routes run their own check per request.
    let admin_pages = Router::new()
        .route("/admin", get(pages::admin))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_admin_page,
        ));

    let api = Router::new()
        .route("/auth/login", post(auth_handlers::login))
        .route("/auth/logout", post(auth_handlers::logout))
        .route("/content", get(content::list_content))
        .route("/content", post(content::create_content))
        .route("/content/{id}", put(content::update_content))
        .route("/content/{id}", delete(content::delete_content));

    Router::new()
        .route("/", get(pages::home))
        .route("/admin/login", get(pages::admin_login))
        .merge(admin_pages)
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
