/// Server setup and initialization
///
/// Wires together all components: database pool, storage, GraphQL schema,
/// query cache, and HTTP routes. Provides the main application factory
/// function for creating the Axum app.

use crate::{
    clinic::ClinicStorage,
    config::Config,
    graphql::{build_schema, cache::QueryCache},
};
use anyhow::Result;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tokio::net::TcpListener;

/// Create the main Axum application with all routes
///
/// Initializes the database pool, storage, and GraphQL schema and wires
/// them together into a complete application.
pub async fn create_app(config: Config) -> Result<Router> {
    // Ensure the data directory exists
    tracing::info!("📁 Ensuring data directory exists: {}", config.database.data_dir);
    std::fs::create_dir_all(&config.database.data_dir)
        .map_err(|e| anyhow::anyhow!("Failed to create data directory: {}", e))?;

    // Open the clinic database with auto-create; foreign keys must be on
    // for appointment cascade deletes
    let db_path = config.database.db_path();
    tracing::info!("🗄️ Opening clinic database: {}", db_path);
    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(options).await?;

    // Initialize storage and schema
    tracing::info!("📋 Initializing clinic storage");
    let storage = ClinicStorage::new(pool);
    storage.init_schema().await?;

    // Build the GraphQL schema with storage and the list-query cache
    tracing::info!("🧬 Building GraphQL schema");
    let query_cache = QueryCache::new();
    let schema = build_schema(storage, query_cache);

    // Create the main application router
    tracing::info!("📡 Creating HTTP router");
    let app = Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        // GraphQL endpoint: GraphiQL on GET, queries/mutations on POST
        .route("/graphql", get(graphiql).post_service(GraphQL::new(schema)));

    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Start the HTTP server with the given configuration
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting Clinica server...");

    // Create the application
    let app = create_app(config.clone()).await?;

    // Bind to the configured address
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}/graphql", bind_addr);

    // Start the server
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// GraphiQL playground, served on GET /graphql
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
