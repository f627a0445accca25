/// Clinica: clinic management backend
///
/// Main entry point for the Clinica server. Initializes configuration and
/// starts the HTTP server with the GraphQL API.

use clinica::{config::Config, server::start_server};

/// Application entry point
///
/// Initializes the server with default configuration and starts listening
/// for requests. The server provides:
/// - GraphQL API at /graphql (GraphiQL playground on GET)
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:3004 and data/clinic.db)
    let config = Config::default();

    // Start the server
    start_server(config).await?;

    Ok(())
}
