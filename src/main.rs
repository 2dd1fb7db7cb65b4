use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use recipe_assistant::{
    config::Config,
    api::routes::create_router,
    providers::openai::OpenAiClient,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration; a missing API credential aborts startup
    let config = Config::load()?;
    let server_addr = config.server_addr;
    tracing::info!("Starting server on {}", server_addr);

    // One client backs both provider capabilities
    let client = Arc::new(OpenAiClient::new(config.openai_api_key.clone()));

    let app_state = AppState {
        config: Arc::new(config),
        completions: client.clone(),
        images: client,
    };

    // Build the router with routes
    let app = create_router(app_state);

    // Create the listener
    let listener = TcpListener::bind(server_addr).await?;

    // Start the server
    tracing::info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
