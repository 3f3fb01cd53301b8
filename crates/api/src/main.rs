//! Vocabulary reminder API server binary entrypoint.

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use vocab_common::config::AppConfig;
use vocab_common::db::connect;
use vocab_engine::reminder::ReminderService;
use vocab_engine::store::MongoWordStore;
use vocab_notifier::channel_from_config;

use vocab_api::routes::create_router;
use vocab_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(
                "vocab_api=debug,vocab_engine=debug,vocab_notifier=debug,tower_http=debug",
            )
        }))
        .init();

    tracing::info!("Starting vocabulary reminder server...");

    // Load configuration
    let config = AppConfig::from_env()?;

    // Connect to MongoDB
    let database = connect(&config.database_uri, &config.database_name).await?;
    let store = MongoWordStore::new(&database, &config.collection_name);

    // Build delivery channel
    let notifier = channel_from_config(&config)?;

    let reminders = ReminderService::new(Arc::new(store))
        .with_reminder_word_count(config.reminder_word_count)
        .with_word_list_size(config.word_list_size);

    // Build application state
    let state = AppState::new(reminders, notifier, config.channel);

    // Build router
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
