use anyhow::Context;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use todo_events::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use todo_events::modules::todos::adapters::outbound::todo_store_in_memory::InMemoryTodoStore;
use todo_events::shell::config::Config;
use todo_events::shell::graphql::GRAPHQL_PATH;
use todo_events::shell::http::{EVENT_SERVICE_PATH, TODO_SERVICE_PATH, router};
use todo_events::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let addr = config.socket_addr()?;

    let state = AppState::new(
        Arc::new(InMemoryTodoStore::new()),
        Arc::new(InMemoryEventStore::new()),
    );
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Starting server on {addr}");
    info!("TodoService available at http://{addr}{TODO_SERVICE_PATH}");
    info!("EventService available at http://{addr}{EVENT_SERVICE_PATH}");
    info!("GraphQL endpoint: http://{addr}{GRAPHQL_PATH}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
