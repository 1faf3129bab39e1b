use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::info;

use gestao_escolar::api::{
    gerenciamento_router, metrics_router, reservas_router, tarefas_router,
};
use gestao_escolar::app::{GerenciamentoState, ReservasState, TarefasState};
use gestao_escolar::infra::{
    HttpReferenceChecker, ServiceConfig, ServiceName, observability,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();
    observability::init_tracing();

    let config = ServiceConfig::from_env().context("invalid service configuration")?;

    let app = match config.service {
        ServiceName::Gerenciamento => gerenciamento_router(GerenciamentoState::new()),
        ServiceName::Tarefas => {
            let checker = Arc::new(
                HttpReferenceChecker::new(&config.peer)
                    .context("failed to build roster client")?,
            );
            tarefas_router(TarefasState::new(checker))
        }
        ServiceName::Reservas => {
            let checker = Arc::new(
                HttpReferenceChecker::new(&config.peer)
                    .context("failed to build roster client")?,
            );
            reservas_router(ReservasState::new(checker))
        }
    };

    // The recorder can only be installed once per process; skip the
    // /metrics route when something else already claimed it.
    let app = match observability::init_metrics_handle() {
        Some(handle) => app.merge(metrics_router(handle)),
        None => app,
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(
        service = config.service.as_str(),
        addr = %config.bind_addr,
        "server starting"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to install ctrl-c handler");
    }
}
