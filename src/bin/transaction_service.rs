//! Transaction service entry point.

use sample_services::{
    config::TransactionConfig,
    routes, server,
    services::transaction_log::TransactionLog,
    state::TransactionState,
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = TransactionConfig::from_env()?;
    tracing::info!(
        token_policy = ?config.token_policy,
        "TransactionService configuration loaded, secrets are not displayed"
    );

    // The record token is derived once here, the raw secret is not kept
    let log = TransactionLog::new(&config.secret_token, config.token_policy);

    let app = routes::transaction_router(TransactionState::new(log));
    server::serve(app, config.server_port).await?;

    Ok(())
}
