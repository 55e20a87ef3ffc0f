//! Payment service entry point.
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration and validate `ACCOUNT_SERVICE_URL`
//! 3. Build the account service client with its request timeout
//! 4. Serve `/pay` and `/health`

use std::time::Duration;

use sample_services::{
    config::PaymentConfig,
    routes, server,
    services::account_client::AccountClient,
    state::PaymentState,
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    // Load configuration
    let config = PaymentConfig::from_env()?;
    tracing::info!("PaymentService configuration loaded, secrets are not displayed");

    // One client for every call, bounded by the configured timeout
    let base = config.account_service_base()?;
    let timeout = Duration::from_secs(config.account_service_timeout_secs);
    let accounts = AccountClient::new(&base, timeout)?;
    tracing::info!(
        account_service = %accounts.base_url(),
        timeout_secs = config.account_service_timeout_secs,
        mode = ?config.payment_mode,
        "Account service client ready"
    );

    let app = routes::payment_router(PaymentState::new(accounts, config.payment_mode));
    server::serve(app, config.server_port).await?;

    Ok(())
}
