//! Account service entry point.
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration from environment variables
//! 3. Build the balance store (seeded with demo accounts unless disabled)
//! 4. Serve `/balance`, `/credit`, `/debit` and `/health`

use sample_services::{
    config::AccountConfig,
    routes, server,
    services::account_store::AccountStore,
    state::AccountState,
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    // Load configuration
    let config = AccountConfig::from_env()?;
    tracing::info!("AccountService configuration loaded, secrets are not displayed");

    // Build the balance store
    let store = if config.seed_demo_accounts {
        AccountStore::seeded(config.account_creation)
    } else {
        AccountStore::new(config.account_creation)
    };
    let accounts = store.len().await;
    tracing::info!(
        accounts,
        creation = ?config.account_creation,
        "Account store ready"
    );

    // Share the store with all handlers via State extraction
    let app = routes::account_router(AccountState::new(store));
    server::serve(app, config.server_port).await?;

    Ok(())
}
