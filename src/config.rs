//! Service configuration management.
//!
//! Each service reads its own settings from environment variables. An
//! optional `.env` file is loaded first, then `envy` deserializes the
//! environment into a type-safe struct.

use std::fmt;

use serde::Deserialize;
use url::Url;

/// A configuration value that must never end up in logs.
///
/// `Debug` prints a placeholder instead of the value.
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw secret value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Env(#[from] envy::Error),

    #[error("ACCOUNT_SERVICE_URL is not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("ACCOUNT_SERVICE_URL must use http or https, got {0}")]
    UnsupportedScheme(String),
}

/// How the account service treats a credit on an account it has never seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccountCreation {
    /// Start the account at 0 and apply the credit.
    #[default]
    CreateOnDemand,
    /// Answer 404 like a balance lookup would.
    RejectUnknown,
}

/// How the payment service moves money once a payment is requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMode {
    /// Read the balance, compare, then post a negative credit.
    #[default]
    CheckThenDebit,
    /// Let the account service check and debit under a single lock.
    AtomicDebit,
}

/// What the transaction service attaches to each record from `SECRET_TOKEN`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenPolicy {
    /// SHA-256 fingerprint of the token.
    #[default]
    Fingerprint,
    /// The raw token value.
    Verbatim,
    /// Nothing.
    Omit,
}

/// Account service configuration.
///
/// # Environment Variables
///
/// - `SECRET_KEY`, `DB_USER`, `DB_PASSWORD` (required): loaded but never displayed
/// - `SERVER_PORT` (optional): defaults to 8081
/// - `ACCOUNT_CREATION` (optional): `create-on-demand` (default) or `reject-unknown`
/// - `SEED_DEMO_ACCOUNTS` (optional): seeds accounts "1" and "2", defaults to true
#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
    pub secret_key: Secret,
    pub db_user: Secret,
    pub db_password: Secret,

    #[serde(default = "default_account_port")]
    pub server_port: u16,

    #[serde(default)]
    pub account_creation: AccountCreation,

    #[serde(default = "default_true")]
    pub seed_demo_accounts: bool,
}

/// Payment service configuration.
///
/// # Environment Variables
///
/// - `API_KEY` (required): loaded but never displayed
/// - `ACCOUNT_SERVICE_URL` (required): base URL of the account service
/// - `SERVER_PORT` (optional): defaults to 8082
/// - `ACCOUNT_SERVICE_TIMEOUT_SECS` (optional): per-request timeout, defaults to 5
/// - `PAYMENT_MODE` (optional): `check-then-debit` (default) or `atomic-debit`
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    pub api_key: Secret,
    pub account_service_url: String,

    #[serde(default = "default_payment_port")]
    pub server_port: u16,

    #[serde(default = "default_timeout_secs")]
    pub account_service_timeout_secs: u64,

    #[serde(default)]
    pub payment_mode: PaymentMode,
}

/// Transaction service configuration.
///
/// # Environment Variables
///
/// - `SECRET_TOKEN` (required)
/// - `SERVER_PORT` (optional): defaults to 8083
/// - `TOKEN_POLICY` (optional): `fingerprint` (default), `verbatim` or `omit`
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionConfig {
    pub secret_token: Secret,

    #[serde(default = "default_transaction_port")]
    pub server_port: u16,

    #[serde(default)]
    pub token_policy: TokenPolicy,
}

fn default_account_port() -> u16 {
    8081
}

fn default_payment_port() -> u16 {
    8082
}

fn default_transaction_port() -> u16 {
    8083
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_true() -> bool {
    true
}

impl AccountConfig {
    /// Load configuration from `.env` (if present) and the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names map to upper case: db_password -> DB_PASSWORD
        Ok(envy::from_env::<Self>()?)
    }
}

impl PaymentConfig {
    /// Load configuration from `.env` (if present) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or
    /// `ACCOUNT_SERVICE_URL` is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Self>()?;

        // Reject a malformed ACCOUNT_SERVICE_URL before serving
        config.account_service_base()?;
        Ok(config)
    }

    /// Validated base URL of the account service.
    pub fn account_service_base(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.account_service_url)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }
}

impl TransactionConfig {
    /// Load configuration from `.env` (if present) and the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env::<Self>()?)
    }
}
