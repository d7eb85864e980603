use crate::error::{ReminderError, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BOT_TOKEN: &str = "YOUR_BOT_TOKEN_HERE";
pub const DEFAULT_RELAY_URL: &str = "https://wasenderapi.com/api/send-message";
pub const DEFAULT_RELAY_API_KEY: &str = "YOUR_WASENDER_API_KEY";
pub const DEFAULT_PAYMENT_LINK: &str = "https://veritasfin.in/paynow/";
pub const DEFAULT_SAVE_PATH: &str = "loan_data.xlsx";
pub const DEFAULT_PACING_MS: u64 = 1000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime settings, built once at startup and passed down by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Token for the chat bot that accepts ledger uploads.
    pub bot_token: String,
    pub relay_url: String,
    pub relay_api_key: String,
    pub payment_link_base: String,
    /// Where the uploaded ledger is stored; the CLI's default input.
    pub save_path: PathBuf,
    /// Pause after each eligible row.
    pub pacing: Duration,
    /// Upper bound for a single relay request.
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let number = |key: &str, default: u64| -> Result<u64> {
            match lookup(key) {
                Some(value) => value.trim().parse().map_err(|_| {
                    ReminderError::ConfigError(format!("{key} must be a whole number, got {value:?}"))
                }),
                None => Ok(default),
            }
        };

        Ok(Self {
            bot_token: string("TELEGRAM_BOT_TOKEN", DEFAULT_BOT_TOKEN),
            relay_url: string("WASENDER_API_URL", DEFAULT_RELAY_URL),
            relay_api_key: string("WASENDER_API_KEY", DEFAULT_RELAY_API_KEY),
            payment_link_base: string("PAYMENT_LINK", DEFAULT_PAYMENT_LINK),
            save_path: PathBuf::from(string("SAVE_PATH", DEFAULT_SAVE_PATH)),
            pacing: Duration::from_millis(number("DISPATCH_PACING_MS", DEFAULT_PACING_MS)?),
            request_timeout: Duration::from_secs(number("RELAY_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_token: DEFAULT_BOT_TOKEN.to_string(),
            relay_url: DEFAULT_RELAY_URL.to_string(),
            relay_api_key: DEFAULT_RELAY_API_KEY.to_string(),
            payment_link_base: DEFAULT_PAYMENT_LINK.to_string(),
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            pacing: Duration::from_millis(DEFAULT_PACING_MS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
