use std::collections::HashSet;
use std::env;
use std::time::Duration;

use tracing::warn;

use crate::models::offices::{OfficeTable, default_offices};
use crate::scraping::constants::*;

#[derive(Debug, Clone)]
pub struct MailgunConfig {
    pub api_key: String,
    pub domain: String,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub booking_url: String,
    pub offices: OfficeTable,
    pub suppressed: HashSet<String>,
    pub fetch_timeout: Duration,
    pub send_timeout: Duration,
    pub mailgun: MailgunConfig,
}

impl Config {
    /// Production settings, with the Mailgun credentials taken from the
    /// environment. Missing credentials are not fatal: sends will fail and
    /// be logged.
    pub fn from_env() -> Self {
        let mailgun = MailgunConfig {
            api_key: env_or_warn("MAILGUN_API_KEY"),
            domain: env_or_warn("MAILGUN_DOMAIN"),
            api_base: env::var("MAILGUN_API_BASE")
                .ok()
                .filter(|base| !base.is_empty())
                .unwrap_or_else(|| MAILGUN_API_BASE.to_string()),
        };

        Config {
            booking_url: BASE_URL.to_string(),
            offices: default_offices(),
            suppressed: SUPPRESSED_OFFICES.iter().map(|name| name.to_string()).collect(),
            fetch_timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            send_timeout: Duration::from_secs(SEND_TIMEOUT_SECS),
            mailgun,
        }
    }

    pub fn is_suppressed(&self, location: &str) -> bool {
        self.suppressed.contains(location)
    }
}

fn env_or_warn(key: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            warn!("{} is not set, notifications will fail", key);
            String::new()
        }
    }
}
