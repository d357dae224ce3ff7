use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// How often the background scheduler scans for due reminders
    pub reminder_check_interval_secs: u64,
    /// Where due reminders are delivered. When unset, delivery degrades to
    /// a log line and reminders are still marked sent.
    pub webhook_url: Option<String>,
    /// Optional shared secret sent in the `remindr-webhook-key` header so
    /// the receiver can authenticate deliveries
    pub webhook_key: Option<String>,
}

const DEFAULT_PORT: &str = "5000";
const DEFAULT_CHECK_INTERVAL_SECS: &str = "30";

impl Config {
    pub fn new() -> Self {
        let port = std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, DEFAULT_PORT
                );
                DEFAULT_PORT.parse::<usize>().unwrap()
            }
        };

        let interval = std::env::var("REMINDER_CHECK_INTERVAL_SECS")
            .unwrap_or_else(|_| DEFAULT_CHECK_INTERVAL_SECS.into());
        let reminder_check_interval_secs = match interval.parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                warn!(
                    "The given REMINDER_CHECK_INTERVAL_SECS: {} is not valid, falling back to the default: {}.",
                    interval, DEFAULT_CHECK_INTERVAL_SECS
                );
                DEFAULT_CHECK_INTERVAL_SECS.parse::<u64>().unwrap()
            }
        };

        Self {
            port,
            reminder_check_interval_secs,
            webhook_url: std::env::var("REMINDER_WEBHOOK_URL").ok(),
            webhook_key: std::env::var("REMINDER_WEBHOOK_KEY").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
