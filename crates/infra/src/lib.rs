mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{IReminderRepo, Repos};
pub use services::{INotifier, WebhookNotifier};
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct RemindrContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
}

impl RemindrContext {
    fn create(config: Config) -> Self {
        let notifier = Arc::new(WebhookNotifier::new(&config));
        Self {
            repos: Repos::create_inmemory(),
            config,
            sys: Arc::new(RealSys {}),
            notifier,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> RemindrContext {
    RemindrContext::create(Config::new())
}
