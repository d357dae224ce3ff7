mod base;
mod reminder;
mod status;

pub use base::{APIError, APIResponse};
use base::BaseClient;
use reminder::ReminderClient;
pub use reminder::CreateReminderInput;
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use remindr_api_structs::dtos::ReminderDTO as Reminder;

/// Remindr Server SDK
///
/// The SDK contains methods for interacting with the Remindr server API.
#[derive(Clone)]
pub struct RemindrSDK {
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl RemindrSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { reminder, status }
    }
}
