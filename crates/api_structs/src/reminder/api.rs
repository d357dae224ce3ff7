use crate::dtos::ReminderDTO;
use remindr_domain::{Reminder, TIME_FORMAT};
use serde::{Deserialize, Serialize};

pub mod create_reminder {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub message: String,
        pub recipient: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminder: ReminderDTO,
        pub confirmation_message: String,
    }

    impl APIResponse {
        pub fn new(reminder: Reminder) -> Self {
            let confirmation_message = format!(
                "Reminder set for {}: {}",
                reminder.target_time.format(TIME_FORMAT),
                reminder.task
            );
            Self {
                reminder: ReminderDTO::new(reminder),
                confirmation_message,
            }
        }
    }
}

pub mod get_reminders {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>) -> Self {
            Self {
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}
