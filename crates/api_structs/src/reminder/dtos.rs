use remindr_domain::{Reminder, TIME_FORMAT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: i64,
    pub task: String,
    /// `YYYY-MM-DD HH:MM`
    pub target_time: String,
    pub recipient: String,
    /// `YYYY-MM-DD HH:MM`
    pub created_at: String,
    pub sent: bool,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            task: reminder.task,
            target_time: reminder.target_time.format(TIME_FORMAT).to_string(),
            recipient: reminder.recipient,
            created_at: reminder.created_at.format(TIME_FORMAT).to_string(),
            sent: reminder.sent,
        }
    }
}
