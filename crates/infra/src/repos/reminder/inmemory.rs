use super::IReminderRepo;
use chrono::NaiveDateTime;
use remindr_domain::{NewReminder, Reminder};
use std::sync::Mutex;

/// Append-only in-memory store. The collection only lives for the process
/// lifetime; there is no persistence by design.
pub struct InMemoryReminderRepo {
    reminders: Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryReminderRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, new_reminder: NewReminder) -> anyhow::Result<Reminder> {
        let mut reminders = self.reminders.lock().unwrap();
        // Id assignment happens under the same lock as the append, so two
        // concurrent inserts can never observe the same length.
        let reminder = Reminder {
            id: reminders.len() as i64 + 1,
            task: new_reminder.task,
            target_time: new_reminder.target_time,
            recipient: new_reminder.recipient,
            created_at: new_reminder.created_at,
            sent: false,
        };
        reminders.push(reminder.clone());
        Ok(reminder)
    }

    async fn find_pending(&self) -> Vec<Reminder> {
        let reminders = self.reminders.lock().unwrap();
        reminders.iter().filter(|r| !r.sent).cloned().collect()
    }

    async fn find_due(&self, now: NaiveDateTime) -> Vec<Reminder> {
        let reminders = self.reminders.lock().unwrap();
        reminders
            .iter()
            .filter(|r| !r.sent && r.target_time <= now)
            .cloned()
            .collect()
    }

    async fn mark_sent(&self, reminder_id: i64) -> anyhow::Result<()> {
        let mut reminders = self.reminders.lock().unwrap();
        match reminders.iter_mut().find(|r| r.id == reminder_id) {
            Some(reminder) => {
                reminder.sent = true;
                Ok(())
            }
            None => Err(anyhow::anyhow!("No reminder with id: {}", reminder_id)),
        }
    }
}
