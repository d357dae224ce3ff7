mod inmemory;

use chrono::NaiveDateTime;
pub use inmemory::InMemoryReminderRepo;
use remindr_domain::{NewReminder, Reminder};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Assigns the next id and appends the reminder. Callers racing on
    /// insert are serialized, so ids are strictly increasing.
    async fn insert(&self, new_reminder: NewReminder) -> anyhow::Result<Reminder>;
    /// Snapshot of all unsent reminders in insertion order.
    async fn find_pending(&self) -> Vec<Reminder>;
    /// Snapshot of all unsent reminders with `target_time` at or before
    /// `now`, in insertion order.
    async fn find_due(&self, now: NaiveDateTime) -> Vec<Reminder>;
    /// Flips `sent` to true. One-way, idempotent.
    async fn mark_sent(&self, reminder_id: i64) -> anyhow::Result<()>;
}
