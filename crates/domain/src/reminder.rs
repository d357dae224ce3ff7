use chrono::NaiveDateTime;

/// Format used whenever a reminder timestamp crosses a boundary (API
/// responses, webhook payloads, confirmation messages). Minute precision
/// and fixed width, so the rendered strings sort chronologically.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A `Reminder` represents a task that a recipient should be notified
/// about once `target_time` is reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    /// Monotonically increasing integer assigned by the store at creation.
    /// Unique within one process lifetime, never reused.
    pub id: i64,
    /// What the recipient asked to be reminded about. Non-empty and trimmed.
    pub task: String,
    /// When the reminder becomes due, at minute precision. A `target_time`
    /// in the past is accepted and becomes due on the next scheduler cycle.
    pub target_time: NaiveDateTime,
    /// Where the notification should go, e.g. an email address. Opaque to
    /// this system and never validated.
    pub recipient: String,
    /// Set once at creation, immutable afterwards.
    pub created_at: NaiveDateTime,
    /// Starts out `false` and is flipped to `true` exactly once by the
    /// scheduler when the reminder is dispatched. Never reverts.
    pub sent: bool,
}

/// A `Reminder` before the store has assigned it an id.
#[derive(Debug, Clone)]
pub struct NewReminder {
    pub task: String,
    pub target_time: NaiveDateTime,
    pub recipient: String,
    pub created_at: NaiveDateTime,
}
