mod webhook;

pub use webhook::{INotifier, WebhookNotifier};
