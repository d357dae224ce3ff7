use crate::shared::usecase::UseCase;
use remindr_domain::Reminder;
use remindr_infra::RemindrContext;
use tracing::{error, warn};

/// One scheduler cycle: find every unsent reminder whose target time has
/// been reached, hand each one to the notifier and mark it sent.
///
/// Delivery is best-effort: a notifier failure is logged but never blocks
/// the transition to sent, and a fault on one reminder never stops the
/// sweep over the remaining ones.
#[derive(Debug)]
pub struct SendDueRemindersUseCase;

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDueRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "SendDueReminders";

    async fn execute(&mut self, ctx: &RemindrContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let due_reminders = ctx.repos.reminders.find_due(now).await;

        for reminder in &due_reminders {
            if let Err(e) = ctx.notifier.notify(reminder).await {
                warn!(
                    "Failed to deliver reminder {} to {}: {:?}",
                    reminder.id, reminder.recipient, e
                );
            }
            // Sent is flipped regardless of the delivery outcome. There is
            // no retry queue by design.
            if let Err(e) = ctx.repos.reminders.mark_sent(reminder.id).await {
                error!("Failed to mark reminder {} as sent: {:?}", reminder.id, e);
            }
        }

        Ok(due_reminders)
    }
}
