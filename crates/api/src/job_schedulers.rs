use crate::reminder::send_due_reminders::SendDueRemindersUseCase;
use crate::shared::usecase::execute;
use actix_web::rt::time::interval;
use remindr_infra::RemindrContext;
use std::time::Duration;
use tokio::sync::watch;

/// Handle to a running background job. The job runs for the lifetime of
/// the process unless `stop` is signalled.
pub struct JobHandle {
    stop_tx: watch::Sender<bool>,
}

impl JobHandle {
    /// Makes the job loop exit after the cycle currently in progress.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }
}

/// Spawns the scheduler loop: every `reminder_check_interval_secs` it scans
/// for due reminders and dispatches them. A failed cycle is logged by the
/// use case executor and the loop simply waits for the next tick.
pub fn start_send_reminders_job(ctx: RemindrContext) -> JobHandle {
    let (stop_tx, mut stop_rx) = watch::channel(false);

    actix_web::rt::spawn(async move {
        let mut check_interval =
            interval(Duration::from_secs(ctx.config.reminder_check_interval_secs));
        loop {
            tokio::select! {
                _ = check_interval.tick() => {
                    let usecase = SendDueRemindersUseCase;
                    let _ = execute(usecase, &ctx).await;
                }
                _ = stop_rx.changed() => break,
            }
        }
    });

    JobHandle { stop_tx }
}
