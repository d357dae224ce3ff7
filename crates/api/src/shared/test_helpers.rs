use chrono::{NaiveDate, NaiveDateTime};
use remindr_domain::Reminder;
use remindr_infra::{setup_context, INotifier, ISys, RemindrContext};
use std::sync::{Arc, Mutex};

pub fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

pub struct StaticTimeSys(pub NaiveDateTime);

impl ISys for StaticTimeSys {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Notifier that records every delivery and can be told to report failure.
pub struct RecordingNotifier {
    pub delivered: Mutex<Vec<i64>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            delivered: Mutex::new(Vec::new()),
            fail,
        })
    }

    pub fn delivered_ids(&self) -> Vec<i64> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl INotifier for RecordingNotifier {
    async fn notify(&self, reminder: &Reminder) -> anyhow::Result<()> {
        self.delivered.lock().unwrap().push(reminder.id);
        if self.fail {
            Err(anyhow::anyhow!("delivery failed"))
        } else {
            Ok(())
        }
    }
}

/// Context with a clock pinned to `reference_time`.
pub fn static_time_context() -> RemindrContext {
    let mut ctx = setup_context();
    ctx.sys = Arc::new(StaticTimeSys(reference_time()));
    ctx
}
