use crate::error::RemindrError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindr_api_structs::create_reminder::*;
use remindr_domain::{parse, NewReminder, ParseError, Reminder};
use remindr_infra::RemindrContext;

pub async fn create_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<RemindrContext>,
) -> Result<HttpResponse, RemindrError> {
    let body = body.0;
    let usecase = CreateReminderUseCase {
        message: body.message,
        recipient: body.recipient,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(RemindrError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub message: String,
    pub recipient: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    Parse(ParseError),
    StorageError,
}

impl From<UseCaseError> for RemindrError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Parse(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &RemindrContext) -> Result<Self::Response, Self::Error> {
        if self.message.trim().is_empty() || self.recipient.trim().is_empty() {
            return Err(UseCaseError::Parse(ParseError::EmptyInput));
        }

        let now = ctx.sys.now();
        let parsed = parse(&self.message, now).map_err(UseCaseError::Parse)?;

        let new_reminder = NewReminder {
            task: parsed.task,
            target_time: parsed.target_time,
            recipient: self.recipient.trim().to_string(),
            created_at: now,
        };
        ctx.repos
            .reminders
            .insert(new_reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
