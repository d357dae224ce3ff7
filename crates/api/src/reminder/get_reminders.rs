use crate::error::RemindrError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindr_api_structs::get_reminders::*;
use remindr_domain::Reminder;
use remindr_infra::RemindrContext;

pub async fn get_reminders_controller(
    ctx: web::Data<RemindrContext>,
) -> Result<HttpResponse, RemindrError> {
    let usecase = GetRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(RemindrError::from)
}

#[derive(Debug)]
pub struct GetRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for RemindrError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &RemindrContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.reminders.find_pending().await)
    }
}
