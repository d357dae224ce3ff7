mod create_reminder;
mod get_reminders;
pub mod send_due_reminders;

use actix_web::web;
use create_reminder::create_reminder_controller;
use get_reminders::get_reminders_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminder", web::post().to(create_reminder_controller));
    cfg.route("/reminders", web::get().to(get_reminders_controller));
}
