use remindr_api::Application;
use remindr_infra::{setup_context, Config};
use remindr_sdk::RemindrSDK;

pub struct TestApp {
    pub config: Config,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, RemindrSDK, String) {
    let mut ctx = setup_context();
    ctx.config.port = 0; // Random port
    ctx.config.reminder_check_interval_secs = 1;

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config };
    let sdk = RemindrSDK::new(address.clone());
    (app, sdk, address)
}
