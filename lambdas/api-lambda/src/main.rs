use std::sync::Arc;

use lambda_http::{run, service_fn, Error};
use photogroups_shared::{AppConfig, AppState};

mod http_handler;
use http_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_http::tracing::init_default_subscriber();

    // Read once per cold start; a bad environment fails the init phase.
    let config = AppConfig::from_env()?;
    tracing::info!(
        "⚙️ Config loaded: groups_table={}, images_table={}, bucket={}, url_expiration={}s",
        config.groups_table,
        config.images_table,
        config.images_bucket,
        config.signed_url_expiration.as_secs(),
    );

    let sdk_config = aws_config::load_from_env().await;
    let state = Arc::new(AppState::from_sdk_config(config, &sdk_config));

    run(service_fn(move |event| function_handler(event, Arc::clone(&state)))).await
}
