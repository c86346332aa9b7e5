use lambda_runtime::{Error, service_fn};

use stats_harvest_lambda_rust::config::Settings;
use stats_harvest_lambda_rust::handler::handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let settings = Settings::from_env();

    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .json()
        .with_max_level(settings.log_level)
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();

    lambda_runtime::run(service_fn(handler)).await
}
