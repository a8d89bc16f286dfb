use std::env;
use std::sync::Arc;

use aws_lambda_events::event::sns::SnsEvent;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing_subscriber::EnvFilter;

use sns_to_slack_lambda::config::HookUrl;
use sns_to_slack_lambda::dispatch::Dispatcher;
use sns_to_slack_lambda::handler::function_handler;

// Level from AWS_LAMBDA_LOG_LEVEL, then RUST_LOG; JSON lines when the function's log format is JSON
fn init_tracing() {
    let filter = EnvFilter::try_from_env("AWS_LAMBDA_LOG_LEVEL")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var("AWS_LAMBDA_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        // CloudWatch adds the ingestion time
        .without_time()
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    // Shared HTTP client, built once per Lambda container
    let dispatcher = Arc::new(Dispatcher::init(HookUrl::from_env())?);

    let on_shutdown = Arc::clone(&dispatcher);
    lambda_runtime::spawn_graceful_shutdown_handler(move || async move {
        on_shutdown.shutdown().await;
    })
    .await;

    run(service_fn(|event: LambdaEvent<SnsEvent>| {
        let dispatcher = Arc::clone(&dispatcher);
        async move { function_handler(&dispatcher, event).await }
    }))
    .await
}
