use aws_lambda_events::event::sns::SnsEvent;
use lambda_runtime::{Error, LambdaEvent};
use tracing::{error, info_span, Instrument};

use crate::dispatch::Dispatcher;
use crate::message::NotificationRecord;

// Main Lambda handler - forwards every SNS record in the event to the hook
pub async fn function_handler(
    dispatcher: &Dispatcher,
    event: LambdaEvent<SnsEvent>,
) -> Result<(), Error> {
    let records: Vec<NotificationRecord> = event
        .payload
        .records
        .into_iter()
        .map(NotificationRecord::from)
        .collect();

    let span = info_span!(
        "invocation",
        request_id = %event.context.request_id,
        records = records.len()
    );
    async {
        dispatcher.handle(&records).await.map_err(|err| {
            error!(
                failed = err.failures().len(),
                attempted = err.attempted(),
                "invocation failed"
            );
            Error::from(err)
        })
    }
    .instrument(span)
    .await
}
