use anyhow::{Context as _, Result};
use lambda_runtime::Context;
use serde::Serialize;
use tracing::info;

/// Response handed back to Lambda. Field names are part of the invocation contract.
#[derive(Serialize, PartialEq, Eq, Debug)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

pub const LOG_LABEL: &str = "Received S3 event:";

/// JSON encoding of the string "Success".
pub const SUCCESS_BODY: &str = r#""Success""#;

/// Logs the event and acknowledges it. The context is accepted but never looked at.
pub fn handle<E: Serialize>(event: &E, _: &Context) -> Result<Response> {
    let pretty = serde_json::to_string_pretty(event).context("failed to serialize event")?;

    info!("{} {}", LOG_LABEL, pretty);

    // Processing of the notification goes here once there is any.

    Ok(Response {
        status_code: 200,
        body: SUCCESS_BODY.to_string(),
    })
}
