#![deny(clippy::all, clippy::nursery)]
#![deny(nonstandard_style, rust_2018_idioms)]

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::error;

mod config;
mod handler;

use config::Config;
use handler::{handle, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    // CloudWatch adds its own timestamps
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_ansi(false)
        .without_time()
        .init();

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| async move {
        let LambdaEvent { payload, context } = event;
        let resp = handle(&payload, &context).map_err(|e| {
            error!("{:?}", e); // log error chain to CloudWatch
            e
        })?;
        Ok(resp) as Result<Response, Error>
    }))
    .await?;

    Ok(())
}
