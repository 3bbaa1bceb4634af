use std::env;
use std::error::Error;
use std::fs::File;
use std::io;

use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::layer;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer, registry};

/// Path of the optional bunyan log file
const LOG_FILE_ENV: &str = "TXMETA_LOG_FILE";

pub fn setup_logger() -> Result<(), Box<dyn Error>> {
    LogTracer::init()?;

    // stdout carries the decoded output, so human readable logs go to stderr
    let stderr_layer = layer()
        .pretty()
        .with_writer(io::stderr)
        .with_filter(EnvFilter::from_default_env());

    let file_layer = match env::var(LOG_FILE_ENV) {
        Ok(path) => {
            let file = File::create(path)?;
            Some(BunyanFormattingLayer::new("txmeta-cli".into(), file))
        }
        Err(_) => None,
    };

    set_global_default(
        registry()
            .with(stderr_layer)
            .with(file_layer)
            .with(JsonStorageLayer),
    )?;
    Ok(())
}
