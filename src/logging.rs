//! Tracing setup.
//!
//! The form owns the terminal, so interactive runs only log when a log
//! file is configured. One-shot runs without a file send warnings to stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::Result;

const DEFAULT_FILTER: &str = "passform=info";

pub fn init(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = tracing_subscriber::registry()
                .with(filter(DEFAULT_FILTER))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init();
        }
        None if !interactive => {
            let _ = tracing_subscriber::registry()
                .with(filter("passform=warn"))
                .with(
                    tracing_subscriber::fmt::layer()
                        .without_time()
                        .with_writer(std::io::stderr),
                )
                .try_init();
        }
        None => {}
    }
    Ok(())
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()))
}
