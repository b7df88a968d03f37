//! Filter untrusted HTML from stdin to stdout.
//!
//! Applies the default blog policy; useful for inspecting what a given
//! payload looks like after filtering.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    init_tracing();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    tracing::debug!(bytes = input.len(), "sanitizing input");
    let cleaned = bozza_sanitize::sanitize(&input);

    io::stdout()
        .write_all(cleaned.as_bytes())
        .context("failed to write stdout")?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
