use std::process::exit;

use rusty_phonebook::prelude::run_app;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    init_tracing();

    if let Err(err) = run_app() {
        eprintln!("Error: {}", err);
        exit(1);
    }
}

fn init_tracing() {
    // Logs go to stderr so listings on stdout stay clean.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
