use std::{io, process::ExitCode};

use shape_visitor::{client, options::ReportOptions};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    client::report(&mut out, ReportOptions::default())
}
