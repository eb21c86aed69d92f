use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // stdout carries the tool's own output; diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    gfit_config::app::cli::run();
}
