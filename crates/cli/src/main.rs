use anyhow::Result;
use clap::Parser;
use script_runner::{Context, Runner};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let runner = Runner::parse();
    let context = if runner.command.reads_config() {
        Context::load(&runner.global)?
    } else {
        Context::from_flags(&runner.global)
    };

    init_tracing(context.config.verbose);
    match &context.config_source {
        Some(source) => debug!("Using config: {}", source.display()),
        None => debug!("Using default settings"),
    }

    runner.command.execute(&context)
}

/// Log to stderr; RUST_LOG wins over the verbosity setting
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
