//! Lexis CLI binary.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lexis::cli::{args::LexisArgs, commands::execute_command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments using clap
    let args = LexisArgs::parse();

    let default_level = match args.verbosity() {
        0 => "lexis=error",
        1 => "lexis=warn",
        2 => "lexis=info",
        _ => "lexis=debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    execute_command(args).await?;
    Ok(())
}
