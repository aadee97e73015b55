mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "epi_docgen=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            path,
            readme,
            format,
        } => {
            cli::generate(&path, &cli.extension, readme, &format)?;
        }
        Commands::Sample { path, class } => {
            cli::sample(&path, &cli.extension, class)?;
        }
        Commands::Classes { path, format } => {
            cli::classes(&path, &cli.extension, &format)?;
        }
    }

    Ok(())
}
