use anyhow::Context;
use clap::Parser; // for cli
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nexus_sitegen::config::{Cli, Command};
use nexus_sitegen::{commands, server};

// this is main async function with tokio
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nexus_sitegen=info,nexus=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // parse cli arguments
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();

    match cli.command {
        Command::Serve(args) => server::serve(args).await.context("server stopped")?,
        Command::Generate(args) => {
            commands::generate(&args, &mut stdout).await?;
        }
        Command::History(args) => commands::history(&args, &mut stdout)?,
    }
    Ok(())
}
