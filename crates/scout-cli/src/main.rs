use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("scout error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    // Commands that never read configuration.
    match &cli.command {
        cli::Commands::Keygen => return commands::keygen::handle(&flags),
        cli::Commands::Schema(args) => return commands::schema::handle(args, &flags),
        _ => {}
    }

    let config = bootstrap::load_config(&flags).context("failed to load scout configuration")?;

    match cli.command {
        cli::Commands::Screen(args) => commands::screen::handle(&args, &flags, &config).await,
        cli::Commands::Questions(args) => {
            commands::questions::handle(&args, &flags, &config).await
        }
        cli::Commands::Extract(args) => commands::extract::handle(&args, &flags, &config),
        cli::Commands::Decrypt(args) => commands::decrypt::handle(&args, &flags, &config),
        cli::Commands::Keygen | cli::Commands::Schema(_) => Ok(()),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SCOUT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
