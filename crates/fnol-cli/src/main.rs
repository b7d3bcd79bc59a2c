//! FNOL CLI - Process First-Notice-of-Loss documents from the command line.

use clap::Parser;
use fnol_cli::cli::{ConfigAction, ConfigArgs};
use fnol_cli::commands;
use fnol_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Log to stderr so stdout stays clean for JSON output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> fnol_cli::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone();
    // `config init` must work before any configuration file exists
    let config = match &cli.command {
        Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. },
        }) => Config::default(),
        _ => Config::load(config_path.as_deref())?,
    };

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Process(args) => {
            commands::execute_process(args, &config, &formatter).await?;
        }
        Command::Inspect(args) => {
            commands::execute_inspect(args, &config, &formatter).await?;
        }
        Command::Summary(args) => {
            commands::execute_summary(args, &formatter).await?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, config_path.as_deref(), &formatter)?;
        }
    }

    Ok(())
}
