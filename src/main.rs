use clap::Parser;

use chatline::cli::{Cli, Commands, ConfigSubcommands};
use chatline::config::AppConfig;
use chatline::core::Result;
use chatline::{console, logging, tui};

fn run_config_command(command: &ConfigSubcommands, config: &AppConfig) -> Result<()> {
    match command {
        ConfigSubcommands::Init => match AppConfig::init_default() {
            Ok(path) => println!("✓ Created config file at {}", path.display()),
            Err(e) => eprintln!("✗ Failed to create config: {e}"),
        },
        ConfigSubcommands::Where => match AppConfig::get_config_path() {
            Some(path) => println!("{}", path.display()),
            None => eprintln!("✗ Could not determine config path"),
        },
        ConfigSubcommands::Show => print!("{}", config.to_toml()?),
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.apply_to(AppConfig::load());
    let _log_guard = logging::init(config.log_file.as_deref(), cli.verbose);
    tracing::debug!(?config, "Loaded configuration");

    match &cli.command {
        Some(Commands::Config { command }) => run_config_command(command, &config)?,
        Some(Commands::Send { text }) => {
            console::run_send(&config, &text.join(" ")).await?;
        }
        Some(Commands::Probe) => {
            console::run_probe(&config).await?;
        }
        None => {
            tui::run_tui(&config).await?;
            if let Some(path) = logging::log_file_path() {
                eprintln!("Logs written to {}", path.display());
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run(Cli::parse()).await {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}
