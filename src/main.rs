use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;

use pomo::cli::args::{Cli, Commands, ConfigCommands, TuiArgs};
use pomo::cli::commands;
use pomo::config::{Config, Paths};
use pomo::logging::init_logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    // Without a home directory only the log and the default config path are lost.
    let paths = Paths::new();
    if let Err(e) = paths.as_ref().map_err(ToString::to_string).and_then(|paths| {
        init_logging(paths).map_err(|e| e.to_string())
    }) {
        eprintln!("{}: logging disabled: {}", "warning".yellow().bold(), e);
    }

    let config_path = match (cli.config.clone(), &paths) {
        (Some(path), _) => path,
        (None, Ok(paths)) => paths.config_file.clone(),
        (None, Err(e)) => bail!("{e}; pass --config or set POMO_CONFIG"),
    };
    let loaded = Config::load_from_path(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()));

    let command = cli.command.unwrap_or_else(|| Commands::Tui(TuiArgs::default()));

    // A broken file must not stop `config init --force` from replacing it.
    let config = match (&command, loaded) {
        (Commands::Config(args), Err(e)) if matches!(args.command, ConfigCommands::Init { .. }) => {
            tracing::warn!("{e:#}");
            Config::default()
        }
        (_, loaded) => loaded?,
    };
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match command {
        Commands::Tui(args) => commands::tui(&config, &args)?,
        Commands::Run(args) => commands::run(&config, &args, format)?,
        Commands::Config(args) => commands::config(args.command, &config, &config_path, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
