use clap::Parser;
use colored::Colorize;

use pomo::cli::args::{Cli, Commands};
use pomo::cli::commands;
use pomo::config::{Config, Paths};
use pomo::error::PomoError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<(), PomoError> {
    let cli = Cli::parse();
    let paths = Paths::resolve(cli.home)?;
    let config = Config::load_from_path(&paths.config_file)?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            pomo::tui::run(&config)?;
            String::new()
        }
        Commands::Run(args) => commands::run(&config, &args, format)?,
        Commands::Simulate { ticks, durations } => {
            commands::simulate(&config, ticks, &durations, format)?
        }
        Commands::Config { command } => commands::config(&paths, &config, command, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
