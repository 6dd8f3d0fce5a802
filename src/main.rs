use anyhow::Result;
use clap::Parser;
use std::env;
use std::time::Instant;

use ytcreator::commands::{handle_clean, handle_config, handle_stats, CleanOptions};
use ytcreator::error_help::{self, AVAILABLE_COMMANDS};
use ytcreator::{init_logging, log_command_execution, Cli, Commands, Config, IoOptions, LogConfig};

fn main() -> Result<()> {
    // A missing .env is fine; system env vars still apply
    let _ = dotenvy::dotenv();

    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let clap::error::ErrorKind::InvalidSubcommand = e.kind() {
                let args: Vec<String> = env::args().collect();
                if args.len() > 1 {
                    eprintln!("{}", error_help::format_command_typo(&args[1], AVAILABLE_COMMANDS));
                    std::process::exit(1);
                }
            }
            e.exit();
        }
    };

    // Only initialize logging if explicitly requested via env var
    if env::var("YTCREATOR_LOG_LEVEL").is_ok() {
        init_logging(LogConfig::from_env())?;
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", error_help::format_config_error(&e));
            std::process::exit(1);
        }
    };

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    let name = command.name();
    let result = match command {
        Commands::Clean {
            input,
            mode,
            seed,
            no_random_breaks,
            stats,
            clipboard,
            file,
            quiet,
        } => {
            let io_options = IoOptions::new(clipboard, file.as_deref(), quiet);
            let options = CleanOptions {
                mode,
                seed,
                no_random_breaks,
                stats,
            };
            handle_clean(&config, &input, &options, &io_options, start)
        }
        Commands::Stats { input, mode, json } => handle_stats(&config, &input, mode, json, start),
        Commands::Config { path } => handle_config(&config, path),
    };

    log_command_execution(name, start.elapsed().as_millis() as u64, &result);
    result
}
