//! songforge CLI - command-line interface for offline song generation.
//!
//! This binary maps `create`, `vocals`, and `list` onto the composition
//! engine's public entry points.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use songforge_cli::cli_args::{Cli, Commands};
use songforge_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Create {
            style,
            duration,
            tempo,
            mood,
            seed,
            output,
            format,
        } => commands::create::run(
            &style,
            duration,
            tempo,
            mood.as_deref(),
            seed,
            &output,
            &format,
        ),
        Commands::Vocals {
            lyrics,
            pitch,
            mix,
            output,
        } => commands::vocals::run(&lyrics, pitch, mix, &output),
        Commands::List { workspace } => commands::list::run(workspace.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "ERROR".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
