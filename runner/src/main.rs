use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

mod cli;
mod config;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(error: &anyhow::Error) {
    let kind = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<libgame::Error>())
        .map(|game_error| format!(" [{}]", game_error.kind()))
        .unwrap_or_default();

    eprintln!("{}{kind}: {error:#}", "error".bright_red().bold());
}
