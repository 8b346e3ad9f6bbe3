// file: src/main.rs
// version: 1.0.0
// guid: 2edf04b8-9760-4176-bfe2-feae24a7f11f

//! Hello Prompt - Main entry point

use clap::Parser;
use hello_prompt::{
    cli::{args::Cli, commands},
    logging::logger,
    prompt::PromptOutcome,
    Result,
};
use std::process;

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli) -> Result<PromptOutcome> {
    logger::init_logger()?;
    commands::run_prompt(&cli.text, &cli.file_path)
}
