// src/main.rs
use std::process::ExitCode;

use brushfilter::{app, args::Args, config::AppConfig, logging};
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.behavior.verbose);

    let result = AppConfig::try_from(args).and_then(|config| app::run(&config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
