#![forbid(unsafe_code)]
use std::process::ExitCode;

use b58enc_cli::cli::{init_logging, Cli, Config};
use clap::Parser;
use log::debug;

fn main() -> ExitCode {
    let config = Config::from(Cli::parse());
    init_logging(&config);

    match b58enc_cli::run(&config) {
        Ok(encoded) => {
            println!("{encoded}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("{err:?}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
