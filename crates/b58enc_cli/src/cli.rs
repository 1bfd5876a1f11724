use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use env_logger::Env;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").args(["keypair", "values"])))]
pub struct Cli {
    /// JSON key file: a plain byte array or a wallet dump with `_keypair.secretKey`
    #[arg(long, value_name = "FILE")]
    pub keypair: Option<PathBuf>,

    /// Comma separated byte values, e.g. `0,0,1`
    ///
    /// Anything that fits an i128 parses; values outside 0..=255 are then
    /// reported by the encoder along with their position.
    #[arg(long, value_name = "LIST", value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Option<Vec<i128>>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Where the bytes to encode come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The key compiled into the binary.
    Builtin,
    Keypair(PathBuf),
    Values(Vec<i128>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: Source,
    pub log_filter: &'static str,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let source = match (cli.keypair, cli.values) {
            (Some(path), _) => Source::Keypair(path),
            (None, Some(values)) => Source::Values(values),
            (None, None) => Source::Builtin,
        };
        Self {
            source,
            log_filter: log_filter(cli.verbose),
        }
    }
}

fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Logs go to stderr so stdout only ever carries the encoded line.
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_logging(config: &Config) {
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_filter))
        .format_timestamp(None)
        .init();
}
