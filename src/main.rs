use std::error::Error as _;
use std::process;

use log::debug;

mod cli;
mod error;
mod font;
mod models;
mod processor;
mod utils;

use cli::Args;
use error::{Error, Result};
use utils::init_logging;

const PROGRAM: &str = "fontname";

fn main() {
    if let Err(err) = try_main() {
        report(&err);
        process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse_from_args(std::env::args_os())?;
    init_logging(args.debug);

    let config = args.into_config()?;
    debug!(
        "Family '{}', mode {}, debug {}",
        config.family_name, config.mode, config.debug_mode
    );

    processor::run(&config)
}

/// Print the error and its cause to stderr.
///
/// Causes already carry their own sources in their messages, so only one
/// level is printed.
fn report(err: &Error) {
    eprintln!("[{PROGRAM}] ERROR: {err}.");
    if let Some(cause) = err.source() {
        eprintln!("{cause}");
    }
}
