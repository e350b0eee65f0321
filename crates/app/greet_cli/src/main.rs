//! `greet` — prints a greeting for each name given on the command line.

// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::io::Write;

use clap::Parser;
use cli::{Cli, Commands};
use config::GreetConfig;

mod cli;
mod config;
mod logging;

fn main() -> Result<()> {
    let _logger = logging::init()?;

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    let args = Cli::parse();

    match &args.command {
        Commands::Hello { names, lang } => {
            let config = GreetConfig::from_env()?;
            let locale = config.resolve_locale(lang.as_deref())?;
            log::debug!("greeting {} name(s) in {locale}", names.len());
            for name in names {
                greet_core::greet_in(locale, name)?;
            }
        }
        Commands::Version => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
            writeln!(out, "greet_core {}", greet_core::version())?;
        }
    }

    Ok(())
}
