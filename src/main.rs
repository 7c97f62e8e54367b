//! truthdiscovery - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use truthdiscovery::{
    cli::{self, Args, Config},
    telemetry::init_tracing,
    TruthError,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        let usage = err
            .downcast_ref::<TruthError>()
            .map_or(false, TruthError::is_usage_error);
        std::process::exit(if usage { 2 } else { 1 });
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.clone())?;
    init_tracing(args.verbosity(config.verbosity()?));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::execute(&args, &config, &mut out)?;
    out.flush()?;
    Ok(())
}
