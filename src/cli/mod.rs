//! Command-line client: argument parsing, configuration and output rendering

pub mod args;
pub mod commands;
pub mod config;
pub mod output;

pub use args::{Args, Commands, RunArgs, SynthArgs, Verbosity};
pub use commands::execute;
pub use config::Config;
pub use output::{build_output, OutputDocument, OutputField, OutputFormat};
