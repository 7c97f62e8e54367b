//! Command-line argument parsing for truthdiscovery
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use crate::algorithm::{AlgorithmKind, AlgorithmParam};
use crate::cli::output::{OutputField, OutputFormat};
use crate::errors::{Result, TruthError};
use crate::types::{SourceId, VariableId};

/// Command-line interface to truthdiscovery library
#[derive(Parser, Debug)]
#[command(name = "truthdiscovery")]
#[command(version)]
#[command(about = "Command-line interface to truthdiscovery library", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a truth-discovery algorithm on a CSV dataset
    Run(RunArgs),

    /// Generate a synthetic supervised dataset as CSV
    Synth(SynthArgs),
}

/// Options for `run`
#[derive(ClapArgs, Debug, Clone)]
pub struct RunArgs {
    /// The algorithm to run: average_log, investment, pooled_investment, sums, truthfinder or voting
    #[arg(short, long, value_name = "ALGORITHM", value_parser = AlgorithmKind::from_str)]
    pub algorithm: AlgorithmKind,

    /// Algorithm parameters as 'key=value'. Use 'iterator=fixed-<N>' or
    /// 'iterator=<measure>-convergence-<threshold>[-limit-<N>]' to control
    /// iteration, 'priors=fixed|voted|uniform' for initial beliefs
    #[arg(short, long = "params", value_name = "PARAM", num_args = 1.., value_parser = AlgorithmParam::from_str)]
    pub params: Vec<AlgorithmParam>,

    /// CSV file to run the algorithm on
    #[arg(short = 'f', long)]
    pub dataset: PathBuf,

    /// Sources to restrict results to. Unknown sources are ignored
    #[arg(long, value_name = "SOURCE", num_args = 1..)]
    pub sources: Option<Vec<SourceId>>,

    /// Variables to restrict results to. Unknown variables are ignored
    #[arg(long, value_name = "VAR", num_args = 1..)]
    pub variables: Option<Vec<VariableId>>,

    /// Fields to include in the output
    #[arg(short, long, value_name = "OUTPUT_FIELD", num_args = 1.., value_parser = OutputField::from_str)]
    pub output: Option<Vec<OutputField>>,

    /// Treat the first row of the dataset as true values
    #[arg(short, long)]
    pub supervised: bool,

    /// Output format: yaml or json
    #[arg(long, value_parser = OutputFormat::from_str)]
    pub format: Option<OutputFormat>,
}

/// Options for `synth`
#[derive(ClapArgs, Debug, Clone)]
pub struct SynthArgs {
    /// Trust of each source, in [0, 1]
    #[arg(long, value_name = "TRUST", num_args = 1.., required = true, allow_negative_numbers = true)]
    pub trust: Vec<f64>,

    /// Number of variables
    #[arg(long)]
    pub num_vars: Option<usize>,

    /// Number of possible values per variable
    #[arg(long)]
    pub domain_size: Option<usize>,

    /// Probability that a source makes a claim about a variable
    #[arg(long)]
    pub claim_prob: Option<f64>,

    /// Random seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Verbosity from the flags, or `default` when none are given
    pub fn verbosity(&self, default: Verbosity) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => default,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Log filter directive for this level
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "truthdiscovery=info,warn",
            Verbosity::VeryVerbose => "truthdiscovery=debug,info",
        }
    }
}

impl FromStr for Verbosity {
    type Err = TruthError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "quiet" => Ok(Verbosity::Quiet),
            "normal" => Ok(Verbosity::Normal),
            "verbose" => Ok(Verbosity::Verbose),
            "very_verbose" => Ok(Verbosity::VeryVerbose),
            _ => Err(TruthError::Config(format!("Invalid verbosity level: {}", s))),
        }
    }
}
