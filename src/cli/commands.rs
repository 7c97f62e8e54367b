//! Subcommand execution

use clap::CommandFactory;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use tracing::{debug, info};

use crate::cli::args::{Args, Commands, RunArgs, SynthArgs};
use crate::cli::config::Config;
use crate::cli::output::{build_output, OutputField};
use crate::dataset::{MatrixDataset, SupervisedData, SyntheticData};
use crate::errors::{Result, TruthError};

/// Run the parsed command line, writing its output to `out`
pub fn execute(args: &Args, config: &Config, out: &mut dyn Write) -> Result<()> {
    match &args.command {
        Some(Commands::Run(run)) => run_command(run, config, out),
        Some(Commands::Synth(synth)) => synth_command(synth, config, out),
        None => {
            let help = Args::command().render_help();
            write!(out, "{}", help)?;
            Ok(())
        }
    }
}

fn run_command(run: &RunArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    let fields = match &run.output {
        Some(fields) => fields.clone(),
        None => config.output_fields()?,
    };
    if fields.contains(&OutputField::Accuracy) && !run.supervised {
        return Err(TruthError::AccuracyWithoutGroundTruth);
    }
    let format = match run.format {
        Some(format) => format,
        None => config.format()?,
    };

    let algorithm = run.algorithm.build(&run.params, config.iterator()?)?;
    debug!(algorithm = ?algorithm, "built algorithm");

    let supervised = if run.supervised {
        Some(SupervisedData::from_csv(&run.dataset)?)
    } else {
        None
    };
    let unsupervised;
    let data = match &supervised {
        Some(sup) => &sup.data,
        None => {
            unsupervised = MatrixDataset::from_csv(&run.dataset)?;
            &unsupervised
        }
    };
    info!(
        path = %run.dataset.display(),
        sources = data.num_sources(),
        variables = data.num_variables(),
        "loaded dataset"
    );

    let results = algorithm
        .run(data)?
        .filter(run.sources.as_deref(), run.variables.as_deref());

    let doc = build_output(&results, supervised.as_ref(), &fields)?;
    out.write_all(doc.render(format)?.as_bytes())?;
    Ok(())
}

fn synth_command(synth: &SynthArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    let generator = SyntheticData::new(
        synth.trust.clone(),
        synth.num_vars.unwrap_or(config.synth.num_vars),
        synth.claim_prob.unwrap_or(config.synth.claim_prob),
        synth.domain_size.unwrap_or(config.synth.domain_size),
    )?;

    let mut rng = match synth.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let data = generator.generate(&mut rng);
    info!(
        sources = generator.num_sources(),
        variables = data.data.num_variables(),
        "generated synthetic dataset"
    );

    out.write_all(data.to_csv().as_bytes())?;
    Ok(())
}
