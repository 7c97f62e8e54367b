//! Shared driver for iterative algorithms

use std::time::Instant;
use tracing::info;

use crate::dataset::ClaimIndex;
use crate::errors::Result;
use crate::iteration::StopCondition;
use crate::results::Results;

/// Run `update` until the controller minted from `iterator` says stop.
///
/// `update` rewrites trust (per source) and belief (per claim) in place; each
/// completed update is shown to the controller as one step.
pub(crate) fn iterate<F>(
    algorithm: &'static str,
    iterator: &StopCondition,
    index: &ClaimIndex,
    started: Instant,
    mut trust: Vec<f64>,
    mut belief: Vec<f64>,
    mut update: F,
) -> Result<Results>
where
    F: FnMut(&mut [f64], &mut [f64]),
{
    let mut controller = iterator.controller();
    loop {
        update(&mut trust, &mut belief);
        if !controller.should_continue(index.snapshot(&trust, &belief))? {
            break;
        }
    }

    Ok(finish(algorithm, index, &trust, &belief, controller.iterations(), started))
}

/// Package final estimates into [`Results`]
pub(crate) fn finish(
    algorithm: &'static str,
    index: &ClaimIndex,
    trust: &[f64],
    belief: &[f64],
    iterations: usize,
    started: Instant,
) -> Results {
    let time_taken = started.elapsed().as_secs_f64();
    info!(algorithm, iterations, time_taken, "run finished");
    Results::new(
        index.trust_vector(trust),
        index.belief_table(belief),
        iterations,
        time_taken,
    )
}

/// Scale so the largest entry is 1. All-zero input is left alone.
pub(crate) fn normalize_max(values: &mut [f64]) {
    let max = values.iter().copied().fold(0.0, f64::max);
    if max > 0.0 {
        values.iter_mut().for_each(|v| *v /= max);
    }
}
