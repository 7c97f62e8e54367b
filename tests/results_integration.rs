//! Results filtering, statistics and accuracy over hand-built tables

use quickcheck_macros::quickcheck;
use std::collections::BTreeMap;
use truthdiscovery::{BeliefTable, GroundTruth, Results, TrustVector, Value};

fn build(trust: &[(usize, i8)], belief: &[(usize, i8, i8)]) -> Results {
    let trust: TrustVector = trust.iter().map(|(s, t)| (*s % 8, f64::from(*t))).collect();
    let mut table = BeliefTable::new();
    for (var, value, score) in belief {
        table
            .entry(*var % 8)
            .or_insert_with(BTreeMap::new)
            .insert(Value::from(i32::from(*value)), f64::from(*score));
    }
    Results::new(trust, table, 3, 0.5)
}

#[quickcheck]
fn prop_filter_is_idempotent(
    trust: Vec<(usize, i8)>,
    belief: Vec<(usize, i8, i8)>,
    sources: Vec<usize>,
    variables: Vec<usize>,
    extra: Vec<usize>,
) -> bool {
    let results = build(&trust, &belief);
    let sources: Vec<usize> = sources.into_iter().map(|s| s % 10).collect();
    let variables: Vec<usize> = variables.into_iter().map(|v| v % 10).collect();
    let extra: Vec<usize> = extra.into_iter().map(|x| x % 10).collect();

    let once = results.filter(Some(&sources), Some(&variables));
    let twice = once.filter(Some(&sources), Some(&variables));

    // Re-filtering with more identifiers than before changes nothing
    let wider_sources: Vec<usize> = sources.iter().chain(&extra).copied().collect();
    let wider_variables: Vec<usize> = variables.iter().chain(&extra).copied().collect();
    let widened = once.filter(Some(&wider_sources), Some(&wider_variables));
    let unrestricted = once.filter(None, None);

    once == twice && once == widened && once == unrestricted
}

#[quickcheck]
fn prop_filter_keeps_only_requested(trust: Vec<(usize, i8)>, sources: Vec<usize>) -> bool {
    let results = build(&trust, &[]);
    let filtered = results.filter(Some(&sources), None);
    filtered.trust().keys().all(|s| sources.contains(s))
        && filtered
            .trust()
            .iter()
            .all(|(s, t)| results.trust().get(s) == Some(t))
        && filtered.iterations() == results.iterations()
}

#[quickcheck]
fn prop_most_believed_values_have_max_belief(belief: Vec<(usize, i8, i8)>) -> bool {
    let results = build(&[], &belief);
    results.belief().iter().all(|(var, scores)| {
        let max = scores.values().copied().fold(f64::NEG_INFINITY, f64::max);
        let most = results.get_most_believed_values(*var).unwrap();
        !most.is_empty() && most.iter().all(|v| scores[v] == max)
    })
}

#[quickcheck]
fn prop_accuracy_in_unit_interval(belief: Vec<(usize, i8, i8)>, truth: Vec<(usize, i8)>) -> bool {
    let results = build(&[], &belief);
    let truth: GroundTruth = truth
        .into_iter()
        .map(|(v, x)| (v % 8, Value::from(i32::from(x))))
        .collect();
    match results.accuracy_against(&truth) {
        Some(acc) => (0.0..=1.0).contains(&acc),
        None => truth.keys().all(|v| !results.belief().contains_key(v)),
    }
}

#[test]
fn test_filter_clears_accuracy() {
    let results = build(&[(0, 1)], &[(0, 5, 1)]);
    let truth = GroundTruth::from([(0, Value::from(5))]);
    let scored = results.with_accuracy(&truth);
    assert_eq!(scored.accuracy(), Some(1.0));
    assert_eq!(scored.filter(None, None).accuracy(), None);
}

#[test]
fn test_stats_of_known_values() {
    let results = build(&[(0, 2), (1, 4), (2, 4), (3, 6)], &[(0, 1, 3), (0, 2, 5)]);
    let trust = results.get_trust_stats().unwrap();
    assert!((trust.mean - 4.0).abs() < 1e-12);
    assert!((trust.stddev - 2f64.sqrt()).abs() < 1e-12);

    let belief = results.get_belief_stats();
    let stats = belief[&0].unwrap();
    assert_eq!(stats.as_tuple(), (4.0, 1.0));
}
