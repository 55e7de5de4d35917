// src/dag/exclusivity.rs

//! Exclusivity enforcer: a job identifier may be claimed as a dependency by
//! at most one job at a time.
//!
//! All functions here recompute from the full graph on every call. There is
//! no cache to go stale across mutations; the controller queries these after
//! each commit to republish the forbidden-target projection.

use std::collections::BTreeSet;

use crate::dag::store::DependencyGraph;
use crate::dag::JobName;

/// Identifiers currently claimed as a dependency by some job other than
/// `job` itself. These are the targets the interaction layer must disable in
/// `job`'s selector.
pub fn forbidden_targets(graph: &DependencyGraph, job: &str) -> BTreeSet<JobName> {
    graph
        .iter()
        .filter(|(owner, _)| *owner != job)
        .flat_map(|(_, targets)| targets.iter().cloned())
        .collect()
}

/// Every identifier claimed as a dependency by any job.
pub fn all_claimed(graph: &DependencyGraph) -> BTreeSet<JobName> {
    graph
        .iter()
        .flat_map(|(_, targets)| targets.iter().cloned())
        .collect()
}

/// The job other than `job` that currently claims `target`, if any.
///
/// With single ownership holding (which the controller guarantees for
/// committed graphs) there can be at most one such claimant.
pub fn claimed_by_other(graph: &DependencyGraph, target: &str, job: &str) -> Option<JobName> {
    graph
        .iter()
        .find(|(owner, targets)| *owner != job && targets.iter().any(|t| t == target))
        .map(|(owner, _)| owner.to_string())
}
