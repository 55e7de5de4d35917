// src/dag/cycle.rs

//! Cycle oracle: decides whether a candidate graph mutation would introduce
//! a cycle, without mutating any shared state.

use std::collections::BTreeMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::dag::store::DependencyGraph;
use crate::dag::JobName;

/// Test a set of candidate assignments (job -> replacement targets) against
/// the current graph.
///
/// Builds the hypothetical graph with every assigned job's edge set replaced,
/// then checks the *whole* graph at once. Evaluating the full set together is
/// deliberate: two assignments can close a cycle jointly even when each one
/// alone does not, so testing edges one at a time with reversion would accept
/// invalid batches.
///
/// Returns a job on the detected cycle, or `None` if the hypothetical graph
/// is acyclic. Which job is reported depends on traversal order; any node on
/// a real cycle is correct.
pub fn cycle_after_assignment(
    graph: &DependencyGraph,
    assignments: &BTreeMap<JobName, Vec<JobName>>,
) -> Option<JobName> {
    // Self-loops are trivial cycles; reject before any traversal.
    for (job, targets) in assignments {
        if targets.iter().any(|t| t == job) {
            return Some(job.clone());
        }
    }

    // Effective adjacency: current edge sets, with assigned jobs replaced.
    let mut effective: BTreeMap<&str, &[JobName]> = graph.iter().collect();
    for (job, targets) in assignments {
        effective.insert(job.as_str(), targets.as_slice());
    }

    // Edge direction: dep -> job (a dependency must precede its dependent).
    let mut hypothetical: DiGraphMap<&str, ()> = DiGraphMap::new();
    for job in effective.keys() {
        hypothetical.add_node(*job);
    }
    for (job, targets) in &effective {
        for dep in targets.iter() {
            hypothetical.add_edge(dep.as_str(), *job, ());
        }
    }

    // A topological sort fails exactly when there is a cycle.
    match toposort(&hypothetical, None) {
        Ok(_order) => None,
        Err(cycle) => Some(cycle.node_id().to_string()),
    }
}

/// Convenience form for a single job's replacement set.
pub fn would_create_cycle(graph: &DependencyGraph, job: &str, targets: &[JobName]) -> bool {
    let mut assignments = BTreeMap::new();
    assignments.insert(job.to_string(), targets.to_vec());
    cycle_after_assignment(graph, &assignments).is_some()
}
