// src/submit/request.rs

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::dag::{DependencyGraph, JobName, JobRegistry};

/// Why a request could not be assembled. No partial request is ever built.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IncompleteSubmission {
    #[error("job '{job}' has no profit assigned")]
    MissingProfit { job: JobName },

    #[error("no deadline was provided")]
    MissingDeadline,

    #[error("deadline must be a positive number of seconds (got {value})")]
    InvalidDeadline { value: f64 },
}

/// Immutable snapshot handed to the optimizer.
///
/// Copy semantics: nothing here borrows from the graph store, so later edits
/// cannot affect an already-assembled request. Artifacts are carried for the
/// multipart upload but are not part of the JSON payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SchedulingRequest {
    pub profits: BTreeMap<JobName, f64>,
    pub dependencies: BTreeMap<JobName, Vec<JobName>>,
    /// Seconds, strictly positive.
    pub deadline: f64,
    #[serde(skip)]
    pub artifacts: BTreeMap<JobName, PathBuf>,
}

/// Snapshot the registry, graph and deadline into a [`SchedulingRequest`].
///
/// The graph satisfies acyclicity, single ownership and target registration
/// by construction (only the controller can mutate it); what remains to check
/// is that every job has a profit and the deadline is a positive number.
pub fn build_request(
    registry: &JobRegistry,
    graph: &DependencyGraph,
    deadline: Option<f64>,
) -> Result<SchedulingRequest, IncompleteSubmission> {
    let deadline = deadline.ok_or(IncompleteSubmission::MissingDeadline)?;
    if !deadline.is_finite() || deadline <= 0.0 {
        return Err(IncompleteSubmission::InvalidDeadline { value: deadline });
    }

    let mut profits = BTreeMap::new();
    let mut artifacts = BTreeMap::new();
    for job in registry.jobs() {
        let profit = job
            .profit
            .ok_or_else(|| IncompleteSubmission::MissingProfit {
                job: job.name.clone(),
            })?;
        profits.insert(job.name.clone(), profit);
        artifacts.insert(job.name.clone(), job.artifact.clone());
    }

    Ok(SchedulingRequest {
        profits,
        dependencies: graph.to_map(),
        deadline,
        artifacts,
    })
}
