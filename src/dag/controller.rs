// src/dag/controller.rs

//! Graph mutation controller: the single writer for the dependency graph.
//!
//! Every edit goes through `propose_batch`, which validates the full set of
//! candidate assignments against the cycle oracle and the exclusivity
//! enforcer, then commits all of it or none of it. Readers only ever observe
//! the most recently committed graph.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use tracing::{debug, warn};

use crate::dag::registry::JobRegistry;
use crate::dag::store::DependencyGraph;
use crate::dag::{cycle, exclusivity, JobName};

/// Why a proposal was rejected. The graph is unchanged in every case.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProposalError {
    #[error("job '{job}' cannot depend on itself")]
    SelfReference { job: JobName },

    #[error("job '{job}' is not registered")]
    UnknownJob { job: JobName },

    #[error("job '{target}' is already a dependency of job '{claimed_by}'")]
    AlreadyClaimed {
        target: JobName,
        claimed_by: JobName,
    },

    #[error("assignment would create a dependency cycle through job '{via}'")]
    CyclicAssignment { via: JobName },
}

/// Owns the registry and the graph store; orchestrates proposed edits.
///
/// The interaction layer proposes whole replacement sets and reads the
/// forbidden-target projection back; it never mutates the graph directly.
#[derive(Debug, Clone)]
pub struct GraphController {
    registry: JobRegistry,
    graph: DependencyGraph,
}

impl GraphController {
    /// Start a session: every registered job begins with an empty
    /// dependency set.
    pub fn new(registry: JobRegistry) -> Self {
        let graph = DependencyGraph::with_jobs(registry.names());
        Self { registry, graph }
    }

    pub fn registry(&self) -> &JobRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Set (or overwrite) a job's profit. Profits stay editable until a
    /// request is assembled.
    pub fn set_profit(&mut self, job: &str, profit: f64) -> bool {
        self.registry.set_profit(job, profit)
    }

    /// Replace `job`'s dependency set with `targets`, if all guards pass.
    pub fn propose_dependencies(
        &mut self,
        job: &str,
        targets: &[JobName],
    ) -> Result<(), ProposalError> {
        self.propose_batch(&[(job.to_string(), targets.to_vec())])
    }

    /// Validate and commit a batch of simultaneous assignments.
    ///
    /// The batch is evaluated as one hypothetical graph: exclusivity sees
    /// claims released and taken by other batch members, and the cycle check
    /// covers cycles that only the combination of assignments closes.
    ///
    /// Rejection kinds are ranked: `SelfReference`, then `UnknownJob`, then
    /// `AlreadyClaimed`, then `CyclicAssignment`; the highest-ranked failure
    /// is reported when several apply. Commit is all-or-nothing. If a job
    /// appears twice in the batch, the last assignment wins.
    pub fn propose_batch(
        &mut self,
        assignments: &[(JobName, Vec<JobName>)],
    ) -> Result<(), ProposalError> {
        let proposed = Self::normalise(assignments);

        for (job, targets) in &proposed {
            if targets.iter().any(|t| t == job) {
                warn!(job = %job, "proposal rejected: job depends on itself");
                return Err(ProposalError::SelfReference { job: job.clone() });
            }
        }

        for (job, targets) in &proposed {
            if !self.registry.contains(job) {
                warn!(job = %job, "proposal rejected: unknown job");
                return Err(ProposalError::UnknownJob { job: job.clone() });
            }
            for target in targets {
                if !self.registry.contains(target) {
                    warn!(job = %job, target = %target, "proposal rejected: unknown target");
                    return Err(ProposalError::UnknownJob {
                        job: target.clone(),
                    });
                }
            }
        }

        // Exclusivity against the post-batch graph, so an assignment may
        // reclaim a target that another batch member releases.
        let mut hypothetical = self.graph.clone();
        for (job, targets) in &proposed {
            hypothetical.set_targets(job, targets.clone());
        }
        for (job, targets) in &proposed {
            for target in targets {
                if let Some(claimed_by) =
                    exclusivity::claimed_by_other(&hypothetical, target, job)
                {
                    warn!(
                        job = %job,
                        target = %target,
                        claimed_by = %claimed_by,
                        "proposal rejected: target already claimed"
                    );
                    return Err(ProposalError::AlreadyClaimed {
                        target: target.clone(),
                        claimed_by,
                    });
                }
            }
        }

        if let Some(via) = cycle::cycle_after_assignment(&self.graph, &proposed) {
            warn!(via = %via, "proposal rejected: would create a cycle");
            return Err(ProposalError::CyclicAssignment { via });
        }

        // Commit: replace exactly the proposed edge sets.
        for (job, targets) in proposed {
            debug!(job = %job, targets = ?targets, "committing dependency set");
            self.graph.set_targets(&job, targets);
        }
        debug!(
            claimed = ?exclusivity::all_claimed(&self.graph),
            "forbidden-target projection refreshed"
        );

        Ok(())
    }

    /// Targets the interaction layer must disable for `job`'s selector.
    /// Always consistent with the most recently committed graph, never with
    /// a pending proposal.
    pub fn forbidden_targets(&self, job: &str) -> BTreeSet<JobName> {
        exclusivity::forbidden_targets(&self.graph, job)
    }

    /// Collapse duplicate job keys (last wins) and de-duplicate each target
    /// list while preserving selection order.
    fn normalise(assignments: &[(JobName, Vec<JobName>)]) -> BTreeMap<JobName, Vec<JobName>> {
        let mut proposed: BTreeMap<JobName, Vec<JobName>> = BTreeMap::new();
        for (job, targets) in assignments {
            let mut deduped: Vec<JobName> = Vec::with_capacity(targets.len());
            for target in targets {
                if !deduped.contains(target) {
                    deduped.push(target.clone());
                }
            }
            proposed.insert(job.clone(), deduped);
        }
        proposed
    }
}
