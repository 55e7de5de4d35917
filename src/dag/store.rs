// src/dag/store.rs

use std::collections::BTreeMap;

use crate::dag::JobName;

/// Mutable adjacency structure mapping each job to its current dependency
/// targets, in selection order.
///
/// This is the single source of truth for graph shape. The only mutator,
/// [`DependencyGraph::set_targets`], is crate-private so that nothing outside
/// the dag module can bypass the controller's validation. Acyclicity and
/// single ownership are therefore guaranteed by construction everywhere else
/// in the crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: BTreeMap<JobName, Vec<JobName>>,
}

impl DependencyGraph {
    /// Initialise with every given job mapped to an empty dependency set.
    pub fn with_jobs<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<JobName>,
    {
        let edges = names.into_iter().map(|n| (n.into(), Vec::new())).collect();
        Self { edges }
    }

    /// Current dependency targets of a job. Unknown jobs have none.
    pub fn targets_of(&self, job: &str) -> &[JobName] {
        self.edges.get(job).map(|t| t.as_slice()).unwrap_or(&[])
    }

    /// Replace one job's entire edge set. Controller use only, after
    /// validation; commits are whole-set replacements so readers never see a
    /// partially-applied mutation.
    pub(crate) fn set_targets(&mut self, job: &str, targets: Vec<JobName>) {
        self.edges.insert(job.to_string(), targets);
    }

    /// All jobs known to the graph, in name order.
    pub fn jobs(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(|s| s.as_str())
    }

    /// Iterate `(job, targets)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[JobName])> {
        self.edges.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Detached copy of the adjacency map, for request snapshots.
    pub fn to_map(&self) -> BTreeMap<JobName, Vec<JobName>> {
        self.edges.clone()
    }
}
