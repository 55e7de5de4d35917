// src/dag/registry.rs

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::dag::JobName;

/// A registered job: declared profit plus the source artifact it came from.
///
/// The artifact is opaque to the graph layer; only the identifier matters
/// here. Profit stays editable until a request is assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub name: JobName,
    pub artifact: PathBuf,
    pub profit: Option<f64>,
}

/// Registry of known job identifiers and their declared profits.
///
/// Keyed by name so iteration (and everything derived from it: request
/// payloads, log output) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct JobRegistry {
    jobs: BTreeMap<JobName, Job>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a job identifier with its source artifact.
    ///
    /// Returns `false` if the identifier was already registered; the existing
    /// entry is kept.
    pub fn register(&mut self, name: impl Into<JobName>, artifact: impl Into<PathBuf>) -> bool {
        let name = name.into();
        if self.jobs.contains_key(&name) {
            return false;
        }
        self.jobs.insert(
            name.clone(),
            Job {
                name,
                artifact: artifact.into(),
                profit: None,
            },
        );
        true
    }

    /// Set (or overwrite) the declared profit for a job.
    ///
    /// Returns `false` if the job is unknown. Range checks (non-negative,
    /// finite) happen in the config layer before values get here.
    pub fn set_profit(&mut self, name: &str, profit: f64) -> bool {
        match self.jobs.get_mut(name) {
            Some(job) => {
                job.profit = Some(profit);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.jobs.contains_key(name)
    }

    /// All registered identifiers, in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.jobs.keys().map(|s| s.as_str())
    }

    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
