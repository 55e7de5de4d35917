// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level session file as read from TOML.
///
/// ```toml
/// [submit]
/// deadline = 5.0
/// endpoint = "http://127.0.0.1:8000/process_jobs"
///
/// [job.A]
/// file = "jobs/a.py"
/// profit = 10.0
/// needs = ["B"]
///
/// [job.B]
/// file = "jobs/b.py"
/// profit = 20.0
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SessionFile {
    /// Submission settings from `[submit]`.
    #[serde(default)]
    pub submit: SubmitSection,

    /// All jobs from `[job.<name>]`. Keys are the job identifiers.
    #[serde(default)]
    pub job: BTreeMap<String, JobSection>,
}

/// `[submit]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitSection {
    /// Global deadline in seconds. Must be strictly positive. May be left
    /// out here and supplied with `--deadline` instead.
    #[serde(default)]
    pub deadline: Option<f64>,

    /// Optimizer endpoint to POST the request to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8000/process_jobs".to_string()
}

impl Default for SubmitSection {
    fn default() -> Self {
        Self {
            deadline: None,
            endpoint: default_endpoint(),
        }
    }
}

/// `[job.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct JobSection {
    /// Path to the job's source artifact. Uploaded opaquely; only the
    /// identifier (the table key) matters to the graph.
    pub file: String,

    /// Declared profit. Must be non-negative. Optional while editing,
    /// required once a request is assembled.
    #[serde(default)]
    pub profit: Option<f64>,

    /// Dependency targets, in selection order. Replayed through the graph
    /// controller, so every invariant that guards interactive edits also
    /// guards the session file.
    #[serde(default)]
    pub needs: Vec<String>,
}
