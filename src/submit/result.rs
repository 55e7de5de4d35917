// src/submit/result.rs

use serde::Deserialize;

use crate::dag::JobName;

/// The optimizer's response. Opaque to the core; decoded only to render.
///
/// Field names have drifted between optimizer builds, so the decoder accepts
/// both spellings of each numeric field and treats a missing sequence as
/// empty ("no valid sequence").
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SchedulingResult {
    /// Chosen execution order. Empty means the optimizer found no feasible
    /// sequence under the deadline; that is a valid answer, not an error.
    #[serde(default, alias = "order")]
    pub sequence: Vec<JobName>,

    #[serde(alias = "total_profit")]
    pub max_profit: f64,

    #[serde(alias = "total_time")]
    pub used_time_ms: f64,

    /// Dependency chains through the graph, for display only.
    #[serde(default)]
    pub chains: Option<Vec<Vec<JobName>>>,
}

impl SchedulingResult {
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
