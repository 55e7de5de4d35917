// src/submit/client.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, info};

use crate::submit::request::SchedulingRequest;
use crate::submit::result::SchedulingResult;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// How much response body to keep in a status error before truncating.
const BODY_SNIPPET_LEN: usize = 512;

/// Transport-level failures.
///
/// These are deliberately distinct from an optimizer-reported empty result:
/// "connected but infeasible" is an `Ok(SchedulingResult)` with an empty
/// sequence, while everything here means the answer never arrived. The graph
/// store is untouched either way, so resubmission never requires rebuilding
/// the graph.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not reach the optimizer: {0}")]
    Request(#[from] reqwest::Error),

    #[error("optimizer returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("optimizer returned malformed JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("encoding the '{field}' form field: {source}")]
    Encode {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("reading artifact {path:?}: {source}")]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// HTTP client for the external optimizer.
pub struct OptimizerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OptimizerClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// POST the assembled request as a multipart form and decode the
    /// response.
    ///
    /// Submission only reads the snapshot; it never touches the graph store,
    /// so abandoning a submission needs no rollback.
    pub async fn submit(
        &self,
        request: &SchedulingRequest,
    ) -> Result<SchedulingResult, TransportError> {
        let form = self.build_form(request).await?;

        info!(
            endpoint = %self.endpoint,
            jobs = request.profits.len(),
            deadline = request.deadline,
            "submitting scheduling request"
        );

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status,
                body: snippet(&body),
            });
        }

        let result: SchedulingResult =
            serde_json::from_str(&body).map_err(TransportError::MalformedResponse)?;
        debug!(
            sequence_len = result.sequence.len(),
            max_profit = result.max_profit,
            "decoded optimizer response"
        );
        Ok(result)
    }

    /// One `files` part per job artifact, plus the JSON-encoded `profits`
    /// and `dependencies` maps and the `deadline` field.
    async fn build_form(&self, request: &SchedulingRequest) -> Result<Form, TransportError> {
        let profits = serde_json::to_string(&request.profits).map_err(|source| {
            TransportError::Encode {
                field: "profits",
                source,
            }
        })?;
        let dependencies =
            serde_json::to_string(&request.dependencies).map_err(|source| {
                TransportError::Encode {
                    field: "dependencies",
                    source,
                }
            })?;

        let mut form = Form::new()
            .text("profits", profits)
            .text("dependencies", dependencies)
            .text("deadline", request.deadline.to_string());

        for (job, path) in &request.artifacts {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|source| TransportError::Artifact {
                    path: path.clone(),
                    source,
                })?;
            form = form.part(
                "files",
                Part::bytes(bytes).file_name(artifact_file_name(job, path)),
            );
        }

        Ok(form)
    }
}

/// Part name for a job's artifact: the job identifier plus the artifact's
/// extension.
///
/// The backend keys per-file data by the uploaded filename, so the part name
/// must line up with the identifiers used in the `profits` and
/// `dependencies` maps, not with whatever the artifact happens to be called
/// on disk.
pub fn artifact_file_name(job: &str, path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!("{job}.{}", ext.to_string_lossy()),
        None => job.to_string(),
    }
}

fn snippet(body: &str) -> String {
    if body.len() <= BODY_SNIPPET_LEN {
        body.to_string()
    } else {
        let mut end = BODY_SNIPPET_LEN;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    }
}
