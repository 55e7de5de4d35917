// src/config/validate.rs

use anyhow::{anyhow, Result};

use crate::config::model::SessionFile;

/// Run structural validation against a loaded session.
///
/// This checks:
/// - there is at least one job
/// - every declared profit is non-negative and finite
/// - the deadline, if present, is positive and finite
/// - every job has a non-empty artifact path
///
/// It does **not** check graph shape; the dag controller owns those
/// invariants and reports rejections with their precise kind.
pub fn validate_session(session: &SessionFile) -> Result<()> {
    ensure_has_jobs(session)?;
    validate_deadline(session)?;
    validate_jobs(session)?;
    Ok(())
}

fn ensure_has_jobs(session: &SessionFile) -> Result<()> {
    if session.job.is_empty() {
        return Err(anyhow!(
            "session must contain at least one [job.<name>] section"
        ));
    }
    Ok(())
}

fn validate_deadline(session: &SessionFile) -> Result<()> {
    if let Some(deadline) = session.submit.deadline {
        if !deadline.is_finite() || deadline <= 0.0 {
            return Err(anyhow!(
                "[submit].deadline must be a positive number of seconds (got {})",
                deadline
            ));
        }
    }
    Ok(())
}

fn validate_jobs(session: &SessionFile) -> Result<()> {
    for (name, job) in session.job.iter() {
        if job.file.trim().is_empty() {
            return Err(anyhow!("job '{}' has an empty `file` path", name));
        }
        if let Some(profit) = job.profit {
            if !profit.is_finite() || profit < 0.0 {
                return Err(anyhow!(
                    "job '{}' has invalid profit {} (must be non-negative)",
                    name,
                    profit
                ));
            }
        }
    }
    Ok(())
}
