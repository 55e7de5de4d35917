// src/errors.rs

//! Crate-wide error type.
//!
//! Domain errors keep their structured kinds (so callers and tests can match
//! on them); session-loading glue uses `anyhow` with context and flows in
//! through `Other`.

use thiserror::Error;

use crate::dag::ProposalError;
use crate::submit::{IncompleteSubmission, TransportError};

#[derive(Error, Debug)]
pub enum JobdagError {
    #[error(transparent)]
    Proposal(#[from] ProposalError),

    #[error(transparent)]
    Incomplete(#[from] IncompleteSubmission),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, JobdagError>;
