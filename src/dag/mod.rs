// src/dag/mod.rs

//! Dependency graph construction for a job submission.
//!
//! - [`registry`] holds the known job identifiers, profits and artifacts.
//! - [`store`] is the single source of truth for graph shape.
//! - [`cycle`] and [`exclusivity`] are pure validation functions.
//! - [`controller`] is the only writer: it runs both guards against a
//!   proposal and either commits the whole edit or leaves the graph
//!   untouched.

pub mod controller;
pub mod cycle;
pub mod exclusivity;
pub mod registry;
pub mod store;

/// Job identifier, unique within a submission.
pub type JobName = String;

pub use controller::{GraphController, ProposalError};
pub use registry::{Job, JobRegistry};
pub use store::DependencyGraph;
