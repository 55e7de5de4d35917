// src/submit/mod.rs

//! Request assembly and the optimizer transport.
//!
//! - [`request`] snapshots the registry + graph + deadline into an immutable
//!   scheduling request.
//! - [`client`] posts the request to the external optimizer as a multipart
//!   form and decodes the response.
//! - [`result`] is the optimizer's response model, treated as opaque data to
//!   render.

pub mod client;
pub mod request;
pub mod result;

pub use client::{artifact_file_name, OptimizerClient, TransportError};
pub use request::{build_request, IncompleteSubmission, SchedulingRequest};
pub use result::SchedulingResult;
