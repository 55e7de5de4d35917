// src/config/mod.rs

//! Session file loading and validation for jobdag.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a session file from disk (`loader.rs`).
//! - Validate structural invariants like profit and deadline ranges
//!   (`validate.rs`). Graph-shape invariants are *not* checked here; the
//!   dag controller is the single authority for those.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{JobSection, SessionFile, SubmitSection};
pub use validate::validate_session;
