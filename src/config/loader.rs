// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::model::SessionFile;
use crate::config::validate::validate_session;

/// Load a session file from a given path and return the raw `SessionFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<SessionFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading session file at {:?}", path))?;

    let session: SessionFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML session from {:?}", path))?;

    Ok(session)
}

/// Load a session file from path and run structural validation.
///
/// This is the recommended entry point for the rest of the application.
/// Graph-shape checks (unknown targets, self-references, exclusivity,
/// cycles) are intentionally left to the dag controller, which replays the
/// session's `needs` lists and reports the precise rejection kind.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<SessionFile> {
    let session = load_from_path(&path)?;
    validate_session(&session)?;
    Ok(session)
}
