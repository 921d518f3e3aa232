//! Error types emitted by the Trailcross CLI.

use std::sync::Arc;

use thiserror::Error;
use trailcross_core::{ResolveError, RosterError};

/// Errors emitted by the Trailcross CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The built-in roster failed validation.
    #[error("invalid roster: {0}")]
    Roster(#[from] RosterError),
    /// Strict resolution rejected a bridge.
    #[error("failed to resolve hikers: {0}")]
    Resolve(#[from] ResolveError),
    /// Writing the total to the output stream failed.
    #[error("failed to write crossing total: {0}")]
    WriteOutput(#[source] std::io::Error),
}
