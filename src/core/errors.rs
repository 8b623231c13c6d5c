//! Error handling
//!
//! Two layers: `ProjectionError` is the typed taxonomy of the projection
//! model (registry and geometry), and anyhow covers the application boundary
//! (CLI validation, settings files) where we only need context for humans.

use anyhow::{ensure, Context, Result};
use thiserror::Error;

use crate::registry::{EntityId, EntityKind};

/// Result type alias for application-level operations
pub type ProjectorResult<T> = Result<T>;

/// Errors raised by the projection model.
///
/// None of these are recoverable inside a frame: a failing tick aborts and
/// the error is handed to Bevy's system error handler.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjectionError {
    /// An entity with this id was already created
    #[error("entity '{0}' is already registered")]
    DuplicateEntity(EntityId),

    /// No entity with this id exists
    #[error("entity '{0}' is not registered")]
    NotFound(EntityId),

    /// A plane normal was zero-length or not finite
    #[error("plane normal must be finite and non-zero")]
    DegenerateNormal,

    /// An operation was applied to the wrong kind of entity
    #[error("entity '{id}' is not a {expected}")]
    KindMismatch { id: EntityId, expected: EntityKind },
}

/// Helper functions for creating common error contexts
pub trait ProjectorContext<T> {
    /// Add file operation context to an error
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> ProjectorResult<T>;
}

impl<T, E> ProjectorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> ProjectorResult<T> {
        self.with_context(|| {
            format!("Failed to {} file: {}", operation, path.as_ref().display())
        })
    }
}

/// Validates that a settings file path points at a readable file
pub fn validate_config_path<P: AsRef<std::path::Path>>(
    path: P,
) -> ProjectorResult<()> {
    let path = path.as_ref();

    ensure!(
        path.exists(),
        "Settings file does not exist: {}",
        path.display()
    );
    ensure!(
        path.is_file(),
        "Settings path must be a file: {}",
        path.display()
    );

    Ok(())
}
