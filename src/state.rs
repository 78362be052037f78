//! Shared application state for request handlers.

use std::sync::Arc;

use crate::build_info::BuildInfo;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Read-only after startup, so requests never contend on it.
#[derive(Clone, Debug)]
pub struct AppState {
    pub build: Arc<BuildInfo>,
}

impl AppState {
    /// Creates a new application state from the given build metadata.
    pub fn new(build: BuildInfo) -> Self {
        Self {
            build: Arc::new(build),
        }
    }
}
