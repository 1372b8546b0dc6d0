// SPDX-License-Identifier: MIT OR Apache-2.0
//! Errors raised while resolving actions, categories and axes.
//!
//! Channel operations themselves never fail; these only come from
//! turning names and ids into typed values.

/// Error resolving filter vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// No action with this id exists in the active profile
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// No category with this name exists in the active profile
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Profile version string not recognised
    #[error("Unknown profile version: {0}")]
    UnknownProfile(String),

    /// Axis name or index outside X/Y/Z
    #[error("Invalid axis: {0}")]
    InvalidAxis(String),

    /// Category declaration rejected (empty name/path or duplicate)
    #[error("Invalid category {name:?}: {reason}")]
    InvalidCategory {
        /// Category name as declared
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },
}
