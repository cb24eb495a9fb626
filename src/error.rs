//!
//! Defines error types for registry delegation.

/// Represents errors signalled by a [`RolesRegistry`](crate::registry::RolesRegistry)
/// while persisting capability grants or managing role lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The named role is not present in the registry.
    #[error("Role '{0}' not found in registry")]
    RoleNotFound(String),
    /// A role with the given name is already registered.
    #[error("Role '{0}' already exists in registry")]
    RoleExists(String),
    /// The registry's backing store failed.
    #[error("Registry storage failure: {0}")]
    Storage(String),
    /// A general or otherwise unspecified error.
    #[error("Registry error: {0}")]
    Other(String),
}
