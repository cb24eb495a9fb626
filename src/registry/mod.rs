//!
//! Registry abstraction for durable role state.
//!
//! The registry is the process-wide authority on roles and their capability
//! assignments. A [`Role`](crate::role::Role) value delegates every durable
//! mutation to a registry handle so persisted state and the in-memory copy
//! stay in agreement. The handle is injected by the caller; nothing in this
//! crate reaches into global state.

use crate::error::RegistryError;
use crate::types::Grant;

/// The registry surface consumed by [`Role`](crate::role::Role).
///
/// Receivers are `&self`: a registry is a shared authority and must
/// serialize concurrent mutations to the same role's persisted capability
/// set internally (a storage transaction, a lock). Both operations are
/// idempotent on repeated identical calls.
pub trait RolesRegistry {
    /// Persists a single capability grant for the named role.
    fn add_cap(&self, role_name: &str, cap: &str, grant: Grant) -> Result<(), RegistryError>;

    /// Persists removal of a capability for the named role. Removing a
    /// capability the role does not have is not an error.
    fn remove_cap(&self, role_name: &str, cap: &str) -> Result<(), RegistryError>;
}

// Module for the in-memory registry implementation.
pub mod memory;

// Re-export the concrete registry for easier access
pub use memory::InMemoryRolesRegistry;
