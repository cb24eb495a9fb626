#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! rbac-core is a role-based access-control primitive.
//!
//! This crate provides the `Role` entity (a named bundle of capability
//! grants), the registry abstraction through which grants are persisted
//! across the host system, and the query-time filter chain through which
//! every authorization decision is resolved.

// Module for shared scalar types (Grant).
pub mod types;

// Module for core value types (CapabilityMap).
pub mod primitives;

// Re-export the core value types for easier access at the crate root.
pub use primitives::*;

// Module for the Role entity and its grant/revoke/query operations.
pub mod role;

// Module for the registry abstraction and the in-memory implementation.
pub mod registry;

// Module for query-time capability filtering.
pub mod filter;

// Module for registry error types.
pub mod error;

// Test doubles for exercising registry delegation.
#[cfg(feature = "test-utils")]
pub mod test_utils;

#[cfg(test)]
mod tests {
    use crate::filter::FilterChain;
    use crate::primitives::CapabilityMap;
    use crate::role::Role;

    #[test]
    fn fresh_role_denies_everything() {
        let role = Role::new("subscriber", CapabilityMap::new());
        assert!(!role.has_cap(&FilterChain::new(), "edit_posts"));
    }
}
