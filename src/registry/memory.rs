//!
//! In-memory implementation of the `RolesRegistry` contract, with the role
//! lifecycle surface a host uses to define roles in the first place.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::RolesRegistry;
use crate::error::RegistryError;
use crate::primitives::CapabilityMap;
use crate::role::Role;
use crate::types::Grant;

/// A `RolesRegistry` backed by a mutex-guarded table of capability maps.
///
/// Mutations to any role serialize through the mutex. Roles must be
/// registered with [`InMemoryRolesRegistry::add_role`] before capability
/// delegation; `add_cap`/`remove_cap` against an unknown role name return
/// [`RegistryError::RoleNotFound`].
#[derive(Debug, Default)]
pub struct InMemoryRolesRegistry {
    roles: Mutex<HashMap<String, CapabilityMap>>,
}

impl InMemoryRolesRegistry {
    /// Creates a registry with no roles.
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock still holds a consistent map; recover the guard.
    fn table(&self) -> MutexGuard<'_, HashMap<String, CapabilityMap>> {
        self.roles.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a role and returns the corresponding `Role` value.
    ///
    /// Role names are opaque and not validated. Registering a name that is
    /// already present fails with [`RegistryError::RoleExists`].
    pub fn add_role(
        &self,
        name: &str,
        capabilities: CapabilityMap,
    ) -> Result<Role, RegistryError> {
        match self.table().entry(name.to_string()) {
            Entry::Occupied(_) => Err(RegistryError::RoleExists(name.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(capabilities.clone());
                tracing::debug!(
                    "Registered role '{}' with {} capability grant(s)",
                    name,
                    capabilities.len()
                );
                Ok(Role::new(name, capabilities))
            }
        }
    }

    /// Unregisters a role. Removing an unknown name is a no-op.
    pub fn remove_role(&self, name: &str) {
        if self.table().remove(name).is_some() {
            tracing::debug!("Unregistered role '{}'", name);
        }
    }

    /// Reconstructs a `Role` value from the stored state.
    pub fn get_role(&self, name: &str) -> Option<Role> {
        self.table()
            .get(name)
            .map(|capabilities| Role::new(name, capabilities.clone()))
    }

    /// Whether a role with the given name is registered.
    pub fn is_role(&self, name: &str) -> bool {
        self.table().contains_key(name)
    }

    /// Names of all registered roles, sorted for deterministic listings.
    pub fn role_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.table().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl RolesRegistry for InMemoryRolesRegistry {
    fn add_cap(&self, role_name: &str, cap: &str, grant: Grant) -> Result<(), RegistryError> {
        match self.table().get_mut(role_name) {
            Some(capabilities) => {
                capabilities.set(cap, grant);
                tracing::debug!(
                    "Persisted capability '{}' = {} for role '{}'",
                    cap,
                    grant,
                    role_name
                );
                Ok(())
            }
            None => Err(RegistryError::RoleNotFound(role_name.to_string())),
        }
    }

    fn remove_cap(&self, role_name: &str, cap: &str) -> Result<(), RegistryError> {
        match self.table().get_mut(role_name) {
            Some(capabilities) => {
                if capabilities.remove(cap).is_some() {
                    tracing::debug!("Removed capability '{}' from role '{}'", cap, role_name);
                }
                Ok(())
            }
            None => Err(RegistryError::RoleNotFound(role_name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_role_then_get_role_round_trips() {
        let registry = InMemoryRolesRegistry::new();
        let caps = CapabilityMap::from([("edit_posts", true), ("delete_posts", false)]);
        let created = registry.add_role("editor", caps).unwrap();
        assert_eq!(registry.get_role("editor"), Some(created));
    }

    #[test]
    fn test_duplicate_role_name_is_rejected() {
        let registry = InMemoryRolesRegistry::new();
        registry.add_role("editor", CapabilityMap::new()).unwrap();
        let err = registry
            .add_role("editor", CapabilityMap::new())
            .unwrap_err();
        assert_eq!(err, RegistryError::RoleExists("editor".to_string()));
    }

    #[test]
    fn test_add_cap_requires_a_registered_role() {
        let registry = InMemoryRolesRegistry::new();
        let err = registry.add_cap("ghost", "edit_posts", true).unwrap_err();
        assert_eq!(err, RegistryError::RoleNotFound("ghost".to_string()));
        let err = registry.remove_cap("ghost", "edit_posts").unwrap_err();
        assert_eq!(err, RegistryError::RoleNotFound("ghost".to_string()));
    }

    #[test]
    fn test_add_cap_is_idempotent() {
        let registry = InMemoryRolesRegistry::new();
        registry.add_role("editor", CapabilityMap::new()).unwrap();
        registry.add_cap("editor", "edit_posts", true).unwrap();
        let once = registry.get_role("editor").unwrap();
        registry.add_cap("editor", "edit_posts", true).unwrap();
        assert_eq!(registry.get_role("editor").unwrap(), once);
    }

    #[test]
    fn test_remove_cap_is_idempotent_when_absent() {
        let registry = InMemoryRolesRegistry::new();
        registry.add_role("editor", CapabilityMap::new()).unwrap();
        registry.remove_cap("editor", "edit_posts").unwrap();
        registry.remove_cap("editor", "edit_posts").unwrap();
        assert!(registry.get_role("editor").unwrap().capabilities().is_empty());
    }

    #[test]
    fn test_role_names_are_sorted() {
        let registry = InMemoryRolesRegistry::new();
        for name in ["editor", "administrator", "subscriber"] {
            registry.add_role(name, CapabilityMap::new()).unwrap();
        }
        assert_eq!(
            registry.role_names(),
            vec!["administrator", "editor", "subscriber"]
        );
        registry.remove_role("editor");
        assert!(!registry.is_role("editor"));
        assert_eq!(registry.role_names(), vec!["administrator", "subscriber"]);
    }
}
