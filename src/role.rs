//!
//! The `Role` entity: a named, reusable bundle of capability grants.
//!
//! A `Role` is a plain value. It owns a local copy of its capability map
//! and delegates every durable mutation to a [`RolesRegistry`] handle
//! passed in by the caller; queries resolve through a [`FilterChain`] so
//! that host policy can override the declared grants without touching the
//! stored map.

use crate::error::RegistryError;
use crate::filter::FilterChain;
use crate::primitives::CapabilityMap;
use crate::registry::RolesRegistry;
use crate::types::Grant;

/// A named role and its declared capability grants.
///
/// The name is immutable after construction. The capability map is mutated
/// only through [`Role::add_cap`], [`Role::add_cap_with`] and
/// [`Role::remove_cap`], which keep the registry's persisted state and the
/// local copy in agreement.
///
/// `Role` carries no interior synchronization. A value shared across
/// concurrent callers must be wrapped by the host; the registry handle is
/// the single shared authority and serializes mutations itself.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Role {
    name: String,
    capabilities: CapabilityMap,
}

impl Role {
    /// Creates a role from a name and an initial capability map, holding
    /// both unchanged.
    ///
    /// Any name string is accepted, the empty string included. Validation,
    /// where wanted, belongs to the caller or the registry.
    pub fn new(name: impl Into<String>, capabilities: CapabilityMap) -> Self {
        Role {
            name: name.into(),
            capabilities,
        }
    }

    /// Role name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared capability map, explicit negative grants included.
    ///
    /// This is raw stored state for collaborators that need to inspect it.
    /// Authorization decisions must go through [`Role::has_cap`] instead,
    /// since the filter chain may override what is stored here.
    pub fn capabilities(&self) -> &CapabilityMap {
        &self.capabilities
    }

    /// Grants a capability to the role.
    ///
    /// Shorthand for [`Role::add_cap_with`] with a positive grant.
    pub fn add_cap<R>(&mut self, registry: &R, cap: &str) -> Result<(), RegistryError>
    where
        R: RolesRegistry + ?Sized,
    {
        self.add_cap_with(registry, cap, true)
    }

    /// Sets the grant flag for a capability on the role.
    ///
    /// The registry delegation runs first; the local map is updated only
    /// when the registry accepted the mutation. On `Err` the local map is
    /// unchanged and persisted state stays authoritative.
    ///
    /// Passing `grant = false` records an explicit negative grant: the key
    /// is retained in the map but the capability evaluates as not granted.
    pub fn add_cap_with<R>(
        &mut self,
        registry: &R,
        cap: &str,
        grant: Grant,
    ) -> Result<(), RegistryError>
    where
        R: RolesRegistry + ?Sized,
    {
        registry.add_cap(&self.name, cap, grant)?;
        self.capabilities.set(cap, grant);
        Ok(())
    }

    /// Removes a capability from the role.
    ///
    /// The registry delegation runs first, as in [`Role::add_cap_with`].
    /// Removing a capability the role does not have is a silent no-op on
    /// both sides, not an error.
    pub fn remove_cap<R>(&mut self, registry: &R, cap: &str) -> Result<(), RegistryError>
    where
        R: RolesRegistry + ?Sized,
    {
        registry.remove_cap(&self.name, cap)?;
        self.capabilities.remove(cap);
        Ok(())
    }

    /// Determines whether the role has the given capability.
    ///
    /// The stored map is cloned and passed through the filter chain
    /// together with the queried capability name and the role name; the
    /// decision is made against the filtered result, never against the
    /// stored map directly. Default-deny: a capability that is absent from
    /// the filtered map, or present with a negative grant, evaluates to
    /// `false`.
    ///
    /// This is the sole read path for authorization decisions. It is total
    /// and never fails.
    pub fn has_cap(&self, filters: &FilterChain, cap: &str) -> bool {
        let effective = filters.apply(self.capabilities.clone(), cap, &self.name);
        effective.granted(cap)
    }
}
