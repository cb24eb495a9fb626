//!
//! Query-time capability filtering.
//!
//! Every `has_cap` decision is made against the map returned by a
//! `FilterChain`, not against the role's stored map. This lets host policy
//! grant or revoke capabilities at evaluation time (emergency lockdown,
//! audit holds) irrespective of stored state. Filters are registered at
//! system-configuration time and run in registration order; an empty chain
//! is the identity transform.

use crate::primitives::CapabilityMap;

/// A single policy hook that may rewrite the effective capability map for
/// one query.
///
/// The hook receives the map by value (the caller has already copied it)
/// and may add, remove or flip entries. The queried capability name and the
/// role name are provided for context.
pub trait CapabilityFilter: Send + Sync {
    fn filter(&self, capabilities: CapabilityMap, cap: &str, role_name: &str) -> CapabilityMap;
}

impl<F> CapabilityFilter for F
where
    F: Fn(CapabilityMap, &str, &str) -> CapabilityMap + Send + Sync,
{
    fn filter(&self, capabilities: CapabilityMap, cap: &str, role_name: &str) -> CapabilityMap {
        self(capabilities, cap, role_name)
    }
}

/// Ordered chain of capability filters.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn CapabilityFilter>>,
}

impl FilterChain {
    /// Creates an empty chain (identity transform).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter to the chain. Filters run in registration order;
    /// each one sees the output of its predecessor.
    pub fn register<F>(&mut self, filter: F)
    where
        F: CapabilityFilter + 'static,
    {
        self.filters.push(Box::new(filter));
    }

    /// Runs `capabilities` through every registered filter and returns the
    /// effective map to evaluate against. The input value is consumed; the
    /// caller's stored state is never touched.
    pub fn apply(&self, capabilities: CapabilityMap, cap: &str, role_name: &str) -> CapabilityMap {
        if self.filters.is_empty() {
            return capabilities;
        }
        tracing::debug!(
            "Applying {} capability filter(s) for '{}' on role '{}'",
            self.filters.len(),
            cap,
            role_name
        );
        let mut effective = capabilities;
        for filter in &self.filters {
            effective = filter.filter(effective, cap, role_name);
        }
        effective
    }

    /// Number of registered filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("filters", &self.filters.len())
            .finish()
    }
}
