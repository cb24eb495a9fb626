use std::collections::HashMap;

use crate::types::Grant;

// --- Capability map ---------------------------------------------------------

/// Mapping from capability name to grant flag.
///
/// Capability names are opaque identifiers; no validation is performed on
/// them. Every present key maps to a boolean, by construction.
///
/// A key present with value `false` is an explicit negative grant and is
/// distinct from an absent key. Both evaluate as "not granted", but the
/// explicit negative stays visible to collaborators that inspect raw
/// capability maps (admin tooling, the registry) and survives
/// serialization. [`CapabilityMap::remove`] deletes the key entirely;
/// `set(cap, false)` retains it.
#[derive(Clone, Default, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CapabilityMap(pub HashMap<String, Grant>);

impl CapabilityMap {
    /// Creates an empty capability map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grant flag for `cap`, inserting the key if absent.
    pub fn set(&mut self, cap: impl Into<String>, grant: Grant) {
        self.0.insert(cap.into(), grant);
    }

    /// Deletes `cap` from the map, returning the previous grant flag.
    /// Removing an absent key is a no-op and returns `None`.
    pub fn remove(&mut self, cap: &str) -> Option<Grant> {
        self.0.remove(cap)
    }

    /// Default-deny lookup: `true` only when `cap` is present with a
    /// positive grant. Absent keys and explicit negative grants both
    /// evaluate to `false`.
    pub fn granted(&self, cap: &str) -> bool {
        self.0.get(cap).copied().unwrap_or(false)
    }

    /// Whether `cap` is present at all, regardless of its grant flag.
    pub fn contains(&self, cap: &str) -> bool {
        self.0.contains_key(cap)
    }

    /// Number of declared grants, explicit negatives included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(capability, grant)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Grant)> + '_ {
        self.0.iter().map(|(cap, grant)| (cap.as_str(), *grant))
    }
}

impl FromIterator<(String, Grant)> for CapabilityMap {
    fn from_iter<I: IntoIterator<Item = (String, Grant)>>(iter: I) -> Self {
        CapabilityMap(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, Grant); N]> for CapabilityMap {
    fn from(entries: [(&str, Grant); N]) -> Self {
        entries
            .into_iter()
            .map(|(cap, grant)| (cap.to_string(), grant))
            .collect()
    }
}
