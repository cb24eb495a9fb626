//!
//! Shared scalar types for the RBAC core.

/// Grant flag for a single capability, as stored in a
/// [`CapabilityMap`](crate::primitives::CapabilityMap).
///
/// `true` grants the capability. `false` is an explicit negative grant: the
/// key stays visible to collaborators that inspect raw capability maps, but
/// the capability still evaluates as not granted.
pub type Grant = bool;
