use proptest::prelude::*;
use rbac_core::filter::FilterChain;
use rbac_core::registry::InMemoryRolesRegistry;
use rbac_core::CapabilityMap;

// Strategy for generating a capability name
fn cap_name() -> impl Strategy<Value = String> {
    "[a-z_]{1,16}"
}

// Strategy for generating an initial capability map with 0 to 10 entries.
fn initial_caps() -> impl Strategy<Value = CapabilityMap> {
    prop::collection::hash_map(cap_name(), any::<bool>(), 0..10).prop_map(CapabilityMap)
}

fn registered_role(caps: CapabilityMap) -> (InMemoryRolesRegistry, rbac_core::role::Role) {
    let registry = InMemoryRolesRegistry::new();
    let role = registry
        .add_role("editor", caps)
        .expect("fresh registry cannot hold the role yet");
    (registry, role)
}

proptest! {
    /// After a successful positive grant, the capability resolves true
    /// through an identity chain.
    #[test]
    fn prop_add_then_has(caps in initial_caps(), cap in cap_name()) {
        let (registry, mut role) = registered_role(caps);
        role.add_cap(&registry, &cap).unwrap();
        prop_assert!(role.has_cap(&FilterChain::new(), &cap));
    }

    /// An explicit negative grant keeps the key in the stored map but never
    /// resolves true.
    #[test]
    fn prop_explicit_negative_retained(caps in initial_caps(), cap in cap_name()) {
        let (registry, mut role) = registered_role(caps);
        role.add_cap_with(&registry, &cap, false).unwrap();
        prop_assert!(role.capabilities().contains(&cap));
        prop_assert!(!role.has_cap(&FilterChain::new(), &cap));
    }

    /// After removal the key is absent and the query default-denies.
    #[test]
    fn prop_remove_then_absent(caps in initial_caps(), cap in cap_name()) {
        let (registry, mut role) = registered_role(caps);
        role.remove_cap(&registry, &cap).unwrap();
        prop_assert!(!role.capabilities().contains(&cap));
        prop_assert!(!role.has_cap(&FilterChain::new(), &cap));
    }

    /// Removing twice in a row produces the same end state as removing once.
    #[test]
    fn prop_remove_is_idempotent(caps in initial_caps(), cap in cap_name()) {
        let (registry, mut role) = registered_role(caps);
        role.remove_cap(&registry, &cap).unwrap();
        let once = role.clone();
        role.remove_cap(&registry, &cap).unwrap();
        prop_assert_eq!(role, once);
        // The registry view converges the same way.
        let stored = registry.get_role("editor").expect("role stays registered");
        prop_assert!(!stored.capabilities().contains(&cap));
    }

    /// A freshly constructed role with no grants denies every query.
    #[test]
    fn prop_default_deny_on_empty_map(cap in cap_name()) {
        let (_, role) = registered_role(CapabilityMap::new());
        prop_assert!(!role.has_cap(&FilterChain::new(), &cap));
    }

    /// With an identity chain, has_cap agrees with the default-deny lookup
    /// on the stored map, and the query leaves the role untouched.
    #[test]
    fn prop_identity_chain_matches_stored_state(caps in initial_caps(), cap in cap_name()) {
        let (_, role) = registered_role(caps);
        let before = role.clone();
        prop_assert_eq!(role.has_cap(&FilterChain::new(), &cap), role.capabilities().granted(&cap));
        prop_assert_eq!(role, before);
    }

    /// After any successful mutation the registry's view of the role equals
    /// the local value.
    #[test]
    fn prop_local_and_registry_agree(
        caps in initial_caps(),
        cap in cap_name(),
        grant in any::<bool>(),
        remove in any::<bool>()
    ) {
        let (registry, mut role) = registered_role(caps);
        if remove {
            role.remove_cap(&registry, &cap).unwrap();
        } else {
            role.add_cap_with(&registry, &cap, grant).unwrap();
        }
        let stored = registry.get_role("editor").expect("role stays registered");
        prop_assert_eq!(stored, role);
    }
}
