#![no_main]

// Harness: role_ops – arbitrary grant/revoke/query sequences.
// Checks: local map and registry stay in agreement after successful
// mutations; queries are total and default-deny.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rbac_core::filter::FilterChain;
use rbac_core::registry::InMemoryRolesRegistry;
use rbac_core::CapabilityMap;

#[derive(Arbitrary, Debug, Clone)]
enum Op {
    Add { cap: String, grant: bool },
    Remove { cap: String },
    Query { cap: String },
}

fuzz_target!(|ops: Vec<Op>| {
    let registry = InMemoryRolesRegistry::new();
    let mut role = registry
        .add_role("fuzz", CapabilityMap::new())
        .expect("fresh registry");
    let chain = FilterChain::new();

    for op in ops {
        match op {
            Op::Add { cap, grant } => {
                role.add_cap_with(&registry, &cap, grant)
                    .expect("role is registered");
                assert!(role.capabilities().contains(&cap));
                assert_eq!(role.capabilities().granted(&cap), grant);
            }
            Op::Remove { cap } => {
                role.remove_cap(&registry, &cap).expect("role is registered");
                assert!(!role.capabilities().contains(&cap));
            }
            Op::Query { cap } => {
                // Identity chain: the decision must match the stored map.
                assert_eq!(role.has_cap(&chain, &cap), role.capabilities().granted(&cap));
            }
        }
    }

    // The registry view must equal the local value at the end of the run.
    let stored = registry.get_role("fuzz").expect("role is registered");
    assert_eq!(stored.capabilities(), role.capabilities());
});
