#![no_main]

// Harness: filter_query – arbitrary stored maps and forced filter outcomes
// through has_cap. Checks: the filter decides the outcome, the stored map
// is never mutated by a query, and evaluation never panics.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rbac_core::filter::FilterChain;
use rbac_core::role::Role;
use rbac_core::CapabilityMap;

#[derive(Arbitrary, Debug)]
struct QueryFrame {
    caps: Vec<(String, bool)>,
    query: String,
    // None = identity chain, Some(flag) = a filter forcing the queried
    // capability to that flag.
    force: Option<bool>,
}

fuzz_target!(|frame: QueryFrame| {
    let caps: CapabilityMap = frame.caps.into_iter().collect();
    let role = Role::new("fuzz", caps.clone());

    let mut chain = FilterChain::new();
    if let Some(flag) = frame.force {
        chain.register(move |mut m: CapabilityMap, cap: &str, _role: &str| {
            m.set(cap, flag);
            m
        });
    }

    let decision = role.has_cap(&chain, &frame.query);
    match frame.force {
        Some(flag) => assert_eq!(decision, flag),
        None => assert_eq!(decision, caps.granted(&frame.query)),
    }

    // Queries never touch stored state.
    assert_eq!(role.capabilities(), &caps);
});
