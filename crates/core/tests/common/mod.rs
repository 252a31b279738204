//! Shared helpers for the registry tests.

use std::collections::HashMap;

use regspace_core::{Family, RegId};
use tracing_subscriber::EnvFilter;


/// Five x86 records: two 64-bit only, two shared with 32-bit mode, one pseudo flag.
pub const X86_FIXTURE: &str = r#"[
    {"name": "RAX", "lower_name": "rax",
     "x86_64": {"upper": 63, "lower": 0, "parent": "RAX"},
     "x86": {"upper": 31, "lower": 0, "parent": "EAX"},
     "x86_avail": false},
    {"name": "EAX", "lower_name": "eax",
     "x86_64": {"upper": 31, "lower": 0, "parent": "RAX"},
     "x86": {"upper": 31, "lower": 0, "parent": "EAX"},
     "x86_avail": true},
    {"name": "AH", "lower_name": "ah",
     "x86_64": {"upper": 15, "lower": 8, "parent": "RAX"},
     "x86": {"upper": 15, "lower": 8, "parent": "EAX"},
     "x86_avail": true},
    {"name": "R8", "lower_name": "r8",
     "x86_64": {"upper": 63, "lower": 0, "parent": "R8"},
     "x86": {"upper": 63, "lower": 0, "parent": "R8"},
     "x86_avail": false},
    {"name": "ZF", "lower_name": "zf",
     "x86_64": {"upper": 6, "lower": 6, "parent": "EFLAGS"},
     "x86": {"upper": 6, "lower": 6, "parent": "EFLAGS"},
     "x86_avail": true, "kind": "pseudo"}
]"#;

/// Names of `X86_FIXTURE`, in record order.
pub const X86_FIXTURE_NAMES: [&str; 5] = ["RAX", "EAX", "AH", "R8", "ZF"];

/// Installs a `tracing` subscriber writing through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Resolver numbering `names` from 1 in the order given, for every family.
pub fn resolver_for(names: &[&str]) -> impl Fn(Family, &str) -> Option<RegId> + use<> {
    let ids: HashMap<String, RegId> = names
        .iter()
        .zip(1_u32..)
        .map(|(name, raw)| ((*name).to_string(), RegId::new(raw)))
        .collect();
    move |_, name| ids.get(name).copied()
}
