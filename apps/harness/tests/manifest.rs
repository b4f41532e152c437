//! Tests for the suite manifest.

use llm::{Client, GateConfig, Gateway};
use nemu_harness::suites::manifest;
use runner::Runner;
use std::collections::HashSet;

#[test]
fn manifest_names_are_unique() {
    let names: Vec<&str> = manifest().iter().map(|s| s.name).collect();
    let unique: HashSet<&str> = names.iter().copied().collect();
    assert_eq!(names.len(), unique.len());
}

#[test]
fn active_suites_enqueue_operations() {
    let config = GateConfig::new("http://localhost:9", "test-key");
    let gateway = Gateway::new(Client::new(), &config).expect("gateway");
    let mut r = Runner::new(gateway);

    for suite in manifest().iter().filter(|s| !s.skip) {
        (suite.register)(&mut r);
    }
    assert_eq!(r.queued(), 2);
}
