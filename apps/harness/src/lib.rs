//! Library surface of the nemu harness binary.
//!
//! Exposes the suite manifest so tests can inspect registration without
//! touching the network.

pub mod suites;
