//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for testing the
//! envboot library without touching the real process environment.

use std::path::PathBuf;

use envboot::{Bootstrap, Config, EnvSnapshot};

/// Seed node addresses used across scenarios.
#[allow(dead_code)]
pub const SEED_A: &str = "akka.tcp://Sys@localhost:9140";
#[allow(dead_code)]
pub const SEED_B: &str = "akka.tcp://Sys@localhost:9141";

/// Builds a snapshot from literal name/value pairs.
pub fn snapshot(pairs: &[(&str, &str)]) -> EnvSnapshot {
    EnvSnapshot::from_pairs(pairs.iter().copied())
}

/// Bootstraps `base` from `pairs` with a fixed default host name.
///
/// # Panics
///
/// Panics if the environment contains a malformed list.
#[allow(dead_code)]
pub fn bootstrap(pairs: &[(&str, &str)], base: &Config) -> Config {
    Bootstrap::new()
        .with_environment(snapshot(pairs))
        .with_default_hostname("test-host")
        .apply(base)
        .expect("bootstrap should succeed")
}

/// A base configuration resembling a typical cluster node.
#[allow(dead_code)]
pub fn node_base() -> Config {
    Config::parse_str(&std::fs::read_to_string(fixture_path("node.conf")).unwrap()).unwrap()
}

/// Path to a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}
