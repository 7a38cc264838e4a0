//! Build-graph hygiene: each crate declares exactly the dependencies it
//! uses, and every library crate carries the same lint header.

use std::fs;
use std::path::Path;

/// Resolve the workspace root from `CARGO_MANIFEST_DIR` of the lock-tests crate.
fn workspace_root() -> &'static Path {
    // lock-tests lives at tests/lock/, so workspace root is ../..
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

/// Dependency names declared under `[dependencies]` in a `Cargo.toml`.
fn runtime_dependencies(manifest: &Path) -> Vec<String> {
    let content = fs::read_to_string(manifest)
        .unwrap_or_else(|e| panic!("read {}: {e}", manifest.display()));
    let mut in_section = false;
    let mut deps = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            in_section = trimmed == "[dependencies]";
            continue;
        }
        if !in_section || trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((name, _)) = trimmed.split_once('=') {
            deps.push(name.trim().to_string());
        }
    }
    deps.sort();
    deps
}

fn assert_dependencies(crate_dir: &str, expected: &[&str]) {
    let manifest = workspace_root().join(crate_dir).join("Cargo.toml");
    let mut expected: Vec<String> = expected.iter().map(ToString::to_string).collect();
    expected.sort();
    assert_eq!(
        runtime_dependencies(&manifest),
        expected,
        "unexpected [dependencies] in {crate_dir}/Cargo.toml"
    );
}

#[test]
fn geometry_has_no_dependencies() {
    assert_dependencies("geometry", &[]);
}

#[test]
fn search_depends_only_on_json_and_tracing() {
    assert_dependencies("search", &["serde_json", "tracing"]);
}

#[test]
fn hashing_crates_live_only_in_harness() {
    assert_dependencies(
        "harness",
        &[
            "hex",
            "serde_json",
            "sha2",
            "tracing",
            "tracing-subscriber",
            "wayfind-geometry",
            "wayfind-search",
        ],
    );
}

#[test]
fn lock_tests_reach_reports_through_the_harness() {
    assert_dependencies(
        "tests/lock",
        &["wayfind-geometry", "wayfind-harness", "wayfind-search"],
    );
}

#[test]
fn library_crates_share_the_lint_header() {
    for crate_dir in ["geometry", "search", "harness"] {
        let lib = workspace_root().join(crate_dir).join("src").join("lib.rs");
        let content = fs::read_to_string(&lib)
            .unwrap_or_else(|e| panic!("read {}: {e}", lib.display()));
        for attr in [
            "#![forbid(unsafe_code)]",
            "#![deny(clippy::all)]",
            "#![warn(clippy::pedantic)]",
        ] {
            assert!(
                content.lines().any(|l| l.trim() == attr),
                "{crate_dir}/src/lib.rs is missing {attr}"
            );
        }
    }
}
