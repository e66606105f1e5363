//! Common test utilities shared across integration tests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Get the workspace root directory
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // Go up from crates/fieldsift to workspace root
    manifest_dir
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Helper that builds the binary once and runs it directly
pub fn get_fieldsift_binary() -> PathBuf {
    let workspace = workspace_root();

    // Build the binary first (this should be quick if already built)
    let status = Command::new("cargo")
        .args(["build", "--package", "fieldsift", "--quiet"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build fieldsift");

    assert!(status.success(), "Failed to build fieldsift binary");

    workspace.join("target/debug/fieldsift")
}

/// Run the fieldsift binary with the given arguments and stdin contents
pub fn run_fieldsift(args: &[&str], input: &[u8]) -> Output {
    let binary = get_fieldsift_binary();

    let mut child = Command::new(&binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn fieldsift binary");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input)
        .expect("Failed to write to stdin");

    child
        .wait_with_output()
        .expect("Failed to wait for fieldsift binary")
}
