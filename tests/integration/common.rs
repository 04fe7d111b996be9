//! Common test utilities for integration tests.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Returns the path to the ucmd binary built by `cargo test`.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ucmd"))
}

/// Builds a command for the ucmd binary, isolated from the user's config
/// and environment unless `args` names a config file itself.
fn ucmd(args: &[&str]) -> Command {
    let mut cmd = Command::new(binary_path());
    if !args.contains(&"--config") {
        cmd.args(["--config", "/nonexistent/ucmd/config.toml"]);
    }
    cmd.args(args)
        .env_remove("UCMD_DELIMITERS")
        .env_remove("RUST_LOG");
    cmd
}

/// Runs ucmd with the given arguments and no stdin.
/// Returns (exit code, stdout, stderr).
pub fn run_ucmd(args: &[&str]) -> (i32, String, String) {
    let output = ucmd(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

/// Runs ucmd with `input` piped to stdin.
/// Returns (exit code, stdout, stderr).
pub fn run_ucmd_with_stdin(args: &[&str], input: &str) -> (i32, String, String) {
    let mut child = ucmd(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait on command");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}
