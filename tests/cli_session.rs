//! CLI integration tests for the `pxg` binary.
//!
//! Drives the interactive session and the `run` subcommand through real
//! processes with piped stdin, checking stdout renderings, stderr reports
//! and exit codes.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Path to the pxg binary built by cargo for integration tests.
fn pxg_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pxg"))
}

/// Write an empty config so host config files never leak into tests.
fn empty_config(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("pxg.toml");
    std::fs::write(&path, "").unwrap();
    path
}

/// Run pxg with the given arguments and stdin; return (stdout, stderr, exit code).
fn run_pxg(config: &Path, args: &[&str], stdin: &str) -> (String, String, i32) {
    let mut child = Command::new(pxg_binary())
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("PXG_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute pxg");
    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    let output = child.wait_with_output().expect("Failed to wait for pxg");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.code().unwrap_or(-1))
}

// ============================================================================
// Interactive session
// ============================================================================

#[test]
fn test_repl_scenario() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = empty_config(&dir);

    let (stdout, _, code) =
        run_pxg(&config, &["--no-menu"], "I 5 3\nL 1 1 A\nF 2 1 X\nS\nX\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("AXXXX\nXXXXX\nXXXXX\n"), "stdout: {}", stdout);
}

#[test]
fn test_repl_prints_menu_by_default() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = empty_config(&dir);

    let (stdout, _, code) = run_pxg(&config, &[], "X\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("Commands:"));
    assert!(stdout.contains("[V X Y1 Y2 C]"));
    assert!(stdout.contains("Please enter your command"));
}

#[test]
fn test_repl_reports_errors_and_continues() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = empty_config(&dir);

    let (stdout, _, code) =
        run_pxg(&config, &["--no-menu"], "S\nI 2 2\nL 1000 1 A\nV 1 2 1 A\nS\n");
    assert_eq!(code, 0, "end of input should end the session cleanly");
    assert!(stdout.contains("You need to create an image first!"));
    assert!(stdout.contains("out of bounds"));
    assert!(stdout.contains("Invalid arguments provided."));
    assert!(stdout.contains("OO\nOO\n"));
}

#[test]
fn test_config_file_settings() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[session]\nshow_menu = false\nprompt = \"pxg>\"\nmax_width = 3\n")
        .unwrap();

    let (stdout, _, code) = run_pxg(&config, &[], "I 4 1\nI 3 1\nS\n");
    assert_eq!(code, 0);
    assert!(!stdout.contains("Commands:"));
    assert!(stdout.contains("pxg>"));
    assert!(stdout.contains("Invalid range of values"));
    assert!(stdout.contains("OOO\n"));
}

#[test]
fn test_invalid_config_exits_with_invalid_args() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "[logging]\nlevel = \"loud\"\n").unwrap();

    let (_, stderr, code) = run_pxg(&config, &[], "");
    assert_eq!(code, 2);
    assert!(stderr.contains("logging.level"), "stderr: {}", stderr);
}

// ============================================================================
// Script runner
// ============================================================================

#[test]
fn test_run_script_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = empty_config(&dir);
    let script = dir.path().join("art.txt");
    std::fs::write(&script, "# border\nI 5 3\nH 1 3 2 Z\nS\n").unwrap();

    let (stdout, stderr, code) = run_pxg(&config, &["run", script.to_str().unwrap()], "");
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, "OOOOO\nZZZOO\nOOOOO\n");
}

#[test]
fn test_run_script_from_stdin() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = empty_config(&dir);

    let (stdout, _, code) = run_pxg(&config, &["run", "-"], "I 2 2\nV 2 1 2 Q\nS\n");
    assert_eq!(code, 0);
    assert_eq!(stdout, "OQ\nOQ\n");
}

#[test]
fn test_run_strict_fails_on_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = empty_config(&dir);

    let (stdout, stderr, code) = run_pxg(&config, &["run", "-", "--strict"], "I 2 1\nL 3 1 A\nS\n");
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("line 2:"), "stderr: {}", stderr);
}

#[test]
fn test_run_lenient_continues_after_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = empty_config(&dir);

    let (stdout, stderr, code) = run_pxg(&config, &["run", "-"], "I 2 1\nL 3 1 A\nS\n");
    assert_eq!(code, 0);
    assert_eq!(stdout, "OO\n");
    assert!(stderr.contains("line 2:"));
}

#[test]
fn test_run_missing_script() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = empty_config(&dir);
    let missing = dir.path().join("missing.txt");

    let (_, stderr, code) = run_pxg(&config, &["run", missing.to_str().unwrap()], "");
    assert_eq!(code, 2);
    assert!(stderr.contains("Cannot open script"));
}
