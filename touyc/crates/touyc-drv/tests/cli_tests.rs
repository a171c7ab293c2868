//! CLI Interface Tests
//!
//! These tests run the touyc binary against fixture files and check the
//! listing, the rendered diagnostics and the exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the touyc binary
fn touyc_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_touyc"))
}

/// A command that ignores any config or env from the surrounding shell.
fn touyc_in(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(touyc_bin());
    cmd.current_dir(dir)
        .env_remove("TOUYC_CONFIG")
        .env_remove("TOUYC_VERBOSE")
        .env_remove("TOUYC_NO_COLOR");
    cmd
}

#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    touyc_in(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("--keep-going")));
}

#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    touyc_in(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("touyc"));
}

#[test]
fn test_cli_lists_tokens() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    touyc_in(temp_dir.path())
        .arg(fixtures_dir().join("program.touy"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "2\t1\tIdentifier\tPoint\n2\t7\tOperator\t::\n2\t10\tKeyword\tstruct\n2\t17\tPunct\t{\n",
        ))
        .stdout(predicate::str::contains("9\t5\tKeyword\tdefer\n"))
        .stdout(predicate::str::contains("14\t6\tOperator\t++\n"))
        .stdout(predicate::str::contains("18\t10\tFloat\t0.500000\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_cli_json_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("small.touy");
    std::fs::write(&source, "n := 300;").unwrap();

    let output = touyc_in(temp_dir.path())
        .arg("--format")
        .arg("json")
        .arg(&source)
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().map(|a| a.len()), Some(4));
    assert_eq!(rows[2]["kind"], "Integer");
    assert_eq!(rows[2]["detail"], "300");
    assert_eq!(rows[2]["column"], 6);
}

#[test]
fn test_cli_halts_at_first_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let assert = touyc_in(temp_dir.path())
        .arg(fixtures_dir().join("malformed.touy"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error[E1002]: unexpected '.' in numeric literal"))
        .stderr(predicate::str::contains("malformed.touy:2:9"))
        .stderr(predicate::str::contains("y := 1.2.3;"))
        .stderr(predicate::str::contains("error: aborting due to 1 previous error"))
        .stderr(predicate::str::contains("E1001").not());

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.ends_with("2\t3\tOperator\t:=\n"));
}

#[test]
fn test_cli_keep_going() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    touyc_in(temp_dir.path())
        .arg("--keep-going")
        .arg(fixtures_dir().join("malformed.touy"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("3\t1\tIdentifier\tz\n"))
        .stderr(predicate::str::contains("error[E1001]: unrecognized byte '@'"))
        .stderr(predicate::str::contains("error: aborting due to 2 previous errors"));
}

#[test]
fn test_cli_unterminated_comment() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("open.touy");
    std::fs::write(&source, "x := 1;\n/* never closed\n").unwrap();

    touyc_in(temp_dir.path())
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E1003]: unterminated block comment"))
        .stderr(predicate::str::contains("open.touy:2:1"));
}

#[test]
fn test_cli_non_utf8_source() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("latin1.touy");
    std::fs::write(&source, b"x := 1;\n  \xE9 y\n").unwrap();

    touyc_in(temp_dir.path())
        .arg("--keep-going")
        .arg(&source)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("1\t1\tIdentifier\tx\n"))
        .stdout(predicate::str::contains("2\t5\tIdentifier\ty\n"))
        .stderr(predicate::str::contains("error[E1001]: unrecognized byte 0xE9"))
        .stderr(predicate::str::contains("latin1.touy:2:3"))
        .stderr(predicate::str::contains("could not read").not());
}

#[test]
fn test_cli_embedded_nul_is_reported() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("nul.touy");
    std::fs::write(&source, b"a\0b").unwrap();

    touyc_in(temp_dir.path())
        .arg(&source)
        .assert()
        .failure()
        .stdout("1\t1\tIdentifier\ta\n")
        .stderr(predicate::str::contains("error[E1001]: unrecognized byte 0x00"))
        .stderr(predicate::str::contains("nul.touy:1:2"));
}

#[test]
fn test_cli_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    touyc_in(temp_dir.path())
        .arg("does_not_exist.touy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: could not read `does_not_exist.touy`"));
}

#[test]
fn test_cli_config_file_in_working_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("touyc.toml"), "format = \"json\"\n").unwrap();
    std::fs::write(temp_dir.path().join("a.touy"), "a").unwrap();

    touyc_in(temp_dir.path())
        .arg("a.touy")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"Identifier\""));
}

#[test]
fn test_cli_flag_overrides_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = temp_dir.path().join("custom.toml");
    std::fs::write(&config, "format = \"json\"\nkeep_going = true\n").unwrap();
    std::fs::write(temp_dir.path().join("a.touy"), "a").unwrap();

    touyc_in(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .arg("--format")
        .arg("table")
        .arg("a.touy")
        .assert()
        .success()
        .stdout("1\t1\tIdentifier\ta\n");
}

#[test]
fn test_cli_invalid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("touyc.toml"), "format = 3\n").unwrap();
    std::fs::write(temp_dir.path().join("a.touy"), "a").unwrap();

    touyc_in(temp_dir.path())
        .arg("a.touy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("a.touy"), "a").unwrap();

    touyc_in(temp_dir.path())
        .arg("--verbose")
        .arg("--no-color")
        .arg("a.touy")
        .assert()
        .success()
        .stdout("1\t1\tIdentifier\ta\n")
        .stderr(predicate::str::contains("loaded source file"));
}

#[test]
fn test_cli_verbose_logs_configuration() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("touyc.toml"), "keep_going = true\n").unwrap();
    std::fs::write(temp_dir.path().join("a.touy"), "a").unwrap();

    touyc_in(temp_dir.path())
        .arg("--verbose")
        .arg("--no-color")
        .arg("a.touy")
        .assert()
        .success()
        .stderr(predicate::str::contains("using configuration"))
        .stderr(predicate::str::contains("keep_going: true"));
}
