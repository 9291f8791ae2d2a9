use assert_cmd::Command;
use edb_inspect_common::logging::ensure_test_logging;
use predicates::prelude::*;
use std::path::Path;
use tracing::info;

/// Build a command that never touches the user's home configuration
fn inspect(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("edb-inspect").unwrap();
    cmd.env("EDB_INSPECT_CONFIG", config_dir.join("edb-inspect.toml"));
    cmd
}

#[test]
fn test_help_command() {
    ensure_test_logging(None);
    info!("Testing CLI help command");

    let dir = tempfile::tempdir().unwrap();
    inspect(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EVM bytecode and snapshot viewer"));
}

#[test]
fn test_version_command() {
    ensure_test_logging(None);
    info!("Running test");

    let dir = tempfile::tempdir().unwrap();
    inspect(dir.path()).arg("--version").assert().success().stdout(predicate::str::contains("edb-inspect"));
}

#[test]
fn test_missing_subcommand() {
    ensure_test_logging(None);
    info!("Running test");

    let dir = tempfile::tempdir().unwrap();
    inspect(dir.path()).assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_disasm_inline() {
    ensure_test_logging(None);
    info!("Running test");

    let dir = tempfile::tempdir().unwrap();
    inspect(dir.path())
        .args(["disasm", "0x60016002010c00"])
        .assert()
        .success()
        .stdout("0000  PUSH1 0x01\n0002  PUSH1 0x02\n0004  ADD\n");
}

#[test]
fn test_disasm_from_file() {
    ensure_test_logging(None);
    info!("Running test");

    let dir = tempfile::tempdir().unwrap();
    let code = dir.path().join("code.hex");
    std::fs::write(&code, "0x61abcd\n").unwrap();

    inspect(dir.path())
        .arg("disasm")
        .arg("--file")
        .arg(&code)
        .assert()
        .success()
        .stdout("0000  PUSH2 0xabcd\n0003  STOP\n");
}

#[test]
fn test_disasm_invalid_hex() {
    ensure_test_logging(None);
    info!("Running test");

    let dir = tempfile::tempdir().unwrap();
    inspect(dir.path())
        .args(["disasm", "0xzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex input"));
}

#[test]
fn test_value_classification() {
    ensure_test_logging(None);
    info!("Running test");

    let dir = tempfile::tempdir().unwrap();
    inspect(dir.path()).args(["value", "0x2a"]).assert().success().stdout(" 42 (0x2a)\n");
    inspect(dir.path())
        .args(["value", &format!("0x4142{}05", "00".repeat(29))])
        .assert()
        .success()
        .stdout("\"AB\" + 5\n");
    inspect(dir.path())
        .args(["--html", "value", &format!("0x3c62{}", "00".repeat(30))])
        .assert()
        .success()
        .stdout("\"&lt;b\"\n");
}

#[test]
fn test_value_uses_configured_names() {
    ensure_test_logging(None);
    info!("Running test");

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("edb-inspect.toml"),
        "[names]\n\"0x10000000000000000000000000000000deadbeef\" = \"Vault\"\n",
    )
    .unwrap();

    inspect(dir.path())
        .args(["value", "0x10000000000000000000000000000000deadbeef"])
        .assert()
        .success()
        .stdout("Vault(0x1000…beef)\n");
    inspect(dir.path())
        .args(["value", "0x20000000000000000000000000000000deadbeef"])
        .assert()
        .success()
        .stdout("0x20000000000000000000000000000000deadbeef\n");
}

#[test]
fn test_snapshot_panels() {
    ensure_test_logging(None);
    info!("Running test");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(
        &path,
        r#"{
            "pc": 7,
            "instruction": 0,
            "gas": 10,
            "gasCost": 0,
            "steps": 3,
            "stack": ["0x1", "0x2"],
            "memory": "0x0102",
            "address": "0x1111111111111111111111111111111111111111"
        }"#,
    )
    .unwrap();

    inspect(dir.path())
        .arg("snapshot")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" STEP: 3  |  PC: 0x7  :  STOP"))
        .stdout(predicate::str::contains("[stack]\n 2 (0x2)\n 1 (0x1)\n"))
        .stdout(predicate::str::contains("[memory]\n0000 01 02 \n"))
        .stdout(predicate::str::contains("[levels]\n1111…1111\n"))
        .stdout(predicate::str::ends_with("[outcome]\nSTOP\n"));
}

#[test]
fn test_snapshot_missing_file() {
    ensure_test_logging(None);
    info!("Running test");

    let dir = tempfile::tempdir().unwrap();
    inspect(dir.path()).args(["snapshot", "does-not-exist.json"]).assert().failure();
}

#[test]
fn test_config_init() {
    ensure_test_logging(None);
    info!("Running test");

    let dir = tempfile::tempdir().unwrap();
    inspect(dir.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("surface = \"plain\""));
    assert!(dir.path().join("edb-inspect.toml").exists());
}

#[test]
fn test_log_file_creates_log_directory() {
    ensure_test_logging(None);
    info!("Running test");

    let dir = tempfile::tempdir().unwrap();
    let tmp = dir.path().join("tmp");
    std::fs::create_dir_all(&tmp).unwrap();

    inspect(dir.path())
        .env("TMPDIR", &tmp)
        .env("TMP", &tmp)
        .env("TEMP", &tmp)
        .args(["--log-file", "value", "0x2a"])
        .assert()
        .success()
        .stdout(" 42 (0x2a)\n");

    assert!(tmp.join("edb-inspect-logs").join("edb-inspect").is_dir());
}
