//! Runs the built `b58enc` binary and checks what reaches stdout, stderr and
//! the exit status.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const DEFAULT_KEY_BASE58: &str =
    "3AUwUXgu3RoPvEKauWWUXQvKfFNyAqrUze6urdB9UbZCih8LJCfgDDagxhspxzEkqYhVZhWryLRkRTwkVvdhGrNN";

fn b58enc() -> Command {
    let mut cmd = Command::cargo_bin("b58enc").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn default_run_prints_only_the_encoded_key() {
    b58enc()
        .assert()
        .success()
        .stdout(format!("{DEFAULT_KEY_BASE58}\n"))
        .stderr("");
}

#[test]
fn values_are_encoded() {
    b58enc()
        .args(["--values", "0,0,1"])
        .assert()
        .success()
        .stdout("112\n");
}

#[test]
fn out_of_range_value_fails_with_empty_stdout() {
    b58enc()
        .args(["--values", "1,300"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("error: Byte value 300"));
}

#[test]
fn value_beyond_i64_is_an_encode_error() {
    b58enc()
        .args(["--values", "-99999999999999999999"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with(
            "error: Byte value -99999999999999999999 at index 0",
        ));
}

#[test]
fn key_file_run() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{\"_keypair\": {\"secretKey\": {\"1\": 1, \"0\": 0}}}")
        .unwrap();
    b58enc()
        .arg("--keypair")
        .arg(file.path())
        .assert()
        .success()
        .stdout("12\n");
}

#[test]
fn missing_key_file_fails() {
    b58enc()
        .args(["--keypair", "/definitely/not/here/key.json"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("error: "));
}

#[test]
fn conflicting_sources_are_a_usage_error() {
    b58enc()
        .args(["--keypair", "k.json", "--values", "1"])
        .assert()
        .code(2)
        .stdout("");
}
