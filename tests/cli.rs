//! Tests running the `workplay` binary with a temporary `HOME`.

use std::path::Path;
use std::process::{Command, Output};

fn workplay(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_workplay"))
        .args(args)
        .env("HOME", home)
        .output()
        .unwrap()
}

fn system_hosts() -> Option<Vec<u8>> {
    std::fs::read("/etc/hosts").ok()
}

#[test]
fn no_arguments_prints_usage_and_touches_nothing() {
    let home = tempfile::tempdir().unwrap();
    let before = system_hosts();

    let out = workplay(home.path(), &[]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Usage: workplay"));
    assert!(stdout.contains("work"));
    assert!(stdout.contains("play"));

    assert!(!home.path().join(".config").exists());
    assert_eq!(system_hosts(), before);
}

#[test]
fn help_flag_exits_zero() {
    let home = tempfile::tempdir().unwrap();
    for flag in ["-h", "--help"] {
        let out = workplay(home.path(), &[flag]);
        assert_eq!(out.status.code(), Some(0));
        assert!(String::from_utf8(out.stdout).unwrap().contains("Usage: workplay"));
    }
    assert!(!home.path().join(".config").exists());
}

#[test]
fn two_commands_is_usage_error_and_touches_nothing() {
    let home = tempfile::tempdir().unwrap();
    let before = system_hosts();

    let out = workplay(home.path(), &["work", "play"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8(out.stderr).unwrap().contains("Usage:"));

    assert!(!home.path().join(".config").exists());
    assert_eq!(system_hosts(), before);
}

#[test]
fn unknown_command_is_usage_error() {
    let home = tempfile::tempdir().unwrap();

    let out = workplay(home.path(), &["sleep"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8(out.stderr).unwrap().contains("Usage:"));
    assert!(!home.path().join(".config").exists());
}
