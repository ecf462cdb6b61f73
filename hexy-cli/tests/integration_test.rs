//! Integration tests for the hexy binary

use std::io::Write;
use std::process::{Command, Stdio};

fn hexy() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hexy"))
}

#[test]
fn test_selfplay_json() {
    let output = hexy()
        .args(["selfplay", "--size", "5", "--games", "6", "--json", "--seed", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["size"], 5);
    assert_eq!(json["total_games"], 6);
    let a = json["a_wins"].as_u64().unwrap();
    let b = json["b_wins"].as_u64().unwrap();
    assert_eq!(a + b, 6);
}

#[test]
fn test_selfplay_seed_is_reproducible() {
    let run = || {
        hexy()
            .args(["selfplay", "--size", "6", "--games", "8", "--json", "--seed", "99"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_selfplay_rejects_small_board() {
    let output = hexy()
        .args(["selfplay", "--size", "2", "--games", "1"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_play_rejects_oversized_board() {
    let output = hexy()
        .args(["play", "--size", "4000000000"])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid board size"), "{stderr}");
    assert!(!stderr.contains("panicked"), "{stderr}");
}

#[test]
fn test_play_session() {
    let mut child = hexy()
        .args(["play", "--size", "3"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"0 0\n2 0\n0 1\n2 1\n0 2\nq\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Player A connects and wins!"));
    assert!(stdout.contains("Final score: A 1 - 0 B"));
}
