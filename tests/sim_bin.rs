#![cfg(feature = "std")]

use std::process::Command;

fn run_sim(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .output()
        .expect("failed to run sim")
}

#[test]
fn test_sim_reports_a_winner() {
    let output = run_sim(&["1", "2"]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let winner = report["winner"].as_str().unwrap();
    assert!(winner == "player1" || winner == "player2");
    assert_eq!(report[winner]["status"], "Won");
    assert_eq!(report["first"], "Player");
    let loser = if winner == "player1" { "player2" } else { "player1" };
    assert_eq!(report[loser]["status"], "Lost");
    assert!(report[winner]["shots"].as_u64().unwrap() >= 17);
}

#[test]
fn test_sim_is_deterministic() {
    let a = run_sim(&["5", "3"]);
    let b = run_sim(&["5", "3"]);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn test_sim_rejects_missing_seeds() {
    let output = run_sim(&["1"]);
    assert!(!output.status.success());
}
