use std::process::Command;

#[test]
fn test_sim_reports_every_game() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--games", "4", "--seed", "11", "--difficulty", "hard", "--opponent", "easy"])
        .output()
        .expect("run sim");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["games"], 4);
    assert_eq!(report["difficulty"], "hard");
    assert_eq!(report["opponent"], "easy");
    let computer = report["computer_wins"].as_u64().unwrap();
    let human = report["human_wins"].as_u64().unwrap();
    assert_eq!(computer + human, 4);
    assert!(report["mean_turns"]["computer"].as_f64().unwrap() >= 17.0);
}

#[test]
fn test_sim_rejects_zero_games() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--games", "0"])
        .output()
        .expect("run sim");
    assert!(!output.status.success());
}
