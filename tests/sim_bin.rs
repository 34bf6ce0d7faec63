#![cfg(feature = "std")]

use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--games", "4", "--seed", "7", "--size", "small"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 4);
    assert_eq!(v["unfinished"], 0);
    let wins = v["first_wins"].as_u64().unwrap() + v["second_wins"].as_u64().unwrap();
    assert_eq!(wins, 4);
    assert_eq!(v["first"], "nightmare");
    assert!(v["average_shots"].as_f64().unwrap() > 0.0);
}

#[test]
fn sim_binary_rejects_a_bad_fleet() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--games", "1", "--fleet", "5,0"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
