//! CLI integration tests.

mod support;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

use support::files::{parse_json_lines, write, write_arbitrage_setup};

fn arbscout() -> Command {
    let mut cmd = cargo_bin_cmd!("arbscout");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    arbscout()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("calculate"))
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version() {
    arbscout()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("arbscout"));
}

#[test]
fn calculate_prints_stakes_for_arbitrage() {
    arbscout()
        .args([
            "calculate",
            "--quote",
            "Bet9ja,1,2.10",
            "--quote",
            "BetKing,X,3.80",
            "--quote",
            "SportyBet,2,4.50",
            "--stake",
            "1000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3.84%"))
        .stdout(predicate::str::contains("SportyBet"))
        .stdout(predicate::str::contains("38.43"));
}

#[test]
fn calculate_fails_without_arbitrage() {
    arbscout()
        .args([
            "calculate",
            "--quote",
            "A,1,2.10",
            "--quote",
            "B,X,3.40",
            "--quote",
            "C,2,4.20",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "no arbitrage opportunity exists with these odds",
        ));
}

#[test]
fn calculate_rejects_malformed_quote() {
    arbscout()
        .args(["calculate", "--quote", "A,over"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("BOOKMAKER,OUTCOME,ODDS"));
}

#[test]
fn calculate_json_output() {
    let output = arbscout()
        .args([
            "--json",
            "calculate",
            "--quote",
            "A,over,2.15",
            "--quote",
            "B,under,2.10",
            "--market-type",
            "over_under",
            "--market-params",
            "2.5",
            "--stake",
            "100",
        ])
        .output()
        .expect("run arbscout");

    assert!(output.status.success());
    let lines = parse_json_lines(&output.stdout);
    assert_eq!(lines.len(), 1);
    let value = &lines[0];
    assert_eq!(value["command"], "calculate");
    assert_eq!(value["market"], "Over/Under 2.5");
    assert_eq!(value["stakes"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["stakes"][0]["bookmaker"], "A");
    assert!(value["expected_profit"].as_f64().unwrap() > 0.0);
}

#[test]
fn calculate_reads_quotes_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "quotes.json",
        r#"[{"bookmaker":"A","outcome":"yes","odds":2.05},{"bookmaker":"B","outcome":"no","odds":2.05}]"#,
    );

    arbscout()
        .args(["-q", "calculate", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2.44"));
}

#[test]
fn config_validate_accepts_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_arbitrage_setup(dir.path());

    arbscout()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration valid"));
}

#[test]
fn config_validate_returns_nonzero_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "config.toml",
        "[logging]\nlevel = \"info\"\nformat = \"pretty\"\n\n[engine]\ndefault_stake = -1.0\n",
    );

    arbscout()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("engine.default_stake"));
}

#[test]
fn config_show_prints_bookmakers() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_arbitrage_setup(dir.path());

    arbscout()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmakers"))
        .stdout(predicate::str::contains("a.json"));
}

#[test]
fn scan_reports_opportunities() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_arbitrage_setup(dir.path());

    arbscout()
        .args(["scan", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Liverpool vs Chelsea"))
        .stdout(predicate::str::contains("3.84"));
}

#[test]
fn scan_json_includes_report_and_opportunities() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_arbitrage_setup(dir.path());

    let output = arbscout()
        .args(["--json", "scan", "--config"])
        .arg(&path)
        .output()
        .expect("run arbscout");

    assert!(output.status.success());
    let lines = parse_json_lines(&output.stdout);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["report"]["bookmakers_processed"], 3);
    assert_eq!(lines[0]["report"]["success"], true);
    assert_eq!(lines[0]["opportunities"].as_array().map(Vec::len), Some(1));
}

#[test]
fn scan_survives_missing_feed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_arbitrage_setup(dir.path());
    std::fs::remove_file(dir.path().join("c.json")).unwrap();

    arbscout()
        .args(["scan", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("C:"));
}

#[test]
fn watch_stops_after_max_cycles() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_arbitrage_setup(dir.path());

    let output = arbscout()
        .args(["--json", "watch", "--interval", "1", "--max-cycles", "2", "--config"])
        .arg(&path)
        .output()
        .expect("run arbscout");

    assert!(output.status.success());
    let cycles: Vec<_> = parse_json_lines(&output.stdout)
        .into_iter()
        .filter(|line| line["command"] == "watch")
        .collect();
    assert_eq!(cycles.len(), 2);
    assert_eq!(cycles[0]["report"]["inserted"], 1);
    assert_eq!(cycles[1]["report"]["updated"], 1);
}
