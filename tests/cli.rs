use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MUTUAL_FUNDS: &str = "Scheme,Type,Market Value\n\
                            \"Axis Bluechip, Direct\",Mutual Fund,\"₹1,234.50\"\n\
                            Reliance,Equity,999\n";

const TRADES: &str = "Symbol,TradeMoney\nAAPL,-500\nMSFT,300\n";

fn folio(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env("FOLIO_DASH_DATA_DIR", home).env_remove("FOLIO_LOG");
    cmd
}

fn home_with_data() -> TempDir {
    let home = TempDir::new().unwrap();
    let data = home.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("mutual_funds.csv"), MUTUAL_FUNDS).unwrap();
    std::fs::write(data.join("trades.csv"), TRADES).unwrap();
    home
}

#[test]
fn parse_prints_quote_aware_rows() {
    let home = home_with_data();
    let file = home.path().join("data").join("mutual_funds.csv");

    folio(home.path())
        .arg("parse")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Axis Bluechip, Direct"))
        .stdout(predicate::str::contains("2 row(s)"));
}

#[test]
fn parse_lenient_splits_every_comma() {
    let home = home_with_data();
    let file = home.path().join("data").join("mutual_funds.csv");

    folio(home.path())
        .args(["parse", "--lenient", "--json"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"\\\"Axis Bluechip\""));
}

#[test]
fn net_worth_in_base_currency() {
    let home = TempDir::new().unwrap();

    folio(home.path())
        .args([
            "net-worth", "--base", "100", "--usd", "10", "--euro", "5", "--usd-rate", "80",
            "--eur-rate", "90", "--currency", "INR",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Net worth (INR): ₹1,350.00"));
}

#[test]
fn net_worth_zero_rate_is_not_guarded() {
    let home = TempDir::new().unwrap();

    folio(home.path())
        .args([
            "net-worth", "--base", "100", "--usd", "10", "--euro", "5", "--usd-rate", "0",
            "--eur-rate", "80", "--currency", "USD",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Net worth (USD): n/a"));
}

#[test]
fn goal_zero_rate_is_guarded() {
    let home = TempDir::new().unwrap();

    folio(home.path())
        .args([
            "goal", "1000", "--currency", "USD", "--usd-rate", "0", "--eur-rate", "80",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal (USD): $0.00"));
}

#[test]
fn rate_overrides_must_come_in_pairs() {
    let home = TempDir::new().unwrap();

    folio(home.path())
        .args(["goal", "1000", "--usd-rate", "80"])
        .assert()
        .failure();
}

#[test]
fn load_bundled_brokerage_file() {
    let home = home_with_data();

    folio(home.path())
        .args(["load", "brokerage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brokerage"))
        .stdout(predicate::str::contains("$800.00"));
}

#[test]
fn load_missing_bundled_file_still_succeeds() {
    let home = TempDir::new().unwrap();

    folio(home.path())
        .args(["load", "mutual-fund"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to load"));
}

#[test]
fn upload_missing_file_fails() {
    let home = TempDir::new().unwrap();

    folio(home.path())
        .args(["upload", "mutual-fund"])
        .arg(home.path().join("missing.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn upload_saves_unchanged_copy() {
    let home = home_with_data();
    let file = home.path().join("data").join("mutual_funds.csv");
    let copy = home.path().join("download").join("holdings.csv");

    folio(home.path())
        .args(["upload", "mf"])
        .arg(&file)
        .arg("--save-copy")
        .arg(&copy)
        .assert()
        .success()
        .stdout(predicate::str::contains("₹1,234.50"));

    assert_eq!(std::fs::read_to_string(&copy).unwrap(), MUTUAL_FUNDS);
}

#[test]
fn unknown_source_is_rejected() {
    let home = home_with_data();

    folio(home.path())
        .args(["load", "crypto"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid source"));
}

#[test]
fn export_rows_to_csv() {
    let home = home_with_data();
    let file = home.path().join("data").join("trades.csv");
    let output = home.path().join("trades-export.csv");

    folio(home.path())
        .args(["export", "brokerage"])
        .arg(&file)
        .arg(&output)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 row(s)"));

    assert_eq!(std::fs::read_to_string(&output).unwrap(), TRADES);
}

#[test]
fn init_writes_settings() {
    let home = TempDir::new().unwrap();

    folio(home.path()).arg("init").assert().success();

    assert!(home.path().join("config.json").exists());
    assert!(home.path().join("data").is_dir());
}

#[test]
fn dashboard_without_rates_reports_in_base() {
    let home = home_with_data();
    std::fs::write(
        home.path().join("config.json"),
        r#"{"rates_endpoint": "http://127.0.0.1:9/latest", "display_currency": "USD"}"#,
    )
    .unwrap();

    folio(home.path())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unavailable"))
        .stdout(predicate::str::contains("₹1,234.50"))
        .stdout(predicate::str::contains("shown in INR instead of USD"));
}
