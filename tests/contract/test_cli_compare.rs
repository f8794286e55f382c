// Contract test for `verbump compare` and `verbump parse` commands

use assert_cmd::Command;
use predicates::prelude::*;

fn verbump() -> Command {
    Command::cargo_bin("verbump").unwrap()
}

#[test]
fn test_compare_greater_equal_less() {
    verbump().args(["compare", "4.2.1", "2.3.4"]).assert().success().stdout("1\n");
    verbump().args(["compare", "1.0.0", "1"]).assert().success().stdout("0\n");
    verbump().args(["compare", "1.2.8", "2.4.5"]).assert().success().stdout("-1\n");
}

#[test]
fn test_compare_json() {
    let output = verbump()
        .args(["compare", "1.3", "1.2.9", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["this"], "1.3.0");
    assert_eq!(json["other"], "1.2.9");
    assert_eq!(json["result"], 1);
}

#[test]
fn test_compare_rejects_invalid_version() {
    verbump()
        .args(["compare", "1.a.3", "1.0.0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid version format"));
}

#[test]
fn test_parse_pads_components() {
    verbump().args(["parse", "5"]).assert().success().stdout("(5, 0, 0)\n");
    verbump().args(["parse", "5.6"]).assert().success().stdout("(5, 6, 0)\n");
    verbump().args(["parse", "1.2.3"]).assert().success().stdout("(1, 2, 3)\n");
}

#[test]
fn test_parse_rejects_four_components() {
    verbump()
        .args(["parse", "1.2.3.4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected at most 3"));
}

#[test]
fn test_parse_json() {
    let output = verbump().args(["parse", "7.8", "--json"]).output().unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["major"], 7);
    assert_eq!(json["minor"], 8);
    assert_eq!(json["patch"], 0);
}
