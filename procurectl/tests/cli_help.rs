use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn listings_help_mentions_filters() {
    let mut cmd = cargo_bin_cmd!("procurectl");
    let output = cmd
        .arg("listings")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    for flag in [
        "--search",
        "--category",
        "--sustainable",
        "--verified",
        "--price-tier",
        "--provider",
        "--demo",
    ] {
        assert!(text.contains(flag), "listings help missing {flag}");
    }
}

#[test]
fn categories_command_is_documented() {
    let mut cmd = cargo_bin_cmd!("procurectl");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("categories"));
}

#[test]
fn rejects_unknown_price_tier() {
    let mut cmd = cargo_bin_cmd!("procurectl");
    cmd.args(["listings", "--demo", "--price-tier", "cheap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cheap"));
}
