//! Integration tests for the CLI interface

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn storefront() -> Command {
    let mut cmd = Command::cargo_bin("storefront").unwrap();
    // keep the developer's environment out of the results
    cmd.env_remove("STOREFRONT_LOG_LEVEL")
        .env_remove("STOREFRONT_OPENING_HOUR")
        .env_remove("STOREFRONT_CLOSING_HOUR")
        .env_remove("STOREFRONT_BASE_CURRENCY");
    cmd
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_cli_help_flag() {
    storefront()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_invalid_command() {
    storefront()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_discount_applies_code() {
    storefront()
        .args(["discount", "--price", "10", "--code", "SAVE20"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_discount_rejects_negative_price() {
    storefront()
        .args(["discount", "--price", "-10", "--code", "SAVE10"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid price"));
}

#[test]
fn test_can_drive() {
    storefront()
        .args(["can-drive", "--age", "16", "--country", "US"])
        .assert()
        .success()
        .stdout("true\n");

    storefront()
        .args(["can-drive", "--age", "16", "--country", "UK"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_can_drive_unknown_country() {
    storefront()
        .args(["can-drive", "--age", "20", "--country", "FR"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid country code"));
}

#[test]
fn test_validate_user() {
    storefront()
        .args(["validate-user", "--username", "bob", "--age", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation successful"));

    storefront()
        .args(["validate-user", "--username", "al", "--age", "abc"])
        .assert()
        .code(4)
        .stdout(predicate::str::contains("Invalid username, Invalid age"));
}

#[test]
fn test_username_and_price_range() {
    storefront()
        .args(["username", "abcd"])
        .assert()
        .success()
        .stdout("false\n");

    storefront()
        .args(["price-range", "--price", "100", "--min", "0", "--max", "100"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_coupons_lists_catalog() {
    storefront()
        .arg("coupons")
        .assert()
        .success()
        .stdout(predicate::str::contains("SAVE20"))
        .stdout(predicate::str::contains("SAVE10"));
}

#[test]
fn test_convert_with_config_file() {
    let file = config_file(
        r#"
[currency]
base = "USD"

[currency.rates]
USD = 1.0
EUR = 0.5
"#,
    );

    storefront()
        .arg("--config")
        .arg(file.path())
        .args(["convert", "--price", "10", "--currency", "EUR"])
        .assert()
        .success()
        .stdout("5.00 EUR\n");
}

#[test]
fn test_convert_accepts_negative_price() {
    let file = config_file(
        r#"
[currency.rates]
USD = 1.0
EUR = 0.5
"#,
    );

    storefront()
        .arg("--config")
        .arg(file.path())
        .args(["convert", "--price", "-5", "--currency", "EUR"])
        .assert()
        .success()
        .stdout("-2.50 EUR\n");
}

#[test]
fn test_partial_store_hours_in_config() {
    let file = config_file("[store_hours]\nopening_hour = 9\n");

    storefront()
        .arg("--config")
        .arg(file.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Store is"));
}

#[test]
fn test_shipping_respects_unavailable_destinations() {
    let file = config_file(
        r#"
[shipping]
flat_cost = 7.5
estimated_days = 3
unavailable = ["Antarctica"]
"#,
    );

    storefront()
        .arg("-c")
        .arg(file.path())
        .args(["shipping", "Paris"])
        .assert()
        .success()
        .stdout("Shipping Cost: $7.5 (3 days)\n");

    storefront()
        .arg("-c")
        .arg(file.path())
        .args(["shipping", "antarctica"])
        .assert()
        .success()
        .stdout("Shipping Unavailable\n");
}

#[test]
fn test_missing_config_file_is_a_config_error() {
    storefront()
        .args(["--config", "/nonexistent/storefront.toml", "coupons"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("E1001"));
}

#[test]
fn test_invalid_store_hours_in_config() {
    let file = config_file(
        r#"
[store_hours]
opening_hour = 20
closing_hour = 8
"#,
    );

    storefront()
        .arg("--config")
        .arg(file.path())
        .arg("status")
        .assert()
        .code(2);
}

#[test]
fn test_status_reports_store_state() {
    storefront()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Store is"))
        .stdout(predicate::str::contains("Holiday discount:"));
}
