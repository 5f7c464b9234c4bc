use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("powerot-checkout"));
    cmd.arg("tests/fixtures/cart.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("item[0] Premium Tilapia: GHS 60.00"))
        .stdout(predicate::str::contains("item[1] Hearty Catfish: GHS 25.00"))
        .stdout(predicate::str::contains("subtotal: GHS 85.00"))
        .stdout(predicate::str::contains("taxes: GHS 4.25"))
        .stdout(predicate::str::contains("total: GHS 89.25"));

    Ok(())
}

#[test]
fn test_cli_json_output() {
    let mut cmd = Command::new(cargo_bin!("powerot-checkout"));
    cmd.arg("tests/fixtures/cart.csv").arg("--format").arg("json");

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["summary"]["subtotal"], "85.00");
    assert_eq!(json["summary"]["taxes"], "4.25");
    assert_eq!(json["summary"]["total"], "89.25");
    assert_eq!(json["order"]["total_amount"], "85.00");
    assert_eq!(json["order"]["items"][0]["product_name"], "Premium Tilapia");
    assert_eq!(json["order"]["items"][0]["quantity"], 2);
}

#[test]
fn test_cli_skips_malformed_rows() {
    let file = common::write_cart(&[
        "Premium Tilapia, 30.00, 1",
        "Tarpaulin Fish Tanks, , 1",
        "Hearty Catfish, 25.00, 2",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("powerot-checkout"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading cart row"))
        .stdout(predicate::str::contains("subtotal: GHS 80.00"));
}

#[test]
fn test_cli_unreadable_quantity() {
    let file = common::write_cart(&["Hearty Catfish, 25.00, lots"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("powerot-checkout"));
    cmd.arg(file.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("item[0] Hearty Catfish: GHS NaN"))
        .stdout(predicate::str::contains("total: GHS NaN"));

    let mut cmd = Command::new(cargo_bin!("powerot-checkout"));
    cmd.arg(file.path()).arg("--format").arg("json");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Order payload unavailable"))
        .stdout(predicate::str::contains("\"total\": null"));
}

#[test]
fn test_cli_row_without_quantity_counts_one() {
    let file = common::write_cart(&["Hearty Catfish, 25.00", "Premium Tilapia, 30.00, 2"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("powerot-checkout"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading cart row").not())
        .stdout(predicate::str::contains("subtotal: GHS 85.00"));
}

#[test]
fn test_cli_missing_file() {
    let mut cmd = Command::new(cargo_bin!("powerot-checkout"));
    cmd.arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}

#[test]
fn test_cli_submit_runs_payment_cycle() {
    let mut cmd = Command::new(cargo_bin!("powerot-checkout"));
    cmd.arg("tests/fixtures/cart.csv").arg("--submit");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("message: Processing your payment..."))
        .stdout(predicate::str::contains(
            "message: Payment successful! Thank you for your order.",
        ))
        .stdout(predicate::str::contains("message color: var(--success-green)"))
        .stdout(predicate::str::ends_with("message: \n"));
}
