use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write as _;

const SAMPLE: &str = "\
2
phone L L
tablet H H
4
phone Amazon 14999
phone Flipkart 15499
phone Snapdeal 15499
tablet Amazon 8000
";

fn data_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn prints_counts_and_prices_in_product_order() {
    let file = data_file(SAMPLE);

    Command::cargo_bin("rival")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of products generated: 2"))
        .stdout(predicate::str::contains(
            "Number of competitors generated: 3",
        ))
        .stdout(predicate::str::contains("Chosen price for product 'phone' is: 17048.9"))
        .stdout(predicate::str::contains("Chosen price for product 'tablet' is: 8000"));
}

#[test]
fn fails_on_invalid_market_condition() {
    let file = data_file("1\nphone X Y\n0\n");

    Command::cargo_bin("rival")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid market condition code"));
}

#[test]
fn fails_on_product_without_prices() {
    let file = data_file("1\nphone H H\n0\n");

    Command::cargo_bin("rival")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No eligible competitor prices"));
}

#[test]
fn fails_on_missing_file() {
    Command::cargo_bin("rival")
        .unwrap()
        .arg("definitely-not-here.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read data file"));
}
