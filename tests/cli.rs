use assert_cmd::Command;
use predicates::prelude::*;

fn data(name: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn test_day_23_sample() {
    Command::cargo_bin("day-23")
        .unwrap()
        .arg(data("day-23-sample.txt"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Nanobots in range of the strongest: 7\n").and(predicate::str::contains(
                "Closest point in range of the most nanobots: (1, 0, 0), distance 1, in range of 3 nanobots\n",
            )),
        );
}

#[test]
fn test_day_23_teleport() {
    Command::cargo_bin("day-23")
        .unwrap()
        .arg(data("day-23-teleport.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "(12, 12, 12), distance 36, in range of 5 nanobots",
        ));
}

#[test]
fn test_day_23_default_input() {
    let dir = format!("{}/tests/data", env!("CARGO_MANIFEST_DIR"));
    Command::cargo_bin("day-23")
        .unwrap()
        .current_dir(dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("day-23.input"));
}

#[test]
fn test_day_23_bad_input() {
    Command::cargo_bin("day-23")
        .unwrap()
        .arg(data("day-24-sample.txt"))
        .assert()
        .failure();
}

#[test]
fn test_day_24_sample() {
    Command::cargo_bin("day-24")
        .unwrap()
        .arg(data("day-24-sample.txt"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Without a boost, Infection wins with 5216 units left\n").and(
                predicate::str::contains(
                    "Smallest winning boost: 1570, leaving the immune system with 51 units\n",
                ),
            ),
        );
}

#[test]
fn test_day_24_bisect() {
    Command::cargo_bin("day-24")
        .unwrap()
        .arg(data("day-24-sample.txt"))
        .args(&["--search", "bisect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smallest winning boost: 1570,"));
}

#[test]
fn test_day_24_max_boost() {
    Command::cargo_bin("day-24")
        .unwrap()
        .arg(data("day-24-sample.txt"))
        .args(&["--max-boost", "10"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Without a boost, Infection wins"))
        .stderr(predicate::str::contains("no boost up to 10"));
}

#[test]
fn test_day_24_requires_input() {
    Command::cargo_bin("day-24").unwrap().assert().failure();
}
