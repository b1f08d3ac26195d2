use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn bin(name: &str) -> Command {
    let mut cmd = Command::cargo_bin(name).expect("binary built");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn dip_prints_both_media() {
    bin("dip")
        .assert()
        .success()
        .stdout("Saving data to a file: Report Data\nSaving data to a database: Report Data\n");
}

#[test]
fn lsp_prints_both_birds() {
    bin("lsp")
        .assert()
        .success()
        .stdout("Parrot is flying and talking!\nPenguin cannot fly.\n");
}

#[test]
fn isp_robot_never_eats() {
    bin("isp")
        .assert()
        .success()
        .stdout("Human is working\nHuman is eating\nRobot is working\n");
}

#[test]
fn ocp_prints_areas() {
    bin("ocp")
        .assert()
        .success()
        .stdout("Area: 78.5398\nArea: 50\n")
        .stderr("");
}

#[test]
fn srp_prints_salary_then_save() {
    bin("srp")
        .assert()
        .success()
        .stdout("Salary: 800\nSaving John to the database.\n");
}

#[test]
fn solid_runs_every_demo_in_order() {
    let output = bin("solid").arg("--no-color").output().expect("run ok");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let banners: Vec<&str> = stdout.lines().filter(|line| line.starts_with("===")).collect();
    assert_eq!(
        banners,
        vec![
            "=== Single Responsibility ===",
            "=== Open/Closed ===",
            "=== Liskov Substitution ===",
            "=== Interface Segregation ===",
            "=== Dependency Inversion ===",
        ]
    );
    assert!(stdout.starts_with("=== Single Responsibility ===\n"));
    assert!(stdout.contains("Saving John to the database.\n\n=== Open/Closed ===\n"));
    assert!(stdout.contains("\n\n=== Dependency Inversion ===\n"));
    assert_eq!(stdout.matches("\n\n===").count(), 4);
}

#[test]
fn solid_shows_both_renditions() {
    bin("solid")
        .args(["isp", "--show", "both", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-- Violation --"))
        .stdout(predicate::str::contains("Robot is charging, not eating!"))
        .stdout(predicate::str::contains("-- Corrected --"));
}

#[test]
fn solid_violation_ocp_uses_tagged_calculator() {
    bin("solid")
        .args(["ocp", "--show", "violation", "--no-color"])
        .assert()
        .success()
        .stdout("=== Open/Closed ===\nArea of Circle: 78.5398\nArea of Rectangle: 50\n");
}

#[test]
fn solid_reads_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[employee]\nname = \"Ada\"\nhourly_rate = 30.0\nhours_worked = 10").unwrap();

    bin("solid")
        .args(["srp", "--no-color", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary: 300"))
        .stdout(predicate::str::contains("Saving Ada to the database."));
}

#[test]
fn solid_rejects_invalid_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[shapes]\ncircle_radius = -5.0").unwrap();

    bin("solid")
        .args(["ocp", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("shapes.circle_radius"));
}

#[test]
fn solid_rejects_unknown_principle() {
    bin("solid").arg("xyz").assert().failure();
}
