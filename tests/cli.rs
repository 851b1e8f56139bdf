use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_clinic-geojson"))
}

#[test]
fn exits_with_status_one_when_no_input_exists() {
    let dir = TempDir::new().unwrap();
    let output = binary().current_dir(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("master clinic mapbox file.csv"));
    assert!(stderr.contains("master clinic mapbox file.cvs"));
}

#[test]
fn exits_with_status_one_without_latitude_column() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("master clinic mapbox file.csv"),
        "City,Longitude\nAustin,-97.7\n",
    )
    .unwrap();

    let output = binary().current_dir(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Found headers"));
    assert!(!dir.path().join("MapBox Dataset.geojson").exists());
}

#[test]
fn exits_with_status_one_for_empty_input() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("master clinic mapbox file.csv"), "").unwrap();

    let output = binary().current_dir(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no headers"));
    assert!(!dir.path().join("MapBox Dataset.geojson").exists());
}

#[test]
fn exits_with_status_one_for_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("master clinic mapbox file.csv"),
        b"Lat,Lng,City\n1,2,\xff\xfe\n",
    )
    .unwrap();

    let output = binary().current_dir(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("CSV error"));
    assert!(!dir.path().join("MapBox Dataset.geojson").exists());
}

#[test]
fn skipped_rows_do_not_fail_the_run() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("master clinic mapbox file.csv"),
        "Event #,City,Latitude,Longitude\n100,Austin,30.27,-97.74\n101,Dallas,,-96.8\n",
    )
    .unwrap();

    let output = binary().current_dir(dir.path()).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SKIPPED row 2: lat=\"\" lon=\"-96.8\" event=\"101\" city=\"Dallas\""));
    assert!(stdout.contains("OK: Wrote MapBox Dataset.geojson"));
    assert!(stdout.contains("Features: 1  Skipped (missing lat/lon): 1"));
    assert!(dir.path().join("MapBox Dataset.geojson").exists());
}
