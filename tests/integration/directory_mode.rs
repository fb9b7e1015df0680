use std::path::Path;

use predicates::prelude::*;

use crate::common::{Fixture, flatten_records, inspect, json_stdout};

fn file_name(record: &serde_json::Value) -> String {
    Path::new(record["filePath"].as_str().unwrap())
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned()
}

#[test]
fn flat_scan_lists_immediate_entries() {
    let fx = Fixture::tree(3, 2, 4);

    let value = json_stdout(inspect().arg("-a").arg(fx.path()).args(["-f", "json"]));
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert!(items.iter().all(serde_json::Value::is_object));
}

#[test]
fn recursive_scan_visits_every_entry_once() {
    let (n, m, k) = (3, 2, 4);
    let fx = Fixture::tree(n, m, k);

    let value = json_stdout(inspect().arg("-a").arg(fx.path()).args(["-r", "-f", "json"]));
    let records = flatten_records(&value);
    assert_eq!(records.len(), n + m + m * k);

    let mut paths: Vec<_> = records.iter().map(|r| r["filePath"].as_str().unwrap()).collect();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), n + m + m * k);
}

#[test]
fn recursive_json_nests_contents_after_directory() {
    let fx = Fixture::tree(1, 1, 2);

    let value = json_stdout(inspect().arg("-a").arg(fx.path()).args(["-r", "-s", "-f", "json"]));
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(file_name(&items[0]), "file0.txt");
    assert_eq!(file_name(&items[1]), "sub0");
    assert_eq!(items[1]["inode"]["type"], "directory");

    let nested = items[2].as_array().unwrap();
    let names: Vec<_> = nested.iter().map(file_name).collect();
    assert_eq!(names, ["inner0.txt", "inner1.txt"]);
}

#[test]
fn empty_directory_is_an_empty_array() {
    let fx = Fixture::new();
    let value = json_stdout(inspect().arg("-a").arg(fx.path()).args(["-f", "json"]));
    assert_eq!(value, serde_json::json!([]));
}

#[test]
fn sort_flag_orders_by_name() {
    let fx = Fixture::new();
    for name in ["delta", "alpha", "charlie", "bravo"] {
        fx.file(name, b"x");
    }

    let value = json_stdout(inspect().arg("-a").arg(fx.path()).args(["-s", "-f", "json"]));
    let names: Vec<_> = flatten_records(&value).into_iter().map(file_name).collect();
    assert_eq!(names, ["alpha", "bravo", "charlie", "delta"]);
}

#[test]
fn text_scan_prints_one_block_per_entry() {
    let fx = Fixture::tree(2, 1, 1);

    inspect()
        .arg("-a")
        .arg(fx.path())
        .arg("-r")
        .assert()
        .success()
        .stdout(predicate::str::contains("Information for ").count(4))
        .stdout(predicate::str::contains(",\n").not());
}

#[test]
fn all_without_path_scans_current_directory() {
    let fx = Fixture::new();
    fx.file("only.txt", b"x");

    let value = json_stdout(inspect().current_dir(fx.path()).args(["-a", "-f", "json"]));
    let records = flatten_records(&value);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["filePath"], "./only.txt");
}

#[cfg(unix)]
#[test]
fn broken_entry_is_reported_and_scan_continues() {
    let fx = Fixture::new();
    fx.file("good.txt", b"x");
    std::os::unix::fs::symlink(fx.path().join("missing"), fx.path().join("dangling")).unwrap();

    let output = inspect()
        .arg("-a")
        .arg(fx.path())
        .args(["-f", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("dangling"))
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let names: Vec<_> = flatten_records(&value).into_iter().map(file_name).collect();
    assert_eq!(names, ["good.txt"]);
}

#[test]
fn empty_directory_text_prints_nothing() {
    let fx = Fixture::new();
    inspect()
        .arg("-a")
        .arg(fx.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn link_to_scanned_directory_is_listed() {
    let fx = Fixture::new();
    fx.file("a", b"x");
    std::os::unix::fs::symlink(fx.path(), fx.path().join("self")).unwrap();

    let output = inspect()
        .arg("-a")
        .arg(fx.path())
        .args(["-r", "-s", "-f", "json"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let names: Vec<_> = flatten_records(&value).into_iter().map(file_name).collect();
    assert_eq!(names, ["a", "self"]);
    assert_eq!(value[1]["inode"]["type"], "directory");
}
