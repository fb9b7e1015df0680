use predicates::prelude::*;

use crate::common::{Fixture, inspect, is_rwx, json_stdout};

#[test]
fn text_block_has_every_field() {
    let fx = Fixture::new();
    let file = fx.file("notes.txt", &[b'x'; 500]);

    let output = inspect().arg("-i").arg(&file).assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    let labels: Vec<_> = text.lines().map(|l| l.split(':').next().unwrap()).collect();

    assert_eq!(
        labels[1..],
        [
            "File Inode",
            "File Type",
            "Permissions",
            "Number of Hard Links",
            "Owner UID",
            "Group GID",
            "File Size",
            "Last Access Time",
            "Last Modification Time",
            "Last Status Change Time",
        ]
    );
    assert!(text.contains("File Type: regular file"));
    assert!(text.contains("File Size: 500 bytes"));
    // stdout is not a terminal here, so no escapes
    assert!(!text.contains('\x1b'));
}

#[test]
fn json_record_is_a_single_object() {
    let fx = Fixture::new();
    let file = fx.file("data.bin", &[0u8; 2048]);

    let value = json_stdout(inspect().arg("-i").arg(&file).args(["-f", "json"]));
    assert_eq!(value["filePath"], file.to_str().unwrap());

    let inode = &value["inode"];
    assert!(inode["number"].is_u64());
    assert_eq!(inode["type"], "regular file");
    assert!(is_rwx(inode["permissions"].as_str().unwrap()));
    assert!(inode["linkCount"].as_u64().unwrap() >= 1);
    assert!(inode["uid"].is_u64());
    assert!(inode["gid"].is_u64());
    assert_eq!(inode["size"], "2048 bytes");
    assert!(inode["modificationTime"].as_str().unwrap().parse::<i64>().is_ok());
}

#[test]
fn human_flag_scales_size_and_time() {
    let fx = Fixture::new();
    let file = fx.file("data.bin", &[0u8; 2048]);

    let value = json_stdout(inspect().arg("-i").arg(&file).args(["-h", "-f", "json"]));
    assert_eq!(value["inode"]["size"], "2.00 KB");
    let mtime = value["inode"]["modificationTime"].as_str().unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(mtime, "%Y-%m-%d %H:%M:%S").is_ok());
}

#[cfg(unix)]
#[test]
fn permissions_reflect_mode() {
    use std::os::unix::fs::PermissionsExt;

    let fx = Fixture::new();
    let file = fx.file("script.sh", b"#!/bin/sh\n");
    std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o751)).unwrap();

    inspect()
        .arg("-i")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Permissions: rwxr-x--x"));
}

#[test]
fn color_always_adds_escapes_to_text_only() {
    let fx = Fixture::new();
    let file = fx.file("a.txt", b"a");

    inspect()
        .arg("-i")
        .arg(&file)
        .args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[36mInformation for"));

    inspect()
        .arg("-i")
        .arg(&file)
        .args(["--color", "always", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn verbose_notes_go_to_stderr() {
    let fx = Fixture::new();
    let file = fx.file("a.txt", b"a");

    let value = json_stdout(inspect().arg("-i").arg(&file).args(["-v", "-f", "json"]));
    assert_eq!(value["inode"]["type"], "regular file");

    inspect()
        .arg("-i")
        .arg(&file)
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains("Processing file:"));
}
