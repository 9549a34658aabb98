// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn renders_a_ppm() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("newton.ppm");
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "24x16", "-w", "2", "-t", "5"])
        .with_stdin()
        .buffer("1\n-1 + i0\ni\n- i\ndone\n")
        .assert()
        .success();
    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"P6"));
    assert!(bytes.len() > 24 * 16 * 3);
}

#[test]
fn accepts_negative_corners_and_zero_tracks() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("window.ppm");
    Command::cargo_bin("newton")
        .unwrap()
        .args(&[
            "-o",
            out.to_str().unwrap(),
            "-s",
            "8x8",
            "--leftlower=-1,-1",
            "--rightupper=1,1",
            "--tracks=0",
        ])
        .with_stdin()
        .buffer("1\n-1\n")
        .assert()
        .success();
    assert!(out.exists());
}

#[test]
fn a_single_root_is_refused() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("never.ppm");
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "8x8"])
        .with_stdin()
        .buffer("1\ndone\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least two roots"));
    assert!(!out.exists());
}

#[test]
fn unparseable_root_is_reported() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("never.ppm");
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-o", out.to_str().unwrap()])
        .with_stdin()
        .buffer("1\n2 + x\ndone\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not parse"));
}

#[test]
fn zero_workers_is_rejected() {
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-o", "unused.ppm", "-w", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Worker count must be at least 1"));
}

#[test]
fn tiny_image_is_rejected() {
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["-o", "unused.ppm", "-s", "1x5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2x2"));
}
