//! Integration tests for reef-sim
//!
//! Runs the built binary against generated mesh files and manifests

use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

const TRIANGLE_OBJ: &str = "v 0 0 0\nv 2 0 0\nv 1 2 0\nf 1 2 3\n";

fn reef_sim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_reef-sim"))
        .args(args)
        .output()
        .expect("Failed to run reef-sim")
}

fn write_scene(dir: &Path) {
    for name in ["dolphin", "seaweed", "barrel", "fish"] {
        std::fs::write(dir.join(format!("{name}.obj")), TRIANGLE_OBJ)
            .expect("Failed to write OBJ");
    }
    std::fs::write(
        dir.join("reefscape.toml"),
        r#"seed = 4

[meshes]
dolphin = "dolphin.obj"
seaweed = "seaweed.obj"
barrel = "barrel.obj"
fish = "fish.obj"
"#,
    )
    .expect("Failed to write manifest");
}

/// Test inspect prints the derived bounds
#[test]
fn test_inspect_triangle() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj = dir.path().join("triangle.obj");
    std::fs::write(&obj, TRIANGLE_OBJ).expect("Failed to write OBJ");

    let output = reef_sim(&["inspect", obj.to_str().unwrap()]);
    assert!(output.status.success(), "inspect failed: {output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("vertices:    3"), "{stdout}");
    assert!(stdout.contains("triangles:   1"), "{stdout}");
    assert!(stdout.contains("origin:      2 2 0"), "{stdout}");
    assert!(stdout.contains("offset:      -1 -1 "), "{stdout}");
}

/// Test inspect with first-vertex seeding
#[test]
fn test_inspect_first_vertex_seed() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj = dir.path().join("high.obj");
    std::fs::write(&obj, "v 5 6 7\nv 8 9 10\n").expect("Failed to write OBJ");

    let output = reef_sim(&[
        "inspect",
        obj.to_str().unwrap(),
        "--bounds-seed",
        "first-vertex",
    ]);
    assert!(output.status.success(), "inspect failed: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("min:         5 6 7"), "{stdout}");
}

/// Test inspect fails on a malformed mesh
#[test]
fn test_inspect_malformed_mesh() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj = dir.path().join("bad.obj");
    std::fs::write(&obj, "v 0 0 0\nv 1 two 0\n").expect("Failed to write OBJ");

    let output = reef_sim(&["inspect", obj.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "{stderr}");
}

/// Test simulate runs the requested frames
#[test]
fn test_simulate_frames() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_scene(dir.path());
    let manifest = dir.path().join("reefscape.toml");

    let output = reef_sim(&[
        "simulate",
        "--config",
        manifest.to_str().unwrap(),
        "--frames",
        "60",
    ]);
    assert!(output.status.success(), "simulate failed: {output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("frames:          60"), "{stdout}");
    assert!(stdout.contains("global yaw:      30"), "{stdout}");
    assert!(stdout.contains("swim phase:      10"), "{stdout}");
}

/// Test simulate reports a missing manifest
#[test]
fn test_simulate_missing_manifest() {
    let dir = tempdir().expect("Failed to create temp dir");
    let manifest = dir.path().join("missing.toml");

    let output = reef_sim(&["simulate", "--config", manifest.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load manifest"), "{stderr}");
}
