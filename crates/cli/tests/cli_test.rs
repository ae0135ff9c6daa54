//! Integration tests for the pants-classpath binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const METADATA: &str = r#"{
    "modules": {
        "example.app": {
            "target_ids": ["src.java.example.app"],
            "target_addresses": "src/java/example:app",
            "runtime_deps": ["example.lib"]
        },
        "example.lib": {
            "target_ids": ["src.java.example.lib"],
            "target_addresses": "src/java/example:lib",
            "library_excludes": "[\"org.slf4j:slf4j-log4j12\"]"
        }
    }
}"#;

fn write_metadata(dir: &Path) -> PathBuf {
    let path = dir.join("project-metadata.json");
    fs::write(&path, METADATA).unwrap();
    path
}

fn pants_classpath() -> Command {
    Command::cargo_bin("pants-classpath").unwrap()
}

#[test]
fn test_classpath_quiet_prints_paths_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let export = temp_dir.path().join("export-classpath");
    fs::create_dir(&export).unwrap();
    File::create(export.join("src.java.example.app-0.jar")).unwrap();
    fs::create_dir(export.join("src.java.example.app-1")).unwrap();
    let metadata = write_metadata(temp_dir.path());

    let jar = export.join("src.java.example.app-0.jar");
    let dir = export.join("src.java.example.app-1");
    pants_classpath()
        .args(["classpath", "example.app", "--quiet"])
        .arg("--metadata")
        .arg(&metadata)
        .arg("--export-dir")
        .arg(&export)
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", jar.display(), dir.display()));
}

#[test]
fn test_classpath_empty_is_success() {
    let temp_dir = TempDir::new().unwrap();
    let export = temp_dir.path().join("export-classpath");
    fs::create_dir(&export).unwrap();
    let metadata = write_metadata(temp_dir.path());

    pants_classpath()
        .args(["classpath", "example.app", "--quiet"])
        .arg("--metadata")
        .arg(&metadata)
        .arg("--export-dir")
        .arg(&export)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_manifest_jar_only_resolves_single_artifact() {
    let temp_dir = TempDir::new().unwrap();
    let export = temp_dir.path().join("export-classpath");
    fs::create_dir(&export).unwrap();
    File::create(export.join("manifest.jar")).unwrap();
    // Published entries that must not appear alongside the manifest
    File::create(export.join("src.java.example.app-0.jar")).unwrap();
    let metadata = write_metadata(temp_dir.path());

    pants_classpath()
        .args(["classpath", "example.app", "--quiet", "--manifest-jar-only"])
        .arg("--metadata")
        .arg(&metadata)
        .arg("--export-dir")
        .arg(&export)
        .assert()
        .success()
        .stdout(format!("{}\n", export.join("manifest.jar").display()));
}

#[test]
fn test_missing_manifest_fails_without_fallback() {
    let temp_dir = TempDir::new().unwrap();
    let export = temp_dir.path().join("export-classpath");
    fs::create_dir(&export).unwrap();
    File::create(export.join("src.java.example.app-0.jar")).unwrap();
    let metadata = write_metadata(temp_dir.path());

    pants_classpath()
        .args(["classpath", "example.app", "--quiet", "--manifest-jar-only"])
        .arg("--metadata")
        .arg(&metadata)
        .arg("--export-dir")
        .arg(&export)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found at"));
}

#[test]
fn test_unknown_module_fails() {
    let temp_dir = TempDir::new().unwrap();
    let export = temp_dir.path().join("export-classpath");
    fs::create_dir(&export).unwrap();
    let metadata = write_metadata(temp_dir.path());

    pants_classpath()
        .args(["classpath", "example.ghost", "--quiet"])
        .arg("--metadata")
        .arg(&metadata)
        .arg("--export-dir")
        .arg(&export)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown module"));
}

#[test]
fn test_malformed_metadata_fails() {
    let temp_dir = TempDir::new().unwrap();
    let export = temp_dir.path().join("export-classpath");
    fs::create_dir(&export).unwrap();
    let metadata = temp_dir.path().join("project-metadata.json");
    fs::write(&metadata, "{ not json").unwrap();

    pants_classpath()
        .args(["classpath", "example.app", "--quiet"])
        .arg("--metadata")
        .arg(&metadata)
        .arg("--export-dir")
        .arg(&export)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed"));
}

#[test]
fn test_excludes_reports_origin() {
    let temp_dir = TempDir::new().unwrap();
    let metadata = write_metadata(temp_dir.path());

    pants_classpath()
        .args(["excludes", "example.app"])
        .arg("--metadata")
        .arg(&metadata)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "org.slf4j:slf4j-log4j12 (declared by src/java/example:lib)",
        ));
}

#[test]
fn test_scan_lists_published_targets() {
    let temp_dir = TempDir::new().unwrap();
    let export = temp_dir.path().join("export-classpath");
    fs::create_dir(&export).unwrap();
    File::create(export.join("src.java.example.app-0.jar")).unwrap();
    File::create(export.join("src.java.example.app-1.jar")).unwrap();
    fs::create_dir(export.join("src.java.example.lib-0")).unwrap();
    File::create(export.join("manifest.jar")).unwrap();

    pants_classpath()
        .args(["scan"])
        .arg("--export-dir")
        .arg(&export)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("src.java.example.app (2 entries)").and(
                predicate::str::contains("src.java.example.lib (1 entry, bundled directory)"),
            ),
        );
}
