use std::path::PathBuf;
use std::process::{Command, Output};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ns-config"))
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tests/fixtures/config").join(name)
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

#[test]
fn validate_accepts_minimal_example() {
    let config = fixture_path("minimal_example.yml");
    let out = run(&["validate", "--config", config.to_string_lossy().as_ref()]);
    assert!(
        out.status.success(),
        "validate should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );

    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("validate output should be valid JSON");
    assert_eq!(v["valid"], true);
    assert_eq!(v["overview"]["samples"], 3);
    assert_eq!(v["overview"]["regions"], 2);
    assert_eq!(v["overview"]["norm_factors"], 2);
    assert_eq!(v["overview"]["systematics"], 3);
}

#[test]
fn validate_rejects_two_data_samples() {
    let config = fixture_path("two_data_samples.yml");
    let out = run(&["validate", "--config", config.to_string_lossy().as_ref()]);
    assert!(!out.status.success(), "validate should fail with two data samples");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("exactly one data sample"), "stderr={stderr}");
}

#[test]
fn validate_reports_missing_file() {
    let config = fixture_path("does_not_exist.yml");
    let out = run(&["validate", "--config", config.to_string_lossy().as_ref()]);
    assert!(!out.status.success());
}

#[test]
fn region_prints_definition() {
    let config = fixture_path("minimal_example.yml");
    let out = run(&[
        "region",
        "--config",
        config.to_string_lossy().as_ref(),
        "--name",
        "Control_region",
    ]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["Name"], "Control_region");
    assert_eq!(v["Filter"], "lep_charge < 0");

    let out = run(&["region", "--config", config.to_string_lossy().as_ref(), "--name", "VR"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("region VR not found"));
}

#[test]
fn schema_prints_bundled_schema() {
    let out = run(&["schema"]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("schema output should be valid JSON");
    assert_eq!(v["$schema"], "https://json-schema.org/draft/2020-12/schema");
    assert_eq!(v["required"], serde_json::json!(["Samples", "Regions", "NormFactors"]));
}
