use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ns-config"))
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tests/fixtures/config").join(name)
}

fn tmp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("ns_config_cli_{}_{}_{}", std::process::id(), nanos, name));
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn keys(plan: &serde_json::Value) -> Vec<String> {
    plan.as_array()
        .expect("plan should be a JSON array")
        .iter()
        .map(|k| {
            format!(
                "{}/{}/{}/{}",
                k["region"].as_str().unwrap(),
                k["sample"].as_str().unwrap(),
                k["systematic"].as_str().unwrap(),
                k["template"].as_str().unwrap()
            )
        })
        .collect()
}

#[test]
fn plan_lists_needed_histograms() {
    let config = fixture_path("minimal_example.yml");
    let out = run(&["plan", "--config", config.to_string_lossy().as_ref()]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(
        keys(&v),
        vec![
            "Signal_region/Data/Nominal/Nominal",
            "Signal_region/Signal/Nominal/Nominal",
            "Signal_region/Background/Nominal/Nominal",
            "Signal_region/Background/Modeling/Up",
            "Control_region/Data/Nominal/Nominal",
            "Control_region/Background/Nominal/Nominal",
            "Control_region/Background/Modeling/Up",
            "Control_region/Background/WeightBasedModeling/Up",
            "Control_region/Background/WeightBasedModeling/Down",
        ]
    );
}

#[test]
fn plan_writes_output_file() {
    let config = fixture_path("minimal_example.yml");
    let output = tmp_path("plan.json");
    let out = run(&[
        "plan",
        "--config",
        config.to_string_lossy().as_ref(),
        "--output",
        output.to_string_lossy().as_ref(),
    ]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));

    let v: serde_json::Value = serde_json::from_slice(&std::fs::read(&output).unwrap()).unwrap();
    assert_eq!(keys(&v).len(), 9);

    let _ = std::fs::remove_file(&output);
}

#[test]
fn plan_rejects_unknown_systematic_type() {
    let config = fixture_path("unknown_systematic_type.yml");
    let out = run(&["plan", "--config", config.to_string_lossy().as_ref()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown systematics type: ShapeOnly"), "stderr={stderr}");
}
