use regex::Regex;
use std::fs::File;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fretforge"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn extract_scores(stdout: &str) -> Vec<f32> {
    let re = Regex::new(r"Final Difficulty Score: ([\d.]+)").unwrap();
    re.captures_iter(stdout)
        .map(|c| c[1].parse().unwrap())
        .collect()
}

#[test]
fn test_analyze_reports_scores() {
    let output = run(&["analyze", "133211", "345655", "000000"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let scores = extract_scores(&stdout);
    assert_eq!(scores.len(), 3, "stdout:\n{}", stdout);
    assert!(scores[0] > 0.0 && scores[0] < 10_000.0);
    assert_eq!(scores[1], 10_000.0);
    assert_eq!(scores[2], 0.0);
    assert!(stdout.contains("Requires 6 fingers"));
    assert!(stdout.contains("No notes to play."));
}

#[test]
fn test_weight_flags_change_the_score() {
    let base = extract_scores(&String::from_utf8_lossy(&run(&["analyze", "133211"]).stdout));
    let heavy = extract_scores(&String::from_utf8_lossy(
        &run(&["analyze", "133211", "--weight-barre-base", "100"]).stdout,
    ));
    assert!((heavy[0] - base[0] - 80.0).abs() < 0.11);
}

#[test]
fn test_weights_file_with_cli_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weights.json");
    let mut f = File::create(&path).unwrap();
    writeln!(f, r#"{{ "max_fret_span": 6 }}"#).unwrap();
    let path = path.to_str().unwrap();

    // Span 5: rejected by default, allowed by the file, rejected again by the flag.
    let default = run(&["analyze", "1xxx6x"]);
    assert!(String::from_utf8_lossy(&default.stdout).contains("maximum stretch"));

    let relaxed = run(&["analyze", "1xxx6x", "--weights", path]);
    assert!(!String::from_utf8_lossy(&relaxed.stdout).contains("maximum stretch"));

    let strict = run(&["analyze", "1xxx6x", "--weights", path, "--max-fret-span", "3"]);
    assert!(String::from_utf8_lossy(&strict.stdout).contains("maximum stretch of 3 frets"));
}

#[test]
fn test_batch_json_ranks_easiest_first() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chords.csv");
    std::fs::write(
        &path,
        "name,fingering\nImpossible,345655\nF major,133211\nE major,022100\n",
    )
    .unwrap();

    let output = run(&["batch", "--input", path.to_str().unwrap(), "--json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["E major", "F major", "Impossible"]);
    assert_eq!(json[2]["score"], 10_000.0);
    assert_eq!(json[0]["fingering"], "022100");
}

#[test]
fn test_bad_input_exits_non_zero() {
    let output = run(&["analyze", "x3201"]);
    assert!(!output.status.success());
}

#[test]
fn test_shapes_lists_overrides() {
    let output = run(&["shapes"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("g_major_open"));
    assert!(stdout.contains("g_major_rock"));
}
