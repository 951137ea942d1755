use std::io::Write;
use std::process::{Command, Output};
use tempfile::{NamedTempFile, TempDir};

const TEMPLATE: &str = r##"<mjml>
  <mj-head>
    <mj-title>Weekly digest</mj-title>
  </mj-head>
  <mj-body>
    <mj-section>
      <mj-column>
        <mj-image width="100px" src="https://example.com/logo.png"></mj-image>
        <mj-divider border-color="#F45E43"></mj-divider>
        <mj-text font-size="20px" color="#F45E43">Hello World</mj-text>
        <mj-button href="https://example.com">Read more</mj-button>
      </mj-column>
    </mj-section>
  </mj-body>
</mjml>
"##;

fn bench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mjml-bench"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn mjml-bench")
}

fn template_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".mjml").tempfile().unwrap();
    file.write_all(TEMPLATE.as_bytes()).unwrap();
    file
}

fn timing_line(stdout: &str) -> Option<(String, f64)> {
    stdout.lines().find_map(|line| {
        let (label, rest) = line.split_once(": ")?;
        let ms = rest.strip_suffix("ms")?.parse::<f64>().ok()?;
        Some((label.to_string(), ms))
    })
}

#[test]
fn test_no_arguments_prints_usage_and_exits_1() {
    let output = bench(&[]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "usage: mjml-bench path/to/file.mjml");
}

#[test]
fn test_valid_file_prints_timing_line() {
    let file = template_file();
    let output = bench(&[file.path().to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let (label, ms) = timing_line(&stdout).expect("no timing line");
    assert_eq!(label, "mjml");
    assert!(ms >= 0.0);
}

#[test]
fn test_relative_path_is_resolved() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("digest.mjml"), TEMPLATE).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_mjml-bench"))
        .arg("digest.mjml")
        .arg("-n")
        .arg("3")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(timing_line(&String::from_utf8_lossy(&output.stdout)).is_some());
}

#[test]
fn test_missing_file_fails_without_timing_line() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.mjml");
    let output = bench(&[missing.to_str().unwrap()]);

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(0));
    assert!(timing_line(&String::from_utf8_lossy(&output.stdout)).is_none());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Template not found"));
}

#[test]
fn test_unparseable_template_fails_without_timing_line() {
    let mut file = tempfile::Builder::new().suffix(".mjml").tempfile().unwrap();
    file.write_all(b"plain text, no markup here").unwrap();

    let output = bench(&[file.path().to_str().unwrap(), "-n", "2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(timing_line(&String::from_utf8_lossy(&output.stdout)).is_none());
}

#[test]
fn test_invalid_utf8_template_is_still_timed() {
    let mut file = tempfile::Builder::new().suffix(".mjml").tempfile().unwrap();
    file.write_all(b"<mjml><mj-body><mj-text>caf\xe9</mj-text></mj-body></mjml>")
        .unwrap();

    let output = bench(&[file.path().to_str().unwrap(), "-n", "3"]);
    assert_eq!(output.status.code(), Some(0));
    let (label, _) = timing_line(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(label, "mjml");
}

#[test]
fn test_custom_label_and_iterations() {
    let file = template_file();
    let output = bench(&[file.path().to_str().unwrap(), "-n", "5", "--label", "digest"]);
    assert!(output.status.success());
    let (label, _) = timing_line(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(label, "digest");
}

#[test]
fn test_json_report() {
    let file = template_file();
    let output = bench(&[file.path().to_str().unwrap(), "-n", "4", "--warmup", "1", "--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(report["label"], "mjml");
    assert_eq!(report["converter"], "mrml");
    assert_eq!(report["iterations"], 4);
    assert_eq!(report["warmup"], 1);
    assert_eq!(report["input_bytes"], TEMPLATE.len());
    assert!(report["elapsed_ms"].as_f64().unwrap() >= 0.0);
}

#[test]
fn test_input_from_config_file() {
    let template = template_file();
    let mut config = NamedTempFile::new().unwrap();
    writeln!(
        config,
        "[bench]\ninput = \"{}\"\niterations = 2\nlabel = \"from-config\"",
        template.path().display()
    )
    .unwrap();

    let output = bench(&["--config", config.path().to_str().unwrap()]);
    assert!(output.status.success());
    let (label, _) = timing_line(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(label, "from-config");
}

#[test]
fn test_config_without_input_prints_usage() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[bench]\niterations = 2").unwrap();

    let output = bench(&["--config", config.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("usage:"));
}

#[test]
fn test_zero_iterations_is_config_error() {
    let file = template_file();
    let output = bench(&[file.path().to_str().unwrap(), "-n", "0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
