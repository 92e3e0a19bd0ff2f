use std::process::Command;

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_md2wx"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--no-footnotes"));
}

#[test]
fn test_cli_converts_file_to_stdout() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("article.md");
    std::fs::write(&input, "See [docs](https://example.com).\n").expect("write input");

    let output = Command::new(env!("CARGO_BIN_EXE_md2wx"))
        .arg(&input)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<sup>[1]</sup>"));
    assert!(stdout.contains("References"));
}

#[test]
fn test_cli_writes_output_file_without_footnotes() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("article.md");
    let output_path = dir.path().join("article.html");
    std::fs::write(&input, "See [docs](https://example.com).\n").expect("write input");

    let status = Command::new(env!("CARGO_BIN_EXE_md2wx"))
        .arg(&input)
        .arg(&output_path)
        .arg("--no-footnotes")
        .status()
        .expect("Failed to execute command");

    assert!(status.success());
    let html = std::fs::read_to_string(&output_path).expect("read output");
    assert!(html.contains(">docs</span>"));
    assert!(!html.contains("<sup>"));
}

#[test]
fn test_cli_missing_input_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_md2wx"))
        .arg("does-not-exist.md")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error converting Markdown"));
}
