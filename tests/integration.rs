use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn readprep_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("readprep");
    path
}

/// Build a paragraph of `n` distinct tokens.
fn para(n: usize) -> String {
    (0..n)
        .map(|i| format!("w{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_article(tmp: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = tmp.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

fn run_readprep(args: &[&str]) -> (String, String, bool) {
    let binary = readprep_binary();
    let output = Command::new(&binary)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run readprep binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

#[test]
fn test_split_merges_small_paragraphs() {
    let tmp = TempDir::new().unwrap();
    let text = format!("{}\n\n{}\n\n{}", para(40), para(40), para(40));
    let path = write_article(&tmp, "article.txt", &text);

    let (stdout, _, ok) = run_readprep(&["split", path.to_str().unwrap()]);
    assert!(ok);
    assert!(stdout.contains("--- Chunk 1 (120 tokens) ---"));
    assert!(!stdout.contains("--- Chunk 2"));
}

#[test]
fn test_split_flushes_at_cap() {
    let tmp = TempDir::new().unwrap();
    let text = format!("{}\n\n{}", para(100), para(60));
    let path = write_article(&tmp, "article.txt", &text);

    let (stdout, _, ok) = run_readprep(&["split", path.to_str().unwrap()]);
    assert!(ok);
    assert!(stdout.contains("--- Chunk 1 (100 tokens) ---"));
    assert!(stdout.contains("--- Chunk 2 (60 tokens) ---"));
}

#[test]
fn test_split_json_report() {
    let tmp = TempDir::new().unwrap();
    let text = format!("{}\n\n{}", para(100), para(60));
    let path = write_article(&tmp, "article.txt", &text);

    let (stdout, _, ok) = run_readprep(&["split", path.to_str().unwrap(), "--json"]);
    assert!(ok);

    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["paragraph_count"], 2);
    assert_eq!(report["chunk_count"], 2);
    assert_eq!(report["chunks"][0]["index"], 1);
    assert_eq!(report["chunks"][0]["word_count"], 100);
    assert_eq!(report["chunks"][1]["index"], 2);
}

#[test]
fn test_split_reads_stdin() {
    let binary = readprep_binary();
    let mut child = Command::new(&binary)
        .args(["split", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(format!("{}\n\n{}", para(20), para(200)).as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    // 20 tokens is too small to stand alone, so the big paragraph merges in.
    assert_eq!(report["chunk_count"], 1);
    assert_eq!(report["chunks"][0]["word_count"], 220);
}

#[test]
fn test_split_empty_file_yields_one_empty_chunk() {
    let tmp = TempDir::new().unwrap();
    let path = write_article(&tmp, "empty.txt", "");

    let (stdout, _, ok) = run_readprep(&["split", path.to_str().unwrap(), "--json"]);
    assert!(ok);

    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["paragraph_count"], 0);
    assert_eq!(report["chunk_count"], 1);
    assert_eq!(report["chunks"][0]["text"], "");
}

#[test]
fn test_stats_summary() {
    let tmp = TempDir::new().unwrap();
    let text = format!("{}\n\n{}", para(100), para(60));
    let path = write_article(&tmp, "article.txt", &text);

    let (stdout, _, ok) = run_readprep(&["stats", path.to_str().unwrap()]);
    assert!(ok);
    assert!(stdout.contains("Article Stats"));
    assert!(stdout.contains("Paragraphs:  2"));
    assert!(stdout.contains("Chunks:      2"));
    assert!(stdout.contains("Tokens:      160"));
}

#[test]
fn test_missing_file_fails_with_context() {
    let (_, stderr, ok) = run_readprep(&["split", "/nonexistent/article.txt"]);
    assert!(!ok);
    assert!(stderr.contains("failed to read"));
}
