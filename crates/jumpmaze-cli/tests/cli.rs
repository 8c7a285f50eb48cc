use std::path::Path;
use std::process::{Command, Output};

const MAZES: &str = "\
2 2 0 0 1 1
1 1
1 1
1 2 0 0 0 1
0 1
0
";

fn jumpmaze(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jumpmaze"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run jumpmaze")
}

fn write_file(dir: &Path, text: &str) -> String {
    let path = dir.join("mazes.txt");
    std::fs::write(&path, text).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn solve_prints_report() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), MAZES);
    let out = jumpmaze(&["solve", &file]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Mazes:"));
    assert!(stdout.contains("--- maze 1 (2x2) ---\nDFS: path found in 2 moves\nUCS (BFS): 2"));
    assert!(stdout.contains("--- maze 2 (1x2) ---\nDFS: no solution found"));
}

#[test]
fn trace_json_is_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), MAZES);
    let out = jumpmaze(&["trace", &file, "--algo", "ucs", "--json"]);
    assert!(out.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(doc["algorithm"], "UniformCost");
    let steps = doc["history"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[4]["message"], "solution found in 2 moves");
}

#[test]
fn trace_text_for_second_maze() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), MAZES);
    let out = jumpmaze(&["trace", &file, "--maze", "2"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("step 0/"));
    assert!(stdout.contains("no solution found"));
}

#[test]
fn maze_index_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), MAZES);
    let out = jumpmaze(&["trace", &file, "--maze", "3"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("out of range"));
}

#[test]
fn unknown_algorithm_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), MAZES);
    let out = jumpmaze(&["trace", &file, "--algo", "astar"]);
    assert!(!out.status.success());
}

#[test]
fn file_without_mazes_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "oops\n0\n");
    let out = jumpmaze(&["solve", &file]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("no valid mazes"));
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let out = jumpmaze(&["solve", missing.to_str().unwrap()]);
    assert!(!out.status.success());
}

#[test]
fn generated_mazes_load_back() {
    let out = jumpmaze(&[
        "generate", "--rows", "3", "--cols", "4", "--count", "3", "--seed", "9", "--solvable",
    ]);
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.ends_with("0\n"));

    let again = jumpmaze(&[
        "generate", "--rows", "3", "--cols", "4", "--count", "3", "--seed", "9", "--solvable",
    ]);
    assert_eq!(text, String::from_utf8(again.stdout).unwrap());

    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), &text);
    let solved = jumpmaze(&["solve", &file]);
    assert!(solved.status.success());
    let report = String::from_utf8(solved.stdout).unwrap();
    assert_eq!(report.matches("(3x4)").count(), 3);
    assert!(!report.contains("UCS (BFS): no solution found"));
}

#[test]
fn generate_without_seed() {
    let out = jumpmaze(&["generate", "--rows", "2", "--cols", "2", "--count", "2"]);
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), &text);
    let solved = jumpmaze(&["solve", &file]);
    assert!(solved.status.success());
    let report = String::from_utf8(solved.stdout).unwrap();
    assert_eq!(report.matches("(2x2)").count(), 2);
}
