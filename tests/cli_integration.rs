//! Integration tests for the `mn` CLI.
//!
//! Each test copies the fixture workspace into a temp directory, runs `mn`
//! as a subprocess there, and checks stdout.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the built `mn` binary.
fn mn_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("mn");
    path
}

/// Copy the fixture workspace into `root`.
fn create_test_workspace(root: &Path) {
    fs::write(
        root.join("mentions.toml"),
        include_str!("fixtures/mentions.toml"),
    )
    .unwrap();
}

fn workspace() -> tempfile::TempDir {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_workspace(tmp.path());
    tmp
}

/// Run `mn` with the given args in the given directory, returning (stdout, stderr, success).
fn run_mn(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(mn_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run mn");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `mn` expecting success, return stdout.
fn run_mn_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_mn(dir, args);
    if !success {
        panic!(
            "mn {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

fn json(out: &str) -> serde_json::Value {
    serde_json::from_str(out).unwrap()
}

// ---------------------------------------------------------------------------
// items
// ---------------------------------------------------------------------------

#[test]
fn test_items_in_file_order() {
    let tmp = workspace();
    let out = run_mn_ok(tmp.path(), &["items"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "t-1  [ ] John  (people)");
    assert_eq!(lines[1], "g-1  [*] Joanna");
    assert_eq!(lines[6], "item-42  [*] Answer everything");
}

#[test]
fn test_items_json() {
    let tmp = workspace();
    let parsed = json(&run_mn_ok(tmp.path(), &["items", "--json"]));
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 7);
    assert_eq!(arr[0]["id"], "t-1");
    assert_eq!(arr[0]["kind"], "todo");
    assert_eq!(arr[3]["body"], "Goes well with apple");
}

#[test]
fn test_items_found_from_subdirectory() {
    let tmp = workspace();
    let sub = tmp.path().join("a/b");
    fs::create_dir_all(&sub).unwrap();
    let out = run_mn_ok(&sub, &["items"]);
    assert!(out.contains("t-1"));
}

#[test]
fn test_items_explicit_workspace_flag() {
    let tmp = workspace();
    let other = tempfile::TempDir::new().unwrap();
    let file = tmp.path().join("mentions.toml");
    let out = run_mn_ok(other.path(), &["items", "-w", file.to_str().unwrap()]);
    assert!(out.contains("Joanna"));
}

#[test]
fn test_items_json_workspace_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let file = tmp.path().join("items.json");
    fs::write(
        &file,
        r#"{"items": [{"id": "x", "title": "From JSON", "kind": "event"}]}"#,
    )
    .unwrap();
    let out = run_mn_ok(tmp.path(), &["items", "-w", file.to_str().unwrap()]);
    assert_eq!(out.trim(), "x  [=] From JSON");
}

#[test]
fn test_items_without_workspace_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let missing = tmp.path().join("nope.toml");
    let (_, stderr, success) = run_mn(tmp.path(), &["items", "-w", missing.to_str().unwrap()]);
    assert!(!success);
    assert!(stderr.starts_with("error: could not read"));
}

#[test]
fn test_duplicate_ids_rejected() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(
        tmp.path().join("mentions.toml"),
        "[[items]]\nid = \"a\"\ntitle = \"One\"\nkind = \"todo\"\n\n\
         [[items]]\nid = \"a\"\ntitle = \"Two\"\nkind = \"goal\"\n",
    )
    .unwrap();
    let (_, stderr, success) = run_mn(tmp.path(), &["items"]);
    assert!(!success);
    assert!(stderr.contains("duplicate item id 'a'"));
}

// ---------------------------------------------------------------------------
// detect
// ---------------------------------------------------------------------------

#[test]
fn test_detect_at_end() {
    let tmp = workspace();
    let out = run_mn_ok(tmp.path(), &["detect", "Talk to @jo"]);
    assert_eq!(out.trim(), "8..11 @jo");
}

#[test]
fn test_detect_with_cursor() {
    let tmp = workspace();
    let out = run_mn_ok(tmp.path(), &["detect", "@jo and more", "--cursor", "2"]);
    assert_eq!(out.trim(), "0..2 @j");
}

#[test]
fn test_detect_none_after_space() {
    let tmp = workspace();
    let out = run_mn_ok(tmp.path(), &["detect", "Talk to @jo "]);
    assert_eq!(out.trim(), "no mention");
}

#[test]
fn test_detect_json() {
    let tmp = workspace();
    let parsed = json(&run_mn_ok(tmp.path(), &["detect", "Talk to @jo", "--json"]));
    assert_eq!(parsed["start"], 8);
    assert_eq!(parsed["end"], 11);
    assert_eq!(parsed["query"], "jo");

    let out = run_mn_ok(tmp.path(), &["detect", "plain", "--json"]);
    assert_eq!(out.trim(), "null");
}

#[test]
fn test_detect_honors_configured_trigger() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("mentions.toml"), "[mentions]\ntrigger = \"+\"\n").unwrap();
    let out = run_mn_ok(tmp.path(), &["detect", "see +jo"]);
    assert_eq!(out.trim(), "4..7 +jo");
    let out = run_mn_ok(tmp.path(), &["detect", "see @jo"]);
    assert_eq!(out.trim(), "no mention");
}

// ---------------------------------------------------------------------------
// suggest
// ---------------------------------------------------------------------------

#[test]
fn test_suggest_ranking() {
    let tmp = workspace();
    let out = run_mn_ok(tmp.path(), &["suggest", "app"]);
    let ids: Vec<&str> = out
        .lines()
        .map(|l| l.split_whitespace().next().unwrap())
        .collect();
    // title prefix, then title contains, then body only
    assert_eq!(ids, vec!["e-1", "t-2", "r-1", "e-2"]);
}

#[test]
fn test_suggest_empty_query_lists_in_order() {
    let tmp = workspace();
    let out = run_mn_ok(tmp.path(), &["suggest"]);
    assert_eq!(out.lines().count(), 7);
    assert!(out.starts_with("t-1  [ ] John"));
}

#[test]
fn test_suggest_json() {
    let tmp = workspace();
    let parsed = json(&run_mn_ok(tmp.path(), &["suggest", "joa", "--json"]));
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["id"], "g-1");
    assert_eq!(arr[0]["display_text"], "[*] Joanna");
}

#[test]
fn test_suggest_no_matches() {
    let tmp = workspace();
    let out = run_mn_ok(tmp.path(), &["suggest", "zzz"]);
    assert!(out.is_empty());
}

// ---------------------------------------------------------------------------
// complete
// ---------------------------------------------------------------------------

#[test]
fn test_complete_first_row() {
    let tmp = workspace();
    let out = run_mn_ok(tmp.path(), &["complete", "Talk to @jo"]);
    assert_eq!(out, "Talk to \ncursor: 8\ntag: t-1 [ ] John\n");
}

#[test]
fn test_complete_pick_second_row() {
    let tmp = workspace();
    let out = run_mn_ok(tmp.path(), &["complete", "Talk to @jo", "--pick", "1"]);
    assert!(out.ends_with("tag: g-1 [*] Joanna\n"));
}

#[test]
fn test_complete_keeps_text_after_cursor() {
    let tmp = workspace();
    let parsed = json(&run_mn_ok(
        tmp.path(),
        &["complete", "ask @jo today", "--cursor", "7", "--json"],
    ));
    assert_eq!(parsed["text"], "ask  today");
    assert_eq!(parsed["cursor"], 4);
    assert_eq!(parsed["tag"]["id"], "t-1");
    assert_eq!(parsed["tag"]["name"], "John");
}

#[test]
fn test_complete_without_mention_fails() {
    let tmp = workspace();
    let (_, stderr, success) = run_mn(tmp.path(), &["complete", "no mention here"]);
    assert!(!success);
    assert!(stderr.contains("no suggestions"));
}

// ---------------------------------------------------------------------------
// resolve
// ---------------------------------------------------------------------------

#[test]
fn test_resolve_item_id() {
    let tmp = workspace();
    let out = run_mn_ok(tmp.path(), &["resolve", "item-42"]);
    assert_eq!(out.trim(), "tag: item-42 [*] Answer everything");
}

#[test]
fn test_resolve_trims_whitespace() {
    let tmp = workspace();
    let out = run_mn_ok(tmp.path(), &["resolve", "  item-42\n"]);
    assert!(out.contains("item-42"));
}

#[test]
fn test_resolve_no_match() {
    let tmp = workspace();
    let out = run_mn_ok(tmp.path(), &["resolve", "item-4"]);
    assert_eq!(out.trim(), "no match");

    let parsed = json(&run_mn_ok(tmp.path(), &["resolve", "item-4", "--json"]));
    assert!(parsed["tag"].is_null());
}
