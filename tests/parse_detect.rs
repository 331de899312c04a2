//! Integration tests for the parse and detect pipeline over a whole
//! export directory.

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use chatwise_import::application::{find_chat_files, is_chatwise_export, parse_chat_file};
use chatwise_import::domain::Thread;

fn write_file(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

fn parse_directory(dir: &Path) -> Vec<Thread> {
    find_chat_files(dir)
        .unwrap()
        .iter()
        .filter_map(|path| parse_chat_file(path))
        .collect()
}

#[test]
fn sentinel_only_export_is_recognized_with_no_threads() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "chatwise-export-verison.txt", "1");

    assert!(is_chatwise_export(dir.path()).unwrap());
    assert!(parse_directory(dir.path()).is_empty());
}

#[test]
fn export_parses_in_file_order_and_skips_bad_files() {
    let dir = tempdir().unwrap();
    write_file(
        dir.path(),
        "chat-001.json",
        r#"{"id":"a","title":"First","messages":[{"content":"one"}]}"#,
    );
    write_file(dir.path(), "chat-002.json", "{broken json");
    write_file(
        dir.path(),
        "chat-003.json",
        r#"{"id":"c","title":"Empty","messages":[{"content":"   "}]}"#,
    );
    write_file(
        dir.path(),
        "chat-004.json",
        r#"{"id":"d","title":"Last","messages":[{"content":"four"}]}"#,
    );

    assert!(is_chatwise_export(dir.path()).unwrap());

    let threads = parse_directory(dir.path());
    let ids: Vec<_> = threads.iter().map(|t| t.thread_id.as_str()).collect();
    assert_eq!(ids, vec!["chatwise-a", "chatwise-d"]);
}

#[test]
fn unrecognized_directory_is_rejected() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "readme.txt", "not an export");

    assert!(!is_chatwise_export(dir.path()).unwrap());
}

#[test]
fn detection_uses_first_sorted_chat_file() {
    let dir = tempdir().unwrap();
    // chat-a sorts first and is malformed; detection must reject even
    // though a later file is valid.
    write_file(dir.path(), "chat-a.json", "{broken");
    write_file(
        dir.path(),
        "chat-b.json",
        r#"{"id":"b","title":"ok","messages":[]}"#,
    );

    assert!(!is_chatwise_export(dir.path()).unwrap());
}

#[test]
fn parsed_thread_ids_are_stable_across_runs() {
    let dir = tempdir().unwrap();
    write_file(
        dir.path(),
        "chat-1.json",
        r#"{"id":"stable","title":"T","messages":[{"content":"hi"}]}"#,
    );

    let first = parse_directory(dir.path());
    let second = parse_directory(dir.path());
    assert_eq!(first[0].thread_id, second[0].thread_id);
    assert_eq!(first[0].thread_id, "chatwise-stable");
}
