use lexicon::scan::{build_digest, scan_tree, DigestConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn fixture_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(
        root,
        "server/server.go",
        r#"package server

type HTTPServer struct {
    listenAddr string
    maxConns   int
}

func NewHTTPServer(listenAddr string) *HTTPServer {
    srv := &HTTPServer{listenAddr: listenAddr}
    return srv
}
"#,
    );
    write(
        root,
        "server/handler.go",
        r#"package server

type Handler interface {
    ServeRequest(req *Request) error
}

func serveAll(handlers []Handler) {
    for idx, handler := range handlers {
        _ = idx
        _ = handler
    }
}
"#,
    );
    write(
        root,
        "util/ids.go",
        r#"package util

const MAX_ID2_LEN = 16

var userID, groupID string
"#,
    );
    write(root, "README.md", "not scanned\n");

    dir
}

#[test]
fn test_hand_counted_table() {
    let tree = TempDir::new().unwrap();
    write(
        tree.path(),
        "main.go",
        r#"package main

func fooBar() {}

func fooBaz() {}

var FOO = 1
"#,
    );
    let out = TempDir::new().unwrap();

    let config = DigestConfig::new(tree.path()).with_output_dir(out.path());
    let stats = build_digest(&config).unwrap();

    let table = fs::read_to_string(out.path().join("word_list.txt")).unwrap();
    assert_eq!(table, "bar 1\nbaz 1\nfoo 3\n");
    assert_eq!(stats.identifiers, 3);
    assert_eq!(stats.distinct_words, 3);
    assert_eq!(stats.words_recorded, 5);
}

#[test]
fn test_fixture_counts() {
    let tree = fixture_tree();
    let outcome = scan_tree(tree.path()).unwrap();
    let index = &outcome.index;

    assert_eq!(outcome.stats.files_scanned, 3);
    assert_eq!(outcome.stats.files_failed, 0);

    // HTTPServer (type) + NewHTTPServer (func)
    assert_eq!(index.count("http"), 2);
    assert_eq!(index.count("server"), 2);
    // field, parameter
    assert_eq!(index.count("listen"), 2);
    assert_eq!(index.count("addr"), 2);
    assert_eq!(index.count("srv"), 1);
    // type + range value
    assert_eq!(index.count("handler"), 2);
    assert_eq!(index.count("handlers"), 1);
    assert_eq!(index.count("idx"), 1);
    // ServeRequest (interface method) + serveAll (func)
    assert_eq!(index.count("serve"), 2);
    assert_eq!(index.count("request"), 1);
    // interface method parameters are not declarations of their own
    assert_eq!(index.count("req"), 0);
    // MAX_ID2_LEN and maxConns
    assert_eq!(index.count("max"), 2);
    assert_eq!(index.count("id2"), 1);
    assert_eq!(index.count("id"), 2);
    assert_eq!(index.count("user"), 1);
    assert_eq!(index.count("group"), 1);
    // not an identifier declared anywhere
    assert_eq!(index.count("not"), 0);
}

#[test]
fn test_repeated_scans_are_byte_identical() {
    let tree = fixture_tree();
    let out_a = TempDir::new().unwrap();
    let out_b = TempDir::new().unwrap();

    build_digest(&DigestConfig::new(tree.path()).with_output_dir(out_a.path())).unwrap();
    build_digest(&DigestConfig::new(tree.path()).with_output_dir(out_b.path())).unwrap();

    let a = fs::read(out_a.path().join("word_list.txt")).unwrap();
    let b = fs::read(out_b.path().join("word_list.txt")).unwrap();
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn test_rerun_replaces_previous_table() {
    let tree = TempDir::new().unwrap();
    write(tree.path(), "a.go", "package a\n\nfunc alphaBeta() {}\n");
    let out = TempDir::new().unwrap();
    let config = DigestConfig::new(tree.path()).with_output_dir(out.path());

    build_digest(&config).unwrap();
    fs::remove_file(tree.path().join("a.go")).unwrap();
    write(tree.path(), "b.go", "package b\n\nfunc gammaDelta() {}\n");
    build_digest(&config).unwrap();

    let table = fs::read_to_string(&config.output).unwrap();
    assert_eq!(table, "delta 1\ngamma 1\n");
}

#[test]
fn test_broken_file_does_not_stop_siblings() {
    let tree = fixture_tree();
    write(
        tree.path(),
        "server/broken.go",
        "package server\n\nfunc brokenThing(oops int {\n",
    );
    write(tree.path(), "zzz/late.go", "package zzz\n\nfunc lateArrival() {}\n");

    let outcome = scan_tree(tree.path()).unwrap();

    assert_eq!(outcome.stats.files_scanned, 5);
    assert_eq!(outcome.stats.files_failed, 1);
    assert_eq!(outcome.index.count("broken"), 0);
    assert_eq!(outcome.index.count("oops"), 0);
    // sibling in the same directory and a directory visited afterwards
    assert_eq!(outcome.index.count("handler"), 2);
    assert_eq!(outcome.index.count("late"), 1);
    assert_eq!(outcome.index.count("arrival"), 1);
}

#[test]
fn test_unwritable_output_leaves_no_table() {
    let tree = fixture_tree();
    let out = TempDir::new().unwrap();
    let blocker = out.path().join("blocked");
    fs::write(&blocker, "file, not directory").unwrap();

    let config = DigestConfig::new(tree.path()).with_output_dir(&blocker.join("nested"));
    assert!(build_digest(&config).is_err());
    assert!(!config.output.exists());
}

#[test]
fn test_table_is_sorted_without_duplicates() {
    let tree = fixture_tree();
    let out = TempDir::new().unwrap();
    build_digest(&DigestConfig::new(tree.path()).with_output_dir(out.path())).unwrap();

    let table = fs::read_to_string(out.path().join("word_list.txt")).unwrap();
    let words: Vec<&str> = table
        .lines()
        .map(|line| {
            let (word, count) = line.split_once(' ').expect("`word count` line");
            assert!(count.parse::<u64>().unwrap() > 0);
            word
        })
        .collect();

    for pair in words.windows(2) {
        assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
    }
}
