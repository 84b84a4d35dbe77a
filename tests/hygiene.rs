//! Hygiene — source-level checks run as tests
//!
//! Scans the production sources under `src/` for constructs that crash the
//! page or silently drop errors. Every budget is zero: a listener that panics
//! takes every other behavior on the page down with it.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_absent(pattern: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let found = hits(&files, pattern);
    let listing = found
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(found.is_empty(), "`{pattern}` is not allowed in production code:\n{listing}");
}

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()");
}

#[test]
fn no_expect() {
    assert_absent(".expect(");
}

#[test]
fn no_panic() {
    assert_absent("panic!(");
}

#[test]
fn no_unreachable() {
    assert_absent("unreachable!(");
}

#[test]
fn no_todo() {
    assert_absent("todo!(");
}

#[test]
fn no_unimplemented() {
    assert_absent("unimplemented!(");
}

#[test]
fn no_silent_discard() {
    assert_absent("let _ =");
}

#[test]
fn no_dot_ok() {
    assert_absent(".ok()");
}

#[test]
fn no_allow_dead_code() {
    assert_absent("#[allow(dead_code)]");
}

#[test]
fn window_reads_are_not_defaulted() {
    let files = source_files();
    for file in &files {
        for (number, line) in file.content.lines().enumerate() {
            if line.contains("window.") && line.contains(".unwrap_or") {
                panic!("{}:{}: log a failed window read instead of defaulting it", file.path, number + 1);
            }
        }
    }
}

#[test]
fn test_modules_exist() {
    let files = source_files();
    for file in &files {
        for line in file.content.lines() {
            let Some(rest) = line.trim().strip_prefix("#[path = \"") else {
                continue;
            };
            let Some(name) = rest.split('"').next() else {
                continue;
            };
            let dir = Path::new(&file.path).parent().unwrap_or(Path::new("src"));
            assert!(dir.join(name).exists(), "{} points at missing {name}", file.path);
        }
    }
}
