//! Runs every network file under `conformance/` through the validator.
//!
//! positive/  -- *.net files that must validate
//! negative/  -- *.net + *.expected-error.json (first error expected)

use netfile_core::{validate_file, validate_str};
use std::path::{Path, PathBuf};

fn conformance_dir(sub: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // crates/core -> workspace root is two levels up
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .join("conformance")
        .join(sub)
}

fn collect_net_files(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().map_or(false, |e| e == "net"))
        .collect();
    paths.sort();
    paths
}

#[test]
fn positive_files_validate() {
    let files = collect_net_files(&conformance_dir("positive"));
    assert!(!files.is_empty(), "no positive fixtures found");
    let failures: Vec<String> = files
        .iter()
        .filter_map(|p| validate_file(p).err().map(|e| format!("{}: {}", p.display(), e)))
        .collect();
    assert!(failures.is_empty(), "unexpected failures:\n{}", failures.join("\n"));
}

#[test]
fn negative_files_report_expected_error() {
    let files = collect_net_files(&conformance_dir("negative"));
    assert!(!files.is_empty(), "no negative fixtures found");
    for path in files {
        let expected_path = path.with_extension("expected-error.json");
        let expected: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&expected_path).unwrap()).unwrap();
        let err = validate_file(&path)
            .expect_err(&format!("{} should fail validation", path.display()));
        assert_eq!(err.to_json_value(), expected, "{}", path.display());
    }
}

#[test]
fn file_and_string_validation_agree() {
    for sub in ["positive", "negative"] {
        for path in collect_net_files(&conformance_dir(sub)) {
            let text = std::fs::read_to_string(&path).unwrap();
            assert_eq!(validate_file(&path), validate_str(&text), "{}", path.display());
        }
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = validate_file(&dir.path().join("absent.net")).unwrap_err();
    assert_eq!(err.line, 0);
    assert!(err.message.starts_with("error reading file"));
}

#[test]
fn ten_thousand_line_network() {
    let mut src = String::from("function bpr (f) t0*(1+0.15*(f/cap)^4)\n");
    for i in 0..5000 {
        src.push_str(&format!("node n{}\n", i));
    }
    for i in 0..4999 {
        src.push_str(&format!("edge n{0}-n{1} n{0} n{1} bpr 1 100\n", i, i + 1));
    }
    src.push_str("od n0|n4999 n0 n4999 10\n");
    let summary = validate_str(&src).unwrap();
    assert_eq!(summary.nodes, 5000);
    assert_eq!(summary.edges, 4999);
    assert_eq!(summary.od_pairs, 1);
}
