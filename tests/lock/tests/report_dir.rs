//! Comparison report directories: write, read back, and detect tampering.

use wayfinder_harness::runner::{
    compare, compare_puzzle, read_report_dir, write_report_dir, DIGEST_FILENAME, REPORT_FILENAME,
};
use wayfinder_harness::worlds::explicit_graph::builtin;
use wayfinder_harness::worlds::sliding_puzzle::Board;
use wayfinder_search::frontier::FrontierStrategy;

#[test]
fn puzzle_report_round_trips_through_directory() {
    let start: Board = "1,2,3,4,0,5,6,7,8".parse().unwrap();
    let goal: Board = "1,2,3,4,5,8,6,7,0".parse().unwrap();
    let report = compare_puzzle(start, goal).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = write_report_dir(&report, dir.path()).unwrap();
    assert_eq!(path, dir.path().join(REPORT_FILENAME));

    let stored = std::fs::read_to_string(dir.path().join(DIGEST_FILENAME)).unwrap();
    assert_eq!(stored, report.digest().unwrap().as_str());

    let json = read_report_dir(dir.path()).unwrap();
    assert_eq!(json, report.to_json_value());
    let runs = json["runs"].as_array().unwrap();
    assert_eq!(runs.len(), 5);
    assert!(runs.iter().all(|r| r["moves"] == 2));
}

#[test]
fn writing_twice_produces_identical_bytes() {
    let report = compare(&builtin("paths-3").unwrap(), &FrontierStrategy::ALL).unwrap();
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    write_report_dir(&report, a.path()).unwrap();
    write_report_dir(&report, b.path()).unwrap();
    for name in [REPORT_FILENAME, DIGEST_FILENAME] {
        assert_eq!(
            std::fs::read(a.path().join(name)).unwrap(),
            std::fs::read(b.path().join(name)).unwrap(),
            "{name}"
        );
    }
}

#[test]
fn edited_report_fails_digest_check() {
    let report = compare(&builtin("weighted-1").unwrap(), &[FrontierStrategy::Queue]).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = write_report_dir(&report, dir.path()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, text.replace("\"bfs\"", "\"dfs\"")).unwrap();
    assert!(read_report_dir(dir.path()).is_err());
}
