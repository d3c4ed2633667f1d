// tests/scan_mock_fs.rs

mod common;
use crate::common::ManualClock;

use std::path::{Path, PathBuf};
use std::time::Duration;

use pollwatch::clock::Clock;
use pollwatch::fs::mock::MockFileSystem;
use pollwatch::watch::{find_recent_match, NamePattern, RecencyWindow};

fn scan(fs: &MockFileSystem, clock: &ManualClock, pattern: &str, interval_secs: u64) -> Option<PathBuf> {
    find_recent_match(
        fs,
        Path::new("."),
        &NamePattern::new(pattern).unwrap(),
        &RecencyWindow::new(Duration::from_secs(interval_secs)),
        clock.now(),
    )
}

#[test]
fn empty_tree_reports_nothing() {
    let fs = MockFileSystem::new();
    let clock = ManualClock::at_fixed_instant();
    assert_eq!(scan(&fs, &clock, ".*", 1), None);
}

#[test]
fn recent_matching_file_is_found() {
    let fs = MockFileSystem::new();
    let clock = ManualClock::at_fixed_instant();
    fs.add_file("./main.tex", clock.now());

    assert_eq!(scan(&fs, &clock, r".*\.tex", 1), Some(PathBuf::from("./main.tex")));
}

#[test]
fn recent_non_matching_file_is_ignored() {
    let fs = MockFileSystem::new();
    let clock = ManualClock::at_fixed_instant();
    fs.add_file("./main.pdf", clock.now());

    assert_eq!(scan(&fs, &clock, r".*\.tex", 1), None);
}

#[test]
fn stale_matching_file_is_ignored() {
    let fs = MockFileSystem::new();
    let clock = ManualClock::at_fixed_instant();
    fs.add_file("./main.tex", clock.ago(Duration::from_secs(10)));

    assert_eq!(scan(&fs, &clock, r".*\.tex", 1), None);
    // A wider interval pulls it back into the window.
    assert!(scan(&fs, &clock, r".*\.tex", 10).is_some());
}

#[test]
fn files_in_nested_directories_are_found() {
    let fs = MockFileSystem::new();
    let clock = ManualClock::at_fixed_instant();
    fs.add_file("./a/b/c/deep.tex", clock.now());

    assert_eq!(
        scan(&fs, &clock, r".*\.tex", 1),
        Some(PathBuf::from("./a/b/c/deep.tex"))
    );
}

#[test]
fn only_the_base_name_is_matched() {
    let fs = MockFileSystem::new();
    let clock = ManualClock::at_fixed_instant();
    fs.add_file("./src/lib.rs", clock.now());

    // The directory name is not part of what the pattern sees.
    assert_eq!(scan(&fs, &clock, "src", 1), None);
    assert!(scan(&fs, &clock, r"^lib\.rs$", 1).is_some());
}

#[test]
fn scan_stops_at_first_recent_match() {
    let fs = MockFileSystem::new();
    let clock = ManualClock::at_fixed_instant();
    fs.add_file("./a.tex", clock.now());
    fs.add_file("./b.tex", clock.now());
    fs.add_file("./sub/c.tex", clock.now());

    assert!(scan(&fs, &clock, r".*\.tex", 1).is_some());
    assert_eq!(fs.mtime_reads().len(), 1);
}

#[test]
fn stale_files_do_not_stop_the_scan() {
    let fs = MockFileSystem::new();
    let clock = ManualClock::at_fixed_instant();
    fs.add_file("./old.tex", clock.ago(Duration::from_secs(60)));
    fs.add_file("./new.tex", clock.now());

    assert_eq!(scan(&fs, &clock, r".*\.tex", 1), Some(PathBuf::from("./new.tex")));
    assert_eq!(fs.mtime_reads().len(), 2);
}

#[test]
fn non_matching_files_are_never_statted() {
    let fs = MockFileSystem::new();
    let clock = ManualClock::at_fixed_instant();
    fs.add_file("./a.pdf", clock.now());
    fs.add_file("./b.log", clock.now());

    assert_eq!(scan(&fs, &clock, r".*\.tex", 1), None);
    assert!(fs.mtime_reads().is_empty());
}

#[test]
fn vanished_file_is_skipped() {
    let fs = MockFileSystem::new();
    let clock = ManualClock::at_fixed_instant();
    fs.add_file("./gone.tex", clock.now());
    fs.vanish("./gone.tex");
    fs.add_file("./kept.tex", clock.now());

    assert_eq!(scan(&fs, &clock, r".*\.tex", 1), Some(PathBuf::from("./kept.tex")));
}

#[test]
fn unreadable_directory_is_skipped() {
    let fs = MockFileSystem::new();
    let clock = ManualClock::at_fixed_instant();
    fs.add_unreadable("./locked");
    fs.add_file("./open/ok.tex", clock.now());

    assert_eq!(scan(&fs, &clock, r".*\.tex", 1), Some(PathBuf::from("./open/ok.tex")));
}

#[test]
fn empty_directories_are_harmless() {
    let fs = MockFileSystem::new();
    let clock = ManualClock::at_fixed_instant();
    fs.add_dir("./empty/nested");

    assert_eq!(scan(&fs, &clock, ".*", 1), None);
}

#[test]
fn same_edit_is_seen_again_while_inside_the_window() {
    let fs = MockFileSystem::new();
    let clock = ManualClock::at_fixed_instant();
    fs.add_file("./main.tex", clock.now());

    assert!(scan(&fs, &clock, ".*", 1).is_some());
    clock.advance(Duration::from_secs(1));
    assert!(scan(&fs, &clock, ".*", 1).is_some());
    clock.advance(Duration::from_secs(1));
    assert!(scan(&fs, &clock, ".*", 1).is_none());
}
