use std::error::Error;
use std::fs;
use std::path::Path;

use filetime::{FileTime, set_file_mtime};
use pollrun::config::FilterConfig;
use pollrun::watch::{ChangeKind, FileFilter, ScanMode, Scanner, SnapshotStore};
use tempfile::tempdir;

type TestResult = Result<(), Box<dyn Error>>;

fn c_filter() -> FileFilter {
    let config = FilterConfig {
        extensions: vec!["c".to_string()],
        ..Default::default()
    };
    FileFilter::new(&config).expect("patterns should compile")
}

fn touch(path: &Path) -> TestResult {
    fs::write(path, b"x")?;
    Ok(())
}

#[test]
fn baseline_scan_is_silent_and_populates_snapshot() -> TestResult {
    let dir = tempdir()?;
    touch(&dir.path().join("a.c"))?;
    touch(&dir.path().join("b.c"))?;
    touch(&dir.path().join("notes.txt"))?;

    let mut scanner = Scanner::new(dir.path(), c_filter(), true);
    let outcome = scanner.scan(ScanMode::Baseline)?;

    assert_eq!(outcome.changed_count(), 0);
    assert_eq!(scanner.tracked_files(), 2);
    Ok(())
}

#[test]
fn rescan_without_mutation_reports_nothing() -> TestResult {
    let dir = tempdir()?;
    touch(&dir.path().join("a.c"))?;

    let mut scanner = Scanner::new(dir.path(), c_filter(), true);
    scanner.scan(ScanMode::Baseline)?;
    let outcome = scanner.scan(ScanMode::Poll)?;

    assert_eq!(outcome.changed_count(), 0);
    Ok(())
}

#[test]
fn created_then_modified_then_quiet() -> TestResult {
    let dir = tempdir()?;
    let mut scanner = Scanner::new(dir.path(), c_filter(), true);
    scanner.scan(ScanMode::Baseline)?;

    let file = dir.path().join("a.c");
    touch(&file)?;

    let outcome = scanner.scan(ScanMode::Poll)?;
    assert_eq!(outcome.changed_count(), 1);
    assert_eq!(outcome.changes[0].kind, ChangeKind::Created);
    assert_eq!(outcome.changes[0].path, file);

    set_file_mtime(&file, FileTime::from_unix_time(2_000_000_000, 0))?;
    let outcome = scanner.scan(ScanMode::Poll)?;
    assert_eq!(outcome.changed_count(), 1);
    assert_eq!(outcome.changes[0].kind, ChangeKind::Modified);

    let outcome = scanner.scan(ScanMode::Poll)?;
    assert_eq!(outcome.changed_count(), 0);
    Ok(())
}

#[test]
fn non_recursive_scan_ignores_subdirectories() -> TestResult {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("sub"))?;

    let mut scanner = Scanner::new(dir.path(), c_filter(), false);
    scanner.scan(ScanMode::Baseline)?;

    touch(&dir.path().join("sub").join("x.c"))?;
    let outcome = scanner.scan(ScanMode::Poll)?;
    assert_eq!(outcome.changed_count(), 0);

    touch(&dir.path().join("top.c"))?;
    let outcome = scanner.scan(ScanMode::Poll)?;
    assert_eq!(outcome.changed_count(), 1);
    Ok(())
}

#[test]
fn recursive_scan_detects_subdirectory_changes() -> TestResult {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("sub"))?;

    let mut scanner = Scanner::new(dir.path(), c_filter(), true);
    scanner.scan(ScanMode::Baseline)?;

    touch(&dir.path().join("sub").join("x.c"))?;
    let outcome = scanner.scan(ScanMode::Poll)?;
    assert_eq!(outcome.changed_count(), 1);
    Ok(())
}

#[test]
fn filtered_out_files_are_never_reported() -> TestResult {
    let dir = tempdir()?;
    let mut scanner = Scanner::new(dir.path(), c_filter(), true);
    scanner.scan(ScanMode::Baseline)?;

    touch(&dir.path().join("notes.md"))?;
    let outcome = scanner.scan(ScanMode::Poll)?;
    assert_eq!(outcome.changed_count(), 0);
    assert_eq!(scanner.tracked_files(), 0);
    Ok(())
}

#[test]
fn missing_root_fails_the_scan() -> TestResult {
    let dir = tempdir()?;
    let mut scanner = Scanner::new(dir.path().join("nope"), c_filter(), true);
    assert!(scanner.scan(ScanMode::Baseline).is_err());
    Ok(())
}

#[test]
fn file_as_root_fails_the_scan() -> TestResult {
    let dir = tempdir()?;
    let file = dir.path().join("plain.c");
    touch(&file)?;

    let mut scanner = Scanner::new(&file, c_filter(), true);
    assert!(scanner.scan(ScanMode::Baseline).is_err());
    Ok(())
}

#[test]
fn snapshot_upsert_classifies_observations() {
    use std::path::PathBuf;
    use std::time::{Duration, UNIX_EPOCH};

    let mut store = SnapshotStore::new();
    let path = PathBuf::from("src/main.c");
    let first = UNIX_EPOCH + Duration::from_secs(1_000);
    let later = UNIX_EPOCH + Duration::from_secs(2_000);

    assert!(store.is_empty());
    assert_eq!(store.upsert(path.clone(), first), ChangeKind::Created);
    assert_eq!(store.lookup(&path), Some(first));

    assert_eq!(store.upsert(path.clone(), first), ChangeKind::Unchanged);
    assert_eq!(store.upsert(path.clone(), later), ChangeKind::Modified);
    assert_eq!(store.lookup(&path), Some(later));
    assert_eq!(store.len(), 1);
}
