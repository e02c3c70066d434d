use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pollrun::cli::CliArgs;
use pollrun::config::{self, ConfigFile};
use tempfile::tempdir;

type TestResult<T = ()> = Result<T, Box<dyn Error>>;

fn args(argv: &[&str]) -> TestResult<CliArgs> {
    let mut full = vec!["pollrun"];
    full.extend_from_slice(argv);
    Ok(CliArgs::try_parse_from(full)?)
}

#[test]
fn demo_configs_parse() -> TestResult {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    let cfg = config::load_from_path(manifest.join("demos/c-project.toml"))?;
    assert_eq!(cfg.watch_path.as_deref(), Some("src"));
    assert_eq!(cfg.commands, vec!["make", "make test"]);
    assert_eq!(cfg.extensions, vec!["c", "h"]);
    assert_eq!(cfg.interval_ms, Some(500));

    let cfg = config::load_from_path(manifest.join("demos/python-tests.toml"))?;
    assert_eq!(cfg.commands, vec!["pytest -q"]);
    assert_eq!(cfg.verbose, Some(true));
    Ok(())
}

#[test]
fn cli_flags_override_file_values() -> TestResult {
    let file = ConfigFile {
        watch_path: Some("from-file".to_string()),
        commands: vec!["make".to_string()],
        interval_ms: Some(500),
        ..Default::default()
    };

    let cli = args(&["-w", "from-cli", "-x", "cargo check", "-i", "250"])?;
    let (run, _) = config::resolve(&cli, Some(file))?;

    assert_eq!(run.watch_root, PathBuf::from("from-cli"));
    assert_eq!(run.commands, vec!["cargo check"]);
    assert_eq!(run.interval, Duration::from_millis(250));
    Ok(())
}

#[test]
fn file_values_fill_in_missing_cli_flags() -> TestResult {
    let file = ConfigFile {
        watch_path: Some("src".to_string()),
        commands: vec!["make".to_string()],
        extensions: vec!["c".to_string()],
        recursive: Some(false),
        ..Default::default()
    };

    let cli = args(&[])?;
    let (run, filter) = config::resolve(&cli, Some(file))?;

    assert_eq!(run.watch_root, PathBuf::from("src"));
    assert_eq!(run.commands, vec!["make"]);
    assert_eq!(run.interval, Duration::from_millis(1000));
    assert!(!run.recursive);
    assert_eq!(filter.extensions, vec!["c"]);
    Ok(())
}

#[test]
fn interval_below_floor_is_clamped() -> TestResult {
    let cli = args(&["-w", ".", "-x", "make", "-i", "10"])?;
    let (run, _) = config::resolve(&cli, None)?;
    assert_eq!(run.interval, Duration::from_millis(100));
    Ok(())
}

#[test]
fn extensions_are_normalized() -> TestResult {
    let cli = args(&["-w", ".", "-x", "make", "-e", ".C, h ,py"])?;
    let (_, filter) = config::resolve(&cli, None)?;
    assert_eq!(filter.extensions, vec!["c", "h", "py"]);
    Ok(())
}

#[test]
fn missing_watch_path_is_an_error() -> TestResult {
    let cli = args(&["-x", "make"])?;
    assert!(config::resolve(&cli, None).is_err());
    Ok(())
}

#[test]
fn missing_commands_is_an_error() -> TestResult {
    let cli = args(&["-w", "."])?;
    assert!(config::resolve(&cli, None).is_err());
    Ok(())
}

#[test]
fn validate_rejects_file_as_watch_root() -> TestResult {
    let dir = tempdir()?;
    let file = dir.path().join("plain.txt");
    fs::write(&file, b"x")?;

    let cli = args(&["-w", &file.to_string_lossy(), "-x", "make"])?;
    let (run, _) = config::resolve(&cli, None)?;
    assert!(config::validate_settings(&run).is_err());
    Ok(())
}

#[test]
fn validate_rejects_blank_commands() -> TestResult {
    let dir = tempdir()?;
    let cli = args(&["-w", &dir.path().to_string_lossy(), "-x", "   "])?;
    let (run, _) = config::resolve(&cli, None)?;
    assert!(config::validate_settings(&run).is_err());
    Ok(())
}

#[test]
fn save_and_reload_round_trip() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("pollrun.toml");

    let cli = args(&[
        "-w", "src", "-x", "make", "-x", "make test", "-e", "c,h", "--exclude", "*test*", "-i",
        "750", "--no-recursive",
    ])?;
    let (run, filter) = config::resolve(&cli, None)?;

    config::save_to_path(&path, &ConfigFile::from_resolved(&run, &filter))?;
    let reloaded = config::load_from_path(&path)?;

    assert_eq!(reloaded.watch_path.as_deref(), Some("src"));
    assert_eq!(reloaded.commands, vec!["make", "make test"]);
    assert_eq!(reloaded.extensions, vec!["c", "h"]);
    assert_eq!(reloaded.exclude, vec!["*test*"]);
    assert_eq!(reloaded.interval_ms, Some(750));
    assert_eq!(reloaded.recursive, Some(false));
    Ok(())
}
