//! Integration tests for udtriples-cli
//!
//! These tests drive the command layer end to end against temporary
//! directories, without spawning the binary.

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use udtriples_cli::commands::convert::{effective_config, run_conversion};
use udtriples_cli::{Cli, Command, Config, CliError};

const CORPUS: &str = "\
# sent_id = 1
1\tKoerte\tkoer_\tNOUN\tS\tCase=Gen|Number=Plur\t0\troot\t_\t_
2\t_\t_\tPUNCT\tZ\t_\t1\tpunct\t_\t_

# sent_id = 2
1\tkoerte\tkoer_\tNOUN\tS\tCase=Gen|Number=Plur\t0\troot\t_\t_

";

fn write_corpus(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, CORPUS).unwrap();
    path
}

fn convert_args(argv: &[&str]) -> udtriples_cli::cli::ConvertArgs {
    let mut full = vec!["udtriples", "convert"];
    full.extend_from_slice(argv);
    match Cli::parse_from(full).command {
        Command::Convert(args) => args,
        _ => panic!("Expected Convert command"),
    }
}

#[test]
fn test_convert_with_flag_overrides() {
    let dir = TempDir::new().unwrap();
    let train = write_corpus(dir.path(), "train.conllu");
    let out = dir.path().join("out");

    let args = convert_args(&[
        "--train",
        train.to_str().unwrap(),
        "--output-dir",
        out.to_str().unwrap(),
        "--prefix",
        "et",
        "--lowercase",
        "--remove-symbols",
        "--dedup",
    ]);
    let config = effective_config(args, &Config::default()).unwrap();
    let report = run_conversion(&config).unwrap();

    assert_eq!(report.splits.len(), 1);
    assert!(!out.join("et.dev").exists());
    let text = fs::read_to_string(out.join("et.train")).unwrap();
    assert_eq!(
        text,
        "koerte\tkoer\tCase=Gen;Number=Plur;UPOS=NOUN\n_\t_\tUPOS=PUNCT\n"
    );
}

#[test]
fn test_convert_from_config_file() {
    let dir = TempDir::new().unwrap();
    let dev = write_corpus(dir.path(), "dev.conllu");
    let out = dir.path().join("data");
    let config_path = dir.path().join("udtriples.toml");

    fs::write(
        &config_path,
        format!(
            "[extractor]\noriginal_format = true\n\n[output]\ndir = {:?}\nprefix = \"est\"\n\n[datasets]\ndev = {:?}\n",
            out.to_str().unwrap(),
            dev.to_str().unwrap()
        ),
    )
    .unwrap();

    let config = Config::load(Some(&config_path)).unwrap();
    let config = effective_config(convert_args(&[]), &config).unwrap();
    run_conversion(&config).unwrap();

    let lines: Vec<String> = fs::read_to_string(out.join("est.dev"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "koer_\tKoerte\tCase=Gen;Number=Plur;UPOS=NOUN");
}

#[test]
fn test_split_flags_replace_default_datasets() {
    let args = convert_args(&["--dev", "my-dev.conllu"]);
    let config = effective_config(args, &Config::default()).unwrap();

    assert_eq!(config.datasets.len(), 1);
    assert_eq!(config.datasets.get("dev"), Some(&PathBuf::from("my-dev.conllu")));
}

#[test]
fn test_no_split_flags_keep_configured_datasets() {
    let config = effective_config(convert_args(&[]), &Config::default()).unwrap();
    assert_eq!(config.datasets, Config::default().datasets);
}

#[test]
fn test_no_datasets_is_an_error() {
    let mut base = Config::default();
    base.datasets.clear();

    let config = effective_config(convert_args(&[]), &base).unwrap();
    let err = run_conversion(&config).unwrap_err();
    assert!(matches!(err, CliError::InvalidInput(_)));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let err = Config::load(Some(Path::new("/no/such/udtriples.toml"))).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}

#[test]
fn test_config_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf").join("udtriples.toml");

    let config = Config::default();
    config.save(&path).unwrap();

    let loaded = Config::load(Some(&path)).unwrap();
    assert_eq!(loaded, config);
}
