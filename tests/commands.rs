//! CLI command bodies against a file-backed history and the mock endpoint.

mod common;

use clap::Parser;
use std::path::Path;

use common::spawn_mock_server;
use nexus_sitegen::commands;
use nexus_sitegen::config::{Cli, Command, GenerateArgs, HistoryArgs};
use nexus_sitegen::{FileStorage, HistoryCache};

fn generate_args(base: &str, dir: &Path, extra: &[&str], prompt: &str) -> GenerateArgs {
    let mut argv = vec!["nexus", "generate", "--base-url", base, "--data-dir", dir.to_str().unwrap()];
    argv.extend_from_slice(extra);
    argv.push(prompt);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Generate(args) => args,
        other => panic!("unexpected command {other:?}"),
    }
}

fn history_args(dir: &Path, action: &[&str]) -> HistoryArgs {
    let mut argv = vec!["nexus", "history"];
    argv.extend_from_slice(action);
    argv.extend_from_slice(&["--data-dir", dir.to_str().unwrap()]);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::History(args) => args,
        other => panic!("unexpected command {other:?}"),
    }
}

fn run_history(dir: &Path, action: &[&str]) -> anyhow::Result<String> {
    let mut out = Vec::new();
    commands::history(&history_args(dir, action), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn generate_writes_code_and_persists_history() {
    let base = spawn_mock_server().await;
    let dir = tempfile::tempdir().unwrap();
    let code_path = dir.path().join("site.jsx");

    let args = generate_args(&base, dir.path(), &["--out", code_path.to_str().unwrap()], "A bakery landing page");
    let mut out = Vec::new();
    let entry = commands::generate(&args, &mut out).await.unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Nexus Generated Site"));
    assert!(printed.contains("Code written to"));
    assert_eq!(std::fs::read_to_string(&code_path).unwrap(), entry.result.react_code);

    let reloaded = HistoryCache::open(FileStorage::new(dir.path()));
    assert_eq!(reloaded.entries()[0], entry);
}

#[tokio::test]
async fn generate_failure_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let args = generate_args(&common::dead_url().await, dir.path(), &[], "A bakery landing page");

    let err = commands::generate(&args, &mut Vec::new()).await.unwrap_err();
    assert!(err.to_string().starts_with("request failed: "), "{err}");
    assert!(HistoryCache::open(FileStorage::new(dir.path())).entries().is_empty());
}

#[tokio::test]
async fn history_list_show_remove_round_trip() {
    let base = spawn_mock_server().await;
    let dir = tempfile::tempdir().unwrap();

    assert_eq!(run_history(dir.path(), &["list"]).unwrap().trim(), "No history yet");

    let first = commands::generate(&generate_args(&base, dir.path(), &["--json"], "first site"), &mut Vec::new())
        .await
        .unwrap();
    let second = commands::generate(&generate_args(&base, dir.path(), &["--json"], "second site"), &mut Vec::new())
        .await
        .unwrap();

    let listing = run_history(dir.path(), &["list"]).unwrap();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(&second.id.to_string()));
    assert!(lines[1].contains("first site"));

    let code = run_history(dir.path(), &["show", &first.id.to_string(), "--code"]).unwrap();
    assert_eq!(code.trim(), first.result.react_code.trim());

    let removed = run_history(dir.path(), &["remove", &first.id.to_string()]).unwrap();
    assert_eq!(removed.trim(), format!("Removed {} (1 left)", first.id));

    let reloaded = HistoryCache::open(FileStorage::new(dir.path()));
    assert_eq!(reloaded.entries().len(), 1);
    assert_eq!(reloaded.entries()[0].id, second.id);
}

#[test]
fn unknown_history_id_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = run_history(dir.path(), &["remove", "17"]).unwrap_err();
    assert_eq!(err.to_string(), "no history entry 17");

    let err = run_history(dir.path(), &["show", "17"]).unwrap_err();
    assert_eq!(err.to_string(), "no history entry 17");
}
