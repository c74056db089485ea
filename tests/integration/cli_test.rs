use super::common::Project;
use clap::Parser;
use depwalker::cli::commands::{exit_code, Command};
use depwalker::cli::Args;
use depwalker::{ErrorSeverity, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from(["depwalker"]);
    assert_eq!(args.path, None);
    assert_eq!(args.output, None);
    assert_eq!(args.output_file, None);
    assert!(!args.quiet);
    assert!(!args.verbose);
    assert!(!args.no_dev);

    let args = Args::parse_from([
        "depwalker",
        "--path",
        "/test/path",
        "--output",
        "json",
        "--output-file",
        "modules.json",
        "--no-dev",
        "--quiet",
    ]);

    assert_eq!(args.path, Some(PathBuf::from("/test/path")));
    assert_eq!(args.output_file, Some(PathBuf::from("modules.json")));
    assert!(args.no_dev);
    assert!(args.quiet);
}

#[test]
fn test_cli_config_option() {
    let args = Args::parse_from(["depwalker", "--config", "custom-config.toml"]);
    assert_eq!(args.config, Some(PathBuf::from("custom-config.toml")));
}

#[test]
fn test_cli_invalid_output_format() {
    assert!(Args::try_parse_from(["depwalker", "--output", "invalid"]).is_err());
}

#[tokio::test]
async fn test_walk_command_writes_report() -> Result<()> {
    let project = Project::new(json!({
        "name": "app",
        "dependencies": { "a": "*" },
        "devDependencies": { "d": "*" }
    }))?;
    project.install("node_modules/a", json!({ "name": "a" }))?;
    project.install("node_modules/d", json!({ "name": "d" }))?;
    let config = project.write("empty.toml", "")?;
    let report_path = project.root().join("report.json");

    let args = Args::parse_from([
        "depwalker",
        "--path",
        &path_arg(project.root()),
        "--output",
        "json",
        "--output-file",
        &path_arg(&report_path),
        "--no-dev",
        "--config",
        &path_arg(&config),
    ]);

    let command = Command::from_args(args);
    assert_eq!(command.run().await, 0);

    let report: Value = serde_json::from_str(&fs::read_to_string(&report_path)?).unwrap();
    let names: Vec<&str> = report["modules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["app", "a"]);
    Ok(())
}

#[tokio::test]
async fn test_broken_install_exits_with_error_code() -> Result<()> {
    let project = Project::new(json!({
        "name": "app",
        "dependencies": { "missing": "*" }
    }))?;
    let config = project.write("empty.toml", "")?;

    let args = Args::parse_from([
        "depwalker",
        "--path",
        &path_arg(project.root()),
        "--output-file",
        &path_arg(&project.root().join("out.txt")),
        "--config",
        &path_arg(&config),
    ]);

    assert_eq!(Command::from_args(args).run().await, exit_code(ErrorSeverity::Error));
    Ok(())
}

#[tokio::test]
async fn test_missing_root_is_critical() -> Result<()> {
    let project = Project::new(json!({ "name": "app" }))?;
    let config = project.write("empty.toml", "")?;

    let args = Args::parse_from([
        "depwalker",
        "--path",
        &path_arg(&project.root().join("not-here")),
        "--config",
        &path_arg(&config),
    ]);

    assert_eq!(Command::from_args(args).run().await, 2);
    Ok(())
}
