use super::common::Project;
use depwalker::models::ModuleFilter;
use depwalker::output::{create_formatter, CsvFormatter, Formatter, JsonFormatter, TextFormatter};
use depwalker::models::config::OutputFormat;
use depwalker::{Result, WalkReport, Walker};
use serde_json::{json, Value};

async fn sample_report(filter: ModuleFilter) -> Result<(Project, WalkReport)> {
    let project = Project::new(json!({
        "name": "app",
        "dependencies": { "a": "*" },
        "optionalDependencies": { "o": "*" },
        "devDependencies": { "d": "*" }
    }))?;
    project.install("node_modules/a", json!({ "name": "a" }))?;
    project.install("node_modules/o", json!({ "name": "o" }))?;
    project.install(
        "node_modules/d",
        json!({ "name": "d", "optionalDependencies": { "gyp": "*" } }),
    )?;
    project.install("node_modules/gyp", json!({ "name": "gyp" }))?;
    project.write("node_modules/gyp/binding.gyp", "{}")?;

    let walker = Walker::new(project.root())?;
    let modules = walker.walk_tree().await?;
    let report = WalkReport::new(walker.root_module(), filter.apply(&modules));
    Ok((project, report))
}

#[tokio::test]
async fn test_json_report_shape() -> Result<()> {
    let (_project, report) = sample_report(ModuleFilter::default()).await?;

    let output = JsonFormatter::new(false).format(&report)?;
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["summary"]["total"], 5);
    assert_eq!(value["summary"]["devOptional"], 1);
    assert_eq!(value["summary"]["native"], 1);

    let modules = value["modules"].as_array().unwrap();
    assert_eq!(modules[0]["depType"], "ROOT");
    let gyp = modules.iter().find(|m| m["name"] == "gyp").unwrap();
    assert_eq!(gyp["depType"], "DEV_OPTIONAL");
    assert_eq!(gyp["nativeModuleType"], "NODE_GYP");
    assert!(gyp["path"].as_str().unwrap().ends_with("gyp"));
    Ok(())
}

#[tokio::test]
async fn test_filters_keep_root() -> Result<()> {
    let filter = ModuleFilter {
        include_dev: false,
        include_optional: false,
        native_only: false,
    };
    let (_project, report) = sample_report(filter).await?;

    let names: Vec<&str> = report.modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["app", "a"]);
    assert_eq!(report.summary.total, 2);
    Ok(())
}

#[tokio::test]
async fn test_csv_report_rows() -> Result<()> {
    let (_project, report) = sample_report(ModuleFilter::default()).await?;

    let output = CsvFormatter.format(&report)?;
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "path,name,depType,nativeModuleType");
    assert_eq!(lines.len(), 6);
    assert!(lines.iter().any(|l| l.ends_with(",gyp,DEV_OPTIONAL,NODE_GYP")));
    Ok(())
}

#[tokio::test]
async fn test_text_report_without_colors() -> Result<()> {
    let (_project, report) = sample_report(ModuleFilter::default()).await?;

    let output = TextFormatter::new(false, false, false).format(&report)?;
    assert!(output.contains("gyp [NODE_GYP]"));
    assert!(output.contains("Total modules: 5"));
    assert!(!output.contains('\u{1b}'));

    let quiet = create_formatter(OutputFormat::Text, true, false, true).format(&report)?;
    assert_eq!(quiet.lines().count(), 5);
    assert!(quiet.lines().next().unwrap().starts_with("ROOT\t"));
    Ok(())
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_json_and_csv_agree_on_non_utf8_root() -> Result<()> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path().join(OsStr::from_bytes(b"app\xff"));
    std::fs::create_dir_all(&root)?;
    std::fs::write(root.join("package.json"), r#"{ "name": "app" }"#)?;

    let walker = Walker::new(root.clone())?;
    let modules = walker.walk_tree().await?;
    let report = WalkReport::new(walker.root_module(), modules.to_vec());

    let json = create_formatter(OutputFormat::Json, false, false, false).format(&report)?;
    let value: Value = serde_json::from_str(&json).unwrap();
    let json_path = value["modules"][0]["path"].as_str().unwrap().to_string();
    assert!(json_path.ends_with("app\u{FFFD}"));
    assert!(value["root"].as_str().unwrap().ends_with("app\u{FFFD}"));

    let csv = CsvFormatter.format(&report)?;
    let row = csv.lines().nth(1).unwrap();
    assert_eq!(row, format!("{},app,ROOT,NONE", json_path));
    Ok(())
}
