use anyhow::Result;
use calc_demo::core::{FetchOutcome, OpResult};
use calc_demo::{CliConfig, DemoRunner, LocalStorage, TomlConfig};
use httpmock::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn test_end_to_end_with_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let payload = serde_json::json!({"message": "hello"});

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/data");
        then.status(200).json_body(payload.clone());
    });

    let config = CliConfig {
        endpoint: server.url("/data"),
        report: Some("reports/demo.json".to_string()),
        ..CliConfig::default()
    };

    let storage = LocalStorage::new(temp_dir.path());
    let mut runner = DemoRunner::from_config(storage, &config);
    let (report, written) = runner.run().await?;

    api_mock.assert();
    assert_eq!(report.fetch, FetchOutcome::Fetched(payload.clone()));

    let written = written.expect("report path should be returned");
    let full_path = temp_dir.path().join("reports/demo.json");
    assert!(full_path.exists());
    assert!(written.ends_with("demo.json"));

    let saved: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&full_path)?)?;
    assert_eq!(saved["fetch"]["status"], "fetched");
    assert_eq!(saved["fetch"]["detail"], payload);
    assert_eq!(saved["sequence"]["sum"], 15);
    assert_eq!(saved["sequence"]["doubled"], serde_json::json!([2, 4, 6, 8, 10]));
    assert_eq!(saved["arithmetic"][4]["result"]["error"], "Division by zero!");

    let lines = report.lines();
    assert!(lines.contains(&"Addition: 8".to_string()));
    assert!(lines.contains(&r#"Fetched data: {"message":"hello"}"#.to_string()));
    Ok(())
}

#[tokio::test]
async fn test_fetch_failure_does_not_abort_run() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data");
        then.status(404);
    });

    let config = CliConfig {
        endpoint: server.url("/data"),
        ..CliConfig::default()
    };

    let mut runner = DemoRunner::from_config(LocalStorage::new("."), &config);
    let (report, written) = runner.run().await?;

    assert!(written.is_none());
    assert_eq!(
        report.fetch,
        FetchOutcome::Failed("Remote endpoint returned status 404".to_string())
    );
    assert_eq!(report.arithmetic[2].result, OpResult::Value(42.0));
    assert_eq!(report.sequence.sum, 15);
    assert!(report
        .lines()
        .contains(&"Error fetching data: Remote endpoint returned status 404".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_toml_config_disables_fetch() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = TomlConfig::from_toml_str(
        r#"
[fetch]
enabled = false

[output]
report_path = "report.json"
"#,
    )?;

    let mut runner = DemoRunner::from_config(LocalStorage::new(temp_dir.path()), &config);
    let (report, written) = runner.run().await?;

    assert_eq!(report.fetch, FetchOutcome::Skipped);
    assert!(written.is_some());
    assert!(temp_dir.path().join("report.json").exists());
    Ok(())
}
