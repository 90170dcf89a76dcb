pub mod cli;
pub mod toml_config;

use crate::core::fetch::DEFAULT_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "calc-demo"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Calculator and small async/sequence demonstrations")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_ENDPOINT))]
    pub endpoint: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Skip the remote fetch demonstration"))]
    pub skip_fetch: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Write a JSON report to this file"))]
    pub report: Option<String>,

    #[cfg_attr(
        feature = "cli",
        arg(
            long,
            help = "Load settings from a TOML file; replaces --endpoint, --skip-fetch, --report and --monitor"
        )
    )]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON"))]
    pub json_logs: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Log process CPU/memory usage"))]
    pub monitor: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            skip_fetch: false,
            report: None,
            config: None,
            verbose: false,
            json_logs: false,
            monitor: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn fetch_enabled(&self) -> bool {
        !self.skip_fetch
    }

    fn report_path(&self) -> Option<&str> {
        self.report.as_deref()
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

impl CliConfig {
    /// 使用 `--config` 時會被設定檔取代的旗標
    pub fn flags_overridden_by_config(&self) -> Vec<&'static str> {
        if self.config.is_none() {
            return Vec::new();
        }

        let mut flags = Vec::new();
        if self.endpoint != DEFAULT_ENDPOINT {
            flags.push("--endpoint");
        }
        if self.skip_fetch {
            flags.push("--skip-fetch");
        }
        if self.report.is_some() {
            flags.push("--report");
        }
        if self.monitor {
            flags.push("--monitor");
        }
        flags
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.fetch_enabled() {
            validate_url("endpoint", &self.endpoint)?;
        }
        if let Some(report) = &self.report {
            validate_path("report", report)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
