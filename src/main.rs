use anyhow::Context;
use calc_demo::core::ConfigProvider;
use calc_demo::utils::{logger, validation::Validate};
use calc_demo::{CliConfig, DemoError, DemoRunner, LocalStorage, TomlConfig};
use clap::Parser;

fn load_config(cli: &CliConfig) -> anyhow::Result<Box<dyn ConfigProvider>> {
    match &cli.config {
        Some(path) => {
            let ignored = cli.flags_overridden_by_config();
            if !ignored.is_empty() {
                tracing::warn!(
                    "⚠️ --config is set, ignoring flags: {}",
                    ignored.join(", ")
                );
            }

            tracing::info!("Loading configuration from {}", path);
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file {}", path))?;
            config
                .validate()
                .with_context(|| format!("invalid config file {}", path))?;
            Ok(Box::new(config))
        }
        None => {
            cli.validate().context("invalid command-line flags")?;
            Ok(Box::new(cli.clone()))
        }
    }
}

fn exit_code(e: &anyhow::Error) -> i32 {
    e.downcast_ref::<DemoError>()
        .map(DemoError::exit_code)
        .unwrap_or(1)
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting calc-demo");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(exit_code(&e));
        }
    };

    let storage = LocalStorage::new(".");
    let mut runner = DemoRunner::from_config(storage, config.as_ref());

    match runner.run().await {
        Ok((report, written)) => {
            for line in report.lines() {
                println!("{}", line);
            }
            if let Some(path) = written {
                println!("📁 Report saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!("❌ Demonstration failed: {} ({:?})", e, e.category());
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
