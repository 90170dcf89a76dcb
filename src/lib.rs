pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use crate::core::{
    calculator::Calculator,
    fetch::{fetch_data, HttpPayloadSource},
    runner::DemoRunner,
};
pub use crate::utils::error::{DemoError, Result};
