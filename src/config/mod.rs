pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_INVENTORY_PATH: &str = "inventory.txt";
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "shoe-stock")]
#[command(about = "Interactive shoe inventory manager")]
pub struct CliConfig {
    /// Inventory file to read and write (default: inventory.txt)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log format: compact or json
    #[arg(long)]
    pub log_format: Option<String>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入 TOML (若有指定)，再套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<AppConfig> {
        let toml = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        Ok(AppConfig::merge(
            toml.as_ref(),
            self.file.clone(),
            self.verbose,
            self.log_format.clone(),
        ))
    }
}

/// Effective settings after the config file and command-line flags are combined.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub inventory_path: String,
    pub verbose: bool,
    pub log_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inventory_path: DEFAULT_INVENTORY_PATH.to_string(),
            verbose: false,
            log_format: LOG_FORMATS[0].to_string(),
        }
    }
}

impl AppConfig {
    /// Flags win over the file; the file wins over the defaults.
    pub fn merge(
        toml: Option<&TomlConfig>,
        file: Option<String>,
        verbose: bool,
        log_format: Option<String>,
    ) -> Self {
        let mut config = match toml {
            Some(toml) => Self {
                inventory_path: toml.inventory_path().to_string(),
                verbose: toml.verbose(),
                log_format: toml.log_format().to_string(),
            },
            None => Self::default(),
        };

        if let Some(file) = file {
            config.inventory_path = file;
        }
        config.verbose |= verbose;
        if let Some(format) = log_format {
            config.log_format = format;
        }
        config
    }
}

impl ConfigProvider for AppConfig {
    fn inventory_path(&self) -> &str {
        &self.inventory_path
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn log_format(&self) -> &str {
        &self.log_format
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("inventory.path", &self.inventory_path)?;
        validate_one_of("logging.format", &self.log_format, &LOG_FORMATS)
    }
}
