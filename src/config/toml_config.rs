use crate::config::{DEFAULT_INVENTORY_PATH, LOG_FORMATS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub inventory: InventoryConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    #[serde(default = "default_inventory_path")]
    pub path: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            path: default_inventory_path(),
        }
    }
}

fn default_inventory_path() -> String {
    DEFAULT_INVENTORY_PATH.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                InventoryError::FileNotFound {
                    path: path.as_ref().display().to_string(),
                }
            } else {
                InventoryError::IoError(e)
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| InventoryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INVENTORY_DIR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| InventoryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn inventory_path(&self) -> &str {
        &self.inventory.path
    }

    fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    fn log_format(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .unwrap_or(LOG_FORMATS[0])
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("inventory.path", &self.inventory.path)?;
        validate_one_of("logging.format", self.log_format(), &LOG_FORMATS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[inventory]
path = "data/inventory.txt"

[logging]
verbose = true
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.inventory_path(), "data/inventory.txt");
        assert!(config.verbose());
        assert_eq!(config.log_format(), "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.inventory_path(), "inventory.txt");
        assert!(!config.verbose());
        assert_eq!(config.log_format(), "compact");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SHOE_STOCK_TEST_DIR", "/srv/stock");

        let toml_content = r#"
[inventory]
path = "${SHOE_STOCK_TEST_DIR}/inventory.txt"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.inventory.path, "/srv/stock/inventory.txt");

        std::env::remove_var("SHOE_STOCK_TEST_DIR");
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let toml_content = r#"
[inventory]
path = "${SHOE_STOCK_SURELY_UNSET}/inventory.txt"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.inventory.path, "${SHOE_STOCK_SURELY_UNSET}/inventory.txt");
    }

    #[test]
    fn test_invalid_format_fails_validation() {
        let config = TomlConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        assert!(matches!(
            TomlConfig::from_toml_str("[inventory\npath = 1"),
            Err(InventoryError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[inventory]\npath = \"from-file.txt\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.inventory_path(), "from-file.txt");
    }

    #[test]
    fn test_missing_config_file() {
        assert!(matches!(
            TomlConfig::from_file("/definitely/not/here.toml"),
            Err(InventoryError::FileNotFound { .. })
        ));
    }
}
