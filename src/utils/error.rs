use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Inventory file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid configuration value for {field} '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Inventory is empty")]
    EmptyInventory,

    #[error("Input stream closed")]
    InputClosed,
}

impl InventoryError {
    pub fn invalid_input(field: &str, value: &str, reason: impl Into<String>) -> Self {
        InventoryError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// 顯示給使用者的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            InventoryError::FileNotFound { path } => format!("Error: {} file not found.", path),
            InventoryError::InvalidInput { field, value, .. } => {
                format!("Invalid {}: '{}' is not accepted.", field, value)
            }
            InventoryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
            InventoryError::ConfigError { message } => format!("Configuration error: {}", message),
            InventoryError::EmptyInventory => "You have not read in the data yet.".to_string(),
            InventoryError::InputClosed => "No more input.".to_string(),
            InventoryError::IoError(e) => format!("File access failed: {}", e),
            InventoryError::CsvError(e) => format!("Inventory file could not be processed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            InventoryError::FileNotFound { .. } => {
                "Check that the inventory file exists or pass --file with the right path"
            }
            InventoryError::InvalidInput { .. } => "Enter a whole, non-negative number and try again",
            InventoryError::InvalidConfigValueError { .. } | InventoryError::ConfigError { .. } => {
                "Fix the configuration file or command-line flags"
            }
            InventoryError::EmptyInventory => "Read the inventory file first (menu option 1)",
            InventoryError::InputClosed => "Run the program from an interactive terminal",
            InventoryError::IoError(_) | InventoryError::CsvError(_) => {
                "Check file permissions and available disk space"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
