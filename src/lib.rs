pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::LocalStorage;
pub use crate::config::AppConfig;
pub use crate::core::{
    console::Console,
    inventory::Inventory,
    menu::{LoopState, MenuChoice, Session},
    repository::{InventoryFile, LoadOutcome},
};
pub use crate::domain::model::Shoe;
pub use crate::utils::error::{InventoryError, Result};
