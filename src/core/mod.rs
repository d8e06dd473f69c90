pub mod commands;
pub mod console;
pub mod inventory;
pub mod menu;
pub mod repository;

pub use crate::domain::model::{ItemValue, Shoe};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
