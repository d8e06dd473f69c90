use crate::core::commands;
use crate::core::console::Console;
use crate::core::inventory::Inventory;
use crate::core::repository::InventoryFile;
use crate::domain::ports::Storage;
use crate::utils::error::{InventoryError, Result};
use std::io::{BufRead, Write};

const MENU: &str = "
===== Inventory Management System =====
1. Read shoe data from file
2. Capture new shoe
3. View all shoes
4. Re-stock
5. Search for a shoe
6. Calculate value per item
7. Find shoe with highest quantity
0. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    Capture,
    View,
    Restock,
    Search,
    ValueReport,
    HighestQuantity,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Load),
            "2" => Some(MenuChoice::Capture),
            "3" => Some(MenuChoice::View),
            "4" => Some(MenuChoice::Restock),
            "5" => Some(MenuChoice::Search),
            "6" => Some(MenuChoice::ValueReport),
            "7" => Some(MenuChoice::HighestQuantity),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    AwaitingChoice,
    Terminated,
}

/// Owns the inventory for the lifetime of one interactive session.
pub struct Session<S: Storage> {
    inventory: Inventory,
    file: InventoryFile<S>,
}

impl<S: Storage> Session<S> {
    pub fn new(file: InventoryFile<S>) -> Self {
        Self {
            inventory: Inventory::new(),
            file,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        let mut state = LoopState::AwaitingChoice;
        while state == LoopState::AwaitingChoice {
            console.say(MENU)?;
            state = match console.prompt("Enter your choice: ") {
                Ok(selection) => self.step(&selection, console)?,
                Err(InventoryError::InputClosed) => {
                    tracing::info!("Input closed, leaving the menu");
                    LoopState::Terminated
                }
                Err(e) => return Err(e),
            };
        }

        console.say("Thank you for using the Inventory Management system!")
    }

    /// Handles one menu selection. Handler failures are reported and the menu carries on;
    /// only a failure to talk to the console itself is returned.
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        selection: &str,
        console: &mut Console<R, W>,
    ) -> Result<LoopState> {
        let choice = MenuChoice::parse(selection);

        // 尚未讀檔時只接受讀檔；選擇離開也會先提示再結束
        if self.inventory.is_empty() && choice != Some(MenuChoice::Load) {
            console.say(InventoryError::EmptyInventory.user_friendly_message())?;
            return Ok(if choice == Some(MenuChoice::Exit) {
                LoopState::Terminated
            } else {
                LoopState::AwaitingChoice
            });
        }

        let Some(choice) = choice else {
            console.say("Invalid choice. Please try again.")?;
            return Ok(LoopState::AwaitingChoice);
        };

        tracing::debug!("Dispatching {:?}", choice);
        let outcome = match choice {
            MenuChoice::Exit => return Ok(LoopState::Terminated),
            MenuChoice::Load => commands::load(&mut self.inventory, &self.file, console),
            MenuChoice::Capture => commands::capture(&mut self.inventory, &self.file, console),
            MenuChoice::View => commands::view_all(&self.inventory, console),
            MenuChoice::Restock => commands::restock(&mut self.inventory, &self.file, console),
            MenuChoice::Search => commands::search(&self.inventory, console),
            MenuChoice::ValueReport => commands::value_per_item(&self.inventory, console),
            MenuChoice::HighestQuantity => commands::highest_quantity(&self.inventory, console),
        };

        match outcome {
            Ok(()) => Ok(LoopState::AwaitingChoice),
            Err(InventoryError::InputClosed) => Ok(LoopState::Terminated),
            Err(InventoryError::IoError(e)) if is_console_failure(&e) => Err(InventoryError::IoError(e)),
            Err(e) => {
                tracing::warn!("{:?} failed: {}", choice, e);
                console.say(format!("Error: {}", e))?;
                Ok(LoopState::AwaitingChoice)
            }
        }
    }
}

// stdout 關閉時無法再回報任何訊息
fn is_console_failure(error: &std::io::Error) -> bool {
    error.kind() == std::io::ErrorKind::BrokenPipe
}
