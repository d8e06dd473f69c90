use crate::core::console::Console;
use crate::core::inventory::Inventory;
use crate::core::repository::{InventoryFile, LoadOutcome};
use crate::domain::model::{format_decimal, normalize_code, title_case, Shoe};
use crate::domain::ports::Storage;
use crate::utils::error::{InventoryError, Result};
use crate::utils::table::Table;
use crate::utils::validation::{parse_cost, parse_quantity, validate_field_text};
use std::io::{BufRead, Write};

const COMMA_RETRY: &str = "Invalid input. Commas are not allowed.";

pub fn load<S: Storage, R: BufRead, W: Write>(
    inventory: &mut Inventory,
    file: &InventoryFile<S>,
    console: &mut Console<R, W>,
) -> Result<()> {
    match file.load(inventory) {
        Ok(LoadOutcome::Loaded(count)) => {
            console.say(format!("File has been read with {} rows added to memory", count))
        }
        Ok(LoadOutcome::AlreadyLoaded) => console.say("The file has already been read"),
        Err(e @ InventoryError::FileNotFound { .. }) => {
            tracing::warn!("Load failed: {}", e);
            console.say(e.user_friendly_message())
        }
        Err(e) => Err(e),
    }
}

/// Persists the inventory and reports the outcome. A failed save leaves memory as it is.
pub fn save<S: Storage, R: BufRead, W: Write>(
    inventory: &Inventory,
    file: &InventoryFile<S>,
    console: &mut Console<R, W>,
) -> Result<()> {
    match file.save(inventory) {
        Ok(()) => console.say("Shoe data written to file successfully."),
        Err(e) => {
            tracing::warn!("Save failed: {}", e);
            console.say(e.user_friendly_message())
        }
    }
}

fn text_field(field: &'static str, normalize: fn(&str) -> String) -> impl Fn(&str) -> Result<String> {
    move |input: &str| {
        validate_field_text(field, input)?;
        Ok(normalize(input))
    }
}

pub fn capture<S: Storage, R: BufRead, W: Write>(
    inventory: &mut Inventory,
    file: &InventoryFile<S>,
    console: &mut Console<R, W>,
) -> Result<()> {
    let country = console.prompt_until("Enter country: ", COMMA_RETRY, text_field("country", str::to_string))?;
    let code = console.prompt_until("Enter code: ", COMMA_RETRY, text_field("code", normalize_code))?;
    let product = console.prompt_until("Enter product: ", COMMA_RETRY, text_field("product", title_case))?;
    let cost = console.prompt_until(
        "Enter cost: ",
        "Invalid input. Please enter a valid cost (e.g., 12.99).",
        parse_cost,
    )?;
    let quantity = console.prompt_until(
        "Enter quantity: ",
        "Invalid input. Please enter a valid quantity (e.g., 10).",
        parse_quantity,
    )?;

    let shoe = Shoe::new(country, code, product, cost, quantity);
    tracing::info!("Captured {}", shoe);
    inventory.add(shoe);
    console.say("Shoe added successfully.")?;

    save(inventory, file, console)
}

pub fn view_all<R: BufRead, W: Write>(inventory: &Inventory, console: &mut Console<R, W>) -> Result<()> {
    let mut table = Table::new(["Country", "Code", "Product", "Cost", "Quantity"]);
    for shoe in inventory.shoes() {
        table.push_row(vec![
            shoe.country.clone(),
            shoe.code.clone(),
            shoe.product.clone(),
            format_decimal(shoe.cost),
            shoe.quantity.to_string(),
        ]);
    }
    console.say(table.render())
}

/// Tops up the shoe with the lowest stock. Unlike capture, a bad amount is not
/// re-prompted: the error goes back to the menu and nothing is changed or saved.
pub fn restock<S: Storage, R: BufRead, W: Write>(
    inventory: &mut Inventory,
    file: &InventoryFile<S>,
    console: &mut Console<R, W>,
) -> Result<()> {
    let index = inventory.lowest_stock().ok_or(InventoryError::EmptyInventory)?;
    if let Some(shoe) = inventory.get(index) {
        console.say(format!("The shoe with the lowest quantity: {}", shoe))?;
    }

    let amount = parse_quantity(&console.prompt("Enter quantity to add: ")?)?;
    let shoe = inventory.restock(index, amount)?;
    tracing::info!("Restocked {} by {}", shoe.code, amount);
    console.say("Quantity updated successfully.")?;

    save(inventory, file, console)
}

pub fn search<R: BufRead, W: Write>(inventory: &Inventory, console: &mut Console<R, W>) -> Result<()> {
    let code = normalize_code(&console.prompt("Enter shoe code to search: ")?);
    match inventory.find_by_code(&code) {
        Some(shoe) => console.say(format!("Shoe found: {}", shoe)),
        None => console.say("Shoe not found."),
    }
}

pub fn value_per_item<R: BufRead, W: Write>(inventory: &Inventory, console: &mut Console<R, W>) -> Result<()> {
    let mut table = Table::new(["Country", "Code", "Product", "Total Value"]);
    for item in inventory.value_report() {
        table.push_row(vec![
            item.country,
            item.code,
            item.product,
            format_decimal(item.total_value),
        ]);
    }
    console.say(table.render())
}

pub fn highest_quantity<R: BufRead, W: Write>(inventory: &Inventory, console: &mut Console<R, W>) -> Result<()> {
    let shoe = inventory
        .highest_stock()
        .and_then(|index| inventory.get(index))
        .ok_or(InventoryError::EmptyInventory)?;
    console.say(format!("The shoe with the highest quantity: {}", shoe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalStorage;
    use std::io::Cursor;
    use tempfile::TempDir;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: TestConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    fn temp_file(dir: &TempDir) -> InventoryFile<LocalStorage> {
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
        InventoryFile::new(storage, "inventory.txt")
    }

    fn stocked(quantities: &[u32]) -> Inventory {
        Inventory::from_shoes(
            quantities
                .iter()
                .enumerate()
                .map(|(i, q)| Shoe::new("Italy", format!("S{}", i), "Loafer", 20.0, *q))
                .collect(),
        )
    }

    #[test]
    fn test_capture_normalizes_and_saves() {
        let dir = TempDir::new().unwrap();
        let file = temp_file(&dir);
        let mut inventory = stocked(&[1]);
        let mut console = console("Spain\nab1\nrunning shoe\n12.5\n4\n");

        capture(&mut inventory, &file, &mut console).unwrap();

        let shoe = inventory.get(1).unwrap();
        assert_eq!(shoe, &Shoe::new("Spain", "AB1", "Running Shoe", 12.5, 4));

        let saved = std::fs::read_to_string(dir.path().join("inventory.txt")).unwrap();
        assert!(saved.ends_with("Spain,AB1,Running Shoe,12.5,4\n"));
        assert!(output(console).contains("Shoe added successfully."));
    }

    #[test]
    fn test_capture_reprompts_invalid_numbers() {
        let dir = TempDir::new().unwrap();
        let file = temp_file(&dir);
        let mut inventory = stocked(&[1]);
        let mut console = console("Spain\nab1\nshoe\ncheap\n-3\n9.99\nmany\n7\n");

        capture(&mut inventory, &file, &mut console).unwrap();

        assert_eq!(inventory.get(1).unwrap().cost, 9.99);
        assert_eq!(inventory.get(1).unwrap().quantity, 7);
        let text = output(console);
        assert_eq!(text.matches("Please enter a valid cost").count(), 2);
        assert_eq!(text.matches("Please enter a valid quantity").count(), 1);
    }

    #[test]
    fn test_capture_rejects_commas_in_text() {
        let dir = TempDir::new().unwrap();
        let file = temp_file(&dir);
        let mut inventory = stocked(&[1]);
        let mut console = console("Cape Town, SA\nSouth Africa\nx1\nboot\n1\n1\n");

        capture(&mut inventory, &file, &mut console).unwrap();

        assert_eq!(inventory.get(1).unwrap().country, "South Africa");
        assert!(output(console).contains(COMMA_RETRY));
    }

    #[test]
    fn test_restock_tops_up_lowest() {
        let dir = TempDir::new().unwrap();
        let file = temp_file(&dir);
        let mut inventory = stocked(&[10, 3, 7]);
        let mut console = console("5\n");

        restock(&mut inventory, &file, &mut console).unwrap();

        let quantities: Vec<u32> = inventory.shoes().iter().map(|s| s.quantity).collect();
        assert_eq!(quantities, vec![10, 8, 7]);
        assert!(output(console).contains("The shoe with the lowest quantity: Loafer (S1): 3 available"));
        assert!(dir.path().join("inventory.txt").exists());
    }

    #[test]
    fn test_restock_invalid_amount_is_an_error() {
        let dir = TempDir::new().unwrap();
        let file = temp_file(&dir);
        let mut inventory = stocked(&[10, 3, 7]);
        let before = inventory.clone();
        let mut console = console("lots\n5\n");

        let result = restock(&mut inventory, &file, &mut console);

        assert!(matches!(result, Err(InventoryError::InvalidInput { .. })));
        assert_eq!(inventory, before);
        assert!(!dir.path().join("inventory.txt").exists());
    }

    #[test]
    fn test_search_found_and_missing() {
        let inventory = Inventory::from_shoes(vec![
            Shoe::new("USA", "A1", "Court", 1.0, 1),
            Shoe::new("USA", "B2", "Trail", 1.0, 2),
        ]);

        let mut found = console("b2\n");
        search(&inventory, &mut found).unwrap();
        assert!(output(found).contains("Shoe found: Trail (B2): 2 available"));

        let mut missing = console("Z9\n");
        search(&inventory, &mut missing).unwrap();
        assert!(output(missing).contains("Shoe not found."));
    }

    #[test]
    fn test_value_per_item_has_no_total_row() {
        let inventory = Inventory::from_shoes(vec![Shoe::new("China", "C1", "Loafer", 12.50, 4)]);
        let mut console = console("");

        value_per_item(&inventory, &mut console).unwrap();

        let text = output(console);
        assert!(text.contains("| Total Value |"));
        assert!(text.contains("50.0"));
        assert_eq!(text.lines().filter(|l| l.starts_with("| ")).count(), 2);
    }

    #[test]
    fn test_view_all_lists_every_shoe_in_order() {
        let inventory = stocked(&[4, 9]);
        let mut console = console("");

        view_all(&inventory, &mut console).unwrap();

        let text = output(console);
        assert!(text.contains("| Country | Code | Product | Cost | Quantity |"));
        let first = text.find("S0").unwrap();
        let second = text.find("S1").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_highest_quantity_takes_first_tie() {
        let inventory = stocked(&[4, 9, 9]);
        let mut console = console("");

        highest_quantity(&inventory, &mut console).unwrap();
        assert!(output(console).contains("The shoe with the highest quantity: Loafer (S1): 9 available"));
    }

    #[test]
    fn test_load_missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let file = temp_file(&dir);
        let mut inventory = Inventory::new();
        let mut console = console("");

        load(&mut inventory, &file, &mut console).unwrap();

        assert!(inventory.is_empty());
        assert!(output(console).contains("Error: inventory.txt file not found."));
    }

    #[test]
    fn test_save_into_missing_directory_is_reported() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
        let file = InventoryFile::new(storage, "gone/inventory.txt");
        let mut console = console("");

        save(&stocked(&[1]), &file, &mut console).unwrap();
        assert!(output(console).contains("Error: gone/inventory.txt file not found."));
    }
}
