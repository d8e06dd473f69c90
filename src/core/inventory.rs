use crate::domain::model::{normalize_code, ItemValue, Shoe};
use crate::utils::error::{InventoryError, Result};

/// The in-memory stock list for a session, kept in file/insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    shoes: Vec<Shoe>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shoes(shoes: Vec<Shoe>) -> Self {
        Self { shoes }
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn shoes(&self) -> &[Shoe] {
        &self.shoes
    }

    pub fn get(&self, index: usize) -> Option<&Shoe> {
        self.shoes.get(index)
    }

    pub fn add(&mut self, shoe: Shoe) {
        self.shoes.push(shoe);
    }

    pub fn extend(&mut self, shoes: impl IntoIterator<Item = Shoe>) {
        self.shoes.extend(shoes);
    }

    /// Index of the shoe with the lowest quantity; ties go to the earliest entry.
    pub fn lowest_stock(&self) -> Option<usize> {
        self.scan_quantity(|candidate, best| candidate < best)
    }

    /// Index of the shoe with the highest quantity; ties go to the earliest entry.
    pub fn highest_stock(&self) -> Option<usize> {
        self.scan_quantity(|candidate, best| candidate > best)
    }

    // 由左至右掃描，只有嚴格更好時才替換，所以同值取第一筆
    fn scan_quantity(&self, improves: impl Fn(u32, u32) -> bool) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (index, shoe) in self.shoes.iter().enumerate() {
            match best {
                Some((_, quantity)) if !improves(shoe.quantity, quantity) => {}
                _ => best = Some((index, shoe.quantity)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// First shoe whose code equals `code` once uppercased.
    pub fn find_by_code(&self, code: &str) -> Option<&Shoe> {
        let code = normalize_code(code);
        self.shoes.iter().find(|shoe| shoe.code == code)
    }

    /// Adds `amount` to the stock of the shoe at `index`.
    pub fn restock(&mut self, index: usize, amount: u32) -> Result<&Shoe> {
        let shoe = self.shoes.get_mut(index).ok_or_else(|| {
            InventoryError::invalid_input("index", &index.to_string(), "no shoe at that position")
        })?;

        shoe.quantity = shoe.quantity.checked_add(amount).ok_or_else(|| {
            InventoryError::invalid_input(
                "quantity",
                &amount.to_string(),
                "stock would exceed the largest supported quantity",
            )
        })?;

        Ok(shoe)
    }

    pub fn value_report(&self) -> Vec<ItemValue> {
        self.shoes.iter().map(ItemValue::from).collect()
    }
}
