use crate::core::inventory::Inventory;
use crate::domain::model::Shoe;
use crate::domain::ports::Storage;
use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{parse_cost, parse_quantity};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};

pub const FIELD_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    AlreadyLoaded,
}

/// Maps an [`Inventory`] to and from the comma-delimited inventory file.
pub struct InventoryFile<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> InventoryFile<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads the file into an empty inventory. A non-empty inventory is left alone.
    pub fn load(&self, inventory: &mut Inventory) -> Result<LoadOutcome> {
        if !inventory.is_empty() {
            tracing::debug!("Inventory already holds {} shoes, skipping load", inventory.len());
            return Ok(LoadOutcome::AlreadyLoaded);
        }

        let data = self.storage.read_file(&self.path).map_err(|e| self.not_found(e))?;
        let shoes = parse_inventory(&data)?;
        let count = shoes.len();
        inventory.extend(shoes);

        tracing::info!("Loaded {} shoes from {}", count, self.path);
        Ok(LoadOutcome::Loaded(count))
    }

    /// Rewrites the whole file: header line, then one line per shoe.
    pub fn save(&self, inventory: &Inventory) -> Result<()> {
        let data = serialize_inventory(inventory)?;
        self.storage
            .write_file(&self.path, &data)
            .map_err(|e| self.not_found(e))?;

        tracing::info!("Saved {} shoes to {}", inventory.len(), self.path);
        Ok(())
    }

    fn not_found(&self, error: InventoryError) -> InventoryError {
        match error {
            InventoryError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                InventoryError::FileNotFound {
                    path: self.path.clone(),
                }
            }
            other => other,
        }
    }
}

/// Parses file contents, discarding the header and any line that is not a valid shoe.
pub fn parse_inventory(data: &[u8]) -> Result<Vec<Shoe>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(data);

    let mut shoes = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = result?;
        match parse_line(&record) {
            Some(shoe) => shoes.push(shoe),
            None => tracing::warn!("Skipping malformed inventory line {}: {:?}", line + 2, record),
        }
    }
    Ok(shoes)
}

fn parse_line(record: &StringRecord) -> Option<Shoe> {
    if record.len() != FIELD_COUNT {
        return None;
    }

    // 數字欄位前後可有空白 (包含行尾)，文字欄位保留原樣
    let (country, code, product, cost, quantity): (String, String, String, String, String) =
        record.deserialize(None).ok()?;
    let cost = parse_cost(&cost).ok()?;
    let quantity = parse_quantity(&quantity).ok()?;
    Some(Shoe::new(country, code, product, cost, quantity))
}

pub fn serialize_inventory(inventory: &Inventory) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());

    if inventory.is_empty() {
        writer.write_record(["Country", "Code", "Product", "Cost", "Quantity"])?;
    }
    for shoe in inventory.shoes() {
        writer.serialize(shoe)?;
    }

    writer
        .into_inner()
        .map_err(|e| InventoryError::IoError(std::io::Error::new(e.error().kind(), e.to_string())))
}
