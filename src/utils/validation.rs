use crate::utils::error::{InventoryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// 解析成本：必須是有限且非負的小數
pub fn parse_cost(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let cost: f64 = trimmed
        .parse()
        .map_err(|_| InventoryError::invalid_input("cost", trimmed, "not a decimal number"))?;

    if !cost.is_finite() || cost < 0.0 {
        return Err(InventoryError::invalid_input(
            "cost",
            trimmed,
            "must be a non-negative amount",
        ));
    }
    Ok(cost)
}

/// 解析數量：非負整數
pub fn parse_quantity(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| InventoryError::invalid_input("quantity", trimmed, "not a whole number"))
}

/// 文字欄位不可含逗號，否則會破壞庫存檔的欄位切割
pub fn validate_field_text(field_name: &str, value: &str) -> Result<()> {
    if value.contains(',') {
        return Err(InventoryError::invalid_input(
            field_name,
            value,
            "commas are not allowed",
        ));
    }
    Ok(())
}
