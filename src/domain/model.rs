use serde::{Serialize, Serializer};
use std::fmt;

/// One inventory line: where the shoe comes from, its code and name, unit cost and stock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shoe {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Cost", serialize_with = "serialize_decimal")]
    pub cost: f64,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
}

impl Shoe {
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        product: impl Into<String>,
        cost: f64,
        quantity: u32,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    pub fn total_value(&self) -> f64 {
        self.cost * f64::from(self.quantity)
    }
}

impl fmt::Display for Shoe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {} available", self.product, self.code, self.quantity)
    }
}

/// One row of the value report.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemValue {
    pub country: String,
    pub code: String,
    pub product: String,
    pub total_value: f64,
}

impl From<&Shoe> for ItemValue {
    fn from(shoe: &Shoe) -> Self {
        Self {
            country: shoe.country.clone(),
            code: shoe.code.clone(),
            product: shoe.product.clone(),
            total_value: shoe.total_value(),
        }
    }
}

/// 以最短可還原形式輸出小數，整數值保留一位小數 (50 -> "50.0")
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn serialize_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_decimal(*value))
}

/// Uppercases a product code.
pub fn normalize_code(input: &str) -> String {
    input.to_uppercase()
}

/// Title-cases a product name: the first letter of every alphabetic run is
/// uppercased and the rest lowercased ("running shoe" -> "Running Shoe").
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut previous_is_letter = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}
