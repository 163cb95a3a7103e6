use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub fn parse_date(field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(field.trim(), "%Y-%m-%d")
        .with_context(|| format!("Failed to parse date '{}'", field))
}

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    field
        .trim()
        .parse::<Decimal>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}

/// Blank fields parse to `None`.
pub fn parse_optional_decimal(field: &str, field_name: &str) -> Result<Option<Decimal>> {
    if field.trim().is_empty() {
        return Ok(None);
    }
    parse_decimal(field, field_name).map(Some)
}
