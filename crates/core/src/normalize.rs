//! Per-item normalization: text and numeric coercion plus the extended total.
//!
//! Applied independently to each element of the items list, in order. A
//! failure here is local to its item; the driver drops the row and continues.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::ItemError;
use factura_types::LineItem;

/// Coerces one raw item into a [`LineItem`], attaching its extended total so
/// downstream components never recompute it.
pub fn normalize_item(item: &Value) -> Result<LineItem, ItemError> {
    let description = item
        .get("description")
        .and_then(coerce_text)
        .ok_or(ItemError::MissingDescription)?;
    let quantity = item
        .get("quantity")
        .and_then(coerce_decimal)
        .ok_or(ItemError::NonNumeric { field: "quantity" })?;
    let unit_price = item
        .get("unit_price")
        .and_then(coerce_decimal)
        .ok_or(ItemError::NonNumeric { field: "unit_price" })?;
    LineItem::try_new(description, quantity, unit_price).ok_or(ItemError::AmountOverflow)
}

/// Scalar-to-text coercion. Containers and null do not coerce.
fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Coerces a JSON value to an exact decimal.
///
/// Numbers parse from their literal text, so `50.10` arrives as 50.10 and
/// not as the nearest binary double. Strings are accepted the way the
/// upstream source tends to emit them ("2", " 2.5 ", "1e3").
pub(crate) fn coerce_decimal(value: &Value) -> Option<Decimal> {
    let repr = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    Decimal::from_str(&repr)
        .ok()
        .or_else(|| Decimal::from_scientific(&repr).ok())
}
