//! Record-level validation of the untrusted upstream JSON.
//!
//! Only presence and type checks happen here; per-item numeric coercion is
//! the normalizer's job. The one deliberate exception is `tax.rate`, whose
//! unparseability is fatal for the whole document.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::ValidationError;
use crate::normalize::coerce_decimal;

/// The line-items value after validation.
///
/// A present-but-not-a-list value does not fail the record: it degrades to
/// `Malformed`, which renders as zero rows. This leniency is intentional and
/// named so callers and tests can observe it, rather than being an implicit
/// empty-list fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemsValue {
    List(Vec<Value>),
    Malformed,
}

impl ItemsValue {
    /// The items to normalize; the malformed case contributes none.
    pub fn as_slice(&self) -> &[Value] {
        match self {
            ItemsValue::List(items) => items,
            ItemsValue::Malformed => &[],
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, ItemsValue::Malformed)
    }
}

/// A type-checked record whose items have not yet been normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct RawInvoice {
    pub number: String,
    pub customer_name: String,
    pub customer_address: String,
    pub items: ItemsValue,
    pub tax_rate: Decimal,
}

/// Validates the required top-level shape of the upstream value.
///
/// Required keys: `invoice_number`, `customer_name`, `customer_address`
/// (strings), `items` (present; any type), and `tax.rate` (coercible to a
/// decimal). Failures carry the dotted path of the offending field.
pub fn validate(raw: &Value) -> Result<RawInvoice, ValidationError> {
    let number = require_str(raw, "invoice_number")?;
    let customer_name = require_str(raw, "customer_name")?;
    let customer_address = require_str(raw, "customer_address")?;

    let items = match raw.get("items") {
        None => return Err(ValidationError::missing("items")),
        Some(Value::Array(list)) => ItemsValue::List(list.clone()),
        Some(other) => {
            log::warn!(
                "'items' is not a list (found {}); substituting an empty item set",
                type_name(other)
            );
            ItemsValue::Malformed
        }
    };

    let tax = raw
        .get("tax")
        .and_then(Value::as_object)
        .ok_or_else(|| ValidationError::missing("tax"))?;
    let tax_rate = tax
        .get("rate")
        .and_then(coerce_decimal)
        .ok_or_else(|| ValidationError::missing("tax.rate"))?;

    Ok(RawInvoice { number, customer_name, customer_address, items, tax_rate })
}

fn require_str(raw: &Value, key: &str) -> Result<String, ValidationError> {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| ValidationError::missing(key))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
