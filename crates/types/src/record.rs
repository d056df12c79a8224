//! The validated invoice data model.
//!
//! Everything here is constructed once per generation call, is immutable
//! afterwards, and is never persisted. Monetary values use `Decimal` so the
//! pipeline stays exact until the final two-digit formatting step.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single line item that survived normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// `quantity * unit_price`, computed by the normalizer. Downstream
    /// components read this field and never recompute it.
    pub extended_total: Decimal,
}

impl LineItem {
    /// Builds an item, computing its extended total with checked
    /// multiplication. Returns `None` when the product overflows the
    /// representable decimal range; the caller decides how to reject it.
    pub fn try_new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Option<Self> {
        let extended_total = quantity.checked_mul(unit_price)?;
        Some(Self { description: description.into(), quantity, unit_price, extended_total })
    }
}

/// A fully validated invoice, ready for layout.
///
/// `line_items` preserves insertion order; that order is the rendering order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub number: String,
    pub customer_name: String,
    pub customer_address: String,
    pub line_items: Vec<LineItem>,
    /// Decimal fraction, e.g. 0.15 for 15%. Expected in [0, 1] but the range
    /// is not enforced here.
    pub tax_rate: Decimal,
}

/// Derived monetary totals. All three values are exact decimals, so
/// `grand_total == subtotal + tax_amount` holds bit-exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub grand_total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_item_attaches_extended_total() {
        let item = LineItem::try_new("Widget", "2".parse().unwrap(), "50.0".parse().unwrap())
            .unwrap();
        assert_eq!(item.extended_total, "100".parse::<Decimal>().unwrap());
    }

    #[test]
    fn extended_total_is_exact_for_fractional_inputs() {
        // 0.1 * 0.2 drifts under binary floats; it must not here.
        let item = LineItem::try_new("x", "0.1".parse().unwrap(), "0.2".parse().unwrap()).unwrap();
        assert_eq!(item.extended_total, "0.02".parse::<Decimal>().unwrap());
    }

    #[test]
    fn overflowing_extended_total_is_rejected_not_a_panic() {
        assert!(LineItem::try_new("x", Decimal::MAX, Decimal::MAX).is_none());
        assert!(LineItem::try_new("x", Decimal::MAX, "2".parse().unwrap()).is_none());
    }
}
