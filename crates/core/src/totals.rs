//! Aggregation of the invoice's monetary totals.

use rust_decimal::Decimal;

use crate::error::TotalsOverflow;
use factura_types::{LineItem, Totals};

/// Sums the surviving items in order and derives tax and grand total.
///
/// All arithmetic is exact decimal; there is no mid-computation rounding, so
/// item order cannot affect the result and `grand_total` always equals
/// `subtotal + tax_amount` bit-exactly. An empty slice yields a zero
/// subtotal with tax and grand total following. Every step is checked:
/// exceeding the decimal range surfaces as [`TotalsOverflow`], never a panic.
pub fn compute_totals(items: &[LineItem], tax_rate: Decimal) -> Result<Totals, TotalsOverflow> {
    let mut subtotal = Decimal::ZERO;
    for item in items {
        subtotal = subtotal.checked_add(item.extended_total).ok_or(TotalsOverflow)?;
    }
    let tax_amount = subtotal.checked_mul(tax_rate).ok_or(TotalsOverflow)?;
    let grand_total = subtotal.checked_add(tax_amount).ok_or(TotalsOverflow)?;
    Ok(Totals { subtotal, tax_amount, grand_total })
}
