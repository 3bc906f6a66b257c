//! Money calculation using rust_decimal
//!
//! Prices are stored as `f64`; sums are done in `Decimal` and converted
//! back, rounded to cents.

use rust_decimal::prelude::*;

/// 2 decimal places, half away from zero
const DECIMAL_PLACES: u32 = 2;

#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// unit price × quantity
pub fn line_total(unit_price: f64, quantity: i32) -> Decimal {
    to_decimal(unit_price) * Decimal::from(quantity)
}

/// Σ unit price × quantity, rounded to cents
pub fn order_total<I>(lines: I) -> f64
where
    I: IntoIterator<Item = (f64, i32)>,
{
    let total = lines
        .into_iter()
        .fold(Decimal::ZERO, |acc, (price, qty)| acc + line_total(price, qty));
    to_f64(total)
}
