//! Cart totals

use rust_decimal::Decimal;

use crate::domain::carts::records::CartItemRecord;

/// Price of a single line, or `None` when it does not fit in a `Decimal`.
#[must_use]
pub fn line_total(item: &CartItemRecord) -> Option<Decimal> {
    item.price.checked_mul(Decimal::from(item.quantity))
}

/// Sum of `price * quantity` over `items`.
///
/// Returns `None` on overflow.
#[must_use]
pub fn cart_total(items: &[CartItemRecord]) -> Option<Decimal> {
    items.iter().try_fold(Decimal::ZERO, |total, item| {
        total.checked_add(line_total(item)?)
    })
}
