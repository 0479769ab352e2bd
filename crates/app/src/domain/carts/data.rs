//! Cart Data

use crate::domain::products::records::ProductUuid;

/// Largest quantity a single cart line may hold.
pub const MAX_LINE_QUANTITY: u32 = 10_000;

/// Item to add to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_uuid: ProductUuid,
    pub quantity: u32,
}

impl NewCartItem {
    #[must_use]
    pub fn new(product_uuid: ProductUuid, quantity: u32) -> Self {
        Self {
            product_uuid,
            quantity,
        }
    }
}
