//! Cart Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        carts::{
            data::MAX_LINE_QUANTITY, errors::CartsServiceError, session::SessionId,
            totals::cart_total,
        },
        products::records::{ProductRecord, ProductUuid},
    },
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Cart line.
///
/// Name, price and image are copied from the catalog when the line is first added
/// and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRecord {
    pub product_uuid: ProductUuid,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: String,
}

impl CartItemRecord {
    #[must_use]
    pub fn snapshot(product: &ProductRecord, quantity: u32) -> Self {
        Self {
            product_uuid: product.uuid,
            name: product.name.clone(),
            price: product.price,
            quantity,
            image: product.image.clone(),
        }
    }
}

/// Cart Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRecord {
    pub uuid: CartUuid,
    pub session: SessionId,
    pub items: Vec<CartItemRecord>,
    pub total: Decimal,

    /// `None` until the cart has been stored.
    pub updated_at: Option<Timestamp>,
}

impl CartRecord {
    /// Unsaved cart with no items.
    #[must_use]
    pub fn empty(session: SessionId) -> Self {
        Self {
            uuid: CartUuid::new(),
            session,
            items: Vec::new(),
            total: Decimal::ZERO,
            updated_at: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn item(&self, product: ProductUuid) -> Option<&CartItemRecord> {
        self.items.iter().find(|item| item.product_uuid == product)
    }

    /// Add `quantity` of `product`, merging into an existing line for the same product.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::InvalidQuantity`] for a zero quantity or when the
    /// line would exceed [`MAX_LINE_QUANTITY`], and [`CartsServiceError::TotalOverflow`]
    /// when the total cannot be represented. The cart is unchanged on error.
    pub fn add_item(
        &mut self,
        product: &ProductRecord,
        quantity: u32,
    ) -> Result<(), CartsServiceError> {
        if quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut items = self.items.clone();

        if let Some(existing) = items
            .iter_mut()
            .find(|item| item.product_uuid == product.uuid)
        {
            existing.quantity = line_quantity(existing.quantity.checked_add(quantity))?;
        } else {
            items.push(CartItemRecord::snapshot(
                product,
                line_quantity(Some(quantity))?,
            ));
        }

        self.replace_items(items)
    }

    /// Set the quantity of the line for `product`.
    ///
    /// A quantity of zero or less removes the line. Returns whether the cart changed;
    /// a product with no line is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::InvalidQuantity`] when `quantity` exceeds
    /// [`MAX_LINE_QUANTITY`], and [`CartsServiceError::TotalOverflow`] when the total
    /// cannot be represented.
    pub fn set_quantity(
        &mut self,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<bool, CartsServiceError> {
        if quantity <= 0 {
            return self.remove_item(product);
        }

        let mut items = self.items.clone();

        let Some(existing) = items.iter_mut().find(|item| item.product_uuid == product) else {
            return Ok(false);
        };

        existing.quantity = line_quantity(u32::try_from(quantity).ok())?;

        self.replace_items(items)?;

        Ok(true)
    }

    /// Drop the line for `product`. Returns whether one was present.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::TotalOverflow`] when the remaining total cannot be
    /// represented.
    pub fn remove_item(&mut self, product: ProductUuid) -> Result<bool, CartsServiceError> {
        let mut items = self.items.clone();
        let before = items.len();

        items.retain(|item| item.product_uuid != product);

        if items.len() == before {
            return Ok(false);
        }

        self.replace_items(items)?;

        Ok(true)
    }

    pub fn touch(&mut self, at: Timestamp) {
        self.updated_at = Some(at);
    }

    fn replace_items(&mut self, items: Vec<CartItemRecord>) -> Result<(), CartsServiceError> {
        let total = cart_total(&items).ok_or(CartsServiceError::TotalOverflow)?;

        self.items = items;
        self.total = total;

        Ok(())
    }
}

fn line_quantity(quantity: Option<u32>) -> Result<u32, CartsServiceError> {
    quantity
        .filter(|q| (1..=MAX_LINE_QUANTITY).contains(q))
        .ok_or(CartsServiceError::InvalidQuantity)
}
