//! Carts service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            data::NewCartItem, errors::CartsServiceError, records::CartRecord,
            repository::PgCartsRepository, session::SessionId,
        },
        products::{records::ProductUuid, repository::PgProductsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    products_repository: PgProductsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, session: SessionId) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self
            .carts_repository
            .find_by_session(&mut tx, &session)
            .await?;

        tx.commit().await?;

        Ok(cart.unwrap_or_else(|| CartRecord::empty(session)))
    }

    async fn add_item(
        &self,
        session: SessionId,
        item: NewCartItem,
    ) -> Result<CartRecord, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin_session_transaction(&session).await?;

        let product = self
            .products_repository
            .find_product(&mut tx, item.product_uuid)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        let mut cart = self
            .carts_repository
            .find_by_session(&mut tx, &session)
            .await?
            .unwrap_or_else(|| CartRecord::empty(session));

        cart.add_item(&product, item.quantity)?;
        cart.touch(Timestamp::now());

        let cart = self.carts_repository.upsert_by_session(&mut tx, &cart).await?;

        tx.commit().await?;

        tracing::debug!(
            cart_uuid = %cart.uuid,
            product_uuid = %item.product_uuid,
            quantity = item.quantity,
            "added item to cart"
        );

        Ok(cart)
    }

    async fn update_quantity(
        &self,
        session: SessionId,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin_session_transaction(&session).await?;

        let Some(mut cart) = self
            .carts_repository
            .find_by_session(&mut tx, &session)
            .await?
        else {
            tx.commit().await?;

            return Ok(CartRecord::empty(session));
        };

        if !cart.set_quantity(product, quantity)? {
            tx.commit().await?;

            return Ok(cart);
        }

        cart.touch(Timestamp::now());

        let cart = self.carts_repository.upsert_by_session(&mut tx, &cart).await?;

        tx.commit().await?;

        tracing::debug!(
            cart_uuid = %cart.uuid,
            product_uuid = %product,
            quantity,
            "updated cart line"
        );

        Ok(cart)
    }

    async fn remove_item(
        &self,
        session: SessionId,
        product: ProductUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin_session_transaction(&session).await?;

        let Some(mut cart) = self
            .carts_repository
            .find_by_session(&mut tx, &session)
            .await?
        else {
            tx.commit().await?;

            return Ok(CartRecord::empty(session));
        };

        if !cart.remove_item(product)? {
            tx.commit().await?;

            return Ok(cart);
        }

        cart.touch(Timestamp::now());

        let cart = self.carts_repository.upsert_by_session(&mut tx, &cart).await?;

        tx.commit().await?;

        tracing::debug!(cart_uuid = %cart.uuid, product_uuid = %product, "removed cart line");

        Ok(cart)
    }

    async fn clear_cart(&self, session: SessionId) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin_session_transaction(&session).await?;

        let rows_affected = self
            .carts_repository
            .delete_by_session(&mut tx, &session)
            .await?;

        tx.commit().await?;

        tracing::debug!(deleted = rows_affected > 0, "cleared cart");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the session's cart, or an unsaved empty cart when it has none.
    async fn get_cart(&self, session: SessionId) -> Result<CartRecord, CartsServiceError>;

    /// Add a product to the session's cart, creating the cart on first use.
    async fn add_item(
        &self,
        session: SessionId,
        item: NewCartItem,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Replace the quantity of a line. Zero or negative quantities remove it.
    async fn update_quantity(
        &self,
        session: SessionId,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Remove a line. Removing a product that is not in the cart is a no-op.
    async fn remove_item(
        &self,
        session: SessionId,
        product: ProductUuid,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Delete the session's cart, whether or not one exists.
    async fn clear_cart(&self, session: SessionId) -> Result<(), CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::products::ProductsService,
        test::{TestContext, helpers::new_product},
    };

    use super::*;

    fn session(id: &str) -> SessionId {
        SessionId::parse(id).expect("valid session id")
    }

    #[tokio::test]
    async fn get_cart_without_cart_is_empty_and_unsaved() -> TestResult {
        let ctx = TestContext::new().await;

        let cart = ctx.carts.get_cart(session("fresh")).await?;

        assert!(cart.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);
        assert!(cart.updated_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn repeated_adds_merge_and_persist() -> TestResult {
        let ctx = TestContext::new().await;
        let product = ctx
            .products
            .create_product(new_product("p1", "Electronics", Decimal::new(10, 0)))
            .await?;

        ctx.carts
            .add_item(session("s1"), NewCartItem::new(product.uuid, 2))
            .await?;

        let cart = ctx
            .carts
            .add_item(session("s1"), NewCartItem::new(product.uuid, 3))
            .await?;

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.item(product.uuid).map(|i| i.quantity), Some(5));
        assert_eq!(cart.total, Decimal::new(50_00, 2));

        let stored = ctx.carts.get_cart(session("s1")).await?;

        assert_eq!(stored.uuid, cart.uuid);
        assert_eq!(stored.items, cart.items);
        assert_eq!(stored.total, Decimal::new(50_00, 2));
        assert!(stored.updated_at.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn add_unknown_product_returns_product_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .carts
            .add_item(session("s1"), NewCartItem::new(ProductUuid::new(), 1))
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::ProductNotFound)),
            "expected ProductNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_and_remove_keep_total_consistent() -> TestResult {
        let ctx = TestContext::new().await;
        let a = ctx
            .products
            .create_product(new_product("a", "Sports", Decimal::new(12_50, 2)))
            .await?;
        let b = ctx
            .products
            .create_product(new_product("b", "Sports", Decimal::new(7_25, 2)))
            .await?;

        ctx.carts
            .add_item(session("s1"), NewCartItem::new(a.uuid, 1))
            .await?;
        ctx.carts
            .add_item(session("s1"), NewCartItem::new(b.uuid, 2))
            .await?;

        let cart = ctx.carts.update_quantity(session("s1"), a.uuid, 4).await?;

        assert_eq!(cart.total, Decimal::new(64_50, 2));

        let cart = ctx.carts.remove_item(session("s1"), ProductUuid::new()).await?;

        assert_eq!(cart.total, Decimal::new(64_50, 2));

        let cart = ctx.carts.update_quantity(session("s1"), b.uuid, 0).await?;

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total, Decimal::new(50_00, 2));

        let cart = ctx.carts.remove_item(session("s1"), a.uuid).await?;

        assert!(cart.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);

        Ok(())
    }

    #[tokio::test]
    async fn clear_then_get_returns_empty_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let product = ctx
            .products
            .create_product(new_product("p", "Fashion", Decimal::new(5, 0)))
            .await?;

        let cart = ctx
            .carts
            .add_item(session("s1"), NewCartItem::new(product.uuid, 1))
            .await?;

        ctx.carts.clear_cart(session("s1")).await?;
        ctx.carts.clear_cart(session("s1")).await?;

        let after = ctx.carts.get_cart(session("s1")).await?;

        assert!(after.is_empty());
        assert_ne!(after.uuid, cart.uuid);

        Ok(())
    }

    #[tokio::test]
    async fn sessions_do_not_share_carts() -> TestResult {
        let ctx = TestContext::new().await;
        let product = ctx
            .products
            .create_product(new_product("p", "Fashion", Decimal::new(5, 0)))
            .await?;

        ctx.carts
            .add_item(session("s1"), NewCartItem::new(product.uuid, 1))
            .await?;

        let other = ctx.carts.get_cart(session("s2")).await?;

        assert!(other.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_adds_to_one_session_are_serialized() -> TestResult {
        let ctx = TestContext::new().await;
        let product = ctx
            .products
            .create_product(new_product("p", "Fashion", Decimal::new(1, 0)))
            .await?;

        let adds = (0..10).map(|_| {
            let carts = ctx.carts.clone();

            tokio::spawn(async move {
                carts
                    .add_item(session("busy"), NewCartItem::new(product.uuid, 1))
                    .await
            })
        });

        for handle in adds.collect::<Vec<_>>() {
            handle.await??;
        }

        let cart = ctx.carts.get_cart(session("busy")).await?;

        assert_eq!(cart.item(product.uuid).map(|i| i.quantity), Some(10));
        assert_eq!(cart.total, Decimal::new(10, 0));

        Ok(())
    }
}
