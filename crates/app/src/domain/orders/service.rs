//! Orders service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{repository::PgCartsRepository, session::SessionId},
        orders::{
            errors::OrdersServiceError,
            records::{OrderRecord, OrderStatus, OrderUuid, ShippingAddress},
            repository::PgOrdersRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    carts_repository: PgCartsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            carts_repository: PgCartsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn create_order(
        &self,
        session: SessionId,
        shipping_address: ShippingAddress,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin_session_transaction(&session).await?;

        let cart = self
            .carts_repository
            .find_by_session(&mut tx, &session)
            .await?
            .filter(|cart| !cart.is_empty())
            .ok_or(OrdersServiceError::EmptyCart)?;

        shipping_address.validate()?;

        let order_number = self.orders_repository.next_order_number(&mut tx).await?;

        let order = OrderRecord {
            uuid: OrderUuid::new(),
            order_number,
            items: cart.items,
            total: cart.total,
            shipping_address,
            status: OrderStatus::Confirmed,
            created_at: Timestamp::now(),
        };

        let order = self.orders_repository.create_order(&mut tx, &order).await?;

        self.carts_repository
            .delete_by_session(&mut tx, &session)
            .await?;

        tx.commit().await?;

        tracing::info!(
            order_uuid = %order.uuid,
            order_number = %order.order_number,
            total = %order.total,
            "created order"
        );

        Ok(order)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self
            .orders_repository
            .find_order(&mut tx, order)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        tx.commit().await?;

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Turn the session's cart into a confirmed order and empty the cart.
    ///
    /// An empty cart is reported before the address is validated. The order insert
    /// and cart removal commit together or not at all.
    async fn create_order(
        &self,
        session: SessionId,
        shipping_address: ShippingAddress,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;
}
