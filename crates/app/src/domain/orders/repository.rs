//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{
    FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar, types::Json,
};

use crate::domain::{
    carts::records::CartItemRecord,
    orders::records::{OrderNumber, OrderRecord, OrderStatus, OrderUuid, ShippingAddress},
};

const NEXT_ORDER_NUMBER_SQL: &str = include_str!("sql/next_order_number.sql");
const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Draw the next value from the order number sequence.
    ///
    /// Sequence values are not returned on rollback, so numbers may skip.
    pub(crate) async fn next_order_number(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<OrderNumber, sqlx::Error> {
        let sequence: i64 = query_scalar(NEXT_ORDER_NUMBER_SQL)
            .fetch_one(&mut **tx)
            .await?;

        let sequence = u64::try_from(sequence).map_err(|e| sqlx::Error::ColumnDecode {
            index: "nextval".to_string(),
            source: Box::new(e),
        })?;

        Ok(OrderNumber::from_sequence(sequence))
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &OrderRecord,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.order_number.as_str())
            .bind(Json(&order.items))
            .bind(order.total)
            .bind(Json(&order.shipping_address))
            .bind(order.status.as_str())
            .bind(SqlxTimestamp::from(order.created_at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(items) = row.try_get::<Json<Vec<CartItemRecord>>, _>("items")?;
        let Json(shipping_address) = row.try_get::<Json<ShippingAddress>, _>("shipping_address")?;
        let status: String = row.try_get("status")?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            order_number: OrderNumber::from_stored(row.try_get("order_number")?),
            items,
            total: row.try_get::<Decimal, _>("total")?,
            shipping_address,
            status: status
                .parse::<OrderStatus>()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "status".to_string(),
                    source: Box::new(e),
                })?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
