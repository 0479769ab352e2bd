//! Carts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{
    FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, types::Json,
};

use crate::domain::carts::{
    records::{CartItemRecord, CartRecord, CartUuid},
    session::SessionId,
};

const FIND_CART_BY_SESSION_SQL: &str = include_str!("sql/find_cart_by_session.sql");
const UPSERT_CART_SQL: &str = include_str!("sql/upsert_cart.sql");
const DELETE_CART_BY_SESSION_SQL: &str = include_str!("sql/delete_cart_by_session.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_by_session(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        session: &SessionId,
    ) -> Result<Option<CartRecord>, sqlx::Error> {
        query_as::<Postgres, CartRecord>(FIND_CART_BY_SESSION_SQL)
            .bind(session.as_str())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Write the whole cart, replacing whatever the session had stored.
    pub(crate) async fn upsert_by_session(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: &CartRecord,
    ) -> Result<CartRecord, sqlx::Error> {
        let updated_at = cart.updated_at.unwrap_or_else(jiff::Timestamp::now);

        query_as::<Postgres, CartRecord>(UPSERT_CART_SQL)
            .bind(cart.uuid.into_uuid())
            .bind(cart.session.as_str())
            .bind(Json(&cart.items))
            .bind(cart.total)
            .bind(SqlxTimestamp::from(updated_at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_by_session(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        session: &SessionId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_BY_SESSION_SQL)
            .bind(session.as_str())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let session: String = row.try_get("session_id")?;
        let Json(items) = row.try_get::<Json<Vec<CartItemRecord>>, _>("items")?;

        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            session: SessionId::parse(session).map_err(|e| sqlx::Error::ColumnDecode {
                index: "session_id".to_string(),
                source: Box::new(e),
            })?,
            items,
            total: row.try_get::<Decimal, _>("total")?,
            updated_at: Some(row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff()),
        })
    }
}
