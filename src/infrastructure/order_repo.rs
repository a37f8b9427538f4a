use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, PlacementOutcome};
use crate::domain::ports::OrderRepository;

use super::models::CreateOrderRow;

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    /// Delegates the check-then-reserve sequence to the `create_order` SQL
    /// function, which locks the artwork row for the duration of the
    /// transaction. The availability check never happens in Rust.
    fn place(&self, order: NewOrder) -> Result<PlacementOutcome, DomainError> {
        let mut conn = self.pool.get()?;

        let row: CreateOrderRow = conn.transaction(|conn| {
            diesel::sql_query(
                "SELECT result, order_id, message \
                 FROM create_order($1, $2, $3, $4, $5, $6)",
            )
            .bind::<Text, _>(&order.customer_name)
            .bind::<Text, _>(&order.customer_email)
            .bind::<Text, _>(&order.customer_phone)
            .bind::<Integer, _>(order.artwork_id)
            .bind::<Text, _>(&order.shipping_address)
            .bind::<Text, _>(&order.notes)
            .get_result(conn)
            .map_err(DomainError::from)
        })?;

        match row.result.as_str() {
            "SUCCESS" => {
                let order_id = row.order_id.ok_or_else(|| {
                    DomainError::Internal("create_order reported SUCCESS without an order id".into())
                })?;
                Ok(PlacementOutcome::Placed { order_id })
            }
            _ => Ok(PlacementOutcome::Rejected {
                reason: row
                    .message
                    .unwrap_or_else(|| "Artwork is no longer available".to_string()),
            }),
        }
    }
}
