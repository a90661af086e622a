//! # Order Repository
//!
//! Database operations for orders.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. ADD                                                                │
//! │     └── add(draft) → validate → INSERT → new id (staged)               │
//! │                                                                         │
//! │  2. READ                                                               │
//! │     ├── get_order_by_id(id) → Option<Order>                            │
//! │     └── get_info(id)        → OrderInfo (joined with the good)         │
//! │                                                                         │
//! │  3. UPDATE                                                             │
//! │     └── update(id, draft) → validate → overwrite every field           │
//! │                                                                         │
//! │  4. DELETE                                                             │
//! │     └── delete(id)                                                     │
//! │                                                                         │
//! │  Nothing persists until the owning Session commits.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::{DbError, DbResult};
use inventory_core::{Order, OrderDraft, OrderInfo};

const ORDER_INFO_SELECT: &str = r#"
    SELECT
        o.id,
        o.full_name AS name,
        o.address,
        o.notes,
        o.email,
        o.status,
        g.name AS good,
        g.id AS good_id
    FROM orders o
    INNER JOIN goods g ON g.id = o.good_num
"#;

/// Repository for order database operations, bound to one session.
#[derive(Debug)]
pub struct OrderRepository<'s> {
    conn: &'s mut SqliteConnection,
}

impl<'s> OrderRepository<'s> {
    pub(crate) fn new(conn: &'s mut SqliteConnection) -> Self {
        OrderRepository { conn }
    }

    /// Validates the draft and stages a new order.
    ///
    /// ## Returns
    /// * `Ok(id)` - Id of the staged row
    /// * `Err(DbError::Validation)` - Empty required field or malformed email
    /// * `Err(DbError::ForeignKeyViolation)` - No good with `draft.good_id`
    pub async fn add(&mut self, draft: &OrderDraft) -> DbResult<i64> {
        draft.validate()?;

        debug!(good_id = draft.good_id, status = %draft.status, "Inserting order");

        let result = sqlx::query(
            r#"
            INSERT INTO orders (full_name, address, notes, email, status, good_num)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(draft.full_name.as_str())
        .bind(draft.address.as_str())
        .bind(draft.notes.as_deref())
        .bind(draft.email.as_str())
        .bind(draft.status.as_str())
        .bind(draft.good_id)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Gets an order joined with its good.
    ///
    /// ## Returns
    /// * `Ok(OrderInfo)` - The order plus the good's name and id
    /// * `Err(DbError::NotFound)` - No such order
    pub async fn get_info(&mut self, id: i64) -> DbResult<OrderInfo> {
        debug!(id, "Fetching order info");

        let sql = format!("{ORDER_INFO_SELECT} WHERE o.id = ?1");
        sqlx::query_as::<_, OrderInfo>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::not_found("Order", id))
    }

    /// Gets an order by its primary key.
    ///
    /// ## Returns
    /// * `Ok(Some(Order))` - Order found
    /// * `Ok(None)` - Order not found
    pub async fn get_order_by_id(&mut self, id: i64) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, full_name, address, notes, email, status, good_num
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(order)
    }

    /// Lists every order joined with its good, oldest first.
    pub async fn list(&mut self) -> DbResult<Vec<OrderInfo>> {
        let sql = format!("{ORDER_INFO_SELECT} ORDER BY o.id");
        let orders = sqlx::query_as::<_, OrderInfo>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;

        debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    /// Re-validates the draft and overwrites every mutable field.
    ///
    /// ## Returns
    /// * `Ok(())` - Update staged
    /// * `Err(DbError::Validation)` - Rejected draft, nothing written
    /// * `Err(DbError::NotFound)` - Order doesn't exist
    pub async fn update(&mut self, id: i64, draft: &OrderDraft) -> DbResult<()> {
        draft.validate()?;

        debug!(id, good_id = draft.good_id, "Updating order");

        let result = sqlx::query(
            r#"
            UPDATE orders SET
                full_name = ?2,
                address = ?3,
                notes = ?4,
                email = ?5,
                status = ?6,
                good_num = ?7
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(draft.full_name.as_str())
        .bind(draft.address.as_str())
        .bind(draft.notes.as_deref())
        .bind(draft.email.as_str())
        .bind(draft.status.as_str())
        .bind(draft.good_id)
        .execute(&mut *self.conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", id));
        }

        Ok(())
    }

    /// Deletes an order by its primary key.
    pub async fn delete(&mut self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting order");

        let result = sqlx::query("DELETE FROM orders WHERE id = ?1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", id));
        }

        Ok(())
    }

    /// Counts all orders.
    pub async fn count(&mut self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::fixture;
    use inventory_core::ValidationError;

    fn draft(good_id: i64) -> OrderDraft {
        OrderDraft {
            full_name: "Jane Doe".to_string(),
            address: "1 Main St".to_string(),
            notes: None,
            email: "jane@example.com".to_string(),
            status: "pending".to_string(),
            good_id,
        }
    }

    #[tokio::test]
    async fn test_add_then_get_returns_same_fields() {
        let fx = fixture().await;

        let mut session = fx.db.begin().await.unwrap();
        let id = session.orders().add(&draft(fx.good_id)).await.unwrap();
        session.commit().await.unwrap();

        let mut session = fx.db.begin().await.unwrap();
        let order = session.orders().get_order_by_id(id).await.unwrap().unwrap();

        assert_eq!(
            order,
            Order {
                id,
                full_name: "Jane Doe".to_string(),
                address: "1 Main St".to_string(),
                notes: None,
                email: "jane@example.com".to_string(),
                status: "pending".to_string(),
                good_num: fx.good_id,
            }
        );
    }

    #[tokio::test]
    async fn test_add_with_empty_name_persists_nothing() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();

        let err = session
            .orders()
            .add(&OrderDraft {
                full_name: String::new(),
                ..draft(fx.good_id)
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DbError::Validation(ValidationError::Required { ref field }) if field == "full_name"
        ));
        assert_eq!(session.orders().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_with_malformed_email_fails() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();

        for email in ["jane.example.com", "jane@example"] {
            let err = session
                .orders()
                .add(&OrderDraft {
                    email: email.to_string(),
                    ..draft(fx.good_id)
                })
                .await
                .unwrap_err();
            assert!(matches!(err, DbError::Validation(_)), "accepted {email}");
        }
        assert_eq!(session.orders().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_for_unknown_good_violates_foreign_key() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();

        let err = session.orders().add(&draft(fx.good_id + 100)).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_uncommitted_session_leaves_no_row() {
        let fx = fixture().await;

        let mut session = fx.db.begin().await.unwrap();
        let id = session.orders().add(&draft(fx.good_id)).await.unwrap();
        drop(session);

        let mut session = fx.db.begin().await.unwrap();
        assert!(session.orders().get_order_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_info_joins_good() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();

        let id = session
            .orders()
            .add(&OrderDraft {
                notes: Some("ring twice".to_string()),
                ..draft(fx.good_id)
            })
            .await
            .unwrap();
        let info = session.orders().get_info(id).await.unwrap();

        assert_eq!(info.id, id);
        assert_eq!(info.name, "Jane Doe");
        assert_eq!(info.notes.as_deref(), Some("ring twice"));
        assert_eq!(info.good, "Hammer");
        assert_eq!(info.good_id, fx.good_id);
    }

    #[tokio::test]
    async fn test_get_info_missing_order_is_not_found() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();

        let err = session.orders().get_info(404).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();
        let id = session.orders().add(&draft(fx.good_id)).await.unwrap();

        let changed = OrderDraft {
            full_name: "John Roe".to_string(),
            address: "2 Side St".to_string(),
            notes: Some("fragile".to_string()),
            email: "john@example.org".to_string(),
            status: "shipped".to_string(),
            good_id: fx.good_id,
        };
        session.orders().update(id, &changed).await.unwrap();

        let order = session.orders().get_order_by_id(id).await.unwrap().unwrap();
        assert_eq!(order.full_name, "John Roe");
        assert_eq!(order.address, "2 Side St");
        assert_eq!(order.notes.as_deref(), Some("fragile"));
        assert_eq!(order.email, "john@example.org");
        assert_eq!(order.status, "shipped");
    }

    #[tokio::test]
    async fn test_invalid_update_changes_nothing() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();
        let id = session.orders().add(&draft(fx.good_id)).await.unwrap();

        let err = session
            .orders()
            .update(
                id,
                &OrderDraft {
                    status: String::new(),
                    full_name: "Changed".to_string(),
                    ..draft(fx.good_id)
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));

        let order = session.orders().get_order_by_id(id).await.unwrap().unwrap();
        assert_eq!(order.full_name, "Jane Doe");
        assert_eq!(order.status, "pending");
    }

    #[tokio::test]
    async fn test_update_with_malformed_email_changes_nothing() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();
        let id = session.orders().add(&draft(fx.good_id)).await.unwrap();

        let err = session
            .orders()
            .update(
                id,
                &OrderDraft {
                    email: "jane.example.com".to_string(),
                    address: "2 Side St".to_string(),
                    ..draft(fx.good_id)
                },
            )
            .await
            .unwrap_err();
        match err {
            DbError::Validation(e) => assert_eq!(e.field(), "email"),
            other => panic!("expected validation error, got {other:?}"),
        }

        let order = session.orders().get_order_by_id(id).await.unwrap().unwrap();
        assert_eq!(order.email, "jane@example.com");
        assert_eq!(order.address, "1 Main St");
    }

    #[tokio::test]
    async fn test_update_missing_order_is_not_found() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();

        let err = session.orders().update(77, &draft(fx.good_id)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_then_get_returns_nothing() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();
        let id = session.orders().add(&draft(fx.good_id)).await.unwrap();

        session.orders().delete(id).await.unwrap();

        assert!(session.orders().get_order_by_id(id).await.unwrap().is_none());
        assert!(session.orders().delete(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_list_orders() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();
        session.orders().add(&draft(fx.good_id)).await.unwrap();
        session
            .orders()
            .add(&OrderDraft {
                full_name: "John Roe".to_string(),
                ..draft(fx.good_id)
            })
            .await
            .unwrap();

        let orders = session.orders().list().await.unwrap();
        let names: Vec<&str> = orders.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Jane Doe", "John Roe"]);
        assert!(orders.iter().all(|o| o.good == "Hammer"));
    }
}
