//! # Good Repository
//!
//! Database operations for goods (products in stock).
//!
//! ## Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   categories.id ◄── goods.category_num                                 │
//! │   providers.id  ◄── goods.provider_num                                 │
//! │                     goods.id ◄── orders.good_num                       │
//! │                                                                         │
//! │  Writes referencing a missing category or provider fail with           │
//! │  ForeignKeyViolation; so does deleting a good that is still ordered.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::{DbError, DbResult};
use inventory_core::{Good, GoodDraft, GoodInfo};

const GOOD_INFO_SELECT: &str = r#"
    SELECT
        g.id,
        g.name,
        g.cost_cents,
        c.name AS category,
        c.id AS category_id,
        p.company_name AS provider,
        p.id AS provider_id
    FROM goods g
    INNER JOIN categories c ON c.id = g.category_num
    INNER JOIN providers p ON p.id = g.provider_num
"#;

/// Repository for good database operations, bound to one session.
#[derive(Debug)]
pub struct GoodRepository<'s> {
    conn: &'s mut SqliteConnection,
}

impl<'s> GoodRepository<'s> {
    pub(crate) fn new(conn: &'s mut SqliteConnection) -> Self {
        GoodRepository { conn }
    }

    /// Validates the draft and stages a new good.
    ///
    /// ## Returns
    /// * `Ok(id)` - Id of the staged row
    /// * `Err(DbError::Validation)` - Empty name, negative cost or bad ids
    /// * `Err(DbError::ForeignKeyViolation)` - Unknown category or provider
    pub async fn add(&mut self, draft: &GoodDraft) -> DbResult<i64> {
        draft.validate()?;

        debug!(
            name = %draft.name,
            cost = %draft.cost,
            category_id = draft.category_id,
            provider_id = draft.provider_id,
            "Inserting good"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO goods (name, cost_cents, category_num, provider_num)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(draft.name.as_str())
        .bind(draft.cost.cents())
        .bind(draft.category_id)
        .bind(draft.provider_id)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Gets a good joined with its category and provider.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No such good
    pub async fn get_info(&mut self, id: i64) -> DbResult<GoodInfo> {
        debug!(id, "Fetching good info");

        let sql = format!("{GOOD_INFO_SELECT} WHERE g.id = ?1");
        sqlx::query_as::<_, GoodInfo>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::not_found("Good", id))
    }

    /// Gets a good by its primary key.
    pub async fn get_good_by_id(&mut self, id: i64) -> DbResult<Option<Good>> {
        let good = sqlx::query_as::<_, Good>(
            r#"
            SELECT id, name, cost_cents, category_num, provider_num
            FROM goods
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(good)
    }

    /// Lists every good with its category and provider, oldest first.
    pub async fn list(&mut self) -> DbResult<Vec<GoodInfo>> {
        let sql = format!("{GOOD_INFO_SELECT} ORDER BY g.id");
        let goods = sqlx::query_as::<_, GoodInfo>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;

        debug!(count = goods.len(), "Listed goods");
        Ok(goods)
    }

    /// Re-validates the draft and overwrites every field.
    pub async fn update(&mut self, id: i64, draft: &GoodDraft) -> DbResult<()> {
        draft.validate()?;

        debug!(id, name = %draft.name, cost = %draft.cost, "Updating good");

        let result = sqlx::query(
            r#"
            UPDATE goods SET
                name = ?2,
                cost_cents = ?3,
                category_num = ?4,
                provider_num = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(draft.name.as_str())
        .bind(draft.cost.cents())
        .bind(draft.category_id)
        .bind(draft.provider_id)
        .execute(&mut *self.conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Good", id));
        }

        Ok(())
    }

    /// Deletes a good.
    ///
    /// Fails with [`DbError::ForeignKeyViolation`] while any order
    /// references it.
    pub async fn delete(&mut self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting good");

        let result = sqlx::query("DELETE FROM goods WHERE id = ?1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Good", id));
        }

        Ok(())
    }

    /// Counts all goods.
    pub async fn count(&mut self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM goods")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::fixture;
    use inventory_core::{Money, OrderDraft, ValidationError};

    fn draft(category_id: i64, provider_id: i64) -> GoodDraft {
        GoodDraft {
            name: "Saw".to_string(),
            cost: Money::from_cents(2599),
            category_id,
            provider_id,
        }
    }

    #[tokio::test]
    async fn test_get_info_joins_category_and_provider() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();

        let info = session.goods().get_info(fx.good_id).await.unwrap();

        assert_eq!(
            info,
            GoodInfo {
                id: fx.good_id,
                name: "Hammer".to_string(),
                cost_cents: Money::from_cents(1250),
                category: "Tools".to_string(),
                category_id: fx.category_id,
                provider: "Acme".to_string(),
                provider_id: fx.provider_id,
            }
        );
    }

    #[tokio::test]
    async fn test_add_then_get_by_id() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();

        let id = session
            .goods()
            .add(&draft(fx.category_id, fx.provider_id))
            .await
            .unwrap();
        let good = session.goods().get_good_by_id(id).await.unwrap().unwrap();

        assert_eq!(good.name, "Saw");
        assert_eq!(good.cost_cents, Money::from_cents(2599));
        assert_eq!(good.category_num, fx.category_id);
        assert_eq!(good.provider_num, fx.provider_id);
    }

    #[tokio::test]
    async fn test_negative_cost_is_rejected() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();

        let err = session
            .goods()
            .add(&GoodDraft {
                cost: Money::from_cents(-1),
                ..draft(fx.category_id, fx.provider_id)
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DbError::Validation(ValidationError::OutOfRange { .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_category_violates_foreign_key() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();

        let err = session
            .goods()
            .add(&draft(fx.category_id + 50, fx.provider_id))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_update_changes_cost() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();

        session
            .goods()
            .update(
                fx.good_id,
                &GoodDraft {
                    name: "Claw Hammer".to_string(),
                    cost: Money::from_cents(1399),
                    category_id: fx.category_id,
                    provider_id: fx.provider_id,
                },
            )
            .await
            .unwrap();

        let info = session.goods().get_info(fx.good_id).await.unwrap();
        assert_eq!(info.name, "Claw Hammer");
        assert_eq!(info.cost_cents, Money::from_cents(1399));
    }

    #[tokio::test]
    async fn test_update_missing_good_is_not_found() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();

        let err = session
            .goods()
            .update(999, &draft(fx.category_id, fx.provider_id))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_ordered_good_fails_until_order_removed() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();
        let order_id = session
            .orders()
            .add(&OrderDraft {
                full_name: "Jane Doe".to_string(),
                address: "1 Main St".to_string(),
                notes: None,
                email: "jane@example.com".to_string(),
                status: "pending".to_string(),
                good_id: fx.good_id,
            })
            .await
            .unwrap();

        let err = session.goods().delete(fx.good_id).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));

        session.orders().delete(order_id).await.unwrap();
        session.goods().delete(fx.good_id).await.unwrap();
        assert!(session.goods().get_good_by_id(fx.good_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_goods() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();
        session
            .goods()
            .add(&draft(fx.category_id, fx.provider_id))
            .await
            .unwrap();

        let goods = session.goods().list().await.unwrap();
        let names: Vec<&str> = goods.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Hammer", "Saw"]);
    }
}
