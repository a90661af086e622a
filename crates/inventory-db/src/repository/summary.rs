//! # Summary Repository
//!
//! Read-only aggregates shown on the home page.

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::DbResult;
use inventory_core::{CategorySummary, OrderTotals};

/// Aggregate queries, bound to one session.
#[derive(Debug)]
pub struct SummaryRepository<'s> {
    conn: &'s mut SqliteConnection,
}

impl<'s> SummaryRepository<'s> {
    pub(crate) fn new(conn: &'s mut SqliteConnection) -> Self {
        SummaryRepository { conn }
    }

    /// Goods count and total cost per category.
    ///
    /// Categories without goods are left out. Sorted by category name.
    pub async fn category_summaries(&mut self) -> DbResult<Vec<CategorySummary>> {
        let summaries = sqlx::query_as::<_, CategorySummary>(
            r#"
            SELECT
                c.name AS name,
                COUNT(g.id) AS goods_count,
                COALESCE(SUM(g.cost_cents), 0) AS total_cost_cents
            FROM categories c
            INNER JOIN goods g ON g.category_num = c.id
            GROUP BY c.id, c.name
            ORDER BY c.name, c.id
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        debug!(categories = summaries.len(), "Computed category summaries");
        Ok(summaries)
    }

    /// Number of orders and the summed cost of the goods they reference.
    ///
    /// A good ordered twice counts twice.
    pub async fn order_totals(&mut self) -> DbResult<OrderTotals> {
        let totals = sqlx::query_as::<_, OrderTotals>(
            r#"
            SELECT
                COUNT(o.id) AS orders_count,
                COALESCE(SUM(g.cost_cents), 0) AS total_cost_cents
            FROM orders o
            INNER JOIN goods g ON g.id = o.good_num
            "#,
        )
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::test_support::fixture;
    use crate::{Database, DbConfig};
    use inventory_core::{CategoryDraft, GoodDraft, Money, OrderDraft, OrderTotals};

    fn order(good_id: i64) -> OrderDraft {
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
    async fn test_empty_database_totals_are_zero() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut session = db.begin().await.unwrap();

        assert!(session.summaries().category_summaries().await.unwrap().is_empty());
        assert_eq!(
            session.summaries().order_totals().await.unwrap(),
            OrderTotals::default()
        );
    }

    #[tokio::test]
    async fn test_category_summaries_group_goods() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();

        session
            .goods()
            .add(&GoodDraft {
                name: "Saw".to_string(),
                cost: Money::from_cents(750),
                category_id: fx.category_id,
                provider_id: fx.provider_id,
            })
            .await
            .unwrap();
        // Empty categories are not listed
        session
            .categories()
            .add(&CategoryDraft {
                name: "Empty".to_string(),
            })
            .await
            .unwrap();

        let summaries = session.summaries().category_summaries().await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "Tools");
        assert_eq!(summaries[0].goods_count, 2);
        assert_eq!(summaries[0].total_cost_cents, Money::from_cents(2000));
    }

    #[tokio::test]
    async fn test_order_totals_count_repeated_goods() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();

        session.orders().add(&order(fx.good_id)).await.unwrap();
        session.orders().add(&order(fx.good_id)).await.unwrap();

        let totals = session.summaries().order_totals().await.unwrap();
        assert_eq!(totals.orders_count, 2);
        assert_eq!(totals.total_cost_cents, Money::from_cents(2500));
    }
}
