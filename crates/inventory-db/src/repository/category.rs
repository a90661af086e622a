//! # Category Repository
//!
//! Database operations for categories.

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::{DbError, DbResult};
use inventory_core::{Category, CategoryDraft};

/// Repository for category database operations, bound to one session.
#[derive(Debug)]
pub struct CategoryRepository<'s> {
    conn: &'s mut SqliteConnection,
}

impl<'s> CategoryRepository<'s> {
    pub(crate) fn new(conn: &'s mut SqliteConnection) -> Self {
        CategoryRepository { conn }
    }

    /// Validates the draft and stages a new category.
    pub async fn add(&mut self, draft: &CategoryDraft) -> DbResult<i64> {
        draft.validate()?;

        debug!(name = %draft.name, "Inserting category");

        let result = sqlx::query("INSERT INTO categories (name) VALUES (?1)")
            .bind(draft.name.as_str())
            .execute(&mut *self.conn)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Gets a category for a lookup response.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No such category
    pub async fn get_info(&mut self, id: i64) -> DbResult<Category> {
        self.get_category_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Category", id))
    }

    /// Gets a category by its primary key.
    pub async fn get_category_by_id(&mut self, id: i64) -> DbResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?1")
                .bind(id)
                .fetch_optional(&mut *self.conn)
                .await?;

        Ok(category)
    }

    /// Lists every category, oldest first.
    pub async fn list(&mut self) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(categories)
    }

    /// Re-validates the draft and renames the category.
    pub async fn update(&mut self, id: i64, draft: &CategoryDraft) -> DbResult<()> {
        draft.validate()?;

        debug!(id, name = %draft.name, "Updating category");

        let result = sqlx::query("UPDATE categories SET name = ?2 WHERE id = ?1")
            .bind(id)
            .bind(draft.name.as_str())
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        Ok(())
    }

    /// Deletes a category.
    ///
    /// Fails with [`DbError::ForeignKeyViolation`] while any good is filed
    /// under it.
    pub async fn delete(&mut self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting category");

        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::fixture;
    use crate::{Database, DbConfig};

    fn draft(name: &str) -> CategoryDraft {
        CategoryDraft {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_and_get_info() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut session = db.begin().await.unwrap();

        let id = session.categories().add(&draft("Garden")).await.unwrap();
        let info = session.categories().get_info(id).await.unwrap();

        assert_eq!(
            info,
            Category {
                id,
                name: "Garden".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut session = db.begin().await.unwrap();

        let err = session.categories().add(&draft("   ")).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
        assert!(session.categories().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut session = db.begin().await.unwrap();

        let first = session.categories().add(&draft("Garden")).await.unwrap();
        session.categories().add(&draft("Kitchen")).await.unwrap();
        session.categories().update(first, &draft("Outdoor")).await.unwrap();

        let names: Vec<String> = session
            .categories()
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Outdoor", "Kitchen"]);
    }

    #[tokio::test]
    async fn test_missing_category_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut session = db.begin().await.unwrap();

        assert!(session.categories().get_category_by_id(9).await.unwrap().is_none());
        assert!(session.categories().get_info(9).await.unwrap_err().is_not_found());
        assert!(session.categories().delete(9).await.unwrap_err().is_not_found());
        assert!(session
            .categories()
            .update(9, &draft("x"))
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn test_delete_referenced_category_fails() {
        let fx = fixture().await;
        let mut session = fx.db.begin().await.unwrap();

        let err = session.categories().delete(fx.category_id).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_delete_unreferenced_category() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut session = db.begin().await.unwrap();

        let id = session.categories().add(&draft("Garden")).await.unwrap();
        session.categories().delete(id).await.unwrap();
        assert!(session.categories().get_category_by_id(id).await.unwrap().is_none());
    }
}
