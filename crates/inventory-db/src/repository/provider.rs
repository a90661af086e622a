//! # Provider Repository
//!
//! Database operations for providers (suppliers of goods).

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::{DbError, DbResult};
use inventory_core::{Provider, ProviderDraft};

/// Repository for provider database operations, bound to one session.
#[derive(Debug)]
pub struct ProviderRepository<'s> {
    conn: &'s mut SqliteConnection,
}

impl<'s> ProviderRepository<'s> {
    pub(crate) fn new(conn: &'s mut SqliteConnection) -> Self {
        ProviderRepository { conn }
    }

    /// Validates the draft and stages a new provider.
    ///
    /// ## Returns
    /// * `Ok(id)` - Id of the staged row
    /// * `Err(DbError::Validation)` - Empty field or malformed email
    pub async fn add(&mut self, draft: &ProviderDraft) -> DbResult<i64> {
        draft.validate()?;

        debug!(company = %draft.company_name, "Inserting provider");

        let result = sqlx::query(
            r#"
            INSERT INTO providers (first_name, last_name, email, company_name)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(draft.first_name.as_str())
        .bind(draft.last_name.as_str())
        .bind(draft.email.as_str())
        .bind(draft.company_name.as_str())
        .execute(&mut *self.conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Gets a provider for a lookup response.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No such provider
    pub async fn get_info(&mut self, id: i64) -> DbResult<Provider> {
        self.get_provider_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Provider", id))
    }

    /// Gets a provider by its primary key.
    pub async fn get_provider_by_id(&mut self, id: i64) -> DbResult<Option<Provider>> {
        let provider = sqlx::query_as::<_, Provider>(
            r#"
            SELECT id, first_name, last_name, email, company_name
            FROM providers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(provider)
    }

    /// Lists every provider, oldest first.
    pub async fn list(&mut self) -> DbResult<Vec<Provider>> {
        let providers = sqlx::query_as::<_, Provider>(
            r#"
            SELECT id, first_name, last_name, email, company_name
            FROM providers
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(providers)
    }

    /// Re-validates the draft and overwrites every field.
    pub async fn update(&mut self, id: i64, draft: &ProviderDraft) -> DbResult<()> {
        draft.validate()?;

        debug!(id, company = %draft.company_name, "Updating provider");

        let result = sqlx::query(
            r#"
            UPDATE providers SET
                first_name = ?2,
                last_name = ?3,
                email = ?4,
                company_name = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(draft.first_name.as_str())
        .bind(draft.last_name.as_str())
        .bind(draft.email.as_str())
        .bind(draft.company_name.as_str())
        .execute(&mut *self.conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Provider", id));
        }

        Ok(())
    }

    /// Deletes a provider.
    ///
    /// Fails with [`DbError::ForeignKeyViolation`] while it still supplies
    /// any good.
    pub async fn delete(&mut self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting provider");

        let result = sqlx::query("DELETE FROM providers WHERE id = ?1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Provider", id));
        }

        Ok(())
    }
}
