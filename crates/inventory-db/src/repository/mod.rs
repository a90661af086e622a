//! # Repository Module
//!
//! Database repository implementations for the inventory service.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  let mut session = db.begin().await?;                          │
//! │       │  session.orders().add(&draft).await?;                          │
//! │       │  session.commit().await?;                                      │
//! │       ▼                                                                 │
//! │  OrderRepository<'session>                                             │
//! │  ├── add(&mut self, draft)                                             │
//! │  ├── get_info(&mut self, id)                                           │
//! │  ├── get_order_by_id(&mut self, id)                                    │
//! │  ├── update(&mut self, id, draft)                                      │
//! │  ├── delete(&mut self, id)                                             │
//! │  └── list(&mut self)                                                   │
//! │       │                                                                 │
//! │       │  SQL on the session's transaction                              │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every repository borrows the session's connection, so nothing it writes
//! is visible to other sessions until the session commits.
//!
//! ## Available Repositories
//!
//! - [`CategoryRepository`](category::CategoryRepository)
//! - [`ProviderRepository`](provider::ProviderRepository)
//! - [`GoodRepository`](good::GoodRepository)
//! - [`OrderRepository`](order::OrderRepository)
//! - [`SummaryRepository`](summary::SummaryRepository) - home page aggregates

pub mod category;
pub mod good;
pub mod order;
pub mod provider;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_support {
    use inventory_core::{CategoryDraft, GoodDraft, Money, ProviderDraft};

    use crate::{Database, DbConfig};

    /// Ids of one category, one provider and one good, committed.
    pub struct Fixture {
        pub db: Database,
        pub category_id: i64,
        pub provider_id: i64,
        pub good_id: i64,
    }

    pub async fn fixture() -> Fixture {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut session = db.begin().await.unwrap();

        let category_id = session
            .categories()
            .add(&CategoryDraft {
                name: "Tools".to_string(),
            })
            .await
            .unwrap();
        let provider_id = session
            .providers()
            .add(&ProviderDraft {
                first_name: "Ann".to_string(),
                last_name: "Smith".to_string(),
                email: "ann@acme.com".to_string(),
                company_name: "Acme".to_string(),
            })
            .await
            .unwrap();
        let good_id = session
            .goods()
            .add(&GoodDraft {
                name: "Hammer".to_string(),
                cost: Money::from_cents(1250),
                category_id,
                provider_id,
            })
            .await
            .unwrap();

        session.commit().await.unwrap();

        Fixture {
            db,
            category_id,
            provider_id,
            good_id,
        }
    }
}
