//! # HTTP Routes
//!
//! ## Endpoint Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET  /                         category summaries + order totals      │
//! │  GET  /health                   "OK" when the database answers         │
//! │  GET  /errors                   generic error page                     │
//! │                                                                         │
//! │  For each of goods, providers, orders, categories:                     │
//! │  GET  /<entity>                 list page (JSON)                       │
//! │  POST /<entity>                 {"id": n} → entity info (JSON)         │
//! │  POST /<entity>/add             form → 303 /<entity>                   │
//! │  POST /<entity>/update          form → 303 /<entity>                   │
//! │  GET  /<entity>/delete/{id}     → 303 /<entity>                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod categories;
pub mod goods;
pub mod home;
pub mod orders;
pub mod providers;

use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Body of every JSON lookup.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IdRequest {
    pub id: i64,
}

/// Builds the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::summary))
        .route("/health", get(home::health))
        .route("/errors", get(home::errors))
        // Goods
        .route("/goods", get(goods::list).post(goods::lookup))
        .route("/goods/add", post(goods::add))
        .route("/goods/update", post(goods::update))
        .route("/goods/delete/{id}", get(goods::delete))
        // Providers
        .route("/providers", get(providers::list).post(providers::lookup))
        .route("/providers/add", post(providers::add))
        .route("/providers/update", post(providers::update))
        .route("/providers/delete/{id}", get(providers::delete))
        // Orders
        .route("/orders", get(orders::list).post(orders::lookup))
        .route("/orders/add", post(orders::add))
        .route("/orders/update", post(orders::update))
        .route("/orders/delete/{id}", get(orders::delete))
        // Categories
        .route("/categories", get(categories::list).post(categories::lookup))
        .route("/categories/add", post(categories::add))
        .route("/categories/update", post(categories::update))
        .route("/categories/delete/{id}", get(categories::delete))
        .route("/category/delete/{id}", get(categories::delete))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Blank form values mean "no value".
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("   "), None);
        assert_eq!(non_empty("ring twice"), Some("ring twice".to_string()));
    }
}
