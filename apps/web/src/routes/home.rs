//! Home page, health check and the generic error page.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::error::{generic_error_page, ApiError};
use crate::AppState;
use inventory_core::{CategorySummary, OrderTotals};

/// Home page document.
#[derive(Debug, Serialize)]
pub struct SummaryPage {
    /// Goods count and cost per category that has goods.
    pub categories: Vec<CategorySummary>,
    pub orders: OrderTotals,
}

/// `GET /`
pub async fn summary(State(state): State<AppState>) -> Result<Json<SummaryPage>, ApiError> {
    let mut session = state.db.begin().await?;
    let categories = session.summaries().category_summaries().await?;
    let orders = session.summaries().order_totals().await?;

    Ok(Json(SummaryPage { categories, orders }))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> (StatusCode, &'static str) {
    if state.db.health_check().await {
        (StatusCode::OK, "OK")
    } else {
        warn!("Health check failed: database unavailable");
        (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
    }
}

/// `GET /errors`
pub async fn errors() -> Html<String> {
    generic_error_page()
}
